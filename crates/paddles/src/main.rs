//! A pong-style demo: two paddles, one ball, no window.
//!
//! Exercises the engine end to end with a headless surface that logs
//! what it would draw. The left paddle follows the 'w'/'s' keys if an
//! input source pushes them; both paddles otherwise track the ball.

use ember2d::prelude::*;

const PADDLE_SPEED: f64 = 0.012;
const BALL_STEP: f64 = 0.008;
const MATCH_TICKS: u64 = 600;

struct Paddles {
    left: Rectangle,
    right: Rectangle,
    ball: Rectangle,
    ball_direction: Vector2D,
    score: Label,
    hits: u32,
    ticks: u64,
}

impl Paddles {
    fn new() -> Result<Self, GameError> {
        let as_game_error = |e: HitboxError| GameError::Custom(e.to_string());
        let paddle = |x: f64| -> Result<Rectangle, GameError> {
            let hitbox = Hitbox::new(Vector2D::new(x, 0.5), 0.03, 0.2).map_err(as_game_error)?;
            Ok(Rectangle::new(hitbox, Color::WHITE, true))
        };
        let ball_hitbox =
            Hitbox::new(Vector2D::new(0.5, 0.5), 0.03, 0.04).map_err(as_game_error)?;
        let score_hitbox =
            Hitbox::new(Vector2D::new(0.5, 0.95), 0.2, 0.05).map_err(as_game_error)?;
        Ok(Self {
            left: paddle(0.05)?,
            right: paddle(0.95)?,
            ball: Rectangle::new(ball_hitbox, Color::GREEN, true),
            ball_direction: Vector2D::new(1.0, 0.6),
            score: Label::new(score_hitbox, "0", Color::WHITE),
            hits: 0,
            ticks: 0,
        })
    }

    fn steer_paddle(paddle: &mut Rectangle, target_y: f64) {
        let dy = target_y - paddle.hitbox.center().y;
        let step = dy.clamp(-PADDLE_SPEED, PADDLE_SPEED);
        paddle.hitbox.center_mut().add(0.0, step);
        paddle.hitbox.clamp_to_bounds(0.0, 1.0, 0.0, 1.0);
    }
}

impl Game for Paddles {
    fn init(&mut self, engine: &mut Engine) -> Result<(), GameError> {
        log::info!(
            "match starting on a {}x{} viewport",
            engine.viewport().width(),
            engine.viewport().height()
        );
        Ok(())
    }

    fn tick(&mut self, engine: &mut Engine) -> Result<(), GameError> {
        self.ticks += 1;

        // Advance the ball and bounce it off the arena's top and bottom.
        self.ball.hitbox.center_mut().add(
            self.ball_direction.x * BALL_STEP,
            self.ball_direction.y * BALL_STEP,
        );
        if self.ball.hitbox.lower_y_bound() < 0.0 || self.ball.hitbox.higher_y_bound() > 1.0 {
            self.ball_direction.multiply(1.0, -1.0);
        }
        if self.ball.hitbox.lower_x_bound() < 0.0 || self.ball.hitbox.higher_x_bound() > 1.0 {
            self.ball_direction.multiply(-1.0, 1.0);
        }
        self.ball.hitbox.clamp_to_bounds(0.0, 1.0, 0.0, 1.0);

        // Paddle collisions reflect the ball; resolution doubles as the
        // hit event.
        for paddle in [&self.left, &self.right] {
            if self.ball.hitbox.resolve_against(&paddle.hitbox) {
                self.ball_direction.multiply(-1.0, 1.0);
                self.hits += 1;
                self.score.text = self.hits.to_string();
                log::debug!("paddle hit #{} at tick {}", self.hits, self.ticks);
            }
        }

        // The left paddle obeys held keys when an input source is wired
        // up; both paddles otherwise chase the ball.
        let ball_y = self.ball.hitbox.center().y;
        let input = engine.input();
        if input.is_char_held('w') {
            Self::steer_paddle(&mut self.left, 1.0);
        } else if input.is_char_held('s') {
            Self::steer_paddle(&mut self.left, 0.0);
        } else {
            Self::steer_paddle(&mut self.left, ball_y);
        }
        Self::steer_paddle(&mut self.right, ball_y);

        if self.ticks >= MATCH_TICKS {
            log::info!("match over: {} paddle hits", self.hits);
            engine.quit();
        }
        Ok(())
    }

    fn render(&mut self, _engine: &Engine, frame: &mut Frame) -> Result<(), GameError> {
        frame.draw_rectangle(&self.left);
        frame.draw_rectangle(&self.right);
        frame.draw_rectangle(&self.ball);
        frame.draw_label(&self.score);
        Ok(())
    }
}

/// A headless surface that logs what it would draw.
struct ConsoleSurface {
    frames: u64,
}

impl Surface for ConsoleSurface {
    fn present(&mut self, frame: &Frame) -> Result<(), SurfaceError> {
        self.frames += 1;
        if self.frames % 120 == 0 {
            log::debug!(
                "frame {}: {} draw commands on {}x{}",
                self.frames,
                frame.commands().len(),
                frame.viewport().width(),
                frame.viewport().height()
            );
        }
        Ok(())
    }
}

fn main() {
    ember2d::foundation::logging::init();

    let settings = match GameSettings::from_file("paddles.toml") {
        Ok(settings) => settings,
        Err(SettingsError::Io(_)) => GameSettings {
            title: "Paddles".to_string(),
            tick_rate: 120.0,
            ..GameSettings::default()
        },
        Err(e) => {
            log::error!("bad settings file: {e}");
            std::process::exit(1);
        }
    };

    let mut game = match Paddles::new() {
        Ok(game) => game,
        Err(e) => {
            log::error!("failed to set up the match: {e}");
            std::process::exit(1);
        }
    };
    let mut surface = ConsoleSurface { frames: 0 };

    if let Err(e) = Engine::run(settings, &mut game, &mut surface) {
        log::error!("engine stopped with an error: {e}");
        std::process::exit(1);
    }
}
