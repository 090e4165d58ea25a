//! Core engine implementation
//!
//! One driver thread executes input swap, tick, render, and present in
//! strict sequence at a fixed rate. Nothing overlaps: the surface always
//! draws the state the tick just produced.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

use crate::foundation::time::TickTimer;
use crate::game::Game;
use crate::input::{InputListener, InputSnapshot, InputSystem};
use crate::render::frame::{Frame, Surface};
use crate::render::viewport::{Viewport, ViewportError};
use crate::settings::{GameSettings, SettingsError};

/// A shared handle for stopping the engine loop.
///
/// Cloneable and usable from any thread. The loop observes the flag
/// between iterations; an in-flight tick or render runs to completion.
#[derive(Clone)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Request that the loop terminate after the current iteration
    pub fn stop(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Main engine struct.
///
/// Owns the viewport, the input system, and the loop pacing; games reach
/// everything they need through the reference passed to their callbacks.
pub struct Engine {
    viewport: Viewport,
    input: InputSystem,
    frame_input: InputSnapshot,
    timer: TickTimer,
    settings: GameSettings,
    running: Arc<AtomicBool>,
}

impl Engine {
    /// Create a new engine instance from validated settings
    pub fn new(settings: GameSettings) -> Result<Self, EngineError> {
        settings.validate()?;
        let viewport = Viewport::new(settings.width, settings.height)?;
        let input = InputSystem::new(viewport);
        let timer = TickTimer::new(settings.tick_rate);

        log::info!(
            "engine initialized: {}x{} viewport, {} ticks/s",
            settings.width,
            settings.height,
            settings.tick_rate
        );

        Ok(Self {
            viewport,
            input,
            frame_input: InputSnapshot::default(),
            timer,
            settings,
            running: Arc::new(AtomicBool::new(true)),
        })
    }

    /// Run the fixed-tick loop with the given game and surface.
    ///
    /// Terminates when [`Engine::quit`] is called or a [`StopHandle`] is
    /// stopped. A failing tick, render, or present is logged and
    /// terminates the loop as a single fatal error; there is no
    /// per-operation recovery.
    pub fn run<G: Game, S: Surface>(
        settings: GameSettings,
        game: &mut G,
        surface: &mut S,
    ) -> Result<(), EngineError> {
        let mut engine = Self::new(settings)?;

        game.init(&mut engine)
            .map_err(|e| EngineError::InitializationFailed(format!("game init: {e}")))?;

        log::info!("starting main loop");

        while engine.running.load(Ordering::Relaxed) {
            engine.frame_input = engine.input.swap();

            if let Err(e) = game.tick(&mut engine) {
                log::error!("tick failed, terminating loop: {e}");
                return Err(EngineError::GameError(format!("game tick: {e}")));
            }

            let mut frame = Frame::new(engine.viewport);
            if let Err(e) = game.render(&engine, &mut frame) {
                log::error!("render failed, terminating loop: {e}");
                return Err(EngineError::RenderError(format!("game render: {e}")));
            }
            if let Err(e) = surface.present(&frame) {
                log::error!("present failed, terminating loop: {e}");
                return Err(EngineError::RenderError(format!("surface present: {e}")));
            }

            engine.timer.wait();
        }

        log::info!("engine shutdown complete after {} ticks", engine.timer.tick_count());
        Ok(())
    }

    /// The engine's viewport
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The input snapshot for the current tick
    pub fn input(&self) -> &InputSnapshot {
        &self.frame_input
    }

    /// A listener handle for wiring an input source to the engine
    pub fn listener(&self) -> InputListener {
        self.input.listener()
    }

    /// The settings the engine was built from
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// A handle that can stop the loop from another thread
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(Arc::clone(&self.running))
    }

    /// Request engine shutdown after the current tick
    pub fn quit(&self) {
        log::info!("engine shutdown requested");
        self.running.store(false, Ordering::Relaxed);
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Settings failed validation or could not be loaded
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Viewport construction failed
    #[error("viewport error: {0}")]
    Viewport(#[from] ViewportError),

    /// Initialization error
    #[error("engine initialization failed: {0}")]
    InitializationFailed(String),

    /// Game logic error surfaced from the loop
    #[error("game error: {0}")]
    GameError(String),

    /// Rendering or presentation error surfaced from the loop
    #[error("rendering error: {0}")]
    RenderError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameError;
    use crate::render::frame::SurfaceError;
    use crate::render::primitives::{Color, Rectangle};
    use crate::physics::hitbox::Hitbox;
    use crate::physics::vector::Vector2D;

    struct NullSurface {
        frames: usize,
        last_commands: usize,
    }

    impl Surface for NullSurface {
        fn present(&mut self, frame: &Frame) -> Result<(), SurfaceError> {
            self.frames += 1;
            self.last_commands = frame.commands().len();
            Ok(())
        }
    }

    struct CountingGame {
        ticks: u64,
        quit_after: u64,
    }

    impl Game for CountingGame {
        fn init(&mut self, _engine: &mut Engine) -> Result<(), GameError> {
            Ok(())
        }

        fn tick(&mut self, engine: &mut Engine) -> Result<(), GameError> {
            self.ticks += 1;
            if self.ticks >= self.quit_after {
                engine.quit();
            }
            Ok(())
        }

        fn render(&mut self, _engine: &Engine, frame: &mut Frame) -> Result<(), GameError> {
            let hitbox = Hitbox::new(Vector2D::new(0.5, 0.5), 0.1, 0.1)
                .map_err(|e| GameError::Custom(e.to_string()))?;
            frame.draw_rectangle(&Rectangle::new(hitbox, Color::WHITE, true));
            Ok(())
        }
    }

    fn fast_settings() -> GameSettings {
        GameSettings {
            tick_rate: 10_000.0,
            ..GameSettings::default()
        }
    }

    #[test]
    fn test_invalid_settings_fail_construction() {
        let settings = GameSettings {
            width: 0,
            ..GameSettings::default()
        };
        assert!(matches!(
            Engine::new(settings),
            Err(EngineError::Settings(_))
        ));
    }

    #[test]
    fn test_loop_runs_until_quit() {
        let mut game = CountingGame {
            ticks: 0,
            quit_after: 3,
        };
        let mut surface = NullSurface {
            frames: 0,
            last_commands: 0,
        };

        Engine::run(fast_settings(), &mut game, &mut surface).unwrap();

        assert_eq!(game.ticks, 3);
        // Render runs after every tick, including the quitting one.
        assert_eq!(surface.frames, 3);
        assert_eq!(surface.last_commands, 1);
    }

    #[test]
    fn test_tick_error_terminates_loop() {
        struct FailingGame;
        impl Game for FailingGame {
            fn init(&mut self, _engine: &mut Engine) -> Result<(), GameError> {
                Ok(())
            }
            fn tick(&mut self, _engine: &mut Engine) -> Result<(), GameError> {
                Err(GameError::GameLogic("boom".to_string()))
            }
            fn render(&mut self, _engine: &Engine, _frame: &mut Frame) -> Result<(), GameError> {
                Ok(())
            }
        }

        let mut surface = NullSurface {
            frames: 0,
            last_commands: 0,
        };
        let result = Engine::run(fast_settings(), &mut FailingGame, &mut surface);
        assert!(matches!(result, Err(EngineError::GameError(_))));
        assert_eq!(surface.frames, 0);
    }

    #[test]
    fn test_stop_handle_terminates_loop() {
        struct HandleGame {
            handle: Option<StopHandle>,
        }
        impl Game for HandleGame {
            fn init(&mut self, engine: &mut Engine) -> Result<(), GameError> {
                self.handle = Some(engine.stop_handle());
                Ok(())
            }
            fn tick(&mut self, _engine: &mut Engine) -> Result<(), GameError> {
                // Simulates an external thread flipping the flag.
                self.handle.as_ref().unwrap().stop();
                Ok(())
            }
            fn render(&mut self, _engine: &Engine, _frame: &mut Frame) -> Result<(), GameError> {
                Ok(())
            }
        }

        let mut game = HandleGame { handle: None };
        let mut surface = NullSurface {
            frames: 0,
            last_commands: 0,
        };
        Engine::run(fast_settings(), &mut game, &mut surface).unwrap();
        assert_eq!(surface.frames, 1);
    }
}
