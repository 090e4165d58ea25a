//! Game lifecycle trait
//!
//! Implement [`Game`] to run your game on the engine's fixed-tick loop.

use thiserror::Error;

use crate::engine::Engine;
use crate::render::frame::Frame;

/// Game lifecycle trait.
///
/// The engine driver calls the three methods in strict sequence every
/// tick: input is swapped, `tick` runs, then `render` fills a fresh
/// frame which is presented before the driver sleeps out the period.
pub trait Game {
    /// Initialize the game.
    ///
    /// Called once before the first tick. Set up game objects and wire
    /// input sources here.
    fn init(&mut self, engine: &mut Engine) -> Result<(), GameError>;

    /// Advance the game by one tick.
    ///
    /// Read the engine's input snapshot, move hitboxes, resolve
    /// collisions. Runs to completion before rendering begins.
    fn tick(&mut self, engine: &mut Engine) -> Result<(), GameError>;

    /// Fill the frame for this tick.
    ///
    /// Called after `tick` with the post-tick state; no game mutation
    /// happens here.
    fn render(&mut self, engine: &Engine, frame: &mut Frame) -> Result<(), GameError>;
}

/// Game-level errors
#[derive(Error, Debug)]
pub enum GameError {
    /// Custom game error
    #[error("game error: {0}")]
    Custom(String),

    /// Asset loading error
    #[error("asset error: {0}")]
    Asset(String),

    /// Game logic error
    #[error("game logic error: {0}")]
    GameLogic(String),
}
