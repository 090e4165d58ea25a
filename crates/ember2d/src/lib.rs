//! # Ember2D
//!
//! A minimal 2D game engine: a fixed-tick loop drives input polling,
//! game-state update, and rendering of primitive shapes, text, and
//! images, with a geometry layer providing axis-aligned collision
//! detection and resolution in a normalized coordinate space.
//!
//! Game logic lives in logical space (`[0, 1]` on both axes, y up); the
//! [`render::Viewport`] maps it to device pixels for the surface and
//! normalizes mouse input on the way in.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ember2d::prelude::*;
//!
//! struct MyGame;
//!
//! impl Game for MyGame {
//!     fn init(&mut self, engine: &mut Engine) -> Result<(), GameError> {
//!         Ok(())
//!     }
//!
//!     fn tick(&mut self, engine: &mut Engine) -> Result<(), GameError> {
//!         // Move hitboxes, resolve collisions
//!         Ok(())
//!     }
//!
//!     fn render(&mut self, engine: &Engine, frame: &mut Frame) -> Result<(), GameError> {
//!         // Queue drawables
//!         Ok(())
//!     }
//! }
//!
//! struct MySurface;
//!
//! impl Surface for MySurface {
//!     fn present(&mut self, frame: &Frame) -> Result<(), SurfaceError> {
//!         // Hand the commands to a window
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), EngineError> {
//!     ember2d::foundation::logging::init();
//!     Engine::run(GameSettings::default(), &mut MyGame, &mut MySurface)
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod input;
pub mod physics;
pub mod render;
pub mod settings;

mod engine;
mod game;

pub use engine::{Engine, EngineError, StopHandle};
pub use game::{Game, GameError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        input::{InputListener, InputSnapshot, KeyEvent, MouseButton, MouseEvent},
        physics::{Hitbox, HitboxError, Vector2D},
        render::{
            Color, DrawCommand, Frame, Label, PixelRect, Rectangle, Sprite, Surface,
            SurfaceError, Viewport, ViewportError,
        },
        settings::{GameSettings, SettingsError},
        Engine, EngineError, Game, GameError, StopHandle,
    };
}
