//! Geometry and collision subsystem
//!
//! The physics layer works entirely in logical space: positions are
//! normalized to `[0, 1]` on both axes with y pointing up. It provides
//! the [`Vector2D`] coordinate type and the axis-aligned [`Hitbox`] with
//! overlap detection, single-axis penetration resolution, and arena
//! clamping. There is no velocity or force integration here; game code
//! moves hitboxes and the engine resolves the results.

pub mod hitbox;
pub mod vector;

pub use hitbox::{Hitbox, HitboxError};
pub use vector::Vector2D;
