//! Rendering-facing types
//!
//! The engine does not rasterize anything. This module holds the
//! [`Viewport`] that maps logical coordinates to device pixels, the
//! drawable primitives, and the per-tick [`Frame`] command buffer that an
//! external [`Surface`] presents.

pub mod frame;
pub mod primitives;
pub mod viewport;

pub use frame::{DrawCommand, Frame, Surface, SurfaceError};
pub use primitives::{Color, Label, Rectangle, Sprite};
pub use viewport::{PixelRect, Viewport, ViewportError};
