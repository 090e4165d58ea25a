//! Per-tick frame building and the surface seam
//!
//! A [`Frame`] is a command buffer filled by the game's render callback:
//! drawables go in, device-space [`DrawCommand`]s come out. The engine
//! hands the finished frame to a [`Surface`] exactly once per tick, after
//! the tick has completed, so the surface always draws post-tick state.
//! The engine itself owns no drawing surface; windowing backends
//! implement [`Surface`] and consume the commands however they like.

use std::sync::Arc;

use image::RgbaImage;
use thiserror::Error;

use crate::render::primitives::{Color, Label, Rectangle, Sprite};
use crate::render::viewport::{PixelRect, Viewport};

/// A single device-space drawing operation
#[derive(Debug)]
pub enum DrawCommand {
    /// Draw a rectangle
    Rect {
        /// Target rectangle in pixels
        rect: PixelRect,
        /// Draw color
        color: Color,
        /// Filled or outlined
        filled: bool,
    },
    /// Draw an image
    Image {
        /// Target rectangle in pixels
        rect: PixelRect,
        /// The image pixels
        image: Arc<RgbaImage>,
    },
    /// Draw a text string
    Text {
        /// Baseline origin x in pixels
        x: i32,
        /// Baseline origin y in pixels
        y: i32,
        /// The text to draw
        text: String,
        /// Text color
        color: Color,
    },
}

/// The draw commands produced for one tick
#[derive(Debug)]
pub struct Frame {
    viewport: Viewport,
    commands: Vec<DrawCommand>,
}

impl Frame {
    /// Create an empty frame for the given viewport
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    /// The viewport the frame maps logical coordinates through
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Queue a rectangle
    pub fn draw_rectangle(&mut self, rectangle: &Rectangle) {
        self.commands.push(DrawCommand::Rect {
            rect: self.viewport.pixel_rect(&rectangle.hitbox),
            color: rectangle.color,
            filled: rectangle.filled,
        });
    }

    /// Queue a sprite
    pub fn draw_sprite(&mut self, sprite: &Sprite) {
        self.commands.push(DrawCommand::Image {
            rect: self.viewport.pixel_rect(&sprite.hitbox),
            image: Arc::clone(&sprite.image),
        });
    }

    /// Queue a text label.
    ///
    /// Text is anchored at the hitbox's lower x bound with the baseline
    /// at the flipped center y, matching how rectangles anchor at their
    /// higher y bound.
    pub fn draw_label(&mut self, label: &Label) {
        let width = f64::from(self.viewport.width());
        let height = f64::from(self.viewport.height());
        let x = (label.hitbox.lower_x_bound() * width).round() as i32;
        let y = (height - label.hitbox.center().y * height).round() as i32;
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: label.text.clone(),
            color: label.color,
        });
    }

    /// The queued commands, in draw order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

/// Error returned by a surface when presenting a frame fails
#[derive(Error, Debug)]
#[error("surface present failed: {0}")]
pub struct SurfaceError(pub String);

/// The external presenter seam.
///
/// A windowing backend implements this and receives one finished frame
/// per tick. No mutation flows back into the engine from here.
pub trait Surface {
    /// Present a finished frame
    fn present(&mut self, frame: &Frame) -> Result<(), SurfaceError>;
}
