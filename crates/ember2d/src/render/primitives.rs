//! Drawable primitives
//!
//! Each drawable owns a [`Hitbox`] that defines where it sits in logical
//! space plus the style the surface needs to draw it. The engine never
//! rasterizes these itself; they are converted into draw commands by the
//! [`Frame`](crate::render::frame::Frame) and handed to the surface.

use std::sync::Arc;

use image::RgbaImage;

use crate::physics::hitbox::{Hitbox, HitboxError};
use crate::physics::vector::Vector2D;
use crate::render::viewport::Viewport;

/// An RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Opaque white
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Opaque black
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque red
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Opaque green
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    /// Opaque blue
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Create an opaque color from RGB channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// A rectangle with a hitbox, color, and fill setting
#[derive(Debug)]
pub struct Rectangle {
    /// The rectangle's position and extents
    pub hitbox: Hitbox,
    /// Draw color
    pub color: Color,
    /// Whether the rectangle is filled or outlined
    pub filled: bool,
}

impl Rectangle {
    /// Create a rectangle drawable
    pub fn new(hitbox: Hitbox, color: Color, filled: bool) -> Self {
        Self {
            hitbox,
            color,
            filled,
        }
    }

    /// Deep copy, including the hitbox center
    pub fn copy(&self) -> Rectangle {
        Rectangle {
            hitbox: self.hitbox.copy(),
            color: self.color,
            filled: self.filled,
        }
    }
}

/// An image with a hitbox defining its on-screen footprint
#[derive(Debug)]
pub struct Sprite {
    /// The sprite's position and extents
    pub hitbox: Hitbox,
    /// The image pixels, shared with the surface
    pub image: Arc<RgbaImage>,
}

impl Sprite {
    /// Create a sprite from an existing hitbox
    pub fn new(hitbox: Hitbox, image: Arc<RgbaImage>) -> Self {
        Self { hitbox, image }
    }

    /// Create a sprite whose hitbox is sized from the image.
    ///
    /// # Errors
    /// Returns [`HitboxError::InvalidExtent`] if the scale is negative.
    pub fn scaled(
        center: Vector2D,
        image: Arc<RgbaImage>,
        scale: f64,
        viewport: &Viewport,
    ) -> Result<Self, HitboxError> {
        let hitbox = Hitbox::from_image(center, image.as_ref(), scale, viewport)?;
        Ok(Self { hitbox, image })
    }

    /// Deep copy of the hitbox; the image pixels stay shared
    pub fn copy(&self) -> Sprite {
        Sprite {
            hitbox: self.hitbox.copy(),
            image: Arc::clone(&self.image),
        }
    }
}

/// A text label positioned by a hitbox
#[derive(Debug)]
pub struct Label {
    /// The label's position and extents
    pub hitbox: Hitbox,
    /// The text to draw
    pub text: String,
    /// Text color
    pub color: Color,
}

impl Label {
    /// Create a label drawable
    pub fn new(hitbox: Hitbox, text: impl Into<String>, color: Color) -> Self {
        Self {
            hitbox,
            text: text.into(),
            color,
        }
    }

    /// Deep copy, including the hitbox center
    pub fn copy(&self) -> Label {
        Label {
            hitbox: self.hitbox.copy(),
            text: self.text.clone(),
            color: self.color,
        }
    }
}
