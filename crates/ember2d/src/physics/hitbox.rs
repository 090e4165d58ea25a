//! Axis-aligned hitboxes for containment and collision tests
//!
//! Every game object with collisions is encapsulated by a [`Hitbox`]: a
//! center point with non-negative half-extents, expressed in logical
//! space. Bound setters move the center and never change the size.

use image::GenericImageView;
use thiserror::Error;

use crate::physics::vector::Vector2D;
use crate::render::Viewport;

/// Errors raised by hitbox construction
#[derive(Error, Debug)]
pub enum HitboxError {
    /// Negative width or height passed to a constructor
    #[error("hitbox extents must be non-negative: {width}x{height}")]
    InvalidExtent {
        /// The rejected width
        width: f64,
        /// The rejected height
        height: f64,
    },
}

/// An axis-aligned bounding box owning its center point.
///
/// Game objects read their position through the hitbox rather than
/// keeping a second coordinate that would have to be kept in sync.
#[derive(Debug, PartialEq)]
pub struct Hitbox {
    center: Vector2D,
    width: f64,
    height: f64,
}

fn average(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}

impl Hitbox {
    /// Create a hitbox from a center point and extents.
    ///
    /// # Errors
    /// Returns [`HitboxError::InvalidExtent`] if either extent is negative.
    pub fn new(center: Vector2D, width: f64, height: f64) -> Result<Self, HitboxError> {
        if width < 0.0 || height < 0.0 {
            return Err(HitboxError::InvalidExtent { width, height });
        }
        Ok(Self {
            center,
            width,
            height,
        })
    }

    /// Create a hitbox sized from an image's pixel dimensions.
    ///
    /// The extents are the image dimensions multiplied by a uniform scale
    /// factor and divided by the viewport's pixel size, so a scale of 1.0
    /// makes the hitbox cover exactly the image's on-screen footprint.
    ///
    /// # Errors
    /// Returns [`HitboxError::InvalidExtent`] if the scale is negative.
    pub fn from_image<I: GenericImageView>(
        center: Vector2D,
        image: &I,
        scale: f64,
        viewport: &Viewport,
    ) -> Result<Self, HitboxError> {
        let width = f64::from(image.width()) * scale / f64::from(viewport.width());
        let height = f64::from(image.height()) * scale / f64::from(viewport.height());
        Self::new(center, width, height)
    }

    /// The center point
    pub fn center(&self) -> &Vector2D {
        &self.center
    }

    /// Mutable access to the center point
    pub fn center_mut(&mut self) -> &mut Vector2D {
        &mut self.center
    }

    /// Replace the center point
    pub fn set_center(&mut self, center: Vector2D) {
        self.center = center;
    }

    /// The width of the hitbox
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Set the width, clamping negative values to zero
    pub fn set_width(&mut self, width: f64) {
        self.width = width.max(0.0);
    }

    /// The height of the hitbox
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Set the height, clamping negative values to zero
    pub fn set_height(&mut self, height: f64) {
        self.height = height.max(0.0);
    }

    /// The lowest x value contained in the hitbox
    pub fn lower_x_bound(&self) -> f64 {
        self.center.x - self.width / 2.0
    }

    /// The highest x value contained in the hitbox
    pub fn higher_x_bound(&self) -> f64 {
        self.center.x + self.width / 2.0
    }

    /// The lowest y value contained in the hitbox
    pub fn lower_y_bound(&self) -> f64 {
        self.center.y - self.height / 2.0
    }

    /// The highest y value contained in the hitbox
    pub fn higher_y_bound(&self) -> f64 {
        self.center.y + self.height / 2.0
    }

    /// Move the hitbox so its lower x bound sits at `bound`.
    ///
    /// Bound setters reposition the center; the size never changes.
    pub fn set_lower_x_bound(&mut self, bound: f64) {
        self.center.x = bound + self.width / 2.0;
    }

    /// Move the hitbox so its higher x bound sits at `bound`
    pub fn set_higher_x_bound(&mut self, bound: f64) {
        self.center.x = bound - self.width / 2.0;
    }

    /// Move the hitbox so its lower y bound sits at `bound`
    pub fn set_lower_y_bound(&mut self, bound: f64) {
        self.center.y = bound + self.height / 2.0;
    }

    /// Move the hitbox so its higher y bound sits at `bound`
    pub fn set_higher_y_bound(&mut self, bound: f64) {
        self.center.y = bound - self.height / 2.0;
    }

    /// Whether a point lies within the hitbox, bounds inclusive
    pub fn contains_point(&self, point: &Vector2D) -> bool {
        point.x >= self.lower_x_bound()
            && point.x <= self.higher_x_bound()
            && point.y >= self.lower_y_bound()
            && point.y <= self.higher_y_bound()
    }

    /// Whether two hitboxes intersect.
    ///
    /// The per-axis threshold is the average of the paired extents, with
    /// strict inequality: touching edges do not intersect. Callers (arena
    /// clamping, penetration resolution) are tuned against this exact
    /// formula, so it must not be swapped for another overlap test.
    pub fn intersects(&self, other: &Hitbox) -> bool {
        let difference = self.center.safe_subtract_vector(&other.center);
        difference.x.abs() < average(self.width, other.width)
            && difference.y.abs() < average(self.height, other.height)
    }

    /// Shift this hitbox so it no longer penetrates `other`.
    ///
    /// A single-axis minimum-translation heuristic: the axis with the
    /// larger center separation is resolved, ties going to x. Residual
    /// overlap on the other axis is left alone, so callers that need
    /// stable rest-on-surface behavior must call this every tick.
    ///
    /// Returns whether a resolution was applied, which doubles as a
    /// collision event for the caller.
    pub fn resolve_against(&mut self, other: &Hitbox) -> bool {
        let intersects = self.intersects(other);
        if intersects {
            let difference = self.center.safe_subtract_vector(&other.center);
            if difference.x.abs() >= difference.y.abs() {
                if difference.x < 0.0 {
                    self.set_higher_x_bound(other.lower_x_bound());
                } else {
                    self.set_lower_x_bound(other.higher_x_bound());
                }
            } else if difference.y < 0.0 {
                self.set_higher_y_bound(other.lower_y_bound());
            } else {
                self.set_lower_y_bound(other.higher_y_bound());
            }
        }
        intersects
    }

    /// Shift the hitbox so it fits within the given bounds.
    ///
    /// At most one correction is applied per axis per call: a box wider
    /// than the bound span is pushed inside on the low side only.
    pub fn clamp_to_bounds(&mut self, low_x: f64, high_x: f64, low_y: f64, high_y: f64) {
        if self.lower_x_bound() < low_x {
            self.set_lower_x_bound(low_x);
        } else if self.higher_x_bound() > high_x {
            self.set_higher_x_bound(high_x);
        }
        if self.lower_y_bound() < low_y {
            self.set_lower_y_bound(low_y);
        } else if self.higher_y_bound() > high_y {
            self.set_higher_y_bound(high_y);
        }
    }

    /// Deep copy of the hitbox; the center is copied, never shared
    pub fn copy(&self) -> Hitbox {
        Hitbox {
            center: self.center.copy(),
            width: self.width,
            height: self.height,
        }
    }
}
