//! Viewport and coordinate system conversion
//!
//! Bridges logical space (normalized `[0, 1]`, Cartesian, y up) and
//! device space (pixels, origin top-left, y down). Every place geometry
//! touches the screen or the mouse goes through this conversion, in
//! exactly one direction per crossing: input points are normalized on
//! the way in, hitbox bounds are mapped to pixel rectangles on the way
//! out.

use thiserror::Error;

use crate::physics::hitbox::Hitbox;
use crate::physics::vector::Vector2D;

/// Errors raised by viewport construction
#[derive(Error, Debug)]
pub enum ViewportError {
    /// A viewport dimension was zero
    #[error("viewport dimensions must be positive: {width}x{height}")]
    ZeroDimension {
        /// The rejected width
        width: u32,
        /// The rejected height
        height: u32,
    },
}

/// A rectangle in device space, ready for a drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// Left edge in pixels
    pub x: i32,
    /// Top edge in pixels
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

/// The pixel dimensions of the rendering surface.
///
/// Constructed once from validated settings and passed by value wherever
/// a conversion is needed; there is no global, re-settable configuration.
/// Construction rejects zero dimensions so the divisions inside the
/// conversions can never fail mid-frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Create a viewport from pixel dimensions.
    ///
    /// # Errors
    /// Returns [`ViewportError::ZeroDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::ZeroDimension { width, height });
        }
        Ok(Self { width, height })
    }

    /// The viewport width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The viewport height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Convert a height-normalized quantity into width units.
    ///
    /// The two logical axes are normalized against different pixel
    /// dimensions, so y values must pass through this before they can be
    /// combined with x values in a distance.
    pub fn height_to_width_units(&self, y: f64) -> f64 {
        y * f64::from(self.height) / f64::from(self.width)
    }

    /// Normalize a raw device-pixel point into logical space.
    ///
    /// Divides by the viewport dimensions and flips the y axis, so y = 0
    /// is the bottom of the viewport and y = 1 the top.
    pub fn device_to_logical(&self, point: &Vector2D) -> Vector2D {
        let mut logical = point.copy();
        logical.divide(f64::from(self.width), f64::from(self.height));
        logical.y = 1.0 - logical.y;
        logical
    }

    /// Map a logical point to device pixels, rounding to the nearest pixel.
    ///
    /// The y flip is applied to the already-scaled value: logical y = 0
    /// lands at the bottom of the screen, y = 1 at the top.
    pub fn logical_to_device(&self, point: &Vector2D) -> (i32, i32) {
        let width = f64::from(self.width);
        let height = f64::from(self.height);
        let x = (point.x * width).round() as i32;
        let y = (height - point.y * height).round() as i32;
        (x, y)
    }

    /// The device-space rectangle covering a hitbox.
    ///
    /// The pixel origin comes from the lower x bound and the *higher* y
    /// bound: higher logical y is visually higher on screen, which after
    /// the flip becomes the smaller device y, i.e. the top edge.
    pub fn pixel_rect(&self, hitbox: &Hitbox) -> PixelRect {
        let width = f64::from(self.width);
        let height = f64::from(self.height);
        PixelRect {
            x: (hitbox.lower_x_bound() * width).round() as i32,
            y: (height - hitbox.higher_y_bound() * height).round() as i32,
            width: (hitbox.width() * width).round() as i32,
            height: (hitbox.height() * height).round() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            Viewport::new(0, 600),
            Err(ViewportError::ZeroDimension { .. })
        ));
        assert!(matches!(
            Viewport::new(800, 0),
            Err(ViewportError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn test_device_to_logical_center() {
        // Worked example: (400, 300) on an 800x600 surface is the exact
        // center of logical space after the y flip.
        let viewport = Viewport::new(800, 600).unwrap();
        let logical = viewport.device_to_logical(&Vector2D::new(400.0, 300.0));
        assert_relative_eq!(logical.x, 0.5);
        assert_relative_eq!(logical.y, 0.5);
    }

    #[test]
    fn test_device_to_logical_flips_y() {
        let viewport = Viewport::new(800, 600).unwrap();
        // Device origin is the top-left corner, logical (0, 1).
        let top_left = viewport.device_to_logical(&Vector2D::new(0.0, 0.0));
        assert_relative_eq!(top_left.x, 0.0);
        assert_relative_eq!(top_left.y, 1.0);

        let bottom_left = viewport.device_to_logical(&Vector2D::new(0.0, 600.0));
        assert_relative_eq!(bottom_left.y, 0.0);
    }

    #[test]
    fn test_round_trip_within_one_pixel() {
        let viewport = Viewport::new(800, 600).unwrap();
        for &(px, py) in &[(0.0, 0.0), (13.0, 599.0), (400.0, 300.0), (799.0, 1.0)] {
            let logical = viewport.device_to_logical(&Vector2D::new(px, py));
            let (dx, dy) = viewport.logical_to_device(&logical);
            assert!((f64::from(dx) - px).abs() <= 1.0);
            assert!((f64::from(dy) - py).abs() <= 1.0);
        }
    }

    #[test]
    fn test_pixel_rect_uses_higher_y_origin() {
        let viewport = Viewport::new(800, 600).unwrap();
        let hitbox = Hitbox::new(Vector2D::new(0.5, 0.5), 0.25, 0.5).unwrap();
        let rect = viewport.pixel_rect(&hitbox);

        // Lower x bound 0.375 -> 300 px; higher y bound 0.75 flips to
        // 150 px from the top.
        assert_eq!(rect.x, 300);
        assert_eq!(rect.y, 150);
        assert_eq!(rect.width, 200);
        assert_eq!(rect.height, 300);
    }

    #[test]
    fn test_height_to_width_units() {
        let viewport = Viewport::new(800, 600).unwrap();
        assert_relative_eq!(viewport.height_to_width_units(1.0), 0.75);
        assert_relative_eq!(viewport.height_to_width_units(0.0), 0.0);
    }
}
