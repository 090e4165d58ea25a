//! Two-dimensional vector type used throughout the engine
//!
//! Positions live in logical space: both axes are normalized to `[0, 1]`,
//! with the y axis pointing up. Because the axes are normalized against
//! different viewport dimensions, distance computations must bring the
//! y component into width units first; see [`Vector2D::magnitude`].

use crate::render::Viewport;

/// A mutable 2D coordinate.
///
/// Arithmetic comes in two families: the mutating methods (`add`,
/// `subtract`, ...) change the receiver in place and are meant for
/// simulation state updates, while the `safe_*` methods return a new
/// vector and leave the receiver untouched, for scratch computations.
///
/// The type is deliberately not `Clone`: a caller holding a `Vector2D`
/// must [`copy`](Vector2D::copy) it explicitly before handing it to code
/// that may mutate it.
#[derive(Debug, PartialEq)]
pub struct Vector2D {
    /// The x component, width-normalized in logical space
    pub x: f64,

    /// The y component, height-normalized in logical space
    pub y: f64,
}

impl Vector2D {
    /// Create a new vector
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Add values to the vector in place
    pub fn add(&mut self, x: f64, y: f64) {
        self.x += x;
        self.y += y;
    }

    /// Add another vector to this one in place
    pub fn add_vector(&mut self, other: &Vector2D) {
        self.add(other.x, other.y);
    }

    /// Subtract values from the vector in place
    pub fn subtract(&mut self, x: f64, y: f64) {
        self.x -= x;
        self.y -= y;
    }

    /// Subtract another vector from this one in place
    pub fn subtract_vector(&mut self, other: &Vector2D) {
        self.subtract(other.x, other.y);
    }

    /// Multiply the vector component-wise in place
    pub fn multiply(&mut self, x: f64, y: f64) {
        self.x *= x;
        self.y *= y;
    }

    /// Multiply this vector by another component-wise in place
    pub fn multiply_vector(&mut self, other: &Vector2D) {
        self.multiply(other.x, other.y);
    }

    /// Divide the vector component-wise in place
    pub fn divide(&mut self, x: f64, y: f64) {
        self.x /= x;
        self.y /= y;
    }

    /// Divide this vector by another component-wise in place
    pub fn divide_vector(&mut self, other: &Vector2D) {
        self.divide(other.x, other.y);
    }

    /// Add values without changing the receiver
    pub fn safe_add(&self, x: f64, y: f64) -> Vector2D {
        Vector2D::new(self.x + x, self.y + y)
    }

    /// Add another vector without changing the receiver
    pub fn safe_add_vector(&self, other: &Vector2D) -> Vector2D {
        self.safe_add(other.x, other.y)
    }

    /// Subtract values without changing the receiver
    pub fn safe_subtract(&self, x: f64, y: f64) -> Vector2D {
        Vector2D::new(self.x - x, self.y - y)
    }

    /// Subtract another vector without changing the receiver
    pub fn safe_subtract_vector(&self, other: &Vector2D) -> Vector2D {
        self.safe_subtract(other.x, other.y)
    }

    /// Multiply component-wise without changing the receiver
    pub fn safe_multiply(&self, x: f64, y: f64) -> Vector2D {
        Vector2D::new(self.x * x, self.y * y)
    }

    /// Multiply by another vector without changing the receiver
    pub fn safe_multiply_vector(&self, other: &Vector2D) -> Vector2D {
        self.safe_multiply(other.x, other.y)
    }

    /// Divide component-wise without changing the receiver
    pub fn safe_divide(&self, x: f64, y: f64) -> Vector2D {
        Vector2D::new(self.x / x, self.y / y)
    }

    /// Divide by another vector without changing the receiver
    pub fn safe_divide_vector(&self, other: &Vector2D) -> Vector2D {
        self.safe_divide(other.x, other.y)
    }

    /// The length of the vector, in width units.
    ///
    /// The y component is converted from height units to width units
    /// before the Euclidean combination, since the two axes are
    /// normalized against different viewport dimensions.
    pub fn magnitude(&self, viewport: &Viewport) -> f64 {
        let y_width = viewport.height_to_width_units(self.y);
        (self.x * self.x + y_width * y_width).sqrt()
    }

    /// The distance between two vectors, in width units
    pub fn distance_to(&self, other: &Vector2D, viewport: &Viewport) -> f64 {
        self.safe_subtract_vector(other).magnitude(viewport)
    }

    /// Explicit copy of the vector
    pub fn copy(&self) -> Vector2D {
        Vector2D::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mutating_and_safe_families_agree() {
        let mut a = Vector2D::new(0.25, 0.75);
        let b = Vector2D::new(0.1, -0.2);

        let pure = a.safe_add_vector(&b);
        // safe_add leaves the receiver untouched
        assert_eq!(a, Vector2D::new(0.25, 0.75));

        a.add_vector(&b);
        assert_eq!(a, pure);
    }

    #[test]
    fn test_safe_add_subtract_round_trip() {
        let a = Vector2D::new(0.3, 0.9);
        let b = Vector2D::new(0.17, 0.42);

        let round_trip = a.safe_add_vector(&b).safe_subtract_vector(&b);
        assert_relative_eq!(round_trip.x, a.x, max_relative = 1e-12);
        assert_relative_eq!(round_trip.y, a.y, max_relative = 1e-12);
    }

    #[test]
    fn test_multiply_divide_in_place() {
        let mut v = Vector2D::new(0.5, 0.25);
        v.multiply(2.0, 4.0);
        assert_eq!(v, Vector2D::new(1.0, 1.0));
        v.divide(4.0, 2.0);
        assert_eq!(v, Vector2D::new(0.25, 0.5));
    }

    #[test]
    fn test_magnitude_converts_y_to_width_units() {
        // 800x600 viewport: a height unit is 3/4 of a width unit.
        let viewport = Viewport::new(800, 600).unwrap();
        let v = Vector2D::new(0.0, 1.0);
        assert_relative_eq!(v.magnitude(&viewport), 0.75, max_relative = 1e-12);

        let diag = Vector2D::new(0.3, 0.4);
        let expected = (0.3f64 * 0.3 + 0.3 * 0.3).sqrt();
        assert_relative_eq!(diag.magnitude(&viewport), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let viewport = Viewport::new(640, 480).unwrap();
        let a = Vector2D::new(0.1, 0.2);
        let b = Vector2D::new(0.8, 0.9);
        assert_relative_eq!(
            a.distance_to(&b, &viewport),
            b.distance_to(&a, &viewport),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_copy_does_not_alias() {
        let original = Vector2D::new(0.5, 0.5);
        let mut copied = original.copy();
        copied.add(0.1, 0.1);
        assert_eq!(original, Vector2D::new(0.5, 0.5));
    }
}
