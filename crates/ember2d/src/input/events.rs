//! Input event types

use crate::physics::vector::Vector2D;

/// A key press, release, or type event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Platform key code
    pub key_code: u32,
    /// The character the key produced, if any
    pub character: Option<char>,
}

impl KeyEvent {
    /// Create a key event
    pub fn new(key_code: u32, character: Option<char>) -> Self {
        Self { key_code, character }
    }
}

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Middle mouse button
    Middle,
    /// Right mouse button
    Right,
    /// Any other mouse button
    Other,
}

/// A mouse press or release with its position in logical space
#[derive(Debug, PartialEq)]
pub struct MouseEvent {
    /// The button involved
    pub button: MouseButton,
    /// Where the interaction happened, already normalized
    pub position: Vector2D,
}
