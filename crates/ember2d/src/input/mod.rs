//! Input queue system
//!
//! Raw input arrives through an [`InputListener`], which OS adapters may
//! call from their callback thread: the listener normalizes mouse
//! positions into logical space and pushes events into mutex-guarded
//! queues. This is the only concurrency-sensitive boundary in the
//! engine. Once per tick the driver calls [`InputSystem::swap`], which
//! drains the queues into an immutable [`InputSnapshot`] for game logic
//! to read; per-frame queues are cleared by the swap while the held set
//! lives on across frames.

pub mod events;

use std::sync::{Arc, Mutex, PoisonError};

pub use events::{KeyEvent, MouseButton, MouseEvent};

use crate::physics::vector::Vector2D;
use crate::render::viewport::Viewport;

#[derive(Default)]
struct PendingInput {
    key_presses: Vec<KeyEvent>,
    key_releases: Vec<KeyEvent>,
    keys_typed: Vec<KeyEvent>,
    keys_held: Vec<KeyEvent>,
    mouse_presses: Vec<MouseEvent>,
    mouse_releases: Vec<MouseEvent>,
    left_held: bool,
    middle_held: bool,
    right_held: bool,
    other_held: bool,
    raw_mouse_position: Option<Vector2D>,
}

impl PendingInput {
    fn set_button_held(&mut self, button: MouseButton, held: bool) {
        match button {
            MouseButton::Left => self.left_held = held,
            MouseButton::Middle => self.middle_held = held,
            MouseButton::Right => self.right_held = held,
            MouseButton::Other => self.other_held = held,
        }
    }
}

/// The push side of the input system.
///
/// Cheap to clone; adapters hold one per event source. Mouse positions
/// are normalized at push time using the listener's viewport copy.
#[derive(Clone)]
pub struct InputListener {
    viewport: Viewport,
    pending: Arc<Mutex<PendingInput>>,
}

impl InputListener {
    fn lock(&self) -> std::sync::MutexGuard<'_, PendingInput> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a key going down.
    ///
    /// Queues a press event and adds the key to the held set if it is
    /// not already there (key repeat does not duplicate held entries).
    pub fn on_key_down(&self, key_code: u32, character: Option<char>) {
        let event = KeyEvent::new(key_code, character);
        let mut pending = self.lock();
        pending.key_presses.push(event);
        if !pending.keys_held.iter().any(|k| k.key_code == key_code) {
            pending.keys_held.push(event);
        }
    }

    /// Record a key going up
    pub fn on_key_up(&self, key_code: u32) {
        let mut pending = self.lock();
        pending.key_releases.push(KeyEvent::new(key_code, None));
        pending.keys_held.retain(|k| k.key_code != key_code);
    }

    /// Record a typed character
    pub fn on_key_typed(&self, character: char) {
        self.lock().keys_typed.push(KeyEvent::new(0, Some(character)));
    }

    /// Record a mouse button press at a device-space point
    pub fn on_mouse_down(&self, button: MouseButton, device_point: &Vector2D) {
        let position = self.viewport.device_to_logical(device_point);
        let mut pending = self.lock();
        pending.set_button_held(button, true);
        pending.mouse_presses.push(MouseEvent { button, position });
    }

    /// Record a mouse button release at a device-space point
    pub fn on_mouse_up(&self, button: MouseButton, device_point: &Vector2D) {
        let position = self.viewport.device_to_logical(device_point);
        let mut pending = self.lock();
        pending.set_button_held(button, false);
        pending.mouse_releases.push(MouseEvent { button, position });
    }

    /// Record the latest mouse position in device space
    pub fn on_mouse_move(&self, device_point: &Vector2D) {
        self.lock().raw_mouse_position = Some(device_point.copy());
    }
}

/// Everything game logic may read about input for one tick.
///
/// Press, release, and typed lists cover exactly the events that arrived
/// since the previous swap; the held set and button flags are live state.
#[derive(Default)]
pub struct InputSnapshot {
    /// Keys pressed since the last swap
    pub key_presses: Vec<KeyEvent>,
    /// Keys released since the last swap
    pub key_releases: Vec<KeyEvent>,
    /// Characters typed since the last swap
    pub keys_typed: Vec<KeyEvent>,
    /// Keys currently held
    pub keys_held: Vec<KeyEvent>,
    /// Mouse presses since the last swap
    pub mouse_presses: Vec<MouseEvent>,
    /// Mouse releases since the last swap
    pub mouse_releases: Vec<MouseEvent>,
    /// Whether the left mouse button is held
    pub left_mouse_held: bool,
    /// Whether the middle mouse button is held
    pub middle_mouse_held: bool,
    /// Whether the right mouse button is held
    pub right_mouse_held: bool,
    /// Whether another mouse button is held
    pub other_mouse_held: bool,
    /// The latest mouse position in device space, if one was reported
    pub raw_mouse_position: Option<Vector2D>,
    /// The latest mouse position in logical space, if one was reported
    pub mouse_position: Option<Vector2D>,
}

impl InputSnapshot {
    /// Whether the key with the given code is held
    pub fn is_key_held(&self, key_code: u32) -> bool {
        self.keys_held.iter().any(|k| k.key_code == key_code)
    }

    /// Whether a key producing the given character is held
    pub fn is_char_held(&self, character: char) -> bool {
        self.keys_held.iter().any(|k| k.character == Some(character))
    }

    /// Whether the given mouse button is held
    pub fn is_mouse_button_held(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left_mouse_held,
            MouseButton::Middle => self.middle_mouse_held,
            MouseButton::Right => self.right_mouse_held,
            MouseButton::Other => self.other_mouse_held,
        }
    }
}

/// The consume side of the input system, owned by the engine driver
pub struct InputSystem {
    viewport: Viewport,
    pending: Arc<Mutex<PendingInput>>,
}

impl InputSystem {
    /// Create an input system for a viewport
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            pending: Arc::new(Mutex::new(PendingInput::default())),
        }
    }

    /// A listener handle for wiring up an input source
    pub fn listener(&self) -> InputListener {
        InputListener {
            viewport: self.viewport,
            pending: Arc::clone(&self.pending),
        }
    }

    /// Drain the accumulated events into a snapshot.
    ///
    /// Called once per tick by the driver. Per-frame queues are emptied;
    /// the held set and the mouse position carry over.
    pub fn swap(&mut self) -> InputSnapshot {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        let raw_mouse_position = pending.raw_mouse_position.as_ref().map(Vector2D::copy);
        let mouse_position = raw_mouse_position
            .as_ref()
            .map(|raw| self.viewport.device_to_logical(raw));
        InputSnapshot {
            key_presses: std::mem::take(&mut pending.key_presses),
            key_releases: std::mem::take(&mut pending.key_releases),
            keys_typed: std::mem::take(&mut pending.keys_typed),
            keys_held: pending.keys_held.clone(),
            mouse_presses: std::mem::take(&mut pending.mouse_presses),
            mouse_releases: std::mem::take(&mut pending.mouse_releases),
            left_mouse_held: pending.left_held,
            middle_mouse_held: pending.middle_held,
            right_mouse_held: pending.right_held,
            other_mouse_held: pending.other_held,
            raw_mouse_position,
            mouse_position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> InputSystem {
        InputSystem::new(Viewport::new(800, 600).unwrap())
    }

    #[test]
    fn test_swap_clears_per_frame_queues() {
        let mut input = system();
        let listener = input.listener();
        listener.on_key_down(65, Some('a'));
        listener.on_key_typed('a');

        let first = input.swap();
        assert_eq!(first.key_presses.len(), 1);
        assert_eq!(first.keys_typed.len(), 1);

        let second = input.swap();
        assert!(second.key_presses.is_empty());
        assert!(second.keys_typed.is_empty());
        // The held set survives the swap.
        assert!(second.is_key_held(65));
        assert!(second.is_char_held('a'));
    }

    #[test]
    fn test_key_up_removes_from_held_set() {
        let mut input = system();
        let listener = input.listener();
        listener.on_key_down(87, Some('w'));
        listener.on_key_up(87);

        let snapshot = input.swap();
        assert_eq!(snapshot.key_presses.len(), 1);
        assert_eq!(snapshot.key_releases.len(), 1);
        assert!(!snapshot.is_key_held(87));
    }

    #[test]
    fn test_key_repeat_does_not_duplicate_held() {
        let mut input = system();
        let listener = input.listener();
        listener.on_key_down(32, Some(' '));
        listener.on_key_down(32, Some(' '));

        let snapshot = input.swap();
        assert_eq!(snapshot.key_presses.len(), 2);
        assert_eq!(snapshot.keys_held.len(), 1);
    }

    #[test]
    fn test_mouse_events_are_normalized() {
        let mut input = system();
        let listener = input.listener();
        listener.on_mouse_down(MouseButton::Left, &Vector2D::new(400.0, 300.0));

        let snapshot = input.swap();
        assert!(snapshot.left_mouse_held);
        assert!(snapshot.is_mouse_button_held(MouseButton::Left));
        let press = &snapshot.mouse_presses[0];
        assert!((press.position.x - 0.5).abs() < 1e-12);
        assert!((press.position.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_mouse_position_reported_in_both_spaces() {
        let mut input = system();
        let listener = input.listener();
        listener.on_mouse_move(&Vector2D::new(0.0, 0.0));

        let snapshot = input.swap();
        let raw = snapshot.raw_mouse_position.as_ref().unwrap();
        let logical = snapshot.mouse_position.as_ref().unwrap();
        assert_eq!(raw, &Vector2D::new(0.0, 0.0));
        // Device origin is the top-left corner, logical (0, 1).
        assert!((logical.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_listener_is_usable_from_another_thread() {
        let mut input = system();
        let listener = input.listener();
        let handle = std::thread::spawn(move || {
            listener.on_key_down(68, Some('d'));
        });
        handle.join().unwrap();

        let snapshot = input.swap();
        assert!(snapshot.is_key_held(68));
    }
}
