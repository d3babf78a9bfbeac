//! Converts raw platform events into per-frame camera input.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! held movement keys, the look/scroll accumulators) and the key-binding
//! map. It is the only thing that sits between raw window events and the
//! camera controller's [`apply`](crate::camera::controller::CameraController::apply).

use std::collections::{HashMap, HashSet};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::InputEvent;
use super::keyboard::{HeldKeys, MoveAction};
use super::mouse::CursorTracker;

/// Maps physical key strings to [`MoveAction`] variants.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format: `"KeyW"`,
/// `"ArrowUp"`, etc. Serializes transparently as the key→action table, so
/// a TOML preset reads naturally:
///
/// ```toml
/// [bindings]
/// KeyW = "forward"
/// KeyS = "backward"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct KeyBindings {
    bindings: HashMap<String, MoveAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyW".into(), MoveAction::Forward),
            ("KeyS".into(), MoveAction::Backward),
            ("KeyA".into(), MoveAction::Left),
            ("KeyD".into(), MoveAction::Right),
            ("ArrowUp".into(), MoveAction::Forward),
            ("ArrowDown".into(), MoveAction::Backward),
            ("ArrowLeft".into(), MoveAction::Left),
            ("ArrowRight".into(), MoveAction::Right),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the movement action for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<MoveAction> {
        self.bindings.get(key).copied()
    }

    /// Bind a key to an action, replacing any previous binding.
    pub fn bind(&mut self, key: impl Into<String>, action: MoveAction) {
        let _ = self.bindings.insert(key.into(), action);
    }

    /// Remove a binding.
    pub fn unbind(&mut self, key: &str) {
        let _ = self.bindings.remove(key);
    }
}

/// One frame's worth of drained input, ready for
/// [`CameraController::apply`](crate::camera::controller::CameraController::apply).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Accumulated look delta in input units (positive y = look up).
    pub look: Vec2,
    /// Accumulated scroll (positive = zoom in).
    pub scroll: f32,
    /// Movement actions held at drain time.
    pub held: HashSet<MoveAction>,
}

impl FrameInput {
    /// Whether a movement action was held when the frame was drained.
    #[must_use]
    pub fn is_held(&self, action: MoveAction) -> bool {
        self.held.contains(&action)
    }
}

// ─────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────

/// Converts raw input events into per-frame camera input.
///
/// Owns all transient input state: the cursor tracker (with first-sample
/// priming), the held movement keys, the look/scroll accumulators, and
/// the key-binding map.
///
/// # Usage
///
/// ```
/// use flycam::{InputEvent, InputProcessor, MoveAction};
///
/// let mut processor = InputProcessor::new();
/// // In the event loop:
/// processor.handle_event(&InputEvent::Key {
///     key: "KeyW".into(),
///     pressed: true,
/// });
/// // Once per frame:
/// let frame = processor.frame();
/// assert!(frame.is_held(MoveAction::Forward));
/// ```
#[derive(Debug, Default)]
pub struct InputProcessor {
    /// Absolute-cursor-to-delta tracking.
    cursor: CursorTracker,
    /// Currently held movement actions.
    held: HeldKeys,
    /// Key string → action mapping.
    key_bindings: KeyBindings,
    /// Look delta accumulated since the last drain.
    look_accum: Vec2,
    /// Scroll accumulated since the last drain.
    scroll_accum: f32,
}

impl InputProcessor {
    /// Create a processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::default()
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Whether a movement action is held right now (mid-frame query; the
    /// drained [`FrameInput`] carries the same state).
    #[must_use]
    pub fn is_held(&self, action: MoveAction) -> bool {
        self.held.is_held(action)
    }

    /// Process one raw input event.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let delta = self.cursor.sample(*x, *y);
                // Window y grows downward; pitch grows upward.
                self.look_accum += Vec2::new(delta.x, -delta.y);
            }
            InputEvent::Scroll { delta } => self.scroll_accum += delta,
            InputEvent::Key { key, pressed } => {
                match self.key_bindings.lookup(key) {
                    Some(action) => self.held.set(action, *pressed),
                    None if *pressed => {
                        log::debug!("ignoring unbound key {key}");
                    }
                    None => {}
                }
            }
            // Key releases are lost while unfocused; drop all held state
            // and re-prime the cursor so refocus does not jump the view.
            InputEvent::FocusLost => {
                self.held.clear();
                self.cursor.reset();
            }
        }
    }

    /// Drain one frame's worth of accumulated input.
    ///
    /// The look/scroll accumulators reset to zero; held-key state
    /// persists until the matching release (or focus loss).
    pub fn frame(&mut self) -> FrameInput {
        FrameInput {
            look: std::mem::take(&mut self.look_accum),
            scroll: std::mem::take(&mut self.scroll_accum),
            held: self.held.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    fn key(name: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            key: name.into(),
            pressed,
        }
    }

    #[test]
    fn first_cursor_sample_is_primed() {
        let mut processor = InputProcessor::new();
        processor.handle_event(&cursor(400.0, 300.0));
        assert_eq!(processor.frame().look, Vec2::ZERO);
    }

    #[test]
    fn cursor_deltas_accumulate_with_inverted_y() {
        let mut processor = InputProcessor::new();
        processor.handle_event(&cursor(100.0, 100.0));
        processor.handle_event(&cursor(110.0, 90.0));
        processor.handle_event(&cursor(115.0, 95.0));

        // (10, -10) and (5, 5) in window space, y negated.
        assert_eq!(processor.frame().look, Vec2::new(15.0, 5.0));
    }

    #[test]
    fn frame_drains_accumulators_but_keeps_held_keys() {
        let mut processor = InputProcessor::new();
        processor.handle_event(&cursor(0.0, 0.0));
        processor.handle_event(&cursor(4.0, 0.0));
        processor.handle_event(&InputEvent::Scroll { delta: 2.0 });
        processor.handle_event(&key("KeyW", true));

        let first = processor.frame();
        assert_eq!(first.look, Vec2::new(4.0, 0.0));
        assert_eq!(first.scroll, 2.0);
        assert!(first.is_held(MoveAction::Forward));

        let second = processor.frame();
        assert_eq!(second.look, Vec2::ZERO);
        assert_eq!(second.scroll, 0.0);
        assert!(second.is_held(MoveAction::Forward));
    }

    #[test]
    fn keys_toggle_held_state() {
        let mut processor = InputProcessor::new();
        processor.handle_event(&key("KeyW", true));
        assert!(processor.is_held(MoveAction::Forward));

        processor.handle_event(&key("KeyW", false));
        assert!(!processor.frame().is_held(MoveAction::Forward));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut processor = InputProcessor::new();
        processor.handle_event(&key("KeyZ", true));
        assert!(processor.frame().held.is_empty());
    }

    #[test]
    fn focus_loss_clears_held_keys_and_reprimes_cursor() {
        let mut processor = InputProcessor::new();
        processor.handle_event(&key("KeyW", true));
        processor.handle_event(&key("KeyD", true));
        processor.handle_event(&cursor(500.0, 500.0));
        let _ = processor.frame();

        processor.handle_event(&InputEvent::FocusLost);
        processor.handle_event(&cursor(10.0, 10.0));

        let frame = processor.frame();
        assert!(frame.held.is_empty());
        assert_eq!(frame.look, Vec2::ZERO);
    }

    #[test]
    fn default_bindings_cover_wasd_and_arrows() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.lookup("KeyW"), Some(MoveAction::Forward));
        assert_eq!(bindings.lookup("KeyS"), Some(MoveAction::Backward));
        assert_eq!(bindings.lookup("KeyA"), Some(MoveAction::Left));
        assert_eq!(bindings.lookup("KeyD"), Some(MoveAction::Right));
        assert_eq!(bindings.lookup("ArrowUp"), Some(MoveAction::Forward));
        assert_eq!(bindings.lookup("ArrowDown"), Some(MoveAction::Backward));
        assert_eq!(bindings.lookup("Space"), None);
    }

    #[test]
    fn custom_bindings_rebind() {
        let mut bindings = KeyBindings::default();
        bindings.bind("KeyK", MoveAction::Forward);
        bindings.unbind("KeyW");

        let mut processor = InputProcessor::with_key_bindings(bindings);
        processor.handle_event(&key("KeyK", true));
        processor.handle_event(&key("KeyW", true));

        let frame = processor.frame();
        assert!(frame.is_held(MoveAction::Forward));
        assert_eq!(frame.held.len(), 1);
    }
}
