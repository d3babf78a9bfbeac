use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Movement actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [bindings]
/// KeyW = "forward"
/// ArrowLeft = "left"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveAction {
    /// Advance along the camera's forward axis.
    Forward,
    /// Retreat along the forward axis.
    Backward,
    /// Strafe along the negative right axis.
    Left,
    /// Strafe along the right axis.
    Right,
}

/// Per-frame boolean key-down state for the movement actions.
///
/// The movement protocol polls this once per frame rather than reacting to
/// individual key events, so held keys keep producing displacement every
/// frame until released.
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    held: HashSet<MoveAction>,
}

impl HeldKeys {
    /// Create an empty held-state set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release for an action.
    pub fn set(&mut self, action: MoveAction, pressed: bool) {
        if pressed {
            let _ = self.held.insert(action);
        } else {
            let _ = self.held.remove(&action);
        }
    }

    /// Whether the action is currently held.
    #[must_use]
    pub fn is_held(&self, action: MoveAction) -> bool {
        self.held.contains(&action)
    }

    /// Drop all held state (used on focus loss, when release events are
    /// lost).
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Copy of the currently held actions.
    #[must_use]
    pub fn snapshot(&self) -> HashSet<MoveAction> {
        self.held.clone()
    }
}
