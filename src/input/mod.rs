//! Input handling: platform-agnostic events, per-frame state tracking,
//! and the processor that turns raw events into one frame of camera input.

/// Platform-agnostic input events.
pub mod event;
/// Movement actions and held-key state.
pub mod keyboard;
/// Absolute-cursor-to-delta tracking.
pub mod mouse;
/// Converts raw events into per-frame camera input.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::MoveAction;
pub use processor::{FrameInput, InputProcessor, KeyBindings};
