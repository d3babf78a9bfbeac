/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor), which
/// accumulates them until the host drains a
/// [`FrameInput`](super::FrameInput) once per frame.
///
/// # Example
///
/// ```
/// use flycam::{InputEvent, InputProcessor};
///
/// let mut processor = InputProcessor::new();
/// processor.handle_event(&InputEvent::CursorMoved { x: 320.0, y: 240.0 });
/// // The first sample only primes the tracker.
/// assert_eq!(processor.frame().look, glam::Vec2::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to an absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (grows downward).
        y: f32,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
    /// Physical key pressed or released.
    Key {
        /// Physical key name in winit `KeyCode` debug format, e.g.
        /// `"KeyW"`, `"ArrowUp"`.
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// The window lost keyboard focus; key-up events may never arrive.
    FocusLost,
}
