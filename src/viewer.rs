//! Winit integration: translate window events into flycam input events.
//!
//! Only event translation lives here; the event loop, the window, and the
//! GPU surface all belong to the host.
//!
//! ```ignore
//! // In the host's winit event handler:
//! if let Some(input) = flycam::viewer::translate_window_event(&event) {
//!     processor.handle_event(&input);
//! }
//! ```

use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

use crate::input::InputEvent;

/// Convert a winit window event into a platform-agnostic [`InputEvent`].
///
/// Returns `None` for events the camera does not consume. Key repeats are
/// dropped; held state comes from the press/release pair. Unidentified
/// (non-`KeyCode`) keys are ignored.
#[must_use]
pub fn translate_window_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            Some(InputEvent::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            })
        }
        WindowEvent::MouseWheel { delta, .. } => {
            let delta = match delta {
                MouseScrollDelta::LineDelta(_, y) => *y,
                MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
            };
            Some(InputEvent::Scroll { delta })
        }
        WindowEvent::KeyboardInput { event, .. } => {
            if event.repeat {
                return None;
            }
            let PhysicalKey::Code(code) = event.physical_key else {
                return None;
            };
            Some(InputEvent::Key {
                key: format!("{code:?}"),
                pressed: event.state == ElementState::Pressed,
            })
        }
        WindowEvent::Focused(false) => Some(InputEvent::FocusLost),
        _ => None,
    }
}
