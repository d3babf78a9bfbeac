// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! First-person fly camera for real-time 3D viewers.
//!
//! Flycam owns the viewpoint math a renderer needs each frame (a world
//! position, a yaw/pitch orientation, and a zoomable field of view) plus
//! the input plumbing that drives it: cursor-delta tracking, held movement
//! keys, and configurable key bindings.
//!
//! The host application keeps the window, the event loop, and the GPU; this
//! crate never blocks and never touches a device. Once per frame the host
//! feeds pending events to an [`InputProcessor`], drains a [`FrameInput`],
//! applies it through a [`camera::controller::CameraController`], and reads
//! back the view/projection matrices (or the packed
//! [`camera::core::CameraUniform`]) for its uniform uploads.
//!
//! # Key entry points
//!
//! - [`camera::core::Camera`] - the camera value type
//! - [`camera::controller::CameraController`] - per-frame driver
//! - [`input::InputProcessor`] - raw events in, one [`FrameInput`] out
//! - [`options::Options`] - TOML-backed tuning and key bindings
//!
//! With the `viewer` feature enabled, the `viewer` module converts winit
//! window events into the crate's platform-agnostic [`InputEvent`]s.

pub mod camera;
mod error;
pub mod input;
pub mod options;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use error::FlycamError;
pub use input::{FrameInput, InputEvent, InputProcessor, KeyBindings, MoveAction};
