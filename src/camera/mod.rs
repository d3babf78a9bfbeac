//! Camera system for first-person 3D viewing.
//!
//! Provides a fly camera with key-driven movement, mouse look, scroll
//! zoom, and the per-frame controller that applies drained input.

/// Per-frame driver applying input to the camera.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
