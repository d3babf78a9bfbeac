//! Small support utilities.

/// Monotonic frame delta-time source.
pub mod frame_clock;

pub use frame_clock::FrameClock;
