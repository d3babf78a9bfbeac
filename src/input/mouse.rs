use glam::Vec2;

/// Converts absolute cursor samples into per-event deltas.
///
/// The first sample after construction or [`reset`](Self::reset) primes
/// the tracker and yields a zero delta, so the viewpoint never jumps on
/// the first mouse event or after a refocus.
#[derive(Debug, Clone, Default)]
pub struct CursorTracker {
    last: Option<Vec2>,
}

impl CursorTracker {
    /// Create an unprimed tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed an absolute cursor position; returns the delta from the
    /// previous sample (zero for the priming sample).
    pub fn sample(&mut self, x: f32, y: f32) -> Vec2 {
        let pos = Vec2::new(x, y);
        let delta = self.last.map_or(Vec2::ZERO, |last| pos - last);
        self.last = Some(pos);
        delta
    }

    /// Forget the last sample; the next one primes without a delta.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
