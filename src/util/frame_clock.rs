use web_time::Instant;

/// Monotonic per-frame delta-time source.
///
/// [`tick`](Self::tick) returns the seconds elapsed since the previous
/// tick (the first tick measures from construction). The result feeds the
/// movement mutators as their `dt`; hosts with their own frame timing can
/// skip this entirely.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Start the clock; the first tick measures from here.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous tick.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}
