//! Wall-clock delta between frames.

use std::time::{Duration, Instant};

/// Measures the time between consecutive [`tick`](Self::tick) calls.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    delta: Duration,
    frame: u64,
}

impl FrameClock {
    /// Starts the clock now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            delta: Duration::ZERO,
            frame: 0,
        }
    }

    /// Marks the end of a frame and returns the time since the previous one.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        self.delta = now.duration_since(self.last);
        self.last = now;
        self.frame += 1;
        self.delta
    }

    /// Duration of the last completed frame.
    #[must_use]
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Frames per second derived from the last delta, `0.0` before the first tick.
    #[must_use]
    pub fn fps(&self) -> f64 {
        let secs = self.delta.as_secs_f64();
        if secs > 0.0 {
            1.0 / secs
        } else {
            0.0
        }
    }

    /// Number of completed frames.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
