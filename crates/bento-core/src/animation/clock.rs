#![forbid(unsafe_code)]

//! Frame clock: turns wall time into capped frame deltas.

use std::time::Duration;

use web_time::Instant;

/// Largest delta handed out for one frame. Longer gaps (a backgrounded tab,
/// a debugger pause) are treated as a single long frame.
const DEFAULT_MAX_DELTA: Duration = Duration::from_millis(100);

/// Produces `dt` values from successive frame callbacks.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Option<Instant>,
    max_delta: Duration,
}

impl FrameClock {
    /// Create a clock that has not seen a frame yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: None,
            max_delta: DEFAULT_MAX_DELTA,
        }
    }

    /// Set the per-frame delta cap (builder pattern).
    #[must_use]
    pub fn with_max_delta(mut self, max_delta: Duration) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Delta since the previous frame, measured now.
    pub fn frame(&mut self) -> Duration {
        self.frame_at(Instant::now())
    }

    /// Delta since the previous frame, measured at `now`.
    ///
    /// The first frame yields zero.
    pub fn frame_at(&mut self, now: Instant) -> Duration {
        let dt = self
            .last
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last = Some(now);
        dt.min(self.max_delta)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.frame_at(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn deltas_are_capped() {
        let mut clock = FrameClock::new().with_max_delta(Duration::from_millis(33));
        let start = Instant::now();
        clock.frame_at(start);
        let dt = clock.frame_at(start + Duration::from_millis(16));
        assert_eq!(dt, Duration::from_millis(16));
        let dt = clock.frame_at(start + Duration::from_secs(5));
        assert_eq!(dt, Duration::from_millis(33));
    }
}
