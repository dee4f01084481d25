#![forbid(unsafe_code)]

//! Scrub: lagged following of an externally driven progress value.
//!
//! Scroll-linked animations do not run on their own clock; the host reports
//! where the scroll position puts them. A [`Scrub`] smooths that raw value so
//! the animation catches up over a fixed lag instead of snapping with every
//! wheel notch. A zero lag follows the input exactly.

use std::time::Duration;

use super::{Animation, Easing, Tween};

/// Smoothly follows a target progress value in [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct Scrub {
    tween: Tween,
    lag: Duration,
}

impl Scrub {
    /// Create a follower resting at zero that takes `lag` to catch up.
    #[must_use]
    pub fn new(lag: Duration) -> Self {
        Self {
            tween: Tween::new(0.0)
                .with_duration(lag)
                .with_easing(Easing::Power2Out),
            lag,
        }
    }

    /// Report a new raw progress value.
    pub fn set_target(&mut self, progress: f32) {
        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        if self.lag.is_zero() {
            self.tween.jump_to(p);
        } else if (p - self.tween.target()).abs() > f32::EPSILON {
            self.tween.retarget(p);
        }
    }

    /// Raw progress most recently reported.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.tween.target()
    }

    /// Catch-up lag.
    #[must_use]
    pub fn lag(&self) -> Duration {
        self.lag
    }
}

impl Animation for Scrub {
    fn tick(&mut self, dt: Duration) {
        self.tween.tick(dt);
    }

    fn is_complete(&self) -> bool {
        self.tween.is_complete()
    }

    fn value(&self) -> f32 {
        self.tween.value()
    }

    fn reset(&mut self) {
        self.tween.jump_to(0.0);
    }
}
