#![forbid(unsafe_code)]

//! Tween: an interruptible, retargetable value animation.
//!
//! A [`Tween`] interpolates a single `f32` from a start value to a target
//! over a fixed duration. It is the tracked handle for one animated
//! property: calling [`Tween::retarget`] while the tween is in flight
//! captures the current interpolated value as the new start and restarts the
//! clock, so the output never jumps.
//!
//! # Invariants
//!
//! 1. `value()` is continuous across `retarget()`: the value immediately
//!    after a retarget equals the value immediately before it.
//! 2. After `duration` of ticks following the last retarget, `value()`
//!    equals the target exactly.
//! 3. `jump_to()` is the only operation that changes `value()` without
//!    ticking.
//!
//! # Failure Modes
//!
//! - Zero duration: clamped to 1ns; the tween lands on its target on the
//!   first non-zero tick.

use std::time::Duration;

use super::{Animation, Easing, EasingFn, nonzero, ratio};

/// An interruptible tween of a single `f32` value.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Tween {
    /// Create a tween resting at `value`.
    #[must_use]
    pub fn new(value: f32) -> Self {
        let duration = Duration::from_millis(300);
        Self {
            from: value,
            to: value,
            elapsed: duration,
            duration,
            easing: Easing::default().function(),
        }
    }

    /// Set the duration used by subsequent retargets (builder pattern).
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        let at_rest = self.is_complete();
        self.duration = nonzero(duration);
        if at_rest {
            self.elapsed = self.duration;
        }
        self
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing.function();
        self
    }

    /// Set a custom easing function (builder pattern).
    #[must_use]
    pub fn with_easing_fn(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Retarget toward `target`, starting from the current value.
    ///
    /// The clock restarts, so every tween retargeted in the same call
    /// with the same duration arrives at the same instant.
    pub fn retarget(&mut self, target: f32) {
        self.from = self.current();
        self.to = target;
        self.elapsed = Duration::ZERO;
    }

    /// Snap to `value` with no animation.
    pub fn jump_to(&mut self, value: f32) {
        self.from = value;
        self.to = value;
        self.elapsed = self.duration;
    }

    /// The value being animated toward.
    #[inline]
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// The value at the last retarget.
    #[inline]
    #[must_use]
    pub fn start(&self) -> f32 {
        self.from
    }

    /// Linear progress since the last retarget, in [0, 1].
    #[inline]
    #[must_use]
    pub fn progress(&self) -> f32 {
        ratio(self.elapsed, self.duration)
    }

    /// Duration of one retarget.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time left until the target is reached.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }

    fn current(&self) -> f32 {
        if self.elapsed >= self.duration {
            return self.to;
        }
        let eased = (self.easing)(self.progress());
        self.from + (self.to - self.from) * eased
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Animation for Tween {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        self.current()
    }

    /// Return to the start of the current leg.
    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
