#![forbid(unsafe_code)]

//! Time-based animation primitives.
//!
//! Everything here is driven by explicit `tick(dt)` calls; nothing reads a
//! clock on its own except [`FrameClock`], which hosts may use to turn wall
//! time into deltas. That keeps every animation deterministic under test.
//!
//! # Building blocks
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Tween`] | Interruptible value tween, retargets from its current value |
//! | [`Timeline`] | Labeled tracks at offsets, plays forward or in reverse |
//! | [`Scrub`] | Lagged follower of an externally driven progress value |
//! | [`FrameClock`] | Wall-clock to `dt` adapter with a delta cap |
//!
//! # Easing
//!
//! Easing curves are plain `fn(f32) -> f32` ([`EasingFn`]). [`Easing`] names
//! the curves so they can be chosen from configuration; its variants follow
//! the `powerN` naming used by web animation libraries (`power2` is cubic,
//! `power3` is quartic).

use std::time::Duration;

mod clock;
mod scrub;
mod stagger;
mod timeline;
mod tween;

pub use clock::FrameClock;
pub use scrub::Scrub;
pub use stagger::stagger_offsets;
pub use timeline::{Direction, PlaybackState, Timeline, Track};
pub use tween::Tween;

/// A time-driven animation.
pub trait Animation {
    /// Advance by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end state.
    fn is_complete(&self) -> bool;

    /// Current output value.
    ///
    /// Progress-style animations report [0.0, 1.0]. Value tweens report
    /// their interpolated value, which may lie outside that range.
    fn value(&self) -> f32;

    /// Return to the initial state.
    fn reset(&mut self);
}

/// An easing curve mapping linear progress in [0, 1] to eased progress.
pub type EasingFn = fn(f32) -> f32;

/// Identity curve.
#[must_use]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in.
#[must_use]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Cubic ease-out (`power2.out`).
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Quartic ease-out (`power3.out`).
#[must_use]
pub fn ease_out_quart(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Quartic ease-in-out (`power3.inOut`).
#[must_use]
pub fn ease_in_out_quart(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        8.0 * t.powi(4)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
    }
}

/// Named easing curves, selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Quadratic ease-out, the usual default of web tweens.
    Power1Out,
    /// Cubic ease-out.
    Power2Out,
    /// Quartic ease-out.
    Power3Out,
    /// Quartic ease-in-out.
    #[default]
    Power3InOut,
}

impl Easing {
    /// The curve function for this easing.
    #[must_use]
    pub const fn function(self) -> EasingFn {
        match self {
            Self::Linear => linear,
            Self::EaseIn => ease_in,
            Self::EaseOut => ease_out,
            Self::EaseInOut => ease_in_out,
            Self::Power1Out => ease_out,
            Self::Power2Out => ease_out_cubic,
            Self::Power3Out => ease_out_quart,
            Self::Power3InOut => ease_in_out_quart,
        }
    }

    /// Apply the curve to linear progress `t`.
    #[inline]
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        (self.function())(t)
    }
}

/// Clamp zero durations to 1ns so progress never divides by zero.
#[inline]
pub(crate) fn nonzero(d: Duration) -> Duration {
    if d.is_zero() {
        Duration::from_nanos(1)
    } else {
        d
    }
}

/// Linear progress of `elapsed` through `duration`, clamped to [0, 1].
#[inline]
pub(crate) fn ratio(elapsed: Duration, duration: Duration) -> f32 {
    let t = elapsed.as_secs_f64() / nonzero(duration).as_secs_f64();
    (t as f32).clamp(0.0, 1.0)
}
