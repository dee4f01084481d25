#![forbid(unsafe_code)]

//! Animated panel weights.
//!
//! The [`LayoutEngine`] owns one [`Tween`] per panel. Whenever the active
//! panel changes it computes a target weight for every panel from the
//! [`WeightPolicy`] and retargets all tweens at once, from their current
//! values, with one shared [`Transition`]. Because every tween restarts on
//! the same call with the same duration, the whole row settles on the same
//! frame, and a hover switch mid-transition bends the motion instead of
//! restarting it.
//!
//! # Invariants
//!
//! 1. `targets()` has exactly one `expanded` entry when a panel is active,
//!    otherwise every entry is `neutral`.
//! 2. `shares()` sums to 1.0 (within float error) and every share is
//!    positive while all policy weights are positive.
//! 3. In static mode weights snap to their targets; no frame ever shows an
//!    intermediate value.

use std::time::Duration;

use bento_core::animation::{Animation, Easing, Tween};
use bento_core::geometry::Rect;
use serde::{Deserialize, Serialize};

use crate::{Constraint, Direction, Flex};

/// Target weights for active, inactive, and idle panels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightPolicy {
    /// Weight of the active panel.
    pub expanded: f32,
    /// Weight of every other panel while one is active.
    pub collapsed: f32,
    /// Weight of every panel while none is active.
    pub neutral: f32,
}

impl WeightPolicy {
    /// Works-panel weights: the active panel grows to six shares.
    pub const WORKS: Self = Self {
        expanded: 6.0,
        collapsed: 1.0,
        neutral: 1.0,
    };

    /// Services-card weights: the active card grows by half.
    pub const SERVICES: Self = Self {
        expanded: 1.5,
        collapsed: 1.0,
        neutral: 1.0,
    };

    /// Target weight of panel `rank` given the active rank.
    #[must_use]
    pub fn target(&self, rank: usize, active: Option<usize>) -> f32 {
        match active {
            Some(a) if a == rank => self.expanded,
            Some(_) => self.collapsed,
            None => self.neutral,
        }
    }

    /// Whether every weight is finite and positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.expanded, self.collapsed, self.neutral]
            .iter()
            .all(|w| w.is_finite() && *w > 0.0)
    }
}

impl Default for WeightPolicy {
    fn default() -> Self {
        Self::WORKS
    }
}

/// Duration and easing shared by one group of tweens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transition {
    /// Length of one retarget, in milliseconds.
    pub duration_ms: u64,
    /// Easing curve.
    pub easing: Easing,
}

impl Transition {
    /// Create a transition. Durations past `u64::MAX` milliseconds saturate.
    #[must_use]
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            easing,
        }
    }

    /// Transition length.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// A tween resting at `value` that uses this transition.
    #[must_use]
    pub fn tween(&self, value: f32) -> Tween {
        Tween::new(value)
            .with_duration(self.duration())
            .with_easing(self.easing)
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(Duration::from_millis(800), Easing::Power3InOut)
    }
}

/// Maps the active panel to animated per-panel weights.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    policy: WeightPolicy,
    transition: Transition,
    tweens: Vec<Tween>,
    active: Option<usize>,
    animated: bool,
}

impl LayoutEngine {
    /// Create an engine for `count` panels, all resting at neutral weight.
    #[must_use]
    pub fn new(count: usize, policy: WeightPolicy, transition: Transition) -> Self {
        Self {
            policy,
            transition,
            tweens: vec![transition.tween(policy.neutral); count],
            active: None,
            animated: true,
        }
    }

    /// Enable or disable animation (builder pattern).
    ///
    /// With animation off, weights snap to their targets.
    #[must_use]
    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Switch animation on or off in place.
    ///
    /// Turning it off snaps every weight to its current target. Turning it
    /// on leaves the weights where they are; the next retarget animates.
    pub fn set_animated(&mut self, animated: bool) {
        self.animated = animated;
        if !animated {
            for tween in &mut self.tweens {
                tween.jump_to(tween.target());
            }
        }
    }

    /// Whether retargets animate.
    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Number of panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    /// Whether there are no panels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Weight policy in use.
    #[must_use]
    pub fn policy(&self) -> WeightPolicy {
        self.policy
    }

    /// Transition in use.
    #[must_use]
    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Rank the weights are currently heading for, if any.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Retarget every panel for a new active rank.
    ///
    /// Out-of-range ranks are treated as `None`. Returns `true` if the
    /// active rank changed.
    pub fn set_active(&mut self, active: Option<usize>) -> bool {
        let active = active.filter(|&rank| rank < self.tweens.len());
        if active == self.active {
            return false;
        }
        self.active = active;

        for (rank, tween) in self.tweens.iter_mut().enumerate() {
            let target = self.policy.target(rank, active);
            if self.animated {
                tween.retarget(target);
            } else {
                tween.jump_to(target);
            }
        }

        tracing::debug!(
            target: "bento.layout",
            active = ?active,
            duration_ms = self.transition.duration_ms,
            animated = self.animated,
            "weights retargeted"
        );
        true
    }

    /// Advance every weight tween by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        for tween in &mut self.tweens {
            tween.tick(dt);
        }
    }

    /// Current interpolated weight per panel.
    #[must_use]
    pub fn weights(&self) -> Vec<f32> {
        self.tweens.iter().map(Animation::value).collect()
    }

    /// Weight of one panel.
    #[must_use]
    pub fn weight(&self, rank: usize) -> Option<f32> {
        self.tweens.get(rank).map(Animation::value)
    }

    /// Target weight per panel.
    #[must_use]
    pub fn targets(&self) -> Vec<f32> {
        self.tweens.iter().map(Tween::target).collect()
    }

    /// Current weights normalized to sum to 1.
    #[must_use]
    pub fn shares(&self) -> Vec<f32> {
        let weights = self.weights();
        let total: f32 = weights.iter().sum();
        if total <= 0.0 || !total.is_finite() {
            let n = weights.len().max(1) as f32;
            return vec![1.0 / n; weights.len()];
        }
        weights.iter().map(|w| w / total).collect()
    }

    /// Whether every weight has reached its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.tweens.iter().all(Animation::is_complete)
    }

    /// Time until the slowest weight settles.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.tweens
            .iter()
            .map(Tween::remaining)
            .max()
            .unwrap_or_default()
    }

    /// Flex constraints for the current weights.
    #[must_use]
    pub fn constraints(&self) -> Vec<Constraint> {
        self.tweens
            .iter()
            .map(|t| Constraint::Weight(t.value()))
            .collect()
    }

    /// Split `area` along `direction` by the current weights.
    #[must_use]
    pub fn split(&self, area: Rect, direction: Direction, gap: u16) -> Vec<Rect> {
        Flex::horizontal()
            .direction(direction)
            .gap(gap)
            .constraints(self.constraints())
            .split(area)
    }
}
