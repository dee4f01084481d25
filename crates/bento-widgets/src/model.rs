#![forbid(unsafe_code)]

//! PanelModel: which single panel, if any, is active.
//!
//! The model is the only owner of the active key. Every mutation returns an
//! [`ActiveChange`] naming the panels that gained and lost activation; the
//! caller forwards it to each [`ActivationListener`] so derived state (weights,
//! reveals, dimming) is recomputed from one value passed explicitly.
//!
//! # Invariants
//!
//! 1. At most one panel is active.
//! 2. A change names at most one activated and at most one deactivated
//!    panel, and never the same panel for both.
//! 3. Unknown keys and out-of-range ranks deactivate.

use crate::panel::{Panel, PanelKey};

/// Result of one activation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveChange {
    /// Rank that became active.
    pub activated: Option<usize>,
    /// Rank that stopped being active.
    pub deactivated: Option<usize>,
}

impl ActiveChange {
    /// Whether nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activated.is_none() && self.deactivated.is_none()
    }
}

/// Receives activation changes after the model has been updated.
pub trait ActivationListener {
    /// `active` is the model's active rank after `change` was applied.
    fn on_activation(&mut self, change: ActiveChange, active: Option<usize>);
}

/// Fixed ordered set of panels with at most one active.
#[derive(Debug, Clone)]
pub struct PanelModel {
    panels: Vec<Panel>,
    active: Option<usize>,
}

impl PanelModel {
    /// Build a model; ranks follow iteration order.
    pub fn new(panels: impl IntoIterator<Item = Panel>) -> Self {
        let panels = panels
            .into_iter()
            .enumerate()
            .map(|(rank, panel)| panel.with_rank(rank))
            .collect();
        Self {
            panels,
            active: None,
        }
    }

    /// Panels in rank order.
    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Panel at `rank`.
    #[must_use]
    pub fn panel(&self, rank: usize) -> Option<&Panel> {
        self.panels.get(rank)
    }

    /// Number of panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether the row is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Rank of the panel with `key`.
    #[must_use]
    pub fn rank_of(&self, key: &str) -> Option<usize> {
        self.panels.iter().position(|p| p.key().as_str() == key)
    }

    /// Active rank.
    #[must_use]
    pub fn active_rank(&self) -> Option<usize> {
        self.active
    }

    /// Active key.
    #[must_use]
    pub fn active(&self) -> Option<&PanelKey> {
        self.active.and_then(|rank| self.panels.get(rank)).map(Panel::key)
    }

    /// Whether the panel at `rank` is active.
    #[must_use]
    pub fn is_active(&self, rank: usize) -> bool {
        self.active == Some(rank)
    }

    /// Activate the panel with `key`, or clear with `None`.
    ///
    /// Unknown keys clear the active panel.
    pub fn set_active(&mut self, key: Option<&str>) -> ActiveChange {
        let rank = key.and_then(|k| self.rank_of(k));
        self.set_active_rank(rank)
    }

    /// Activate by rank, or clear with `None`.
    ///
    /// Out-of-range ranks clear the active panel.
    pub fn set_active_rank(&mut self, rank: Option<usize>) -> ActiveChange {
        let next = rank.filter(|&r| r < self.panels.len());
        if next == self.active {
            return ActiveChange::default();
        }
        let change = ActiveChange {
            activated: next,
            deactivated: self.active,
        };
        self.active = next;
        change
    }

    /// Tap semantics: activate `rank`, or clear it if already active.
    pub fn toggle_rank(&mut self, rank: usize) -> ActiveChange {
        if self.is_active(rank) {
            self.set_active_rank(None)
        } else {
            self.set_active_rank(Some(rank))
        }
    }

    /// Tap semantics by key. Unknown keys clear the active panel.
    pub fn toggle(&mut self, key: &str) -> ActiveChange {
        match self.rank_of(key) {
            Some(rank) => self.toggle_rank(rank),
            None => self.set_active_rank(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> PanelModel {
        PanelModel::new([
            Panel::new("p0", "Zero"),
            Panel::new("p1", "One"),
            Panel::new("p2", "Two"),
        ])
    }

    #[test]
    fn ranks_follow_order() {
        let model = model();
        assert_eq!(model.panel(2).map(Panel::rank), Some(2));
        assert_eq!(model.rank_of("p1"), Some(1));
        assert_eq!(model.active(), None);
    }

    #[test]
    fn direct_switch_reports_both_sides() {
        let mut model = model();
        let change = model.set_active(Some("p1"));
        assert_eq!(change.activated, Some(1));
        assert_eq!(change.deactivated, None);

        let change = model.set_active(Some("p2"));
        assert_eq!(change.activated, Some(2));
        assert_eq!(change.deactivated, Some(1));
        assert_eq!(model.active().map(PanelKey::as_str), Some("p2"));
    }

    #[test]
    fn repeat_is_empty_change() {
        let mut model = model();
        model.set_active(Some("p0"));
        assert!(model.set_active(Some("p0")).is_empty());
    }

    #[test]
    fn unknown_key_deactivates() {
        let mut model = model();
        model.set_active(Some("p0"));
        let change = model.set_active(Some("nope"));
        assert_eq!(change.deactivated, Some(0));
        assert_eq!(change.activated, None);
        assert_eq!(model.active_rank(), None);
    }

    #[test]
    fn out_of_range_rank_deactivates() {
        let mut model = model();
        model.set_active_rank(Some(1));
        model.set_active_rank(Some(9));
        assert_eq!(model.active_rank(), None);
    }

    #[test]
    fn toggle_clears_and_switches() {
        let mut model = model();
        model.toggle("p1");
        assert!(model.is_active(1));
        model.toggle("p2");
        assert!(model.is_active(2));
        let change = model.toggle("p2");
        assert_eq!(change.deactivated, Some(2));
        assert_eq!(model.active_rank(), None);
    }

    #[test]
    fn clearing_when_idle_is_empty() {
        let mut model = model();
        assert!(model.set_active(None).is_empty());
    }
}
