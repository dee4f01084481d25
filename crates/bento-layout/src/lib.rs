#![forbid(unsafe_code)]

//! Layout primitives and solvers.
//!
//! [`Flex`] splits an area along one axis. Besides the fixed, percentage
//! and min/max constraints, it understands fractional [`Constraint::Weight`]s,
//! which is how animated panel weights become cell rectangles.
//!
//! # Invariants
//!
//! 1. The sizes handed out never exceed the available extent.
//! 2. When every constraint is growable (no `Max` clamp), the sizes add up
//!    to exactly the available extent; rounding leftovers go to the largest
//!    fractional remainders.
//! 3. A growable item with positive weight receives at least one cell
//!    whenever the extent can fit one cell per growable item.

pub mod weights;

pub use bento_core::geometry::{Rect, Sides};
pub use weights::{LayoutEngine, Transition, WeightPolicy};

use serde::{Deserialize, Serialize};
use std::cmp::min;

/// A constraint on the size of a layout area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// An exact size in cells.
    Fixed(u16),
    /// A percentage of the total available size (0.0 to 100.0).
    Percentage(f32),
    /// A minimum size in cells, then grows with weight 1.
    Min(u16),
    /// Grows with weight 1, clamped to a maximum size.
    Max(u16),
    /// A ratio of the remaining space (numerator, denominator).
    Ratio(u32, u32),
    /// A fractional share of the remaining space (flex-grow).
    Weight(f32),
}

impl Constraint {
    /// Growth weight for remaining-space distribution, if growable.
    fn grow_weight(self) -> Option<f64> {
        match self {
            Self::Fixed(_) | Self::Percentage(_) => None,
            Self::Min(_) | Self::Max(_) => Some(1.0),
            Self::Ratio(n, d) => Some(f64::from(n) / f64::from(d.max(1))),
            Self::Weight(w) => Some(sanitize_weight(w)),
        }
    }
}

fn sanitize_weight(w: f32) -> f64 {
    if w.is_finite() && w > 0.0 {
        f64::from(w)
    } else {
        0.0
    }
}

/// The direction to layout items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Top to bottom.
    Vertical,
    /// Left to right.
    #[default]
    Horizontal,
}

/// A flexible layout container.
#[derive(Debug, Clone, Default)]
pub struct Flex {
    direction: Direction,
    constraints: Vec<Constraint>,
    margin: Sides,
    gap: u16,
}

impl Flex {
    /// Create a new vertical flex layout.
    pub fn vertical() -> Self {
        Self {
            direction: Direction::Vertical,
            ..Default::default()
        }
    }

    /// Create a new horizontal flex layout.
    pub fn horizontal() -> Self {
        Self {
            direction: Direction::Horizontal,
            ..Default::default()
        }
    }

    /// Set the layout direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the constraints.
    pub fn constraints(mut self, constraints: impl IntoIterator<Item = Constraint>) -> Self {
        self.constraints = constraints.into_iter().collect();
        self
    }

    /// Set the margin.
    pub fn margin(mut self, margin: Sides) -> Self {
        self.margin = margin;
        self
    }

    /// Set the gap between items.
    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// Split the given area into smaller rectangles according to the configuration.
    pub fn split(&self, area: Rect) -> Vec<Rect> {
        let inner = area.inner(self.margin);
        if inner.is_empty() {
            return self.constraints.iter().map(|_| Rect::default()).collect();
        }

        let count = self.constraints.len();
        if count == 0 {
            return Vec::new();
        }

        let total_size = match self.direction {
            Direction::Horizontal => inner.width,
            Direction::Vertical => inner.height,
        };
        let total_gap = self.gap.saturating_mul((count - 1) as u16);
        let available_size = total_size.saturating_sub(total_gap);

        let sizes = self.solve_constraints(available_size);
        self.sizes_to_rects(inner, &sizes)
    }

    fn solve_constraints(&self, available_size: u16) -> Vec<u16> {
        let mut sizes = vec![0u16; self.constraints.len()];
        let mut remaining = available_size;
        let mut grow: Vec<(usize, f64)> = Vec::new();

        // 1. Allocate fixed, percentage and min bases.
        for (i, &constraint) in self.constraints.iter().enumerate() {
            let base = match constraint {
                Constraint::Fixed(size) => size,
                Constraint::Percentage(p) => {
                    (f32::from(available_size) * p.clamp(0.0, 100.0) / 100.0).round() as u16
                }
                Constraint::Min(min_size) => min_size,
                _ => 0,
            };
            let base = min(base, remaining);
            sizes[i] = base;
            remaining -= base;
            if let Some(weight) = constraint.grow_weight() {
                grow.push((i, weight));
            }
        }

        // 2. Distribute the rest by weight.
        if remaining > 0 && !grow.is_empty() {
            let weights: Vec<f64> = grow.iter().map(|&(_, w)| w).collect();
            for (&(i, _), share) in grow.iter().zip(distribute(remaining, &weights)) {
                sizes[i] += share;
            }
        }

        // 3. Clamp Max constraints.
        for (i, &constraint) in self.constraints.iter().enumerate() {
            if let Constraint::Max(max_size) = constraint {
                sizes[i] = sizes[i].min(max_size);
            }
        }

        sizes
    }

    fn sizes_to_rects(&self, area: Rect, sizes: &[u16]) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(sizes.len());
        let mut current_pos = match self.direction {
            Direction::Horizontal => area.x,
            Direction::Vertical => area.y,
        };

        for &size in sizes {
            let rect = match self.direction {
                Direction::Horizontal => Rect::new(current_pos, area.y, size, area.height),
                Direction::Vertical => Rect::new(area.x, current_pos, area.width, size),
            };
            rects.push(rect);
            current_pos = current_pos.saturating_add(size).saturating_add(self.gap);
        }

        rects
    }
}

/// Split `space` cells proportionally to `weights` using largest remainders.
///
/// All-zero weights split evenly. Positive weights get at least one cell
/// when `space >= weights.len()`.
pub fn distribute(space: u16, weights: &[f64]) -> Vec<u16> {
    let n = weights.len();
    if n == 0 {
        return Vec::new();
    }
    let total: f64 = weights.iter().sum();
    let weights: Vec<f64> = if total > 0.0 {
        weights.to_vec()
    } else {
        vec![1.0; n]
    };
    let total: f64 = weights.iter().sum();

    let exact: Vec<f64> = weights
        .iter()
        .map(|w| f64::from(space) * w / total)
        .collect();
    let mut sizes: Vec<u16> = exact.iter().map(|e| e.floor() as u16).collect();
    let assigned: u32 = sizes.iter().map(|&s| u32::from(s)).sum();
    let mut leftover = u32::from(space).saturating_sub(assigned);

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        let fa = exact[a] - exact[a].floor();
        let fb = exact[b] - exact[b].floor();
        fb.total_cmp(&fa).then(a.cmp(&b))
    });
    for &i in order.iter().cycle().take(n * 2) {
        if leftover == 0 {
            break;
        }
        sizes[i] += 1;
        leftover -= 1;
    }

    // Keep every positively weighted item visible.
    if usize::from(space) >= n {
        for i in 0..n {
            if sizes[i] != 0 || weights[i] <= 0.0 {
                continue;
            }
            let donor = (0..n)
                .filter(|&j| sizes[j] > 1)
                .max_by_key(|&j| sizes[j]);
            if let Some(donor) = donor {
                sizes[donor] -= 1;
                sizes[i] = 1;
            }
        }
    }

    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_split() {
        let flex = Flex::horizontal().constraints([Constraint::Fixed(10), Constraint::Fixed(20)]);
        let rects = flex.split(Rect::new(0, 0, 100, 10));
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0], Rect::new(0, 0, 10, 10));
        assert_eq!(rects[1], Rect::new(10, 0, 20, 10));
    }

    #[test]
    fn percentage_split() {
        let flex = Flex::horizontal()
            .constraints([Constraint::Percentage(50.0), Constraint::Percentage(50.0)]);
        let rects = flex.split(Rect::new(0, 0, 100, 10));
        assert_eq!(rects[0].width, 50);
        assert_eq!(rects[1].width, 50);
    }

    #[test]
    fn gap_handling() {
        let flex = Flex::horizontal()
            .gap(5)
            .constraints([Constraint::Fixed(10), Constraint::Fixed(10)]);
        let rects = flex.split(Rect::new(0, 0, 100, 10));
        assert_eq!(rects[0], Rect::new(0, 0, 10, 10));
        assert_eq!(rects[1], Rect::new(15, 0, 10, 10));
    }

    #[test]
    fn weights_split_proportionally() {
        let flex = Flex::horizontal().constraints([
            Constraint::Weight(1.0),
            Constraint::Weight(6.0),
            Constraint::Weight(1.0),
        ]);
        let rects = flex.split(Rect::new(0, 0, 80, 5));
        let widths: Vec<u16> = rects.iter().map(|r| r.width).collect();
        assert_eq!(widths, vec![10, 60, 10]);
        assert_eq!(rects[2].x, 70);
    }

    #[test]
    fn fractional_weights_fill_exactly() {
        let flex = Flex::horizontal().constraints([
            Constraint::Weight(1.3),
            Constraint::Weight(2.9),
            Constraint::Weight(1.0),
        ]);
        let rects = flex.split(Rect::new(0, 0, 37, 1));
        let total: u16 = rects.iter().map(|r| r.width).sum();
        assert_eq!(total, 37);
    }

    #[test]
    fn tiny_weight_keeps_one_cell() {
        let sizes = distribute(10, &[100.0, 0.01, 0.01]);
        assert_eq!(sizes.iter().sum::<u16>(), 10);
        assert!(sizes[1] >= 1 && sizes[2] >= 1);
    }

    #[test]
    fn zero_weights_split_evenly() {
        assert_eq!(distribute(9, &[0.0, 0.0, 0.0]), vec![3, 3, 3]);
    }

    #[test]
    fn invalid_weights_are_ignored() {
        let flex = Flex::horizontal().constraints([
            Constraint::Weight(f32::NAN),
            Constraint::Weight(-2.0),
            Constraint::Weight(1.0),
        ]);
        let rects = flex.split(Rect::new(0, 0, 12, 1));
        assert_eq!(rects.iter().map(|r| r.width).sum::<u16>(), 12);
        assert!(rects[2].width >= 10);
    }

    #[test]
    fn mixed_constraints() {
        let flex = Flex::horizontal().constraints([
            Constraint::Fixed(10),
            Constraint::Min(10),
            Constraint::Percentage(10.0),
        ]);
        // Fixed 10, Min base 10, Percent 10, Min grows into the last 70.
        let rects = flex.split(Rect::new(0, 0, 100, 1));
        assert_eq!(rects[0].width, 10);
        assert_eq!(rects[1].width, 80);
        assert_eq!(rects[2].width, 10);
    }

    #[test]
    fn vertical_with_margin() {
        let flex = Flex::vertical()
            .margin(Sides::all(1))
            .constraints([Constraint::Weight(1.0), Constraint::Weight(1.0)]);
        let rects = flex.split(Rect::new(0, 0, 10, 12));
        assert_eq!(rects[0], Rect::new(1, 1, 8, 5));
        assert_eq!(rects[1], Rect::new(1, 6, 8, 5));
    }

    #[test]
    fn empty_area_yields_empty_rects() {
        let flex = Flex::horizontal().constraints([Constraint::Weight(1.0)]);
        assert_eq!(flex.split(Rect::new(0, 0, 0, 5)), vec![Rect::default()]);
    }
}
