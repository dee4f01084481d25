#![forbid(unsafe_code)]

//! Core: animation primitives, pointer events, and geometry.
//!
//! # Role in Bento
//! `bento-core` is the leaf of the workspace. It knows nothing about panels;
//! it provides the time-based pieces the panel row is assembled from.
//!
//! # Primary responsibilities
//! - **Animation**: easing curves, the retargetable [`animation::Tween`],
//!   the reversible [`animation::Timeline`], stagger helpers, and the
//!   lagged [`animation::Scrub`] follower.
//! - **Event**: host-neutral pointer, scroll, and frame events.
//! - **Geometry**: [`geometry::Rect`] and [`geometry::Sides`] in cell units.
//!
//! # How it fits in the system
//! `bento-layout` turns weights into rectangles using these types, and
//! `bento-widgets` composes tweens and timelines into the interactive
//! panel row. Hosts only ever hand `Event` values and frame deltas down.

pub mod animation;
pub mod event;
pub mod geometry;
