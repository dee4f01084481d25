#![forbid(unsafe_code)]

//! Widgets: the hover-driven panel row and its scroll-revealed sections.
//!
//! # Role in Bento
//! `bento-widgets` assembles the tweens and timelines of `bento-core` and the
//! weighted layout of `bento-layout` into the interactive row a host drives.
//!
//! # Primary responsibilities
//! - **Panels**: [`Panel`] records and their [`PanelContent`].
//! - **Model**: [`PanelModel`], the single owner of the active panel.
//! - **Reveal**: [`RevealController`], the reversible per-panel reveal.
//! - **Surface**: [`InteractionSurface`], pointer binding and render plan.
//! - **Scroll reveal**: [`ScrollReveal`], scroll-scrubbed section entries.
//! - **Config**: [`SurfaceConfig`], loadable from TOML or JSON with the
//!   `config` feature.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use bento_core::geometry::Rect;
//! use bento_widgets::{InteractionSurface, Panel, PanelContent, SurfaceOptions};
//!
//! let mut row = InteractionSurface::new(
//!     [
//!         Panel::new("01", "WEB DEVELOPMENT").content(PanelContent::description("...")),
//!         Panel::new("02", "UI/UX DESIGN"),
//!     ],
//!     SurfaceOptions::works(),
//! );
//! row.pointer_enter(0);
//! row.tick(Duration::from_millis(16));
//! let frame = row.layout(Rect::from_size(80, 24));
//! ```

pub mod config;
pub mod model;
pub mod panel;
pub mod reveal;
pub mod scroll_reveal;
pub mod surface;

#[cfg(feature = "config")]
pub use config::ConfigError;
pub use config::{PanelSpec, SurfaceConfig};
pub use model::{ActivationListener, ActiveChange, PanelModel};
pub use panel::{ElementKind, Panel, PanelContent, PanelKey};
pub use reveal::{ElementFrame, RevealController, RevealState, RevealStyle, RevealTimelineState};
pub use scroll_reveal::{
    LayerFrame, ScrollOptions, ScrollReveal, ScrollTrigger, Section, SectionFrame, Side,
};
pub use surface::{
    ContentFrame, DimOptions, HeaderLayout, InteractionSurface, LayoutOptions, MotionMode,
    PanelFrame, RevealOptions, RowFrame, SurfaceOptions, Tilt, TiltOptions,
};
