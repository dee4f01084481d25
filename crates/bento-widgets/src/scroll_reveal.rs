#![forbid(unsafe_code)]

//! Scroll-scrubbed section reveals.
//!
//! Each [`Section`] owns a reversible [`Timeline`] whose playhead is driven
//! by the page scroll position instead of time. The raw scroll progress is
//! followed through a [`Scrub`], so the timeline catches up over a lag
//! rather than snapping with every wheel notch. Scrolling back up plays the
//! same frames in reverse.
//!
//! The trigger window runs from "section top at 75% of the viewport" to
//! "section bottom at 60% of the viewport".
//!
//! | Layer | Starts at | Motion |
//! |-------|-----------|--------|
//! | poster | 0.0 | slides in 100% from its side, scale 0.8→1, fades in |
//! | text | 0.1 | slides in 50% from the opposite side, fades in |
//! | indicator | 0.2 | rises 20 units, fades in |
//!
//! Every layer lasts 0.5 timeline units. Poster and text ease out on
//! `power2.out`; the indicator keeps the plain `power1.out`.

use std::time::Duration;

use bento_core::animation::{Animation, Easing, Scrub, Timeline, Track};
use bento_core::event::{Event, ScrollEvent};
use serde::{Deserialize, Serialize};

use crate::surface::MotionMode;

const POSTER_TRACK: &str = "poster";
const TEXT_TRACK: &str = "text";
const INDICATOR_TRACK: &str = "indicator";

const LAYER_LENGTH: Duration = Duration::from_millis(500);
const POSTER_SHIFT: f32 = 100.0;
const POSTER_SCALE: f32 = 0.8;
const TEXT_SHIFT: f32 = 50.0;
const INDICATOR_RISE: f32 = 20.0;

/// Which side of the page a section's poster sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Poster on the left; it slides in from the left.
    #[default]
    Left,
    /// Poster on the right; it slides in from the right.
    Right,
}

impl Side {
    /// Sign of the poster's entry offset.
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// Alternating sides for a list of sections, starting on the left.
    #[must_use]
    pub const fn alternating(index: usize) -> Self {
        if index % 2 == 0 { Self::Left } else { Self::Right }
    }
}

/// One scroll-revealed section, positioned in page units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Stable key.
    pub key: String,
    /// Poster side.
    #[serde(default)]
    pub side: Side,
    /// Distance from the top of the page.
    pub top: f32,
    /// Section height.
    pub height: f32,
}

impl Section {
    /// Create a section.
    pub fn new(key: impl Into<String>, side: Side, top: f32, height: f32) -> Self {
        Self {
            key: key.into(),
            side,
            top,
            height,
        }
    }

    /// Bottom edge in page units.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Viewport fractions that open and close the trigger window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollTrigger {
    /// Progress starts when the section top crosses this viewport fraction.
    pub start: f32,
    /// Progress ends when the section bottom crosses this viewport fraction.
    pub end: f32,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self {
            start: 0.75,
            end: 0.60,
        }
    }
}

impl ScrollTrigger {
    /// Raw progress of `section` at `scroll`, clamped to [0, 1].
    ///
    /// A window of zero or negative length acts as a step at its end.
    #[must_use]
    pub fn progress(&self, section: &Section, scroll: ScrollEvent) -> f32 {
        let begin = section.top - self.start * scroll.viewport;
        let end = section.bottom() - self.end * scroll.viewport;
        let span = end - begin;
        if !span.is_finite() || span <= 0.0 {
            return if scroll.offset >= end { 1.0 } else { 0.0 };
        }
        let p = (scroll.offset - begin) / span;
        if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
    }
}

/// Options for a scroll-revealed list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollOptions {
    /// Trigger window.
    pub trigger: ScrollTrigger,
    /// Catch-up lag in milliseconds.
    pub scrub_ms: u64,
    /// Animated or static.
    pub motion: MotionMode,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            trigger: ScrollTrigger::default(),
            scrub_ms: 1500,
            motion: MotionMode::Animated,
        }
    }
}

/// Visual state of one layer of a section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerFrame {
    /// Opacity.
    pub alpha: f32,
    /// Horizontal offset as a percentage of the layer's own width.
    pub x_percent: f32,
    /// Downward offset.
    pub offset_y: f32,
    /// Uniform scale.
    pub scale: f32,
}

impl LayerFrame {
    const RESTING: Self = Self {
        alpha: 1.0,
        x_percent: 0.0,
        offset_y: 0.0,
        scale: 1.0,
    };
}

/// Render state of one section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionFrame {
    /// Position in the list.
    pub index: usize,
    /// Stable key.
    pub key: String,
    /// Poster side.
    pub side: Side,
    /// Smoothed scroll progress in [0, 1].
    pub progress: f32,
    /// Poster layer.
    pub poster: LayerFrame,
    /// Text block layer.
    pub text: LayerFrame,
    /// Indicator layer.
    pub indicator: LayerFrame,
}

#[derive(Debug, Clone)]
struct SectionState {
    section: Section,
    scrub: Scrub,
    timeline: Timeline,
}

impl SectionState {
    fn new(section: Section, lag: Duration) -> Self {
        let timeline = Timeline::new()
            .add(Track::new(POSTER_TRACK, Duration::ZERO, LAYER_LENGTH).easing(Easing::Power2Out))
            .add(
                Track::new(TEXT_TRACK, Duration::from_millis(100), LAYER_LENGTH)
                    .easing(Easing::Power2Out),
            )
            .add(
                Track::new(INDICATOR_TRACK, Duration::from_millis(200), LAYER_LENGTH)
                    .easing(Easing::Power1Out),
            );
        Self {
            section,
            scrub: Scrub::new(lag),
            timeline,
        }
    }

    fn sync(&mut self) {
        self.timeline.seek_progress(self.scrub.value());
    }

    fn track(&self, label: &str) -> f32 {
        self.timeline.track_value(label).unwrap_or(0.0)
    }
}

/// A list of sections revealed as the page scrolls.
#[derive(Debug, Clone)]
pub struct ScrollReveal {
    options: ScrollOptions,
    sections: Vec<SectionState>,
    scroll: Option<ScrollEvent>,
}

impl ScrollReveal {
    /// Build a reveal list; every section starts hidden.
    pub fn new(sections: impl IntoIterator<Item = Section>, options: ScrollOptions) -> Self {
        let lag = Duration::from_millis(options.scrub_ms);
        Self {
            options,
            sections: sections
                .into_iter()
                .map(|s| SectionState::new(s, lag))
                .collect(),
            scroll: None,
        }
    }

    /// Options in use.
    #[must_use]
    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether there are no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Last reported scroll state.
    #[must_use]
    pub fn scroll(&self) -> Option<ScrollEvent> {
        self.scroll
    }

    /// Report the page scroll offset and viewport height.
    pub fn set_scroll(&mut self, offset: f32, viewport: f32) {
        let scroll = ScrollEvent::new(offset, viewport);
        self.scroll = Some(scroll);
        for state in &mut self.sections {
            let raw = self.options.trigger.progress(&state.section, scroll);
            state.scrub.set_target(raw);
            state.sync();
        }
        tracing::trace!(
            target: "bento.reveal",
            offset,
            viewport,
            "scroll position"
        );
    }

    /// Route a host event. Only scroll and frame events apply.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Scroll(scroll) => self.set_scroll(scroll.offset, scroll.viewport),
            Event::Frame(dt) => self.tick(dt),
            Event::Pointer(_) | Event::Resize { .. } => {}
        }
    }

    /// Let every section catch up by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        for state in &mut self.sections {
            state.scrub.tick(dt);
            state.sync();
        }
    }

    /// Whether every section has caught up with the scroll position.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.sections.iter().all(|s| s.scrub.is_complete())
    }

    /// Render state of section `index`.
    #[must_use]
    pub fn section(&self, index: usize) -> Option<SectionFrame> {
        let state = self.sections.get(index)?;
        let side = state.section.side;
        let key = state.section.key.clone();

        if self.options.motion == MotionMode::Static {
            return Some(SectionFrame {
                index,
                key,
                side,
                progress: 1.0,
                poster: LayerFrame::RESTING,
                text: LayerFrame::RESTING,
                indicator: LayerFrame::RESTING,
            });
        }

        let poster = state.track(POSTER_TRACK);
        let text = state.track(TEXT_TRACK);
        let indicator = state.track(INDICATOR_TRACK);
        Some(SectionFrame {
            index,
            key,
            side,
            progress: state.scrub.value(),
            poster: LayerFrame {
                alpha: poster,
                x_percent: side.sign() * POSTER_SHIFT * (1.0 - poster),
                offset_y: 0.0,
                scale: POSTER_SCALE + (1.0 - POSTER_SCALE) * poster,
            },
            text: LayerFrame {
                alpha: text,
                x_percent: -side.sign() * TEXT_SHIFT * (1.0 - text),
                offset_y: 0.0,
                scale: 1.0,
            },
            indicator: LayerFrame {
                alpha: indicator,
                x_percent: 0.0,
                offset_y: INDICATOR_RISE * (1.0 - indicator),
                scale: 1.0,
            },
        })
    }

    /// Render state of every section.
    #[must_use]
    pub fn sections(&self) -> Vec<SectionFrame> {
        (0..self.sections.len())
            .filter_map(|i| self.section(i))
            .collect()
    }
}
