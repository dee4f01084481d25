#![forbid(unsafe_code)]

//! RevealController: the reversible content reveal of one panel.
//!
//! Each panel owns a [`Timeline`] built from its present sub-elements. The
//! controller is a two-state machine on top of it: [`RevealController::show`]
//! plays the timeline forward from wherever it is, [`RevealController::hide`]
//! plays it backward from wherever it is. Flipping mid-flight therefore walks
//! back through exactly the frames already shown.
//!
//! # Styles
//!
//! | Style | Behavior |
//! |-------|----------|
//! | [`RevealStyle::Cascade`] | Container fades in over 100ms, then each present element rises 30 units and fades in over 600ms, 100ms apart |
//! | [`RevealStyle::ImageFade`] | Media scales 0.6→1.0 and the overlay lightens 0.6→0.3 over 600ms while the text block opens over 300ms |
//!
//! # Invariants
//!
//! 1. At progress 0 the extended content is invisible (zero alpha or zero
//!    extent) and not interactive, but stays mounted.
//! 2. Missing sub-elements have no track; a description-only panel reveals
//!    exactly one element.
//! 3. In static mode every element is fully shown and nothing animates.

use std::time::Duration;

use bento_core::animation::{
    Animation, Direction, Easing, PlaybackState, Timeline, Track, stagger_offsets,
};
use serde::{Deserialize, Serialize};

use crate::model::{ActivationListener, ActiveChange};
use crate::panel::{ElementKind, PanelContent};

const CONTAINER_TRACK: &str = "container";
const OVERLAY_TRACK: &str = "overlay";

const CASCADE_CONTAINER: Duration = Duration::from_millis(100);
const CASCADE_ELEMENT: Duration = Duration::from_millis(600);
const CASCADE_STAGGER: Duration = Duration::from_millis(100);
/// Distance cascade elements rise while fading in.
pub const CASCADE_RISE: f32 = 30.0;

const IMAGE_FADE_MEDIA: Duration = Duration::from_millis(600);
const IMAGE_FADE_TEXT: Duration = Duration::from_millis(300);
/// Media scale while hidden in the image-fade style.
pub const IMAGE_FADE_MEDIA_SCALE: f32 = 0.6;
const OVERLAY_HIDDEN: f32 = 0.6;
const OVERLAY_SHOWN: f32 = 0.3;

/// How a panel's extended content appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealStyle {
    /// Staggered rise-and-fade of each sub-element.
    #[default]
    Cascade,
    /// Media zoom with overlay fade; text block opens in height.
    ImageFade,
}

/// Two-state reveal machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealState {
    /// Heading toward (or at) invisible.
    Hidden,
    /// Heading toward (or at) fully shown.
    Shown,
}

/// Snapshot of a reveal timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevealTimelineState {
    /// Playhead position in [0, 1].
    pub progress: f32,
    /// Playback direction.
    pub direction: Direction,
}

/// Visual state of one sub-element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementFrame {
    /// Which element.
    pub kind: ElementKind,
    /// Opacity in [0, 1].
    pub alpha: f32,
    /// Downward offset from the resting position.
    pub offset_y: f32,
    /// Uniform scale.
    pub scale: f32,
    /// Fraction of the element's natural extent that is open.
    pub extent: f32,
}

impl ElementFrame {
    fn resting(kind: ElementKind) -> Self {
        Self {
            kind,
            alpha: 1.0,
            offset_y: 0.0,
            scale: 1.0,
            extent: 1.0,
        }
    }
}

/// Reveal timeline and state for one panel.
#[derive(Debug, Clone)]
pub struct RevealController {
    style: RevealStyle,
    elements: Vec<ElementKind>,
    timeline: Timeline,
    state: RevealState,
    animated: bool,
}

impl RevealController {
    /// Build a hidden controller for `content`.
    pub fn new(style: RevealStyle, content: &PanelContent) -> Self {
        let elements = content.elements();
        let timeline = match style {
            RevealStyle::Cascade => cascade_timeline(&elements),
            RevealStyle::ImageFade => image_fade_timeline(&elements),
        };
        Self {
            style,
            elements,
            timeline,
            state: RevealState::Hidden,
            animated: true,
        }
    }

    /// Enable or disable animation (builder pattern).
    ///
    /// A static controller renders its content fully shown and ignores
    /// the playhead.
    #[must_use]
    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Switch animation on or off in place.
    ///
    /// Static content is drawn fully shown, so turning animation on starts
    /// every timeline at its end: shown panels stay put and hidden ones
    /// play out from there.
    pub fn set_animated(&mut self, animated: bool) {
        if animated == self.animated {
            return;
        }
        self.animated = animated;
        if animated {
            self.timeline.finish();
            if self.state == RevealState::Hidden {
                self.timeline.reverse();
            }
        }
    }

    /// Start or resume the forward reveal.
    pub fn show(&mut self) {
        if self.state == RevealState::Shown {
            return;
        }
        self.state = RevealState::Shown;
        self.timeline.play();
        tracing::debug!(
            target: "bento.reveal",
            style = ?self.style,
            from_progress = self.timeline.progress(),
            "reveal forward"
        );
    }

    /// Reverse the reveal from its current position.
    pub fn hide(&mut self) {
        if self.state == RevealState::Hidden {
            return;
        }
        self.state = RevealState::Hidden;
        self.timeline.reverse();
        tracing::debug!(
            target: "bento.reveal",
            style = ?self.style,
            from_progress = self.timeline.progress(),
            "reveal reverse"
        );
    }

    /// Advance the timeline by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        if self.animated {
            self.timeline.tick(dt);
        }
    }

    /// Reveal style.
    #[must_use]
    pub fn style(&self) -> RevealStyle {
        self.style
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Playhead progress in [0, 1].
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.animated {
            self.timeline.progress()
        } else {
            1.0
        }
    }

    /// Playback direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.timeline.direction()
    }

    /// Progress and direction together.
    #[must_use]
    pub fn timeline_state(&self) -> RevealTimelineState {
        RevealTimelineState {
            progress: self.progress(),
            direction: self.direction(),
        }
    }

    /// Whether the timeline rests at the end matching the current state:
    /// fully played for `Shown`, rewound for `Hidden`.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        if !self.animated {
            return true;
        }
        match self.state {
            RevealState::Shown => {
                self.timeline.is_complete() && self.timeline.direction() == Direction::Forward
            }
            RevealState::Hidden => {
                self.timeline.state() != PlaybackState::Playing
                    && self.timeline.current_time().is_zero()
            }
        }
    }

    /// Present sub-elements in reveal order.
    #[must_use]
    pub fn element_kinds(&self) -> &[ElementKind] {
        &self.elements
    }

    /// Opacity of the content container.
    #[must_use]
    pub fn container_alpha(&self) -> f32 {
        if !self.animated {
            return 1.0;
        }
        match self.style {
            RevealStyle::Cascade => self.track(CONTAINER_TRACK),
            // The card itself never disappears; only the text block closes.
            RevealStyle::ImageFade => 1.0,
        }
    }

    /// Overlay darkness for the image-fade style.
    #[must_use]
    pub fn overlay_alpha(&self) -> Option<f32> {
        match self.style {
            RevealStyle::Cascade => None,
            RevealStyle::ImageFade => {
                let v = if self.animated {
                    self.track(OVERLAY_TRACK)
                } else {
                    1.0
                };
                Some(OVERLAY_HIDDEN + (OVERLAY_SHOWN - OVERLAY_HIDDEN) * v)
            }
        }
    }

    /// Whether any extended content is visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        if !self.animated {
            return true;
        }
        match self.style {
            RevealStyle::Cascade => self.container_alpha() > 0.0,
            RevealStyle::ImageFade => self
                .elements
                .iter()
                .filter(|&&k| k != ElementKind::Media)
                .any(|&k| self.track(k.label()) > 0.0),
        }
    }

    /// Whether the extended content accepts pointer input.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.is_visible() && (self.state == RevealState::Shown || !self.animated)
    }

    /// Frame of one element, `None` if the panel doesn't have it.
    #[must_use]
    pub fn element(&self, kind: ElementKind) -> Option<ElementFrame> {
        if !self.elements.contains(&kind) {
            return None;
        }
        if !self.animated {
            return Some(ElementFrame::resting(kind));
        }
        let v = self.track(kind.label());
        let frame = match self.style {
            RevealStyle::Cascade => ElementFrame {
                kind,
                alpha: v,
                offset_y: CASCADE_RISE * (1.0 - v),
                scale: 1.0,
                extent: 1.0,
            },
            RevealStyle::ImageFade if kind == ElementKind::Media => ElementFrame {
                kind,
                alpha: 1.0,
                offset_y: 0.0,
                scale: IMAGE_FADE_MEDIA_SCALE + (1.0 - IMAGE_FADE_MEDIA_SCALE) * v,
                extent: 1.0,
            },
            RevealStyle::ImageFade => ElementFrame {
                kind,
                alpha: 1.0,
                offset_y: 0.0,
                scale: 1.0,
                extent: v,
            },
        };
        Some(frame)
    }

    /// Frames of every present element, in reveal order.
    #[must_use]
    pub fn elements(&self) -> Vec<ElementFrame> {
        self.elements
            .iter()
            .filter_map(|&kind| self.element(kind))
            .collect()
    }

    fn track(&self, label: &str) -> f32 {
        self.timeline.track_value(label).unwrap_or(0.0)
    }
}

impl ActivationListener for [RevealController] {
    fn on_activation(&mut self, change: ActiveChange, _active: Option<usize>) {
        if let Some(reveal) = change.deactivated.and_then(|rank| self.get_mut(rank)) {
            reveal.hide();
        }
        if let Some(reveal) = change.activated.and_then(|rank| self.get_mut(rank)) {
            reveal.show();
        }
    }
}

fn cascade_timeline(elements: &[ElementKind]) -> Timeline {
    let mut timeline = Timeline::new().add(Track::new(
        CONTAINER_TRACK,
        Duration::ZERO,
        CASCADE_CONTAINER,
    ));
    let offsets = stagger_offsets(elements.len(), CASCADE_STAGGER);
    for (kind, offset) in elements.iter().zip(offsets) {
        let offset = CASCADE_CONTAINER + offset;
        timeline.push_track(
            Track::new(kind.label(), offset, CASCADE_ELEMENT).easing(Easing::Power2Out),
        );
    }
    timeline
}

fn image_fade_timeline(elements: &[ElementKind]) -> Timeline {
    let mut timeline = Timeline::new()
        .add(Track::new(OVERLAY_TRACK, Duration::ZERO, IMAGE_FADE_MEDIA).easing(Easing::Power3Out));
    for kind in elements {
        let duration = if *kind == ElementKind::Media {
            IMAGE_FADE_MEDIA
        } else {
            IMAGE_FADE_TEXT
        };
        timeline.push_track(
            Track::new(kind.label(), Duration::ZERO, duration).easing(Easing::Power3Out),
        );
    }
    timeline
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_content() -> PanelContent {
        PanelContent::description("desc")
            .with_media("img.jpg")
            .with_subheading(["E-COMMERCE PLATFORM"])
            .with_list(["/A"])
    }

    fn run(reveal: &mut RevealController, ms: u64) {
        for _ in 0..ms / 10 {
            reveal.tick(Duration::from_millis(10));
        }
    }

    #[test]
    fn starts_hidden_and_invisible() {
        let reveal = RevealController::new(RevealStyle::Cascade, &full_content());
        assert_eq!(reveal.state(), RevealState::Hidden);
        assert_eq!(reveal.progress(), 0.0);
        assert!(!reveal.is_visible());
        assert!(!reveal.is_interactive());
        assert_eq!(reveal.elements().len(), 4);
        assert!(reveal.elements().iter().all(|e| e.alpha == 0.0));
    }

    #[test]
    fn cascade_staggers_elements() {
        let mut reveal = RevealController::new(RevealStyle::Cascade, &full_content());
        reveal.show();
        run(&mut reveal, 250);
        let media = reveal.element(ElementKind::Media).unwrap();
        let heading = reveal.element(ElementKind::Subheading).unwrap();
        let list = reveal.element(ElementKind::List).unwrap();
        let desc = reveal.element(ElementKind::Description).unwrap();
        assert!(media.alpha > heading.alpha);
        assert!(heading.alpha > list.alpha);
        assert_eq!(desc.alpha, 0.0);
        assert!((desc.offset_y - CASCADE_RISE).abs() < 1e-6);
        assert_eq!(reveal.container_alpha(), 1.0);
        assert!(reveal.is_interactive());
    }

    #[test]
    fn cascade_total_duration() {
        let mut reveal = RevealController::new(RevealStyle::Cascade, &full_content());
        reveal.show();
        // 100ms container + 3 * 100ms stagger + 600ms element.
        run(&mut reveal, 990);
        assert!(reveal.progress() < 1.0);
        run(&mut reveal, 10);
        assert_eq!(reveal.progress(), 1.0);
        assert!(reveal.is_settled());
        assert!(reveal.elements().iter().all(|e| e.alpha == 1.0 && e.offset_y == 0.0));
    }

    #[test]
    fn hide_mid_reveal_reverses_in_place() {
        let mut reveal = RevealController::new(RevealStyle::Cascade, &full_content());
        reveal.show();
        run(&mut reveal, 400);
        let progress = reveal.progress();
        reveal.hide();
        assert_eq!(reveal.progress(), progress);
        assert_eq!(reveal.direction(), Direction::Reverse);
        run(&mut reveal, 100);
        assert!(reveal.progress() < progress);
        assert!(!reveal.is_interactive());
        run(&mut reveal, 400);
        assert_eq!(reveal.progress(), 0.0);
        assert!(!reveal.is_visible());
    }

    #[test]
    fn show_mid_hide_resumes_forward() {
        let mut reveal = RevealController::new(RevealStyle::Cascade, &full_content());
        reveal.show();
        run(&mut reveal, 600);
        reveal.hide();
        run(&mut reveal, 200);
        let progress = reveal.progress();
        assert!(progress > 0.0);
        reveal.show();
        assert_eq!(reveal.progress(), progress);
        run(&mut reveal, 50);
        assert!(reveal.progress() > progress);
    }

    #[test]
    fn description_only_reveals_one_element() {
        let mut reveal =
            RevealController::new(RevealStyle::Cascade, &PanelContent::description("only"));
        reveal.show();
        run(&mut reveal, 700);
        let frames = reveal.elements();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].kind, ElementKind::Description);
        assert_eq!(frames[0].alpha, 1.0);
        assert!(reveal.element(ElementKind::List).is_none());
    }

    #[test]
    fn empty_content_is_harmless() {
        let mut reveal = RevealController::new(RevealStyle::ImageFade, &PanelContent::default());
        reveal.show();
        run(&mut reveal, 700);
        assert!(reveal.elements().is_empty());
        assert!(!reveal.is_visible());
    }

    #[test]
    fn image_fade_zooms_and_opens() {
        let content = PanelContent::description("desc").with_media("card.jpg");
        let mut reveal = RevealController::new(RevealStyle::ImageFade, &content);
        let media = reveal.element(ElementKind::Media).unwrap();
        assert!((media.scale - IMAGE_FADE_MEDIA_SCALE).abs() < 1e-6);
        assert_eq!(reveal.element(ElementKind::Description).unwrap().extent, 0.0);
        assert!((reveal.overlay_alpha().unwrap() - 0.6).abs() < 1e-6);

        reveal.show();
        run(&mut reveal, 300);
        assert_eq!(reveal.element(ElementKind::Description).unwrap().extent, 1.0);
        assert!(reveal.element(ElementKind::Media).unwrap().scale < 1.0);

        run(&mut reveal, 300);
        assert_eq!(reveal.element(ElementKind::Media).unwrap().scale, 1.0);
        assert!((reveal.overlay_alpha().unwrap() - 0.3).abs() < 1e-6);
        assert_eq!(reveal.container_alpha(), 1.0);
    }

    #[test]
    fn static_controller_is_fully_shown() {
        let reveal = RevealController::new(RevealStyle::Cascade, &full_content()).animated(false);
        assert_eq!(reveal.state(), RevealState::Hidden);
        assert!(reveal.is_visible());
        assert_eq!(reveal.container_alpha(), 1.0);
        assert!(reveal.elements().iter().all(|e| *e == ElementFrame::resting(e.kind)));
    }

    #[test]
    fn not_settled_until_the_reveal_has_played() {
        let mut reveal = RevealController::new(RevealStyle::Cascade, &full_content());
        assert!(reveal.is_settled());
        reveal.show();
        assert_eq!(reveal.progress(), 0.0);
        assert!(!reveal.is_settled());
        run(&mut reveal, 500);
        assert!(!reveal.is_settled());
        reveal.hide();
        assert!(!reveal.is_settled());
        run(&mut reveal, 500);
        assert_eq!(reveal.progress(), 0.0);
        assert!(reveal.is_settled());
    }

    #[test]
    fn enabling_animation_keeps_content_in_place() {
        let mut shown = RevealController::new(RevealStyle::Cascade, &full_content()).animated(false);
        let mut hidden = shown.clone();
        shown.show();

        shown.set_animated(true);
        assert_eq!(shown.progress(), 1.0);
        assert!(shown.is_settled());
        assert!(shown.elements().iter().all(|e| *e == ElementFrame::resting(e.kind)));

        hidden.set_animated(true);
        assert_eq!(hidden.progress(), 1.0);
        assert!(hidden.is_visible());
        assert!(!hidden.is_settled());
        run(&mut hidden, 1000);
        assert_eq!(hidden.progress(), 0.0);
        assert!(!hidden.is_visible());
        assert!(hidden.is_settled());
    }

    #[test]
    fn listener_slice_routes_change() {
        let content = PanelContent::description("d");
        let mut reveals = vec![
            RevealController::new(RevealStyle::Cascade, &content),
            RevealController::new(RevealStyle::Cascade, &content),
        ];
        reveals.as_mut_slice().on_activation(
            ActiveChange {
                activated: Some(1),
                deactivated: None,
            },
            Some(1),
        );
        assert_eq!(reveals[1].state(), RevealState::Shown);
        reveals.as_mut_slice().on_activation(
            ActiveChange {
                activated: Some(0),
                deactivated: Some(1),
            },
            Some(0),
        );
        assert_eq!(reveals[0].state(), RevealState::Shown);
        assert_eq!(reveals[1].state(), RevealState::Hidden);
    }
}
