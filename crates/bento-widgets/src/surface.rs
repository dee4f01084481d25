#![forbid(unsafe_code)]

//! InteractionSurface: binds pointer input to one panel row.
//!
//! The surface owns every piece of row state: the [`PanelModel`], the
//! [`LayoutEngine`], one [`RevealController`] per panel and the optional
//! sibling dimming layer. Each input goes through the same path:
//!
//! 1. Update the model, which returns an [`ActiveChange`].
//! 2. Forward that change to every [`ActivationListener`].
//! 3. Let the host tick and call [`InteractionSurface::layout`] to read the
//!    render plan.
//!
//! Leaving is tracked per row, not per panel: moving from one panel into
//! its neighbor switches the active panel directly, while leaving the row
//! clears it.
//!
//! # Invariants
//!
//! 1. Listeners run after the model is updated, within the same call, so
//!    every listener sees the same active rank for one input.
//! 2. Hit testing uses the rectangles of the most recent layout; before the
//!    first layout no coordinate hits a panel.
//! 3. In [`MotionMode::Static`] weights stay neutral, content stays fully
//!    visible and cards stay flat, whatever the active panel.
//! 4. [`InteractionSurface::set_motion`] re-syncs every layer to the active
//!    panel from where it stands; nothing jumps when animation turns on.
//!
//! # Failure Modes
//!
//! - Out-of-range ranks clear the active panel, as unknown keys do.
//! - Pointer moves from devices that don't hover are ignored; touch input
//!   activates through taps only.

use std::time::Duration;

use bento_core::animation::{Animation, Easing, Tween};
use bento_core::event::{Event, PointerEvent, PointerEventKind};
use bento_core::geometry::{Rect, Sides};
use bento_layout::{Direction, LayoutEngine, Transition, WeightPolicy};
use serde::{Deserialize, Serialize};

use crate::model::{ActivationListener, ActiveChange, PanelModel};
use crate::panel::{Panel, PanelKey};
use crate::reveal::{ElementFrame, RevealController, RevealStyle};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Whether tweens run or state snaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionMode {
    /// Weights and reveals animate.
    #[default]
    Animated,
    /// No animation primitive: neutral weights, content fully shown.
    Static,
}

/// Weight policy, transition and axis of the row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Target weights.
    #[serde(flatten)]
    pub policy: WeightPolicy,
    /// Shared duration and easing of weight retargets.
    #[serde(flatten)]
    pub transition: Transition,
    /// Axis the panels are laid out along.
    pub direction: Direction,
    /// Cells between adjacent panels.
    pub gap: u16,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            policy: WeightPolicy::WORKS,
            transition: Transition::default(),
            direction: Direction::Horizontal,
            gap: 0,
        }
    }
}

/// Reveal style for every panel in the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// How extended content appears.
    pub style: RevealStyle,
}

/// Sibling dimming: inactive panels fade while another is active.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimOptions {
    /// Opacity of inactive panels while one is active.
    pub alpha: f32,
    /// Fade length in milliseconds.
    pub duration_ms: u64,
}

impl DimOptions {
    /// Fade length.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for DimOptions {
    fn default() -> Self {
        Self {
            alpha: 0.6,
            duration_ms: 400,
        }
    }
}

/// Card tilt toward a hovering pointer.
///
/// A card rotates about both axes by `strength` degrees per unit of pointer
/// offset from its center and shrinks to `scale`; leaving flattens it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltOptions {
    /// Degrees per unit of offset from the card center.
    pub strength: f32,
    /// Scale of a tilted card.
    pub scale: f32,
    /// Follow length in milliseconds.
    pub duration_ms: u64,
}

impl TiltOptions {
    /// Follow length.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for TiltOptions {
    fn default() -> Self {
        Self {
            strength: 5.0,
            scale: 0.95,
            duration_ms: 100,
        }
    }
}

/// Everything that shapes a row's behavior apart from its panels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceOptions {
    /// Animated or static.
    pub motion: MotionMode,
    /// Weights and axis.
    pub layout: LayoutOptions,
    /// Content reveal.
    pub reveal: RevealOptions,
    /// Optional sibling dimming.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dim: Option<DimOptions>,
    /// Optional card tilt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tilt: Option<TiltOptions>,
}

impl SurfaceOptions {
    /// Works detail panels: 6/1/1 weights over 800ms, cascade reveal.
    #[must_use]
    pub fn works() -> Self {
        Self::default()
    }

    /// Service cards: 1.5/1/1 weights over 600ms, image-fade reveal, sibling
    /// dimming and card tilt.
    #[must_use]
    pub fn services() -> Self {
        Self {
            motion: MotionMode::Animated,
            layout: LayoutOptions {
                policy: WeightPolicy::SERVICES,
                transition: Transition::new(Duration::from_millis(600), Easing::Power3Out),
                ..LayoutOptions::default()
            },
            reveal: RevealOptions {
                style: RevealStyle::ImageFade,
            },
            dim: Some(DimOptions::default()),
            tilt: Some(TiltOptions::default()),
        }
    }

    /// Same options with a different motion mode (builder pattern).
    #[must_use]
    pub fn with_motion(mut self, motion: MotionMode) -> Self {
        self.motion = motion;
        self
    }
}

// ---------------------------------------------------------------------------
// Render plan
// ---------------------------------------------------------------------------

/// Orientation of a panel's number and title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderLayout {
    /// Title runs along the panel's long edge.
    Vertical,
    /// Number above title, for narrow collapsed panels.
    Stacked,
}

/// Rotation and scale of one card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tilt {
    /// Degrees about the horizontal axis.
    pub rotate_x: f32,
    /// Degrees about the vertical axis.
    pub rotate_y: f32,
    /// Uniform scale.
    pub scale: f32,
}

impl Tilt {
    /// No rotation, full size.
    pub const FLAT: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
    };
}

impl Default for Tilt {
    fn default() -> Self {
        Self::FLAT
    }
}

/// Extended content area of one panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentFrame {
    /// Bottom 60% of the padded panel.
    pub rect: Rect,
    /// Whether anything is drawn.
    pub visible: bool,
    /// Whether the content accepts pointer input.
    pub interactive: bool,
    /// Container opacity.
    pub alpha: f32,
    /// Overlay darkness, image-fade only.
    pub overlay_alpha: Option<f32>,
    /// Present sub-elements.
    pub elements: Vec<ElementFrame>,
}

/// One panel in the render plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelFrame {
    /// Position in the row.
    pub rank: usize,
    /// Stable key.
    pub key: PanelKey,
    /// Display number.
    pub number: String,
    /// Title.
    pub title: String,
    /// Whether this panel is the active one.
    pub active: bool,
    /// Laid-out rectangle.
    pub rect: Rect,
    /// Current animated weight.
    pub weight: f32,
    /// Weight normalized over the row.
    pub share: f32,
    /// Panel opacity from sibling dimming.
    pub alpha: f32,
    /// Card tilt toward the pointer.
    pub tilt: Tilt,
    /// Header orientation.
    pub header: HeaderLayout,
    /// Extended content.
    pub content: ContentFrame,
}

/// Render plan of the whole row for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowFrame {
    /// Area the row was laid out in.
    pub area: Rect,
    /// Active key.
    pub active: Option<PanelKey>,
    /// Whether every animation has come to rest.
    pub settled: bool,
    /// Panels in rank order.
    pub panels: Vec<PanelFrame>,
}

impl RowFrame {
    /// Frame of the panel at `rank`.
    #[must_use]
    pub fn panel(&self, rank: usize) -> Option<&PanelFrame> {
        self.panels.get(rank)
    }

    /// Widths (or heights, on a vertical row) of every panel.
    #[must_use]
    pub fn extents(&self, direction: Direction) -> Vec<u16> {
        self.panels
            .iter()
            .map(|p| match direction {
                Direction::Horizontal => p.rect.width,
                Direction::Vertical => p.rect.height,
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Listeners
// ---------------------------------------------------------------------------

impl ActivationListener for LayoutEngine {
    fn on_activation(&mut self, _change: ActiveChange, active: Option<usize>) {
        self.set_active(active);
    }
}

/// Per-panel opacity tweens for sibling dimming.
#[derive(Debug, Clone)]
struct DimLayer {
    options: DimOptions,
    tweens: Vec<Tween>,
    animated: bool,
}

impl DimLayer {
    fn new(count: usize, options: DimOptions, animated: bool) -> Self {
        let tween = Tween::new(1.0)
            .with_duration(options.duration())
            .with_easing(Easing::Power3Out);
        Self {
            options,
            tweens: vec![tween; count],
            animated,
        }
    }

    /// Turning animation off snaps every fade to its target.
    fn set_animated(&mut self, animated: bool) {
        self.animated = animated;
        if !animated {
            for tween in &mut self.tweens {
                tween.jump_to(tween.target());
            }
        }
    }

    /// Aim every panel at its opacity for `active`.
    fn sync(&mut self, active: Option<usize>) {
        for (rank, tween) in self.tweens.iter_mut().enumerate() {
            let target = match active {
                Some(a) if a != rank => self.options.alpha,
                _ => 1.0,
            };
            if (tween.target() - target).abs() <= f32::EPSILON {
                continue;
            }
            if self.animated {
                tween.retarget(target);
            } else {
                tween.jump_to(target);
            }
        }
    }

    fn alpha(&self, rank: usize) -> f32 {
        self.tweens.get(rank).map_or(1.0, Animation::value)
    }

    fn tick(&mut self, dt: Duration) {
        for tween in &mut self.tweens {
            tween.tick(dt);
        }
    }

    fn is_settled(&self) -> bool {
        self.tweens.iter().all(Animation::is_complete)
    }
}

impl ActivationListener for DimLayer {
    fn on_activation(&mut self, _change: ActiveChange, active: Option<usize>) {
        self.sync(active);
    }
}

/// Per-card rotation and scale tweens following a hovering pointer.
#[derive(Debug, Clone)]
struct TiltLayer {
    options: TiltOptions,
    cards: Vec<[Tween; 3]>,
}

impl TiltLayer {
    fn new(count: usize, options: TiltOptions) -> Self {
        let tween = |value: f32| {
            Tween::new(value)
                .with_duration(options.duration())
                .with_easing(Easing::EaseOut)
        };
        Self {
            options,
            cards: vec![[tween(0.0), tween(0.0), tween(1.0)]; count],
        }
    }

    /// Tilt the card at `rank` toward a pointer at `(rel_x, rel_y)` inside
    /// it, both in [0, 1], and flatten the others.
    fn point(&mut self, rank: usize, rel_x: f32, rel_y: f32) {
        let strength = self.options.strength;
        let tilted = Tilt {
            rotate_x: (rel_y - 0.5) * strength,
            rotate_y: (rel_x - 0.5) * -strength,
            scale: self.options.scale,
        };
        for (i, card) in self.cards.iter_mut().enumerate() {
            aim(card, if i == rank { tilted } else { Tilt::FLAT });
        }
    }

    fn flatten(&mut self) {
        for card in &mut self.cards {
            aim(card, Tilt::FLAT);
        }
    }

    fn snap_flat(&mut self) {
        for [x, y, scale] in &mut self.cards {
            x.jump_to(0.0);
            y.jump_to(0.0);
            scale.jump_to(1.0);
        }
    }

    fn tilt(&self, rank: usize) -> Tilt {
        self.cards
            .get(rank)
            .map_or(Tilt::FLAT, |[x, y, scale]| Tilt {
                rotate_x: x.value(),
                rotate_y: y.value(),
                scale: scale.value(),
            })
    }

    fn tick(&mut self, dt: Duration) {
        for tween in self.cards.iter_mut().flatten() {
            tween.tick(dt);
        }
    }

    fn is_settled(&self) -> bool {
        self.cards.iter().flatten().all(Animation::is_complete)
    }
}

fn aim(card: &mut [Tween; 3], tilt: Tilt) {
    for (tween, target) in card.iter_mut().zip([tilt.rotate_x, tilt.rotate_y, tilt.scale]) {
        if (tween.target() - target).abs() > f32::EPSILON {
            tween.retarget(target);
        }
    }
}

/// Pointer position inside `rect`, each axis in [0, 1], sampled at cell
/// centers.
fn relative(rect: Rect, x: u16, y: u16) -> (f32, f32) {
    let axis = |pos: u16, start: u16, len: u16| {
        (f32::from(pos.saturating_sub(start)) + 0.5) / f32::from(len.max(1))
    };
    (axis(x, rect.x, rect.width), axis(y, rect.y, rect.height))
}

// ---------------------------------------------------------------------------
// InteractionSurface
// ---------------------------------------------------------------------------

/// Padding between a panel's edge and its content.
const PANEL_PADDING: u16 = 1;

/// Pointer-driven panel row with animated weights and reveals.
#[derive(Debug, Clone)]
pub struct InteractionSurface {
    options: SurfaceOptions,
    model: PanelModel,
    engine: LayoutEngine,
    reveals: Vec<RevealController>,
    dim: Option<DimLayer>,
    tilt: Option<TiltLayer>,
    area: Option<Rect>,
    rects: Vec<Rect>,
}

impl InteractionSurface {
    /// Build a surface over `panels`, nothing active.
    pub fn new(panels: impl IntoIterator<Item = Panel>, options: SurfaceOptions) -> Self {
        let model = PanelModel::new(panels);
        let animated = options.motion == MotionMode::Animated;
        let engine = LayoutEngine::new(
            model.len(),
            options.layout.policy,
            options.layout.transition,
        )
        .animated(animated);
        let reveals = model
            .panels()
            .iter()
            .map(|p| RevealController::new(options.reveal.style, p.payload()).animated(animated))
            .collect();
        let dim = options
            .dim
            .map(|dim| DimLayer::new(model.len(), dim, animated));
        let tilt = options.tilt.map(|tilt| TiltLayer::new(model.len(), tilt));

        tracing::debug!(
            target: "bento.surface",
            panels = model.len(),
            motion = ?options.motion,
            style = ?options.reveal.style,
            "surface created"
        );

        Self {
            options,
            model,
            engine,
            reveals,
            dim,
            tilt,
            area: None,
            rects: Vec::new(),
        }
    }

    // --- accessors ---

    /// Current options; `motion` follows [`Self::set_motion`].
    #[must_use]
    pub fn options(&self) -> &SurfaceOptions {
        &self.options
    }

    /// Panel model.
    #[must_use]
    pub fn model(&self) -> &PanelModel {
        &self.model
    }

    /// Weight engine.
    #[must_use]
    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// Reveal controller of the panel at `rank`.
    #[must_use]
    pub fn reveal(&self, rank: usize) -> Option<&RevealController> {
        self.reveals.get(rank)
    }

    /// Number of panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.model.len()
    }

    /// Whether the row has no panels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.model.is_empty()
    }

    /// Active key.
    #[must_use]
    pub fn active(&self) -> Option<&PanelKey> {
        self.model.active()
    }

    /// Active rank.
    #[must_use]
    pub fn active_rank(&self) -> Option<usize> {
        self.model.active_rank()
    }

    /// Whether the surface animates.
    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.options.motion == MotionMode::Animated
    }

    /// Current dim opacity of the panel at `rank`.
    #[must_use]
    pub fn dim_alpha(&self, rank: usize) -> f32 {
        self.dim.as_ref().map_or(1.0, |dim| dim.alpha(rank))
    }

    /// Current tilt of the card at `rank`.
    #[must_use]
    pub fn tilt(&self, rank: usize) -> Tilt {
        self.tilt.as_ref().map_or(Tilt::FLAT, |tilt| tilt.tilt(rank))
    }

    /// Whether weights, reveals, dimming and tilt have all come to rest.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.engine.is_settled()
            && self.reveals.iter().all(RevealController::is_settled)
            && self.dim.as_ref().is_none_or(DimLayer::is_settled)
            && self.tilt.as_ref().is_none_or(TiltLayer::is_settled)
    }

    // --- motion ---

    /// Switch between animated and static motion in place.
    ///
    /// Every layer is re-synced to the active panel from its current state.
    /// Going static snaps to the static plan; going animated tweens from the
    /// static plan toward the active panel's targets. Returns `true` if the
    /// mode changed.
    pub fn set_motion(&mut self, motion: MotionMode) -> bool {
        if self.options.motion == motion {
            return false;
        }
        self.options.motion = motion;
        let animated = motion == MotionMode::Animated;
        let active = self.model.active_rank();
        tracing::debug!(
            target: "bento.surface",
            ?motion,
            active = ?self.model.active().map(PanelKey::as_str),
            "motion changed"
        );

        // Static weights and dimming behave as if nothing were active.
        let driven = if animated { active } else { None };
        self.engine.set_animated(animated);
        self.engine.set_active(driven);
        for reveal in &mut self.reveals {
            reveal.set_animated(animated);
        }
        if let Some(dim) = &mut self.dim {
            dim.set_animated(animated);
            dim.sync(driven);
        }
        if !animated {
            if let Some(tilt) = &mut self.tilt {
                tilt.snap_flat();
            }
        }
        true
    }

    // --- input ---

    /// Pointer entered the panel at `rank`.
    pub fn pointer_enter(&mut self, rank: usize) -> bool {
        let change = self.model.set_active_rank(Some(rank));
        self.apply(change, "enter")
    }

    /// Pointer entered the panel with `key`.
    pub fn pointer_enter_key(&mut self, key: &str) -> bool {
        let change = self.model.set_active(Some(key));
        self.apply(change, "enter")
    }

    /// Pointer left the row.
    pub fn pointer_leave_row(&mut self) -> bool {
        if let Some(tilt) = &mut self.tilt {
            tilt.flatten();
        }
        let change = self.model.set_active_rank(None);
        self.apply(change, "leave")
    }

    /// Tap on the panel at `rank`: activate it, or clear it if active.
    pub fn tap(&mut self, rank: usize) -> bool {
        let change = if rank < self.model.len() {
            self.model.toggle_rank(rank)
        } else {
            self.model.set_active_rank(None)
        };
        self.apply(change, "tap")
    }

    /// Route a coordinate-based pointer event through hit testing.
    ///
    /// Returns `true` if the active panel changed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Left => self.pointer_leave_row(),
            PointerEventKind::Moved if event.device.hovers() => {
                let hit = self.hit_test(event.x, event.y);
                self.follow_tilt(hit, event.x, event.y);
                if let Some(rank) = hit {
                    self.pointer_enter(rank)
                } else if self.in_row(event.x, event.y) {
                    // Gaps between panels are still inside the row.
                    false
                } else {
                    self.pointer_leave_row()
                }
            }
            PointerEventKind::Tap => match self.hit_test(event.x, event.y) {
                Some(rank) => self.tap(rank),
                None => false,
            },
            PointerEventKind::Moved | PointerEventKind::Down | PointerEventKind::Up => false,
        }
    }

    /// Route any host event. Returns `true` if the active panel changed.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Pointer(pointer) => self.handle_pointer(pointer),
            Event::Frame(dt) => {
                self.tick(dt);
                false
            }
            Event::Resize { width, height } => {
                self.layout(Rect::from_size(width, height));
                false
            }
            Event::Scroll(_) => false,
        }
    }

    /// Panel under `(x, y)` in the most recent layout.
    #[must_use]
    pub fn hit_test(&self, x: u16, y: u16) -> Option<usize> {
        self.rects.iter().position(|r| r.contains(x, y))
    }

    fn follow_tilt(&mut self, hit: Option<usize>, x: u16, y: u16) {
        if !self.is_animated() {
            return;
        }
        let Some(tilt) = &mut self.tilt else {
            return;
        };
        match hit.and_then(|rank| self.rects.get(rank).map(|&rect| (rank, rect))) {
            Some((rank, rect)) => {
                let (rel_x, rel_y) = relative(rect, x, y);
                tilt.point(rank, rel_x, rel_y);
            }
            None => tilt.flatten(),
        }
    }

    fn in_row(&self, x: u16, y: u16) -> bool {
        self.area.is_some_and(|area| area.contains(x, y))
    }

    fn apply(&mut self, change: ActiveChange, source: &'static str) -> bool {
        if change.is_empty() {
            return false;
        }
        let active = self.model.active_rank();
        tracing::debug!(
            target: "bento.surface",
            source,
            activated = ?change.activated,
            deactivated = ?change.deactivated,
            active = ?self.model.active().map(PanelKey::as_str),
            "active panel changed"
        );

        if self.is_animated() {
            self.engine.on_activation(change, active);
            if let Some(dim) = &mut self.dim {
                dim.on_activation(change, active);
            }
        }
        self.reveals.as_mut_slice().on_activation(change, active);
        true
    }

    // --- time ---

    /// Advance every animation by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.engine.tick(dt);
        for reveal in &mut self.reveals {
            reveal.tick(dt);
        }
        if let Some(dim) = &mut self.dim {
            dim.tick(dt);
        }
        if let Some(tilt) = &mut self.tilt {
            tilt.tick(dt);
        }
    }

    // --- output ---

    /// Lay the row out in `area` and return the render plan.
    ///
    /// The panel rectangles are kept for hit testing.
    pub fn layout(&mut self, area: Rect) -> RowFrame {
        let layout = self.options.layout;
        self.rects = self.engine.split(area, layout.direction, layout.gap);
        self.area = Some(area);

        let weights = self.engine.weights();
        let shares = self.engine.shares();
        let active = self.model.active_rank();
        let animated = self.is_animated();

        let panels = self
            .model
            .panels()
            .iter()
            .zip(&self.rects)
            .zip(&self.reveals)
            .map(|((panel, &rect), reveal)| {
                let rank = panel.rank();
                let collapsed = animated && active.is_some_and(|a| a != rank);
                PanelFrame {
                    rank,
                    key: panel.key().clone(),
                    number: panel.label_number().to_owned(),
                    title: panel.title().to_owned(),
                    active: active == Some(rank),
                    rect,
                    weight: weights[rank],
                    share: shares[rank],
                    alpha: self.dim_alpha(rank),
                    tilt: self.tilt(rank),
                    header: if collapsed {
                        HeaderLayout::Stacked
                    } else {
                        HeaderLayout::Vertical
                    },
                    content: content_frame(rect, reveal),
                }
            })
            .collect();

        RowFrame {
            area,
            active: self.model.active().cloned(),
            settled: self.is_settled(),
            panels,
        }
    }
}

fn content_frame(panel: Rect, reveal: &RevealController) -> ContentFrame {
    let padded = panel.inner(Sides::all(PANEL_PADDING));
    let height = (u32::from(padded.height) * 3 / 5) as u16;
    ContentFrame {
        rect: padded.bottom_rows(height),
        visible: reveal.is_visible(),
        interactive: reveal.is_interactive(),
        alpha: reveal.container_alpha(),
        overlay_alpha: reveal.overlay_alpha(),
        elements: reveal.elements(),
    }
}
