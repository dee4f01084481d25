//! End-to-end scenarios for a hovered panel row.

use std::time::Duration;

use bento_core::event::PointerEvent;
use bento_core::geometry::Rect;
use bento_layout::Direction;
use bento_widgets::{
    ElementKind, InteractionSurface, Panel, PanelContent, RevealState, SurfaceConfig,
    SurfaceOptions,
};
use proptest::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

fn three_panels() -> InteractionSurface {
    InteractionSurface::new(
        [
            Panel::new("p0", "ZERO").content(PanelContent::description("zero")),
            Panel::new("p1", "ONE").content(
                PanelContent::description("one")
                    .with_media("one.jpg")
                    .with_subheading(["HEADING"]),
            ),
            Panel::new("p2", "TWO").content(PanelContent::description("two").with_list(["/X"])),
        ],
        SurfaceOptions::works(),
    )
}

fn frames(surface: &mut InteractionSurface, n: usize) {
    for _ in 0..n {
        surface.tick(FRAME);
    }
}

fn approx(a: &[f32], b: &[f32]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-5)
}

#[test]
fn enter_retarget_leave() {
    let mut row = three_panels();

    row.pointer_enter(1);
    assert_eq!(row.engine().targets(), vec![1.0, 6.0, 1.0]);
    frames(&mut row, 10);
    let before = row.engine().weights();
    row.pointer_enter(2);
    assert!(approx(&before, &row.engine().weights()));
    frames(&mut row, 1);
    let after = row.engine().weights();
    assert!((after[2] - before[2]).abs() < 0.1);

    frames(&mut row, 49);
    assert_eq!(row.engine().weights(), vec![1.0, 1.0, 6.0]);

    row.pointer_leave_row();
    frames(&mut row, 50);
    assert_eq!(row.engine().weights(), vec![1.0, 1.0, 1.0]);
    assert_eq!(row.active(), None);
}

#[test]
fn direct_switch_skips_neutral() {
    let mut row = three_panels();
    row.pointer_enter(0);
    frames(&mut row, 50);
    row.pointer_enter(2);

    for _ in 0..50 {
        frames(&mut row, 1);
        let targets = row.engine().targets();
        assert_eq!(targets, vec![1.0, 1.0, 6.0]);
        // Some panel stays above neutral for the whole switch.
        let max = row.engine().weights().into_iter().fold(0.0f32, f32::max);
        assert!(max > 1.0 + 1e-3);
    }
}

#[test]
fn reactivation_resumes_reveal() {
    let mut row = three_panels();
    row.pointer_enter(1);
    frames(&mut row, 30);
    row.pointer_leave_row();
    frames(&mut row, 10);
    let reveal = row.reveal(1).unwrap();
    let progress = reveal.progress();
    assert!(progress > 0.0 && progress < 1.0);
    assert_eq!(reveal.state(), RevealState::Hidden);

    row.pointer_enter(1);
    let reveal = row.reveal(1).unwrap();
    assert_eq!(reveal.progress(), progress);
    assert_eq!(reveal.state(), RevealState::Shown);
    frames(&mut row, 1);
    assert!(row.reveal(1).unwrap().progress() > progress);
}

#[test]
fn description_only_panel_reveals_one_element() {
    let mut row = three_panels();
    row.pointer_enter(0);
    frames(&mut row, 60);
    let frame = row.layout(Rect::from_size(90, 30));
    let content = &frame.panel(0).unwrap().content;
    assert!(content.visible);
    assert_eq!(content.elements.len(), 1);
    assert_eq!(content.elements[0].kind, ElementKind::Description);
    assert_eq!(content.elements[0].alpha, 1.0);
}

#[test]
fn pointer_sweep_across_a_laid_out_row() {
    let mut row = SurfaceConfig::works().build();
    let area = Rect::from_size(120, 30);
    row.layout(area);

    for x in (0..120).step_by(7) {
        row.handle_pointer(PointerEvent::moved(x, 10));
        frames(&mut row, 2);
        let frame = row.layout(area);
        let active = frame.panels.iter().filter(|p| p.active).count();
        assert_eq!(active, 1);
        assert_eq!(
            frame.extents(Direction::Horizontal).iter().map(|&w| u32::from(w)).sum::<u32>(),
            120
        );
    }

    row.handle_pointer(PointerEvent::moved(10, 200));
    assert_eq!(row.active(), None);
}

#[test]
fn services_cards_expand_by_half() {
    let mut row = SurfaceConfig::services().build();
    row.pointer_enter(0);
    frames(&mut row, 40);
    assert_eq!(row.engine().weights(), vec![1.5, 1.0, 1.0, 1.0]);
    let frame = row.layout(Rect::from_size(90, 20));
    assert_eq!(frame.extents(Direction::Horizontal), vec![30, 20, 20, 20]);
    let card = &frame.panels[0].content;
    assert!((card.overlay_alpha.unwrap() - 0.3).abs() < 1e-6);
    assert!(frame.panels[1].alpha < 1.0);
}

proptest! {
    #[test]
    fn at_most_one_panel_is_active(
        steps in proptest::collection::vec((0u8..4, 0usize..6, 0u64..200), 1..60)
    ) {
        let mut row = three_panels();
        for (op, rank, ms) in steps {
            match op {
                0 => { row.pointer_enter(rank); }
                1 => { row.pointer_leave_row(); }
                2 => { row.tap(rank); }
                _ => row.tick(Duration::from_millis(ms)),
            }
            let shown = (0..row.len())
                .filter(|&r| row.reveal(r).is_some_and(|rev| rev.state() == RevealState::Shown))
                .count();
            prop_assert!(shown <= 1);
            prop_assert_eq!(shown == 1, row.active().is_some());
            let frame = row.layout(Rect::from_size(60, 12));
            prop_assert!(frame.panels.iter().filter(|p| p.active).count() <= 1);
            let sum: f32 = frame.panels.iter().map(|p| p.share).sum();
            prop_assert!((sum - 1.0).abs() < 1e-4);
        }
    }
}
