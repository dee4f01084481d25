#![no_main]

use arbitrary::Arbitrary;
use bento_core::event::PointerEvent;
use bento_core::geometry::Rect;
use bento_widgets::{MotionMode, SurfaceConfig};
use libfuzzer_sys::fuzz_target;
use std::time::Duration;

#[derive(Debug, Arbitrary)]
enum Op {
    Enter(u8),
    Leave,
    Tap(u8),
    Move(u8, u8),
    Touch(u8, u8),
    Tick(u16),
    Resize(u8, u8),
    Motion(bool),
}

#[derive(Debug, Arbitrary)]
struct Input {
    services: bool,
    animated: bool,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let mut config = if input.services {
        SurfaceConfig::services()
    } else {
        SurfaceConfig::works()
    };
    if !input.animated {
        config.options.motion = MotionMode::Static;
    }
    let mut surface = config.build();
    let mut area = Rect::from_size(80, 16);
    surface.layout(area);

    for op in input.ops.iter().take(256) {
        match *op {
            Op::Enter(rank) => {
                surface.pointer_enter(usize::from(rank % 6));
            }
            Op::Leave => {
                surface.pointer_leave_row();
            }
            Op::Tap(rank) => {
                surface.tap(usize::from(rank % 6));
            }
            Op::Move(x, y) => {
                surface.handle_pointer(PointerEvent::moved(u16::from(x), u16::from(y)));
            }
            Op::Touch(x, y) => {
                surface.handle_pointer(PointerEvent::tap(u16::from(x), u16::from(y)));
            }
            Op::Tick(ms) => surface.tick(Duration::from_millis(u64::from(ms % 2000))),
            Op::Resize(w, h) => {
                area = Rect::from_size(u16::from(w), u16::from(h));
                surface.layout(area);
            }
            Op::Motion(animated) => {
                let motion = if animated {
                    MotionMode::Animated
                } else {
                    MotionMode::Static
                };
                surface.set_motion(motion);
            }
        }

        // At most one panel is active and the plan agrees with the model.
        let frame = surface.layout(area);
        let active = frame.panels.iter().filter(|p| p.active).count();
        assert!(active <= 1);
        assert_eq!(active == 1, surface.active().is_some());
        for panel in &frame.panels {
            assert!(panel.weight.is_finite() && panel.weight > 0.0);
            assert!((0.0..=1.0).contains(&panel.alpha));
            assert!(panel.tilt.scale.is_finite() && panel.tilt.scale > 0.0);
        }
        if !surface.is_animated() {
            assert!(frame.settled);
        }
    }
});
