#![no_main]

use bento_core::geometry::Rect;
use bento_widgets::SurfaceConfig;
use libfuzzer_sys::fuzz_target;
use std::time::Duration;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 4096 {
        return;
    }
    let Ok(config) = SurfaceConfig::from_toml_str(text) else {
        return;
    };
    if config.panels.len() > 64 {
        return;
    }

    // Anything that validates must build, animate and lay out.
    let mut surface = config.build();
    surface.pointer_enter(0);
    surface.tick(Duration::from_millis(16));
    let area = Rect::from_size(120, 30);
    let frame = surface.layout(area);
    assert_eq!(frame.panels.len(), surface.len());
    for panel in &frame.panels {
        assert!(panel.rect.right() <= area.right());
        assert!(panel.rect.bottom() <= area.bottom());
    }
});
