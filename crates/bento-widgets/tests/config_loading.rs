//! Loading `SurfaceConfig` from TOML and JSON documents.

use std::io::Write;

use bento_layout::Direction;
use bento_widgets::{ConfigError, MotionMode, RevealStyle, Side, SurfaceConfig};

const SERVICES_TOML: &str = r##"
motion = "animated"

[layout]
expanded = 1.5
duration_ms = 600
easing = "power3_out"
direction = "vertical"
gap = 1

[reveal]
style = "image_fade"

[dim]
alpha = 0.5

[tilt]
strength = 4.0

[[panels]]
key = "01"
title = "WEB DEVELOPMENT"
media = "web.jpg"
description = "Fast, secure websites."

[[panels]]
key = "02"
number = "#2"
title = "UI/UX DESIGN"
list = ["/RESEARCH", "/PROTOTYPING"]
"##;

#[test]
fn toml_overrides_defaults() {
    let config = SurfaceConfig::from_toml_str(SERVICES_TOML).unwrap();
    let layout = config.options.layout;
    assert_eq!(layout.policy.expanded, 1.5);
    assert_eq!(layout.policy.collapsed, 1.0);
    assert_eq!(layout.transition.duration_ms, 600);
    assert_eq!(layout.direction, Direction::Vertical);
    assert_eq!(layout.gap, 1);
    assert_eq!(config.options.reveal.style, RevealStyle::ImageFade);

    let dim = config.options.dim.unwrap();
    assert_eq!(dim.alpha, 0.5);
    assert_eq!(dim.duration_ms, 400);

    let tilt = config.options.tilt.unwrap();
    assert_eq!(tilt.strength, 4.0);
    assert_eq!(tilt.scale, 0.95);

    let panels = config.panel_records();
    assert_eq!(panels.len(), 2);
    assert_eq!(panels[0].payload().media.as_deref(), Some("web.jpg"));
    assert_eq!(panels[1].label_number(), "#2");
    assert_eq!(panels[1].payload().list.len(), 2);
}

#[test]
fn minimal_document_uses_works_defaults() {
    let config = SurfaceConfig::from_toml_str(
        r#"
[[panels]]
key = "a"
title = "A"
"#,
    )
    .unwrap();
    assert_eq!(config.options.motion, MotionMode::Animated);
    assert_eq!(config.options.layout.policy.expanded, 6.0);
    assert_eq!(config.options.layout.transition.duration_ms, 800);
    assert!(config.options.dim.is_none());
    assert!(config.options.tilt.is_none());
    assert_eq!(config.scroll.scrub_ms, 1500);
}

#[test]
fn sections_load_from_toml() {
    let config = SurfaceConfig::from_toml_str(
        r#"
motion = "static"

[[panels]]
key = "a"
title = "A"

[scroll]
scrub_ms = 0

[[sections]]
key = "london"
top = 800
height = 600

[[sections]]
key = "madrid"
side = "right"
top = 1400.5
height = 600
"#,
    )
    .unwrap();
    assert_eq!(config.sections.len(), 2);
    assert_eq!(config.sections[0].side, Side::Left);
    assert_eq!(config.sections[1].side, Side::Right);
    let scroll = config.build_scroll();
    assert_eq!(scroll.options().motion, MotionMode::Static);
    assert_eq!(scroll.section(1).unwrap().progress, 1.0);
}

#[test]
fn json_loads() {
    let json = r#"{
        "motion": "static",
        "reveal": { "style": "cascade" },
        "panels": [
            { "key": "01", "title": "ONE", "subheading": ["A", "B"] },
            { "key": "02", "title": "TWO" }
        ]
    }"#;
    let config = SurfaceConfig::from_json_str(json).unwrap();
    assert_eq!(config.options.motion, MotionMode::Static);
    assert_eq!(config.panels[0].content.subheading, vec!["A", "B"]);
    assert!(!config.build().is_animated());
}

#[test]
fn invalid_documents_are_rejected() {
    let err = SurfaceConfig::from_toml_str("motion = \"animated\"").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(ref errors) if errors.len() == 1));

    let err = SurfaceConfig::from_toml_str(
        r#"
[layout]
expanded = -2.0

[[panels]]
key = "a"
title = "A"

[[panels]]
key = "a"
title = "B"
"#,
    )
    .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("duplicate panel key"));
    assert!(message.contains("layout.expanded"));

    let err = SurfaceConfig::from_toml_str("motion = 3").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));

    let err = SurfaceConfig::from_json_str("{").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn file_loading() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SERVICES_TOML.as_bytes()).unwrap();
    let config = SurfaceConfig::from_toml_file(file.path()).unwrap();
    assert_eq!(config.panels.len(), 2);

    let err = SurfaceConfig::from_toml_file("/nonexistent/bento.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn presets_round_trip_through_toml() {
    for preset in [SurfaceConfig::works(), SurfaceConfig::services()] {
        let text = preset.to_toml_string().unwrap();
        let loaded = SurfaceConfig::from_toml_str(&text).unwrap();
        assert_eq!(loaded, preset);
    }
}
