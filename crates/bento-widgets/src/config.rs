#![forbid(unsafe_code)]

//! Declarative row configuration.
//!
//! A [`SurfaceConfig`] captures everything needed to build an
//! [`InteractionSurface`] (and optionally a [`ScrollReveal`]) as data, so a
//! host can switch between the works panels and the service cards, or tune
//! timings, without recompiling.
//!
//! # Loading
//!
//! ```toml
//! motion = "animated"
//!
//! [layout]
//! expanded = 1.5
//! duration_ms = 600
//! easing = "power3_out"
//!
//! [reveal]
//! style = "image_fade"
//!
//! [dim]
//! alpha = 0.6
//!
//! [tilt]
//! strength = 5.0
//! scale = 0.95
//!
//! [[panels]]
//! key = "01"
//! title = "WEB DEVELOPMENT"
//! description = "We build high-performance, responsive websites."
//! ```
//!
//! ```rust,ignore
//! let config = SurfaceConfig::from_toml_file("bento.toml")?;
//! let surface = config.build();
//! ```
//!
//! # Defaults
//!
//! Every field defaults to the works-panel behavior, so an empty document
//! only lacks panels.

use std::collections::HashSet;
#[cfg(feature = "config")]
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::panel::{Panel, PanelContent};
use crate::scroll_reveal::{ScrollOptions, ScrollReveal, Section, Side};
use crate::surface::{InteractionSurface, SurfaceOptions};

// ---------------------------------------------------------------------------
// Panel and section specs
// ---------------------------------------------------------------------------

/// One panel as written in a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    /// Stable key.
    pub key: String,
    /// Display number; defaults to the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Title.
    pub title: String,
    /// Extended content.
    #[serde(flatten)]
    pub content: PanelContent,
}

impl PanelSpec {
    /// Turn the spec into a panel record.
    #[must_use]
    pub fn to_panel(&self) -> Panel {
        let panel = Panel::new(self.key.as_str(), self.title.as_str()).content(self.content.clone());
        match &self.number {
            Some(number) => panel.number(number.as_str()),
            None => panel,
        }
    }
}

// ---------------------------------------------------------------------------
// SurfaceConfig
// ---------------------------------------------------------------------------

/// Complete, serializable description of a panel row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Behavior options.
    #[serde(flatten)]
    pub options: SurfaceOptions,
    /// Panels in rank order.
    pub panels: Vec<PanelSpec>,
    /// Scroll reveal timing.
    pub scroll: ScrollOptions,
    /// Scroll-revealed sections, if any.
    pub sections: Vec<Section>,
}

impl SurfaceConfig {
    /// Load from a TOML string and validate.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.checked()
    }

    /// Load from a TOML file on disk and validate.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string and validate.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.checked()
    }

    /// Load from a JSON file on disk and validate.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Serialize to a TOML document.
    #[cfg(feature = "config")]
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    #[cfg(feature = "config")]
    fn checked(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }

    /// Validate all parameters.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.panels.is_empty() {
            errors.push("panels must not be empty".into());
        }
        let mut seen = HashSet::new();
        for panel in &self.panels {
            if !seen.insert(panel.key.as_str()) {
                errors.push(format!("duplicate panel key {:?}", panel.key));
            }
        }

        let policy = self.options.layout.policy;
        for (name, weight) in [
            ("expanded", policy.expanded),
            ("collapsed", policy.collapsed),
            ("neutral", policy.neutral),
        ] {
            if !weight.is_finite() || weight <= 0.0 {
                errors.push(format!("layout.{name} must be > 0, got {weight}"));
            }
        }

        if let Some(dim) = self.options.dim {
            if !(0.0..=1.0).contains(&dim.alpha) {
                errors.push(format!("dim.alpha must be in [0, 1], got {}", dim.alpha));
            }
        }

        if let Some(tilt) = self.options.tilt {
            if !tilt.strength.is_finite() {
                errors.push(format!("tilt.strength must be finite, got {}", tilt.strength));
            }
            if !tilt.scale.is_finite() || tilt.scale <= 0.0 {
                errors.push(format!("tilt.scale must be > 0, got {}", tilt.scale));
            }
        }

        let trigger = self.scroll.trigger;
        for (name, fraction) in [("start", trigger.start), ("end", trigger.end)] {
            if !(0.0..=1.0).contains(&fraction) {
                errors.push(format!(
                    "scroll.trigger.{name} must be in [0, 1], got {fraction}"
                ));
            }
        }
        for section in &self.sections {
            if !section.height.is_finite() || section.height <= 0.0 {
                errors.push(format!(
                    "section {:?} height must be > 0, got {}",
                    section.key, section.height
                ));
            }
        }

        errors
    }

    /// Panel records in rank order.
    #[must_use]
    pub fn panel_records(&self) -> Vec<Panel> {
        self.panels.iter().map(PanelSpec::to_panel).collect()
    }

    /// Build the interaction surface.
    #[must_use]
    pub fn build(&self) -> InteractionSurface {
        InteractionSurface::new(self.panel_records(), self.options)
    }

    /// Build the scroll reveal for the configured sections.
    ///
    /// The top-level motion mode applies to the sections as well.
    #[must_use]
    pub fn build_scroll(&self) -> ScrollReveal {
        let options = ScrollOptions {
            motion: self.options.motion,
            ..self.scroll
        };
        ScrollReveal::new(self.sections.iter().cloned(), options)
    }

    // --- presets ---

    /// The works detail panels with their showcase sections.
    #[must_use]
    pub fn works() -> Self {
        let panels = vec![
            panel(
                "01",
                "WEB DEVELOPMENT",
                PanelContent::description(
                    "A complete overhaul of a legacy e-commerce system, resulting in a 40% \
                     increase in conversion rates and improved user engagement through a \
                     modern, responsive interface.",
                )
                .with_media("https://images.unsplash.com/photo-1517694712202-14dd9538aa97")
                .with_subheading(["E-COMMERCE PLATFORM", "REACT & NODE.JS"]),
            ),
            panel(
                "02",
                "UI/UX DESIGN",
                PanelContent::description(
                    "Designed and prototyped a new mobile banking application focused on \
                     intuitive navigation and simplified financial management for \
                     millennial users.",
                )
                .with_media("https://images.unsplash.com/photo-1547658719-da2b51169166")
                .with_list([
                    "/MOBILE APP DESIGN",
                    "/USER RESEARCH",
                    "/PROTOTYPING",
                    "/USABILITY TESTING",
                ]),
            ),
            panel(
                "03",
                "CUSTOM SOLUTIONS",
                PanelContent::description(
                    "Developed a new brand identity for a tech startup, including logo, \
                     color palette, and a complete set of marketing materials that \
                     established a strong market presence.",
                )
                .with_media("https://images.unsplash.com/photo-1587440871875-191322ee64b0")
                .with_subheading(["BRANDING & IDENTITY", "MARKETING COLLATERAL"]),
            ),
            panel(
                "04",
                "BRANDING AND GRAPHICS",
                PanelContent::description(
                    "Created a powerful data visualization dashboard to help a logistics \
                     company track shipments and optimize routes in real-time, reducing \
                     fuel costs by 15%.",
                )
                .with_media("https://images.unsplash.com/photo-1494498902093-270838520610")
                .with_list([
                    "/DATA VISUALIZATION",
                    "/ANALYTICS DASHBOARD",
                    "/D3.JS",
                    "/PYTHON",
                ]),
            ),
        ];

        let sections = [
            "London Fashion Week",
            "Madrid Fashion Week",
            "Tokyo Fashion Week",
            "Kyiv Fashion Week",
        ]
        .into_iter()
        .enumerate()
        .map(|(i, title)| {
            Section::new(title, Side::alternating(i), 800.0 * (i + 1) as f32, 800.0)
        })
        .collect();

        Self {
            options: SurfaceOptions::works(),
            panels,
            scroll: ScrollOptions::default(),
            sections,
        }
    }

    /// The service cards.
    #[must_use]
    pub fn services() -> Self {
        let cards = [
            (
                "01",
                "WEB DEVELOPMENT",
                "We build high-performance, responsive websites that are fast, secure, \
                 and look stunning on all devices.",
            ),
            (
                "02",
                "UI/UX DESIGN",
                "Our user-centered approach creates intuitive and beautiful interfaces \
                 that are a pleasure to use.",
            ),
            (
                "03",
                "CUSTOM SOLUTIONS",
                "We build bespoke applications, tailored to your unique challenges and \
                 designed to streamline operations.",
            ),
            (
                "04",
                "BRANDING AND GRAPHICS",
                "We craft memorable logos and compelling visual identities that capture \
                 your brand's essence.",
            ),
        ];
        let panels = cards
            .into_iter()
            .map(|(key, title, description)| {
                panel(
                    key,
                    title,
                    PanelContent::description(description)
                        .with_media(format!("services/{key}.jpg")),
                )
            })
            .collect();

        Self {
            options: SurfaceOptions::services(),
            panels,
            ..Self::default()
        }
    }
}

fn panel(key: &str, title: &str, content: PanelContent) -> PanelSpec {
    PanelSpec {
        key: key.to_owned(),
        number: None,
        title: title.to_owned(),
        content,
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a surface configuration.
#[cfg(feature = "config")]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// JSON parse error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but describes an unusable row.
    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}
