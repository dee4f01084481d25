#![forbid(unsafe_code)]

//! Panel records: identity, label, and extended content.
//!
//! A [`Panel`] is immutable once its row is built. Its rank is the 0-based
//! position in the row and is assigned by [`PanelModel`](crate::PanelModel)
//! at construction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a panel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelKey(String);

impl PanelKey {
    /// Create a key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for PanelKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Sub-elements of a panel's extended content, in reveal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Image or video block.
    Media,
    /// One or more heading lines.
    Subheading,
    /// Bulleted list.
    List,
    /// Paragraph text.
    Description,
}

impl ElementKind {
    /// All kinds in reveal order.
    pub const ALL: [ElementKind; 4] = [
        ElementKind::Media,
        ElementKind::Subheading,
        ElementKind::List,
        ElementKind::Description,
    ];

    /// Label used for this element's timeline track.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Media => "media",
            Self::Subheading => "subheading",
            Self::List => "list",
            Self::Description => "description",
        }
    }
}

/// Extended content revealed when a panel is active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelContent {
    /// Media reference (URL or asset path).
    pub media: Option<String>,
    /// Heading lines.
    pub subheading: Vec<String>,
    /// List items.
    pub list: Vec<String>,
    /// Paragraph text.
    pub description: Option<String>,
}

impl PanelContent {
    /// Content with only a description.
    pub fn description(text: impl Into<String>) -> Self {
        Self {
            description: Some(text.into()),
            ..Self::default()
        }
    }

    /// Set the media reference (builder pattern).
    #[must_use]
    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = Some(media.into());
        self
    }

    /// Set the heading lines (builder pattern).
    #[must_use]
    pub fn with_subheading<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subheading = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Set the list items (builder pattern).
    #[must_use]
    pub fn with_list<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.list = items.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the content has the given sub-element.
    #[must_use]
    pub fn has(&self, kind: ElementKind) -> bool {
        match kind {
            ElementKind::Media => self.media.is_some(),
            ElementKind::Subheading => !self.subheading.is_empty(),
            ElementKind::List => !self.list.is_empty(),
            ElementKind::Description => self.description.is_some(),
        }
    }

    /// Present sub-elements in reveal order.
    #[must_use]
    pub fn elements(&self) -> Vec<ElementKind> {
        ElementKind::ALL
            .into_iter()
            .filter(|&kind| self.has(kind))
            .collect()
    }
}

/// One panel in a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    key: PanelKey,
    rank: usize,
    number: String,
    title: String,
    content: PanelContent,
}

impl Panel {
    /// Create a panel with an empty payload.
    pub fn new(key: impl Into<PanelKey>, title: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            number: key.as_str().to_owned(),
            key,
            rank: 0,
            title: title.into(),
            content: PanelContent::default(),
        }
    }

    /// Set the display number, e.g. `"01"` (builder pattern).
    #[must_use]
    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Set the extended content (builder pattern).
    #[must_use]
    pub fn content(mut self, content: PanelContent) -> Self {
        self.content = content;
        self
    }

    pub(crate) fn with_rank(mut self, rank: usize) -> Self {
        self.rank = rank;
        self
    }

    /// Stable key.
    #[must_use]
    pub fn key(&self) -> &PanelKey {
        &self.key
    }

    /// Position in the row.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Display number.
    #[must_use]
    pub fn label_number(&self) -> &str {
        &self.number
    }

    /// Title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Extended content.
    #[must_use]
    pub fn payload(&self) -> &PanelContent {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_follow_reveal_order() {
        let content = PanelContent::description("text")
            .with_list(["/A", "/B"])
            .with_media("img.jpg");
        assert_eq!(
            content.elements(),
            vec![ElementKind::Media, ElementKind::List, ElementKind::Description]
        );
    }

    #[test]
    fn description_only() {
        let content = PanelContent::description("only");
        assert_eq!(content.elements(), vec![ElementKind::Description]);
        assert!(!content.has(ElementKind::Media));
    }

    #[test]
    fn empty_content_has_no_elements() {
        assert!(PanelContent::default().elements().is_empty());
    }

    #[test]
    fn panel_number_defaults_to_key() {
        let panel = Panel::new("03", "CUSTOM SOLUTIONS");
        assert_eq!(panel.label_number(), "03");
        assert_eq!(panel.key().as_str(), "03");
        let panel = panel.number("#3");
        assert_eq!(panel.label_number(), "#3");
    }
}
