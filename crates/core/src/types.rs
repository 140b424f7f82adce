//! Domain types for representing a parsed slide deck.

use serde::{Deserialize, Serialize};

/// A whole deck: document-level configuration plus its slides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckMetadata {
    /// Theme identifier from the document-level metadata block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Deck title from the document-level metadata block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// `fonts.sans` from the document-level metadata block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_sans: Option<String>,

    /// `fonts.mono` from the document-level metadata block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_mono: Option<String>,

    /// `themeConfig.primary` from the document-level metadata block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,

    /// Non-empty slides in document order.
    #[serde(default)]
    pub slides: Vec<SlideRecord>,
}

impl DeckMetadata {
    /// Create an empty deck with no configuration and no slides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slide, keeping document order.
    pub fn add_slide(&mut self, slide: SlideRecord) {
        self.slides.push(slide);
    }

    /// Number of emitted slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Look up a slide by its 1-based index.
    pub fn slide(&self, index: usize) -> Option<&SlideRecord> {
        index.checked_sub(1).and_then(|i| self.slides.get(i))
    }

    /// Slides carrying a scribble decoration.
    pub fn scribble_slides(&self) -> impl Iterator<Item = &SlideRecord> {
        self.slides.iter().filter(|s| s.has_scribble_decoration)
    }
}

/// One non-empty slide section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideRecord {
    /// 1-based position among emitted slides.
    pub index: usize,

    /// Slide layout directive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,

    /// Slide class directive.
    #[serde(rename = "class", default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// Original section text, including any local metadata block.
    pub raw_content: String,

    /// Heading texts (levels 1-3) in document order.
    #[serde(default)]
    pub headings: Vec<String>,

    /// Content with headings and speaker notes removed.
    pub body_text: String,

    /// Distinct resource references, in discovery order.
    #[serde(default)]
    pub image_refs: Vec<String>,

    /// Whether any reference names a scribble asset.
    #[serde(default)]
    pub has_scribble_decoration: bool,

    /// The first reference naming a scribble asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scribble_file: Option<String>,

    /// All annotation blocks, joined by a blank line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_notes: Option<String>,
}

impl SlideRecord {
    /// Create a new, empty slide with the given index.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    /// Record the slide's references and derive the scribble fields from them.
    pub fn set_image_refs(&mut self, refs: Vec<String>) {
        self.scribble_file = refs.iter().find(|r| r.contains(SCRIBBLE_MARKER)).cloned();
        self.has_scribble_decoration = self.scribble_file.is_some();
        self.image_refs = refs;
    }

    /// Whether the slide carries presenter notes.
    pub fn has_speaker_notes(&self) -> bool {
        self.speaker_notes.is_some()
    }
}

/// Substring identifying a scribble decoration asset.
pub const SCRIBBLE_MARKER: &str = "scribble";
