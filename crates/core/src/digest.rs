//! Condensed deck view handed to automated reviewers.
//!
//! Keeps the structural fields of every slide but truncates body text and
//! replaces speaker notes with a presence flag.

use crate::types::{DeckMetadata, SlideRecord};
use serde::{Deserialize, Serialize};

/// Default maximum body length, in characters.
pub const DEFAULT_BODY_LIMIT: usize = 500;

/// Builds [`DeckDigest`]s from parsed decks.
#[derive(Debug, Clone)]
pub struct DeckDigester {
    /// Maximum number of characters of body text kept per slide.
    body_limit: usize,
}

impl Default for DeckDigester {
    fn default() -> Self {
        Self {
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl DeckDigester {
    /// Create a digester with the default 500-character body limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of body-text characters kept per slide.
    pub fn with_body_limit(mut self, limit: usize) -> Self {
        self.body_limit = limit;
        self
    }

    /// Condense a parsed deck.
    pub fn digest(&self, deck: &DeckMetadata) -> DeckDigest {
        DeckDigest {
            theme: deck.theme.clone(),
            title: deck.title.clone(),
            font_sans: deck.font_sans.clone(),
            font_mono: deck.font_mono.clone(),
            primary_color: deck.primary_color.clone(),
            slides: deck.slides.iter().map(|s| self.digest_slide(s)).collect(),
        }
    }

    fn digest_slide(&self, slide: &SlideRecord) -> SlideDigest {
        SlideDigest {
            index: slide.index,
            layout: slide.layout.clone(),
            class_name: slide.class_name.clone(),
            headings: slide.headings.clone(),
            body_text: truncate_chars(&slide.body_text, self.body_limit).to_string(),
            image_refs: slide.image_refs.clone(),
            has_scribble_decoration: slide.has_scribble_decoration,
            scribble_file: slide.scribble_file.clone(),
            has_speaker_notes: slide.has_speaker_notes(),
        }
    }
}

/// Deck-level configuration plus condensed slides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckDigest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_sans: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_mono: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    pub slides: Vec<SlideDigest>,
}

/// One slide, condensed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideDigest {
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(rename = "class", default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub headings: Vec<String>,
    /// Body text cut to the digester's limit.
    pub body_text: String,
    pub image_refs: Vec<String>,
    pub has_scribble_decoration: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scribble_file: Option<String>,
    pub has_speaker_notes: bool,
}

/// The first `limit` characters of `text`, never splitting a code point.
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
