//! Speaker-note extraction.
//!
//! Notes are HTML comments (`<!-- ... -->`) inside a slide. Matching is lazy
//! and non-nested: each `<!--` runs to the nearest following `-->`.

use regex::Regex;
use std::sync::LazyLock;

/// Regex matching one annotation block, possibly spanning lines.
static NOTE_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--(.*?)-->").unwrap());

/// Slide content with its annotation blocks pulled out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteExtraction {
    /// Content with every annotation block removed, trimmed.
    pub clean: String,

    /// Trimmed block texts joined by a blank line, if any block was found.
    pub notes: Option<String>,
}

/// Remove annotation blocks from `content` and collect their text.
pub fn extract_speaker_notes(content: &str) -> NoteExtraction {
    let blocks: Vec<&str> = NOTE_BLOCK_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .collect();

    let clean = NOTE_BLOCK_REGEX.replace_all(content, "");

    NoteExtraction {
        clean: clean.trim().to_string(),
        notes: (!blocks.is_empty()).then(|| blocks.join("\n\n")),
    }
}
