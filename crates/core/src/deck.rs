//! Deck assembly: splitting, per-slide extraction and metadata resolution.

use crate::frontmatter::Frontmatter;
use crate::headings::{body_text, extract_headings};
use crate::notes::extract_speaker_notes;
use crate::references::extract_references;
use crate::splitter::{split_deck, split_local_block};
use crate::types::{DeckMetadata, SlideRecord};

/// Parser turning deck markdown into a [`DeckMetadata`].
///
/// Holds no state; every call to [`DeckParser::parse`] starts from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeckParser;

impl DeckParser {
    /// Create a new deck parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a deck. Never fails: malformed input just yields fewer fields.
    pub fn parse(&self, markdown: &str) -> DeckMetadata {
        let markdown = markdown.replace("\r\n", "\n");
        let split = split_deck(&markdown);

        let headmatter = split.headmatter.as_deref().map(Frontmatter::new);
        let global = headmatter.unwrap_or_default();

        let mut deck = DeckMetadata {
            theme: global.value("theme"),
            title: global.value("title"),
            font_sans: global.nested_value("fonts", "sans"),
            font_mono: global.nested_value("fonts", "mono"),
            primary_color: global.nested_value("themeConfig", "primary"),
            slides: Vec::new(),
        };

        for section in &split.sections {
            if section.trim().is_empty() {
                log::trace!("skipping empty section");
                continue;
            }

            let index = deck.slide_count() + 1;
            let (local, body) = match split_local_block(section) {
                Some((block, body)) => (Some(Frontmatter::new(block)), body),
                None => (None, section.as_str()),
            };

            // Document-level block wins for the first slide; the two are
            // never merged.
            let directives = match headmatter {
                Some(doc) if index == 1 => Some(doc),
                _ => local,
            };

            deck.add_slide(build_slide(index, section, body, directives));
        }

        log::debug!(
            "parsed deck: {} sections, {} slides, headmatter: {}",
            split.sections.len(),
            deck.slide_count(),
            headmatter.is_some()
        );

        deck
    }
}

/// Parse a deck with a default [`DeckParser`].
pub fn parse_deck(markdown: &str) -> DeckMetadata {
    DeckParser::new().parse(markdown)
}

fn build_slide(
    index: usize,
    raw: &str,
    body: &str,
    directives: Option<Frontmatter<'_>>,
) -> SlideRecord {
    let notes = extract_speaker_notes(body);

    let mut slide = SlideRecord::new(index);
    slide.layout = directives.and_then(|fm| fm.value("layout"));
    slide.class_name = directives.and_then(|fm| fm.value("class"));
    slide.raw_content = raw.to_string();
    slide.headings = extract_headings(&notes.clean);
    slide.body_text = body_text(&notes.clean);
    slide.set_image_refs(extract_references(body));
    slide.speaker_notes = notes.notes;
    slide
}
