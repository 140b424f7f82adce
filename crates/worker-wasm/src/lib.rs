//! WASM-compatible wrapper for the slide-deck parser.
//!
//! This crate exposes deck parsing to JavaScript for use in Cloudflare
//! Workers and other review tooling running on a JS runtime.

use deck_core::{DeckDigester, DeckMetadata, DeckParser};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Summary counts for a parsed deck.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckStats {
    /// Number of emitted slides.
    pub slide_count: usize,
    /// Slides carrying a scribble decoration.
    pub scribble_slide_count: usize,
    /// Slides with speaker notes.
    pub noted_slide_count: usize,
    /// Distinct references across the whole deck.
    pub distinct_image_refs: usize,
}

/// Parse deck markdown into the full deck model.
///
/// # Arguments
/// * `markdown` - The raw deck source
///
/// # Returns
/// A JavaScript object mirroring `DeckMetadata`; absent fields are `undefined`.
#[wasm_bindgen]
pub fn parse_deck(markdown: &str) -> Result<JsValue, JsValue> {
    let deck = DeckParser::new().parse(markdown);

    serde_wasm_bindgen::to_value(&deck)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Parse deck markdown and return the condensed review digest.
///
/// # Arguments
/// * `markdown` - The raw deck source
/// * `body_limit` - Maximum body-text characters per slide (default: 500)
#[wasm_bindgen]
pub fn digest_deck(markdown: &str, body_limit: Option<usize>) -> Result<JsValue, JsValue> {
    let deck = DeckParser::new().parse(markdown);
    let digester = match body_limit {
        Some(limit) => DeckDigester::new().with_body_limit(limit),
        None => DeckDigester::new(),
    };

    serde_wasm_bindgen::to_value(&digester.digest(&deck))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Parse deck markdown and return summary counts.
#[wasm_bindgen]
pub fn deck_stats(markdown: &str) -> Result<JsValue, JsValue> {
    let stats = deck_stats_impl(&DeckParser::new().parse(markdown));

    serde_wasm_bindgen::to_value(&stats)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn deck_stats_impl(deck: &DeckMetadata) -> DeckStats {
    let mut refs: Vec<&str> = deck
        .slides
        .iter()
        .flat_map(|s| s.image_refs.iter().map(String::as_str))
        .collect();
    refs.sort_unstable();
    refs.dedup();

    DeckStats {
        slide_count: deck.slide_count(),
        scribble_slide_count: deck.scribble_slides().count(),
        noted_slide_count: deck.slides.iter().filter(|s| s.has_speaker_notes()).count(),
        distinct_image_refs: refs.len(),
    }
}
