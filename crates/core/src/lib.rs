//! Slide-deck markdown parser.
//!
//! Turns a markdown deck (a document-level metadata block followed by
//! `---`-separated slides) into a [`DeckMetadata`] that downstream tools can
//! consume without knowing the markdown, metadata or note conventions.

pub mod deck;
pub mod digest;
pub mod error;
pub mod frontmatter;
pub mod headings;
pub mod notes;
pub mod references;
pub mod source;
pub mod splitter;
pub mod types;

pub use deck::{parse_deck, DeckParser};
pub use digest::{DeckDigest, DeckDigester, SlideDigest};
pub use error::{Error, Result};
pub use source::{deck_name_from_path, read_deck_file, DeckSource, LocalDeckSource};
pub use types::{DeckMetadata, SlideRecord};
