//! Error types for reading deck sources.
//!
//! Parsing itself never fails; these errors belong to the collaborators that
//! hand raw deck text to the parser.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching a deck's raw text.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read the deck file.
    #[error("Failed to read deck: {0}")]
    IoError(#[from] std::io::Error),

    /// The deck file is not valid UTF-8.
    #[error("Deck is not valid UTF-8: {0}")]
    InvalidEncoding(String),

    /// No deck exists under the requested name or path.
    #[error("Deck not found: {0}")]
    DeckNotFound(String),

    /// The deck name cannot be mapped onto a deck directory.
    #[error("Invalid deck name: {0:?}")]
    InvalidDeckName(String),
}
