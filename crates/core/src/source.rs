//! Deck sources: where raw deck text comes from.
//!
//! The parser only ever sees text. Sources resolve a deck name to that
//! text; the local source reads `decks/<name>/slides.md` under a root.

use crate::error::{Error, Result};
use regex::Regex;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Directory holding one sub-directory per deck.
pub const DECKS_DIR: &str = "decks";

/// File name of a deck's source inside its directory.
pub const DECK_FILE: &str = "slides.md";

/// Regex matching a repository path to a deck source file.
static DECK_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|/)decks/([^/]+)/slides\.md$").unwrap());

/// Anything that can produce a deck's raw markdown from its name.
pub trait DeckSource {
    /// Fetch the raw markdown of the named deck.
    fn fetch(&self, deck: &str) -> Result<String>;
}

/// Deck source backed by a local checkout.
#[derive(Debug, Clone)]
pub struct LocalDeckSource {
    root: PathBuf,
}

impl LocalDeckSource {
    /// Create a source reading decks under `root/decks`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the named deck's source file.
    pub fn deck_path(&self, deck: &str) -> Result<PathBuf> {
        validate_deck_name(deck)?;
        Ok(self.root.join(DECKS_DIR).join(deck).join(DECK_FILE))
    }
}

impl DeckSource for LocalDeckSource {
    fn fetch(&self, deck: &str) -> Result<String> {
        let path = self.deck_path(deck)?;
        log::debug!("Reading deck '{}' from {}", deck, path.display());
        read_deck_file(&path)
    }
}

/// Read a deck file, requiring UTF-8 content.
pub fn read_deck_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::DeckNotFound(path.display().to_string()),
        _ => Error::IoError(e),
    })?;

    String::from_utf8(bytes).map_err(|e| {
        log::warn!("{} is not valid UTF-8", path.display());
        Error::InvalidEncoding(format!("{}: {}", path.display(), e.utf8_error()))
    })
}

/// Deck name from a repository path like `decks/<name>/slides.md`.
pub fn deck_name_from_path(path: &str) -> Option<&str> {
    DECK_PATH_REGEX
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn validate_deck_name(deck: &str) -> Result<()> {
    let invalid = deck.is_empty()
        || deck == "."
        || deck == ".."
        || deck.contains(['/', '\\']);

    if invalid {
        return Err(Error::InvalidDeckName(deck.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_deck_name_from_path() {
        assert_eq!(deck_name_from_path("decks/launch/slides.md"), Some("launch"));
        assert_eq!(
            deck_name_from_path("site/decks/q3-review/slides.md"),
            Some("q3-review")
        );
        assert_eq!(deck_name_from_path("decks/launch/notes.md"), None);
        assert_eq!(deck_name_from_path("decks/a/b/slides.md"), None);
        assert_eq!(deck_name_from_path("mydecks/launch/slides.md"), None);
    }

    #[test]
    fn test_invalid_deck_names() {
        let source = LocalDeckSource::new("/tmp");

        for name in ["", ".", "..", "a/b", "..\\x"] {
            assert!(matches!(
                source.deck_path(name),
                Err(Error::InvalidDeckName(_))
            ));
        }
    }

    #[test]
    fn test_deck_path_layout() {
        let source = LocalDeckSource::new("/repo");

        assert_eq!(
            source.deck_path("launch").unwrap(),
            PathBuf::from("/repo/decks/launch/slides.md")
        );
    }

    #[test]
    fn test_fetch_local_deck() {
        let root = tempdir().unwrap();
        let dir = root.path().join(DECKS_DIR).join("demo");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(DECK_FILE), "# Hello").unwrap();

        let source = LocalDeckSource::new(root.path());
        assert_eq!(source.fetch("demo").unwrap(), "# Hello");
        assert!(matches!(source.fetch("missing"), Err(Error::DeckNotFound(_))));
    }

    #[test]
    fn test_invalid_utf8_is_reported() {
        let root = tempdir().unwrap();
        let path = root.path().join("bad.md");
        fs::write(&path, [0x23, 0x20, 0xFF, 0xFE]).unwrap();

        assert!(matches!(
            read_deck_file(&path),
            Err(Error::InvalidEncoding(_))
        ));
    }
}
