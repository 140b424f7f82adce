//! Splitting a deck into its document-level metadata block and slide sections.
//!
//! Sections are separated by `---` lines. A `---` line directly followed by
//! lowercase `key: value` directives and another `---` line opens a
//! slide-local metadata block; that block belongs to the slide it introduces
//! and its closing fence does not start another slide. Lines starting with
//! `#` inside a block are YAML comments.

/// Marker line separating slides and fencing metadata blocks.
pub const SEPARATOR: &str = "---";

/// A deck split into sections, before per-slide processing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitDeck {
    /// Text between the fences of the leading metadata block, if the deck
    /// opens with one.
    pub headmatter: Option<String>,

    /// Section texts in document order, empty ones included. The first
    /// section never contains the document-level block.
    pub sections: Vec<String>,
}

/// Split a deck into its document-level metadata block and slide sections.
///
/// Expects `\n` line endings.
pub fn split_deck(markdown: &str) -> SplitDeck {
    let lines: Vec<&str> = markdown.split('\n').collect();

    let (headmatter, mut pos) = match fenced_block_end(&lines, 0, BlockKind::Headmatter) {
        Some(close) => (Some(lines[1..close].join("\n")), close + 1),
        None => (None, 0),
    };

    let mut sections = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    while pos < lines.len() {
        let line = lines[pos];

        if !is_separator(line) {
            current.push(line);
            pos += 1;
            continue;
        }

        sections.push(current.join("\n"));
        current.clear();

        match fenced_block_end(&lines, pos, BlockKind::Local) {
            Some(close) => {
                log::trace!("slide-local metadata block at lines {}..={}", pos + 1, close + 1);
                current.extend_from_slice(&lines[pos..=close]);
                pos = close + 1;
            }
            None => pos += 1,
        }
    }
    sections.push(current.join("\n"));

    SplitDeck {
        headmatter,
        sections,
    }
}

/// Split a section that opens with its own fenced metadata block into
/// `(block, body)`. Sections without one yield `None`.
pub fn split_local_block(section: &str) -> Option<(&str, &str)> {
    let lines: Vec<&str> = section.split('\n').collect();
    let close = fenced_block_end(&lines, 0, BlockKind::Local)?;

    // Byte offsets of the block start and of the closing fence line.
    let start = lines[0].len() + 1;
    let fence = start + lines[1..close].iter().map(|l| l.len() + 1).sum::<usize>();

    let block = section[start..fence].strip_suffix('\n').unwrap_or("");
    let body = section[fence..]
        .split_once('\n')
        .map(|(_, body)| body)
        .unwrap_or("");

    Some((block, body))
}

/// Whether `line` is a bare `---` separator (trailing whitespace allowed).
pub fn is_separator(line: &str) -> bool {
    line.trim_end() == SEPARATOR
}

/// Which fenced block is being looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    /// The block opening the document. Either blank or holding at least one
    /// `key:` line; any identifier counts as a key.
    Headmatter,
    /// A block directly after a separator. Needs at least one lowercase
    /// directive key, and capitalized `Word: text` lines are prose.
    Local,
}

/// Given an opening fence at `open`, find the closing fence of a metadata
/// block. Every line in between must look like metadata.
fn fenced_block_end(lines: &[&str], open: usize, kind: BlockKind) -> Option<usize> {
    if !lines.get(open).is_some_and(|l| is_separator(l)) {
        return None;
    }

    let mut saw_key = false;
    for (offset, line) in lines[open + 1..].iter().enumerate() {
        if is_separator(line) {
            let close = open + 1 + offset;
            let empty = lines[open + 1..close].iter().all(|l| l.trim().is_empty());
            return (saw_key || (kind == BlockKind::Headmatter && empty)).then_some(close);
        }
        match classify(line, kind) {
            MetadataLine::Key => saw_key = true,
            MetadataLine::Continuation => {}
            MetadataLine::Content => return None,
        }
    }

    None
}

enum MetadataLine {
    Key,
    Continuation,
    Content,
}

fn classify(line: &str, kind: BlockKind) -> MetadataLine {
    if line.trim().is_empty()
        || line.starts_with([' ', '\t', '#'])
        || line.starts_with("- ")
    {
        return MetadataLine::Continuation;
    }

    let key_like: fn(&str) -> bool = match kind {
        BlockKind::Headmatter => is_metadata_key,
        BlockKind::Local => is_directive_key,
    };

    match line.split_once(':') {
        Some((key, _)) if key_like(key) => MetadataLine::Key,
        _ => MetadataLine::Content,
    }
}

fn is_metadata_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

/// Slide directives are lowercase-initial ASCII identifiers
/// (`layout`, `class`, `transition`, `clicksStart`, ...).
fn is_directive_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
