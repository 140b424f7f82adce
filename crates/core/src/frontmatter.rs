//! Key/value lookups over a metadata block.
//!
//! This is a deliberately narrow, line-oriented grammar rather than a YAML
//! parser: unindented `key: value` scalars, and `child: value` lines nested
//! one level under a `parent:` line. Anything else is ignored, so lookups
//! never fail; they just come back empty.

/// A metadata block, without its `---` fences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    block: &'a str,
}

impl<'a> Frontmatter<'a> {
    /// Wrap the text between a block's fences.
    pub fn new(block: &'a str) -> Self {
        Self { block }
    }

    /// The raw block text.
    pub fn as_str(&self) -> &'a str {
        self.block
    }

    /// Look up an unindented `key: value` line.
    ///
    /// Returns `None` when the key is missing or has no inline value (a
    /// parent line like `fonts:` is not a scalar).
    pub fn value(&self, key: &str) -> Option<String> {
        self.block
            .lines()
            .filter(|line| !starts_indented(line))
            .find_map(|line| inline_value(line, key))
    }

    /// Look up `child` nested one level under a `parent:` line.
    ///
    /// The parent must have no inline value. Its block is the contiguous run
    /// of indented (or blank) lines following it.
    pub fn nested_value(&self, parent: &str, child: &str) -> Option<String> {
        let mut lines = self.block.lines();

        lines.by_ref().find(|line| {
            !starts_indented(line)
                && key_rest(line, parent).is_some_and(|rest| rest.trim().is_empty())
        })?;

        lines
            .take_while(|line| line.trim().is_empty() || starts_indented(line))
            .filter(|line| starts_indented(line))
            .find_map(|line| inline_value(line.trim_start(), child))
    }
}

fn starts_indented(line: &str) -> bool {
    line.starts_with(|c: char| c == ' ' || c == '\t')
}

/// If `line` is `key:` (exact key), return the text after the colon.
fn key_rest<'l>(line: &'l str, key: &str) -> Option<&'l str> {
    line.strip_prefix(key)?.strip_prefix(':')
}

fn inline_value(line: &str, key: &str) -> Option<String> {
    let value = unquote(key_rest(line, key)?.trim());
    (!value.is_empty()).then(|| value.to_string())
}

/// Strip one leading and one trailing quote character, independently.
fn unquote(value: &str) -> &str {
    let value = value
        .strip_prefix(|c: char| c == '"' || c == '\'')
        .unwrap_or(value);
    let value = value
        .strip_suffix(|c: char| c == '"' || c == '\'')
        .unwrap_or(value);
    value.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADMATTER: &str = "theme: daemon\n\
        title: 'Quarterly Update'\n\
        fonts:\n  sans: \"Inter\"\n  mono: Fira Code\n\
        themeConfig:\n\n  primary: '#FF5733'\n\
        layout: cover";

    #[test]
    fn test_top_level_values() {
        let fm = Frontmatter::new(HEADMATTER);

        assert_eq!(fm.value("theme"), Some("daemon".to_string()));
        assert_eq!(fm.value("title"), Some("Quarterly Update".to_string()));
        assert_eq!(fm.value("layout"), Some("cover".to_string()));
        assert_eq!(fm.value("class"), None);
    }

    #[test]
    fn test_nested_values() {
        let fm = Frontmatter::new(HEADMATTER);

        assert_eq!(fm.nested_value("fonts", "sans"), Some("Inter".to_string()));
        assert_eq!(
            fm.nested_value("fonts", "mono"),
            Some("Fira Code".to_string())
        );
        assert_eq!(
            fm.nested_value("themeConfig", "primary"),
            Some("#FF5733".to_string())
        );
        assert_eq!(fm.nested_value("fonts", "serif"), None);
        assert_eq!(fm.nested_value("colors", "primary"), None);
    }

    #[test]
    fn test_parent_line_is_not_a_scalar() {
        let fm = Frontmatter::new(HEADMATTER);

        assert_eq!(fm.value("fonts"), None);
        assert_eq!(fm.value("themeConfig"), None);
    }

    #[test]
    fn test_nested_keys_are_not_top_level() {
        let fm = Frontmatter::new("fonts:\n  sans: Inter");

        assert_eq!(fm.value("sans"), None);
    }

    #[test]
    fn test_key_prefix_does_not_match() {
        // `theme` must not pick up `themeConfig`
        let fm = Frontmatter::new("themeConfig: x\ntitles: y");

        assert_eq!(fm.value("theme"), None);
        assert_eq!(fm.value("title"), None);
    }

    #[test]
    fn test_nested_block_ends_at_next_top_level_key() {
        let fm = Frontmatter::new("fonts:\n  sans: Inter\ntitle: Demo\n  mono: Stray");

        assert_eq!(fm.nested_value("fonts", "sans"), Some("Inter".to_string()));
        assert_eq!(fm.nested_value("fonts", "mono"), None);
    }

    #[test]
    fn test_parent_with_inline_value_has_no_children() {
        let fm = Frontmatter::new("fonts: none\n  sans: Inter");

        assert_eq!(fm.nested_value("fonts", "sans"), None);
    }

    #[test]
    fn test_empty_and_malformed_blocks() {
        assert_eq!(Frontmatter::new("").value("title"), None);
        assert_eq!(Frontmatter::default().nested_value("fonts", "sans"), None);

        let fm = Frontmatter::new("::::\n- item\ntitle:\nnot yaml at all\ntitle:   Demo  ");
        assert_eq!(fm.value("title"), Some("Demo".to_string()));
    }

    #[test]
    fn test_quote_stripping() {
        let fm = Frontmatter::new("a: \"x\"\nb: 'y'\nc: \"unbalanced\nd: ''");

        assert_eq!(fm.value("a"), Some("x".to_string()));
        assert_eq!(fm.value("b"), Some("y".to_string()));
        assert_eq!(fm.value("c"), Some("unbalanced".to_string()));
        assert_eq!(fm.value("d"), None);
    }

    #[test]
    fn test_flow_and_multiline_yaml_not_interpreted() {
        // Flow mappings and block scalars are outside the grammar
        let fm = Frontmatter::new("fonts: { sans: Inter }\ntitle: |\n  Long title");

        assert_eq!(fm.nested_value("fonts", "sans"), None);
        assert_eq!(fm.value("title"), Some("|".to_string()));
    }
}
