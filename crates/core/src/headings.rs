//! Heading extraction and body-text derivation.

use regex::Regex;
use std::sync::LazyLock;

/// ATX heading of level 1-3 with non-blank text.
static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,3}[ \t]+(\S.*)$").unwrap());

/// Heading texts (levels 1-3) in document order, duplicates kept.
pub fn extract_headings(content: &str) -> Vec<String> {
    HEADING_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end().to_string())
        .collect()
}

/// Content with every heading line blanked, trimmed.
pub fn body_text(content: &str) -> String {
    HEADING_REGEX.replace_all(content, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        let headings = extract_headings("# One\n## Two\n### Three\n#### Four\n##### Five");

        assert_eq!(headings, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_duplicates_preserved() {
        let headings = extract_headings("# Agenda\ntext\n# Agenda");

        assert_eq!(headings, vec!["Agenda", "Agenda"]);
    }

    #[test]
    fn test_marker_needs_space_and_text() {
        let headings = extract_headings("#hashtag\n#   \n  # indented\n#\tTabbed  ");

        assert_eq!(headings, vec!["Tabbed"]);
    }

    #[test]
    fn test_body_text_removes_headings() {
        let body = body_text("# Hello\n\nBody text\n## Sub\nMore\n#### Deep");

        assert_eq!(body, "Body text\n\nMore\n#### Deep");
    }

    #[test]
    fn test_body_text_of_headings_only() {
        assert_eq!(body_text("# Only\n## Headings"), "");
    }
}
