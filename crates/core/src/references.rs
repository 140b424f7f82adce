//! Resource reference extraction.
//!
//! Collects image targets from markdown image syntax, `src` attributes in
//! inline HTML, and CSS `url(...)` values.

use regex::Regex;
use std::sync::LazyLock;

/// Markdown image: `![alt](target "optional title")`.
static MARKDOWN_IMAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"!\[[^\]\n]*\]\(\s*<?([^)\s>]+)>?[^)]*\)"#).unwrap());

/// Quoted `src` attribute.
static SRC_ATTR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"src\s*=\s*["']([^"']+)["']"#).unwrap());

/// CSS `url(...)`, quoted or bare.
static CSS_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"url\(\s*['"]?([^'")\s]+)['"]?\s*\)"#).unwrap());

/// Extract every distinct reference in `content`.
///
/// Markdown images come first, then `src` attributes, then `url()` values,
/// each in document order. Repeats are dropped, keeping the first sighting.
pub fn extract_references(content: &str) -> Vec<String> {
    let mut refs: Vec<String> = Vec::new();

    for regex in [&*MARKDOWN_IMAGE_REGEX, &*SRC_ATTR_REGEX, &*CSS_URL_REGEX] {
        for caps in regex.captures_iter(content) {
            let Some(target) = caps.get(1) else { continue };
            if !refs.iter().any(|r| r == target.as_str()) {
                refs.push(target.as_str().to_string());
            }
        }
    }

    refs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_images() {
        let refs = extract_references("![logo](/logo.png)\n![](./img/chart.svg \"Chart\")");

        assert_eq!(refs, vec!["/logo.png", "./img/chart.svg"]);
    }

    #[test]
    fn test_links_are_not_images() {
        assert!(extract_references("[docs](https://example.com)").is_empty());
    }

    #[test]
    fn test_src_attributes() {
        let refs = extract_references(
            "<img src=\"/a.png\" class=\"w-20\">\n<img src='/b.png'/>\n<video src=\"/c.mp4\">",
        );

        assert_eq!(refs, vec!["/a.png", "/b.png", "/c.mp4"]);
    }

    #[test]
    fn test_css_urls() {
        let refs = extract_references(
            "<div style=\"background: url('/bg.png')\"></div>\n.x { background-image: url(/tile.svg); }",
        );

        assert_eq!(refs, vec!["/bg.png", "/tile.svg"]);
    }

    #[test]
    fn test_discovery_order_is_by_category() {
        let refs = extract_references(
            "<div style=\"background: url(/css.png)\"></div>\n<img src=\"/html.png\">\n![x](/md.png)",
        );

        assert_eq!(refs, vec!["/md.png", "/html.png", "/css.png"]);
    }

    #[test]
    fn test_duplicates_collapsed() {
        let refs = extract_references("![a](/same.png)\n![b](/same.png)\n<img src=\"/same.png\">");

        assert_eq!(refs, vec!["/same.png"]);
    }

    #[test]
    fn test_no_references() {
        assert!(extract_references("# Just text\n\nNothing here.").is_empty());
        assert!(extract_references("").is_empty());
    }
}
