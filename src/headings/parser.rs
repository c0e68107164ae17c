use lazy_static::lazy_static;
use regex::Regex;

use crate::toc::types::Heading;
use crate::utils::error::{BoxResult, TocError};

lazy_static! {
    static ref HEADING_REGEX: Regex = Regex::new(
        r#"<h([1-6])([^>]*)>(.*?)</h[1-6]>"#
    ).unwrap();

    static ref ID_REGEX: Regex = Regex::new(r#"id=["']([^"']+)["']"#).unwrap();

    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Extract heading records from rendered HTML, in document order.
///
/// The anchor is taken from the heading's `id` attribute when present,
/// otherwise derived by slugifying the heading text.
pub fn extract_headings(html: &str) -> BoxResult<Vec<Heading>> {
    let mut headings = Vec::new();

    for cap in HEADING_REGEX.captures_iter(html) {
        let depth: usize = cap[1]
            .parse()
            .map_err(|e| TocError::Headings(format!("bad heading level: {}", e)))?;

        let value = strip_html_tags(&cap[3]);

        let id = match ID_REGEX.captures(&cap[2]) {
            Some(id_cap) => id_cap[1].to_string(),
            None => slug::slugify(&value),
        };

        headings.push(Heading::new(depth, value, format!("#{}", id)));
    }

    Ok(headings)
}

/// Strip HTML tags from text
fn strip_html_tags(text: &str) -> String {
    TAG_REGEX.replace_all(text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_headings_with_ids() {
        let html = r#"
            <h1 id="intro">Introduction</h1>
            <p>Some text</p>
            <h2 id="chapter-1">Chapter 1</h2>
            <h3 id="section-1-1">Section 1.1</h3>
        "#;

        let headings = extract_headings(html).unwrap();
        assert_eq!(headings.len(), 3);
        assert_eq!(headings[0], Heading::new(1, "Introduction", "#intro"));
        assert_eq!(headings[1], Heading::new(2, "Chapter 1", "#chapter-1"));
        assert_eq!(headings[2], Heading::new(3, "Section 1.1", "#section-1-1"));
    }

    #[test]
    fn test_missing_id_falls_back_to_slug() {
        let html = "<h2>Getting Started</h2>";

        let headings = extract_headings(html).unwrap();
        assert_eq!(headings[0].url, "#getting-started");
    }

    #[test]
    fn test_inner_markup_is_stripped() {
        let html = r#"<h2 id="api"><code>render_toc</code> API</h2>"#;

        let headings = extract_headings(html).unwrap();
        assert_eq!(headings[0].value, "render_toc API");
    }

    #[test]
    fn test_document_order_is_preserved() {
        let html = concat!(
            "<h2 id=\"b\">B</h2>",
            "<h1 id=\"a\">A</h1>",
            "<h3 id=\"c\">C</h3>"
        );

        let headings = extract_headings(html).unwrap();
        let depths: Vec<usize> = headings.iter().map(|h| h.depth).collect();
        assert_eq!(depths, vec![2, 1, 3]);
    }

    #[test]
    fn test_no_headings() {
        let headings = extract_headings("<p>prose only</p>").unwrap();
        assert!(headings.is_empty());
    }
}
