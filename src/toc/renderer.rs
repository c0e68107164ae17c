use crate::toc::builder::build_tree;
use crate::toc::filter::filter_headings;
use crate::toc::types::{Heading, TocNode, TocOptions};
use crate::utils::error::BoxResult;

/// Fixed label for the disclosure wrapper
const DISCLOSURE_LABEL: &str = "Table of Contents";

/// Render a heading sequence as a nested table of contents list.
///
/// Runs the full pipeline: filter by depth range and exclusion pattern,
/// group into a tree rooted at `from_heading`, then render to HTML. An
/// input with no surviving headings yields an empty string, with or without
/// the disclosure wrapper.
pub fn render_toc(headings: &[Heading], options: &TocOptions) -> BoxResult<String> {
    let filtered = filter_headings(headings, options)?;
    let tree = build_tree(&filtered, options.from_heading);
    let list = render_tree(&tree, options.from_heading);

    if list.is_empty() {
        return Ok(String::new());
    }

    if options.as_disclosure {
        return Ok(format!(
            "<details open>\n<summary>{}</summary>\n{}</details>\n",
            DISCLOSURE_LABEL, list
        ));
    }

    Ok(list)
}

/// Render a forest of nodes as a nested list, indenting each entry
/// proportionally to its depth below `base_depth`
pub fn render_tree(nodes: &[TocNode], base_depth: usize) -> String {
    if nodes.is_empty() {
        return String::new();
    }

    let mut html = String::from("<ul class=\"table-of-contents\">\n");
    for node in nodes {
        render_node(&mut html, node, base_depth);
    }
    html.push_str("</ul>\n");
    html
}

fn render_node(html: &mut String, node: &TocNode, base_depth: usize) {
    let indent = node.heading.depth.saturating_sub(base_depth);

    if indent == 0 {
        html.push_str("<li>");
    } else {
        html.push_str(&format!("<li style=\"margin-left:{}em\">", indent));
    }

    html.push_str(&format!(
        "<a href=\"{}\">{}</a>",
        html_escape::encode_double_quoted_attribute(&node.heading.url),
        html_escape::encode_text(&node.heading.value)
    ));

    if !node.children.is_empty() {
        html.push_str("\n<ul>\n");
        for child in &node.children {
            render_node(html, child, base_depth);
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</li>\n");
}
