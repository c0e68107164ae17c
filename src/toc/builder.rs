use crate::toc::types::{Heading, TocNode};

/// Group a flat, filtered heading sequence into a forest of nodes rooted at
/// `depth`.
///
/// Single pass with a cursor: a heading at exactly the current depth becomes
/// a sibling, and the run of strictly deeper headings that follows it is
/// grouped recursively at `depth + 1` to form its children. A heading that
/// does not match the current depth is skipped, so a document that jumps
/// levels (h2 straight to h4) drops the orphaned deeper heading instead of
/// reparenting it. Never fails; malformed sequences degrade to dropped
/// nodes.
pub fn build_tree(headings: &[Heading], depth: usize) -> Vec<TocNode> {
    let mut nodes = Vec::new();
    let mut cursor = 0;

    while cursor < headings.len() {
        let heading = &headings[cursor];

        if heading.depth != depth {
            cursor += 1;
            continue;
        }

        let run_start = cursor + 1;
        let mut run_end = run_start;
        while run_end < headings.len() && headings[run_end].depth > depth {
            run_end += 1;
        }

        let mut node = TocNode::new(heading.clone());
        node.children = build_tree(&headings[run_start..run_end], depth + 1);
        nodes.push(node);

        cursor = run_end;
    }

    nodes
}
