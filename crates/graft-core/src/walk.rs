//! Pre-order traversal of a document forest.

use crate::document::DocumentNode;

/// Visit every node of `roots` depth-first, parents before children,
/// siblings in source order. The callback receives the node and its depth
/// (roots are depth 0).
pub fn walk<'a, F>(roots: &'a [DocumentNode], visit: &mut F)
where
    F: FnMut(&'a DocumentNode, usize),
{
    for root in roots {
        walk_node(root, 0, visit);
    }
}

fn walk_node<'a, F>(node: &'a DocumentNode, depth: usize, visit: &mut F)
where
    F: FnMut(&'a DocumentNode, usize),
{
    visit(node, depth);
    for child in &node.children {
        walk_node(child, depth + 1, visit);
    }
}
