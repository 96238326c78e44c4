//! Indented tree rendering.
//!
//! ```text
//! *
//! ├── ^
//! │   ├── 3.0
//! │   └── 2.0
//! └── 2.0
//! ```
//!
//! The right child is drawn before the left one, so for `2*2^3` the exponent
//! side comes first.

use std::fmt;

use crate::ast::ExpressionNode;

const RIGHT_BRANCH: &str = "├── ";
const RIGHT_CONTINUATION: &str = "│   ";
const LEFT_BRANCH: &str = "└── ";
const LEFT_CONTINUATION: &str = "    ";

/// Render a tree as indented lines, one node per line, each ending in `\n`.
///
/// The walk uses an explicit stack, so nesting depth is bounded only by
/// memory.
pub fn render_tree(tree: &ExpressionNode) -> String {
    let mut out = String::new();
    let mut pending: Vec<(&ExpressionNode, String, String)> =
        vec![(tree, String::new(), String::new())];

    while let Some((node, prefix, children_prefix)) = pending.pop() {
        out.push_str(&prefix);
        out.push_str(&node.label);
        out.push('\n');
        if node.is_leaf() {
            continue;
        }

        // pushed first, popped after the whole right subtree
        if let Some(left) = &node.left {
            pending.push((
                left,
                format!("{children_prefix}{LEFT_BRANCH}"),
                format!("{children_prefix}{LEFT_CONTINUATION}"),
            ));
        }
        if let Some(right) = &node.right {
            pending.push((
                right,
                format!("{children_prefix}{RIGHT_BRANCH}"),
                format!("{children_prefix}{RIGHT_CONTINUATION}"),
            ));
        }
    }

    out
}

impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_tree(self))
    }
}
