//! Binary expression tree built alongside evaluation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One node of an expression tree.
///
/// Binary operators fill both children, unary operators only `right`, and
/// number leaves neither. Trees own their children and never share them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExpressionNode {
    pub label: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub left: Option<Box<ExpressionNode>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub right: Option<Box<ExpressionNode>>,
}

impl ExpressionNode {
    pub fn leaf<S: Into<String>>(label: S) -> Self {
        Self {
            label: label.into(),
            left: None,
            right: None,
        }
    }

    /// A leaf labeled with the text form of `value`.
    pub fn number(value: f64) -> Self {
        Self::leaf(format_number(value))
    }

    pub fn unary<S: Into<String>>(label: S, operand: ExpressionNode) -> Self {
        Self {
            label: label.into(),
            left: None,
            right: Some(Box::new(operand)),
        }
    }

    pub fn binary<S: Into<String>>(label: S, left: ExpressionNode, right: ExpressionNode) -> Self {
        Self {
            label: label.into(),
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children());
        }
        count
    }

    /// Length of the longest root-to-leaf path, counting nodes.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(node.children().map(|child| (child, level + 1)));
        }
        deepest
    }

    fn children(&self) -> impl Iterator<Item = &ExpressionNode> {
        self.left.iter().chain(self.right.iter()).map(|b| &**b)
    }
}

/// Text form of a number as it appears in leaf labels and results.
///
/// Integral values keep a trailing `.0` (`2.0`, `-10.0`); other values use
/// the shortest representation that round-trips.
pub fn format_number(value: f64) -> String {
    format!("{value:?}")
}
