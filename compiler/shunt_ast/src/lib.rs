//! Expression tree for shunt arithmetic expressions.
//!
//! This crate defines the binary tree the evaluator builds while it computes
//! a value, along with a deterministic text rendering of that tree.

pub mod ast;
pub mod printer;

// Re-export commonly used types
pub use ast::{format_number, ExpressionNode};
pub use printer::render_tree;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A result type for tree serialization.
#[cfg(feature = "serde")]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Serializes a tree to a pretty-printed JSON string.
///
/// # Example
///
/// ```
/// use shunt_ast::{to_json, ExpressionNode};
///
/// let tree = ExpressionNode::unary("-", ExpressionNode::number(10.0));
/// let json = to_json(&tree).unwrap();
///
/// assert!(json.contains(r#""label": "-""#));
/// assert!(json.contains(r#""label": "10.0""#));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes a tree from a JSON string.
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}
