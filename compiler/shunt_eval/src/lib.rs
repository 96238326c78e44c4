//! Postfix evaluation for shunt expressions.
//!
//! [`evaluate`] walks a postfix token sequence once, producing both the
//! numeric result and an [`ExpressionNode`](shunt_ast::ExpressionNode) tree
//! mirroring the computation. Binary results can be memoized through an
//! [`OperationCache`]; the cache only ever saves arithmetic, it never
//! changes a result or the shape of the tree.

#![warn(missing_docs)]

pub mod cache;
pub mod error;
pub mod evaluator;

pub use cache::{EvaluationCache, OperationCache, OperationKey, SharedEvaluationCache, Uncached};
pub use error::EvalError;
pub use evaluator::{evaluate, evaluate_cached, Evaluation};
