//! Arithmetic expressions to values and expression trees.
//!
//! The library side ties the stage crates together: [`pipeline`] runs one
//! expression through tokenizer, parser and evaluator, [`source`] and
//! [`sink`] move expressions and outcomes between files, and [`driver`]
//! processes whole batches of files.

pub mod config;
pub mod driver;
pub mod pipeline;
pub mod sink;
pub mod source;

pub use config::OutputMode;
pub use pipeline::{evaluate_expression, evaluate_expression_cached, ShuntError};
pub use shunt_ast::{render_tree, ExpressionNode};
pub use shunt_eval::{EvaluationCache, Evaluation, OperationCache, SharedEvaluationCache, Uncached};
