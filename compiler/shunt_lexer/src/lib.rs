//! Lexical analysis for shunt arithmetic expressions.
//!
//! This crate owns the operator table shared by every later stage and the
//! tokenizer that turns expression text into an ordered token sequence,
//! enforcing the adjacency rules for operators, parentheses and the
//! bracketed `log(base, value)` form.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod lexer;
pub mod logos_token;
pub mod operator;
pub mod token;

// Re-export the main types for convenience
pub use error::{LexError, LexErrorKind};
pub use lexer::{tokenize, Lexer};
pub use logos_token::LogosToken;
pub use operator::{executes_before, precedence, Operator, OperatorSpec};
pub use token::Token;
