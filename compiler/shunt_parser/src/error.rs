/// Structural errors found while reordering tokens.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `)` with no matching `(` on the operator stack
    #[error("Invalid parenthesis")]
    InvalidParenthesis,
    /// A log bracket without its opening marker or its `log` operator
    #[error("Invalid log: {0}")]
    InvalidLog(&'static str),
}
