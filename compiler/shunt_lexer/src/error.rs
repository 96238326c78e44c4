//! Lexical errors.

/// What went wrong while tokenizing.
///
/// This doubles as the error type of the raw [`LogosToken`](crate::LogosToken)
/// lexer, where unrecognized input maps to the default variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, thiserror::Error)]
pub enum LexErrorKind {
    /// `*`, `/` or `^` without an operand on one side
    #[error("Binary operator needs two operands")]
    MissingOperand,
    /// A unary `+`/`-` directly after another unary operator
    #[error("Cannot have two consecutive unary operators")]
    ConsecutiveUnary,
    /// `(` directly after a number or a closing parenthesis
    #[error("Does not support implicit multiply. Please add * explicitly")]
    ImplicitMultiplication,
    /// A group still open at end of input
    #[error("Unbalanced parenthesis")]
    UnbalancedParenthesis,
    /// `)` without an open group, or closing an empty group
    #[error("Invalid parenthesis")]
    InvalidParenthesis,
    /// An operator directly before `)`
    #[error("Invalid operators before )")]
    OperatorBeforeClose,
    /// A log bracket closed without its separator
    #[error("Invalid log statement")]
    InvalidLogStatement,
    /// `,` outside a log bracket or a second `,` inside one
    #[error("Invalid comma for the log statement")]
    InvalidSeparator,
    /// A number with more than one `.`
    #[error("Invalid floating point number")]
    InvalidFloat,
    /// Nothing but whitespace
    #[error("Empty expression")]
    EmptyExpression,
    /// A letter sequence that is not `log(`
    #[error("Invalid operator")]
    InvalidOperator,
    /// Any character outside the expression alphabet
    #[default]
    #[error("Invalid input")]
    InvalidInput,
}

/// A lexical error anchored at a byte offset of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at offset {offset}")]
pub struct LexError {
    /// The kind of error
    pub kind: LexErrorKind,
    /// 0-based byte offset of the offending character
    pub offset: usize,
}

impl LexError {
    /// Create a new error.
    pub fn new(kind: LexErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}
