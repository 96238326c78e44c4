//! Evaluation errors.

/// Evaluation failures.
///
/// None of these describe bad user input: the tokenizer and parser reject
/// malformed expressions first, so reaching one points at a defect upstream
/// or at a hand-built postfix sequence.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// An operator found fewer operands than it takes
    #[error("Logic error. {symbol} needs {needed} operand(s) but {available} are available")]
    InsufficientOperands {
        /// Symbol of the operator
        symbol: &'static str,
        /// Operands the operator takes
        needed: usize,
        /// Operands left on the stack
        available: usize,
    },
    /// A unary flag on a binary-only operator
    #[error("Unary operator should be either + or -, found {0}")]
    UnsupportedUnary(&'static str),
    /// A grouping token that the parser should have consumed
    #[error("Unexpected token in postfix sequence: {0}")]
    UnexpectedToken(String),
    /// More than one operand left at the end
    #[error("Logic error. Expression left {0} operands on the stack")]
    LeftoverOperands(usize),
    /// No tokens at all
    #[error("Empty expression")]
    EmptyExpression,
}
