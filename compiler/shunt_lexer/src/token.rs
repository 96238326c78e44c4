//! Tokens produced by the tokenizer.

use std::fmt;

use crate::operator::Operator;

/// A single token of an arithmetic expression.
///
/// Numbers and operators are separate variants, so a token can never carry
/// both payloads. Grouping punctuation has its own variants: a parenthesis
/// opened by `log(` is a log bracket, and it closes with a distinct token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal
    Number(f64),
    /// An operator, flagged when it is used in its prefix form
    Operator {
        /// Which operator
        op: Operator,
        /// True for prefix `+`/`-`
        unary: bool,
    },
    /// `(` opening a plain group
    OpenParen,
    /// `)` closing a plain group
    CloseParen,
    /// The `(` of `log(`
    OpenLogBracket,
    /// The `)` closing a log bracket
    CloseLogBracket,
    /// `,` between the two log arguments
    Separator,
}

impl Token {
    /// A binary (not unary-flagged) operator token.
    pub const fn binary(op: Operator) -> Self {
        Token::Operator { op, unary: false }
    }

    /// A unary-flagged operator token.
    pub const fn unary(op: Operator) -> Self {
        Token::Operator { op, unary: true }
    }

    /// Whether this token needs an operand to follow it: any operator or an
    /// open grouping construct.
    pub const fn expects_operand(&self) -> bool {
        matches!(
            self,
            Token::Operator { .. } | Token::OpenParen | Token::OpenLogBracket
        )
    }

    /// Whether this is a unary-flagged operator.
    pub const fn is_unary(&self) -> bool {
        matches!(self, Token::Operator { unary: true, .. })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{n:?}"),
            Token::Operator { op, unary: true } => write!(f, "{op}u"),
            Token::Operator { op, unary: false } => write!(f, "{op}"),
            Token::OpenParen => f.write_str("("),
            Token::CloseParen => f.write_str(")"),
            Token::OpenLogBracket => f.write_str("["),
            Token::CloseLogBracket => f.write_str("]"),
            Token::Separator => f.write_str(","),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expects_operand() {
        assert!(Token::binary(Operator::Mul).expects_operand());
        assert!(Token::unary(Operator::Sub).expects_operand());
        assert!(Token::OpenParen.expects_operand());
        assert!(Token::OpenLogBracket.expects_operand());
        assert!(!Token::Number(1.0).expects_operand());
        assert!(!Token::CloseParen.expects_operand());
        assert!(!Token::CloseLogBracket.expects_operand());
        // a separator is not one of the operand-expecting tokens
        assert!(!Token::Separator.expects_operand());
    }

    #[test]
    fn test_display() {
        let rendered: Vec<String> = [
            Token::Number(2.0),
            Token::unary(Operator::Sub),
            Token::binary(Operator::Log),
            Token::OpenLogBracket,
            Token::Separator,
            Token::CloseLogBracket,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(rendered, ["2.0", "-u", "log", "[", ",", "]"]);
    }
}
