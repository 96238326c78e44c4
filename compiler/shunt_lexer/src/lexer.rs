//! Tokenizer for shunt expressions using the 'logos' crate for raw lexemes.
//!
//! Logos only splits the text. [`Lexer`] decides what each lexeme means from
//! the tokens already produced (a `-` after an operator is unary) and keeps a
//! stack of open groups so that commas, empty groups and unbalanced input are
//! rejected before parsing starts.

use std::ops::Range;

use logos::Logos;

use crate::error::{LexError, LexErrorKind};
use crate::logos_token::LogosToken;
use crate::operator::Operator;
use crate::token::Token;

/// An open grouping construct awaiting its `)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenContext {
    /// A plain `(`
    Plain {
        /// Byte offset of the `(`
        opened_at: usize,
    },
    /// The bracket of `log(`
    LogBracket {
        /// Byte offset of the `(` in `log(`
        opened_at: usize,
        /// Whether the `,` between base and value has been seen
        has_separator: bool,
    },
}

impl ParenContext {
    fn opened_at(&self) -> usize {
        match self {
            ParenContext::Plain { opened_at } | ParenContext::LogBracket { opened_at, .. } => {
                *opened_at
            }
        }
    }
}

/// Stateful tokenizer over one expression.
pub struct Lexer<'a> {
    /// The inner Logos lexer
    inner: logos::Lexer<'a, LogosToken>,
    /// Offset of the last non-whitespace character, if any
    last_offset: Option<usize>,
    /// Open groups, innermost last
    contexts: Vec<ParenContext>,
    /// Tokens produced so far
    tokens: Vec<Token>,
}

/// Tokenize a whole expression.
///
/// All failures abort immediately; no partial token list is returned.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given expression text
    pub fn new(source: &'a str) -> Self {
        let trimmed = source.trim_end();
        let last_offset = trimmed.char_indices().next_back().map(|(i, _)| i);

        Self {
            inner: LogosToken::lexer(source),
            last_offset,
            contexts: Vec::new(),
            tokens: Vec::new(),
        }
    }

    /// Run to the end of input and return the validated token sequence.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(raw) = self.inner.next() {
            let span = self.inner.span();
            let raw = raw.map_err(|kind| LexError::new(kind, span.start))?;
            log::trace!("lexeme {:?} at {:?}", raw, span);
            self.accept(raw, span)?;
        }

        if let Some(open) = self.contexts.last() {
            return Err(LexError::new(
                LexErrorKind::UnbalancedParenthesis,
                open.opened_at(),
            ));
        }
        if self.tokens.is_empty() {
            return Err(LexError::new(LexErrorKind::EmptyExpression, 0));
        }

        log::debug!("tokenized {} tokens", self.tokens.len());
        Ok(self.tokens)
    }

    fn accept(&mut self, raw: LogosToken, span: Range<usize>) -> Result<(), LexError> {
        let at = span.start;
        let token = match raw {
            LogosToken::Star => self.binary_only(Operator::Mul, at)?,
            LogosToken::Slash => self.binary_only(Operator::Div, at)?,
            LogosToken::Caret => self.binary_only(Operator::Pow, at)?,
            LogosToken::Plus => self.plus_minus(Operator::Add, at)?,
            LogosToken::Minus => self.plus_minus(Operator::Sub, at)?,
            LogosToken::LeftParen => self.left_paren(at)?,
            LogosToken::RightParen => self.right_paren(at)?,
            LogosToken::Comma => self.separator(at)?,
            LogosToken::Number(value) => Token::Number(value),
            LogosToken::LogOpen => {
                // the bracket is recorded at the '(' of "log("
                let paren_at = span.end - 1;
                self.contexts.push(ParenContext::LogBracket {
                    opened_at: paren_at,
                    has_separator: false,
                });
                self.tokens.push(Token::binary(Operator::Log));
                Token::OpenLogBracket
            }
            LogosToken::StrayLetter => {
                return Err(LexError::new(LexErrorKind::InvalidOperator, at));
            }
        };
        self.tokens.push(token);
        Ok(())
    }

    /// `*`, `/`, `^`: needs an operand on both sides.
    fn binary_only(&self, op: Operator, at: usize) -> Result<Token, LexError> {
        let missing = LexError::new(LexErrorKind::MissingOperand, at);
        if at == 0 || Some(at) == self.last_offset {
            return Err(missing);
        }
        match self.tokens.last() {
            None => Err(missing),
            Some(prev) if prev.expects_operand() => Err(missing),
            Some(_) => Ok(Token::binary(op)),
        }
    }

    /// `+`, `-`: unary at the start or after anything that expects an operand.
    fn plus_minus(&self, op: Operator, at: usize) -> Result<Token, LexError> {
        let Some(prev) = self.tokens.last() else {
            return Ok(Token::unary(op));
        };
        if !prev.expects_operand() {
            return Ok(Token::binary(op));
        }
        if prev.is_unary() {
            return Err(LexError::new(LexErrorKind::ConsecutiveUnary, at));
        }
        Ok(Token::unary(op))
    }

    fn left_paren(&mut self, at: usize) -> Result<Token, LexError> {
        if matches!(
            self.tokens.last(),
            Some(Token::Number(_) | Token::CloseParen | Token::CloseLogBracket)
        ) {
            return Err(LexError::new(LexErrorKind::ImplicitMultiplication, at));
        }
        self.contexts.push(ParenContext::Plain { opened_at: at });
        Ok(Token::OpenParen)
    }

    fn right_paren(&mut self, at: usize) -> Result<Token, LexError> {
        let Some(open) = self.contexts.last().copied() else {
            return Err(LexError::new(LexErrorKind::InvalidParenthesis, at));
        };
        if matches!(self.tokens.last(), Some(Token::Operator { .. })) {
            return Err(LexError::new(LexErrorKind::OperatorBeforeClose, at));
        }
        // "()" and "log()"
        if open.opened_at() + 1 == at {
            return Err(LexError::new(LexErrorKind::InvalidParenthesis, at));
        }

        match open {
            ParenContext::LogBracket {
                has_separator: false,
                ..
            } => Err(LexError::new(LexErrorKind::InvalidLogStatement, at)),
            ParenContext::LogBracket { .. } => {
                self.contexts.pop();
                Ok(Token::CloseLogBracket)
            }
            ParenContext::Plain { .. } => {
                self.contexts.pop();
                Ok(Token::CloseParen)
            }
        }
    }

    fn separator(&mut self, at: usize) -> Result<Token, LexError> {
        match self.contexts.last_mut() {
            Some(ParenContext::LogBracket { has_separator, .. }) if !*has_separator => {
                *has_separator = true;
                Ok(Token::Separator)
            }
            _ => Err(LexError::new(LexErrorKind::InvalidSeparator, at)),
        }
    }
}
