//! Shunting-yard reordering of infix tokens into postfix (RPN) order.

use shunt_lexer::operator::executes_before;
use shunt_lexer::{Operator, Token};

use crate::error::ParseError;

/// Convert an infix token sequence into postfix order.
///
/// Grouping markers, `log` and unary operators are pushed as they come; a
/// unary operator is only ever popped later, by a close, a separator, an
/// incoming binary operator it outranks, or the final flush. Binary operators
/// pop whatever executes before them and then wait on the stack.
pub fn parse_to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        log::trace!("token {token}, stack depth {}", stack.len());
        match token {
            Token::Number(_) => output.push(token),

            Token::OpenParen
            | Token::OpenLogBracket
            | Token::Operator {
                op: Operator::Log, ..
            }
            | Token::Operator { unary: true, .. } => stack.push(token),

            Token::CloseParen => loop {
                match stack.pop() {
                    Some(Token::OpenParen) => break,
                    Some(pending) => output.push(pending),
                    None => return Err(ParseError::InvalidParenthesis),
                }
            },

            // flush the base argument, keep the bracket marker
            Token::Separator => {
                while let Some(top) = stack.pop() {
                    if top == Token::OpenLogBracket {
                        stack.push(top);
                        break;
                    }
                    output.push(top);
                }
            }

            Token::CloseLogBracket => {
                loop {
                    match stack.pop() {
                        Some(Token::OpenLogBracket) => break,
                        Some(pending) => output.push(pending),
                        None => return Err(ParseError::InvalidLog("unmatched log bracket")),
                    }
                }
                match stack.pop() {
                    Some(log @ Token::Operator {
                        op: Operator::Log, ..
                    }) => output.push(log),
                    _ => return Err(ParseError::InvalidLog("bracket without log operator")),
                }
            }

            Token::Operator { op, unary: false } => {
                while let Some(&Token::Operator {
                    op: top_op,
                    unary: top_unary,
                }) = stack.last()
                {
                    if !executes_before((top_op, top_unary), (op, false)) {
                        break;
                    }
                    output.extend(stack.pop());
                }
                stack.push(token);
            }
        }
    }

    output.extend(stack.into_iter().rev());
    log::debug!("postfix sequence has {} tokens", output.len());
    Ok(output)
}
