//! Raw lexemes recognized by logos.

use logos::Logos;

use crate::error::LexErrorKind;

/// Raw lexemes recognized by the logos lexer.
///
/// These carry no context. The adjacency rules that decide whether a `-` is
/// unary or whether a `)` is legal live in [`Lexer`](crate::Lexer).
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum LogosToken {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token(",")]
    Comma,

    // `log` must be glued to its parenthesis
    #[token("log(")]
    LogOpen,
    // any other use of the letter, including "log" followed by a space
    #[token("l")]
    StrayLetter,

    // Extra dots are swallowed so "1.2.3" is reported as one bad number
    // instead of a number followed by junk.
    #[regex(r"[0-9]+(\.[0-9]*)*", parse_number)]
    Number(f64),
}

fn parse_number(lex: &mut logos::Lexer<LogosToken>) -> Result<f64, LexErrorKind> {
    let slice = lex.slice();
    if slice.bytes().filter(|b| *b == b'.').count() > 1 {
        return Err(LexErrorKind::InvalidFloat);
    }
    // correctly rounded, so "0.3" is the f64 nearest 0.3 and not the
    // digit-by-digit sum 0.30000000000000004
    slice.parse().map_err(|_| LexErrorKind::InvalidFloat)
}
