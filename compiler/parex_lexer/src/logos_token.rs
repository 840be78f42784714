//! Raw token definitions recognized by `logos`.

use logos::Logos;

/// Raw token type used by the logos lexer
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum LogosToken {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Maximal run of non-whitespace, non-parenthesis characters
    #[regex(r"[^\s()]+")]
    Atom,
}
