//! Lexer for parenthesized expressions built on the `logos` crate.
//! Converts source code into a stream of tokens for the parser.

use logos::Logos;
use std::ops::Range;

use crate::logos_token::LogosToken;
use crate::token::{Location, Token, TokenType};

/// The main lexer struct that holds the state of the lexing process
pub struct Lexer<'a> {
    /// The source code being lexed
    source: &'a str,
    /// The current line number (1-based)
    line: usize,
    /// The current column number (1-based)
    column: usize,
    /// The current byte offset in the source
    offset: usize,
    /// The inner Logos lexer
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            line: 1,
            column: 1,
            offset: 0,
            inner: LogosToken::lexer(source),
        }
    }

    /// Move the tracked position forward to the start of `span`.
    ///
    /// Counts characters rather than bytes so columns stay correct for
    /// multi-byte input. `\r\n` counts as a single line break.
    fn sync_position_to(&mut self, span: &Range<usize>) {
        let text = &self.source[self.offset..span.start];

        let mut iter = text.chars().peekable();
        while let Some(c) = iter.next() {
            match c {
                '\n' => {
                    self.line += 1;
                    self.column = 1;
                }
                '\r' => {
                    if iter.peek() == Some(&'\n') {
                        iter.next();
                    }
                    self.line += 1;
                    self.column = 1;
                }
                _ => self.column += 1,
            }
        }

        self.offset = span.start;
    }

    fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.inner.next()?;
        let span = self.inner.span();
        self.sync_position_to(&span);
        let lexeme = &self.source[span.clone()];

        let token_type = match raw {
            Ok(LogosToken::LParen) => TokenType::LeftParen,
            Ok(LogosToken::RParen) => TokenType::RightParen,
            Ok(LogosToken::Atom) => TokenType::Atom,
            Err(()) => {
                // Every non-whitespace character is covered by a rule, so this
                // only fires if the rules above change.
                #[cfg(feature = "logging")]
                log::warn!("unrecognized input {:?} at {}", lexeme, self.location());
                TokenType::Atom
            }
        };

        let token = Token::new(token_type, lexeme, self.location());
        #[cfg(feature = "logging")]
        log::trace!("lexed {}", token);
        Some(token)
    }
}

/// Tokenize a whole source string
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
