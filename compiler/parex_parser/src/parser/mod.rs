//! Parser for parenthesized expressions.
//!
//! The grammar has two states. [`parse_expression`] expects an atom or an
//! opening parenthesis; [`parse_group`] expects a complete inner expression
//! followed by `)`. Instead of the two functions calling each other, the
//! parser keeps an explicit stack of open groups: it pushes one entry per `(`
//! while descending, reads the atom, then pops one entry per `)`. Call-stack
//! depth is constant no matter how deeply the input nests.

use log::{debug, trace};
use parex_ast::Expr;
use parex_lexer::{Location, Token};

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod test_utils;
pub mod token_stream;

pub use config::{ParserConfig, DEFAULT_MAX_DEPTH};
pub use diagnostics::{render_snippet, Diagnostic, Severity};
pub use error::{ParseError, ParseResult};
pub use token_stream::TokenStream;

/// A parser bound to a [`ParserConfig`]
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse one expression from the front of `stream`.
    ///
    /// Consumes exactly the tokens of that expression; anything after it is
    /// left in the stream. A leading `)` is not special here and becomes a
    /// literal like any other token.
    pub fn parse_expression(&self, stream: &mut TokenStream<'_>) -> ParseResult<Expr> {
        debug!("parse_expression at token {}", stream.position());
        let first = stream.next().ok_or(ParseError::UnexpectedEndOfInput)?;
        trace!("consumed {first}");
        if first.is_open() {
            self.parse_group(stream)
        } else {
            Ok(Expr::from_token(first))
        }
    }

    /// Parse the body of a group whose `(` has just been consumed, then
    /// require the closing `)`.
    pub fn parse_group(&self, stream: &mut TokenStream<'_>) -> ParseResult<Expr> {
        debug!("parse_group at token {}", stream.position());
        let opened_at = stream
            .previous()
            .map(|token| token.location)
            .unwrap_or_default();
        self.enter(1, opened_at)?;
        self.close_groups(stream, vec![opened_at])
    }

    /// Parse consecutive top-level expressions until the stream is exhausted.
    pub fn parse_all(&self, stream: &mut TokenStream<'_>) -> ParseResult<Vec<Expr>> {
        let mut exprs = Vec::new();
        while !stream.is_empty() {
            exprs.push(self.parse_expression(stream)?);
        }
        debug!("parsed {} top-level expressions", exprs.len());
        Ok(exprs)
    }

    /// Parse exactly one expression and require the stream to be exhausted.
    pub fn parse_single(&self, stream: &mut TokenStream<'_>) -> ParseResult<Expr> {
        let expr = self.parse_expression(stream)?;
        match stream.peek() {
            Some(token) => Err(ParseError::TrailingTokens {
                token: token.clone(),
            }),
            None => Ok(expr),
        }
    }

    /// Parse a token slice according to the configuration: every top-level
    /// expression when trailing input is allowed, exactly one otherwise.
    pub fn parse_tokens(&self, tokens: &[Token]) -> ParseResult<Vec<Expr>> {
        let mut stream = TokenStream::new(tokens);
        if self.config.allow_trailing {
            self.parse_all(&mut stream)
        } else {
            self.parse_single(&mut stream).map(|expr| vec![expr])
        }
    }

    /// Like [`Parser::parse_tokens`], but converts a failure into a
    /// [`Diagnostic`] anchored in the token stream.
    pub fn parse_tokens_with_diagnostics(&self, tokens: &[Token]) -> Result<Vec<Expr>, Diagnostic> {
        self.parse_tokens(tokens).map_err(|err| {
            let eof = TokenStream::new(tokens).end_location();
            Diagnostic::from_parse_error(&err, eof)
        })
    }

    /// Descend through further `(` tokens, read the innermost atom, then
    /// match one `)` for every entry of `open`.
    fn close_groups(&self, stream: &mut TokenStream<'_>, mut open: Vec<Location>) -> ParseResult<Expr> {
        let mut expr = loop {
            let token = stream.next().ok_or(ParseError::UnexpectedEndOfInput)?;
            trace!("consumed {token}");
            if !token.is_open() {
                break Expr::from_token(token);
            }
            open.push(token.location);
            self.enter(open.len(), token.location)?;
        };

        while let Some(opened_at) = open.pop() {
            match stream.next() {
                Some(token) if token.is_close() => {
                    trace!("closed group opened at {opened_at}");
                    expr = Expr::group(expr);
                }
                found => {
                    debug!("unbalanced group opened at {opened_at}");
                    return Err(ParseError::UnbalancedGroup {
                        found: found.cloned(),
                        opened_at,
                    });
                }
            }
        }

        debug!("parsed group of depth {}", expr.depth());
        Ok(expr)
    }

    fn enter(&self, depth: usize, at: Location) -> ParseResult<()> {
        match self.config.max_depth {
            Some(limit) if depth > limit => Err(ParseError::MaxNestingDepthExceeded { limit, at }),
            _ => Ok(()),
        }
    }
}

/// Parse one expression from the front of `tokens` with no nesting limit.
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    Parser::new(ParserConfig::unlimited()).parse_expression(tokens)
}

/// Parse the rest of a group whose `(` was already consumed, with no nesting limit.
pub fn parse_group(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    Parser::new(ParserConfig::unlimited()).parse_group(tokens)
}

/// Parse every top-level expression in `tokens` with no nesting limit.
pub fn parse_all(tokens: &mut TokenStream<'_>) -> ParseResult<Vec<Expr>> {
    Parser::new(ParserConfig::unlimited()).parse_all(tokens)
}

/// Parse exactly one expression, rejecting trailing tokens, with no nesting limit.
pub fn parse_single(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    Parser::new(ParserConfig::unlimited()).parse_single(tokens)
}

/// Tokenize and parse `source` according to `config`.
pub fn parse_source(source: &str, config: &ParserConfig) -> ParseResult<Vec<Expr>> {
    let tokens = parex_lexer::tokenize(source);
    Parser::new(*config).parse_tokens(&tokens)
}

/// Tokenize and parse `source`, reporting failure as a [`Diagnostic`].
pub fn parse_source_with_diagnostics(source: &str, config: &ParserConfig) -> Result<Vec<Expr>, Diagnostic> {
    let tokens = parex_lexer::tokenize(source);
    Parser::new(*config).parse_tokens_with_diagnostics(&tokens)
}

#[cfg(test)]
mod tests;
