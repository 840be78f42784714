use parex_lexer::{Location, Token};
use thiserror::Error;

/// Errors that can occur while parsing an expression
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A group was not closed by `)`.
    ///
    /// `found` is the token that stood where `)` was required, or `None`
    /// when the input ran out first.
    #[error("Expected )")]
    UnbalancedGroup {
        found: Option<Token>,
        opened_at: Location,
    },

    /// An expression was required but no tokens were left
    #[error("Unexpected end of input: expected an expression")]
    UnexpectedEndOfInput,

    /// Nesting exceeded the configured limit
    #[error("Maximum nesting depth of {limit} exceeded")]
    MaxNestingDepthExceeded { limit: usize, at: Location },

    /// Tokens were left over after a complete expression
    #[error("Unexpected trailing token '{}'", .token.lexeme)]
    TrailingTokens { token: Token },
}

impl ParseError {
    /// The source location the error points at, if it has one
    pub fn location(&self) -> Option<Location> {
        match self {
            ParseError::UnbalancedGroup { found, .. } => found.as_ref().map(|t| t.location),
            ParseError::UnexpectedEndOfInput => None,
            ParseError::MaxNestingDepthExceeded { at, .. } => Some(*at),
            ParseError::TrailingTokens { token } => Some(token.location),
        }
    }
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
