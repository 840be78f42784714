use parex_lexer::{Location, Token};

/// An index-based cursor over a slice of tokens.
///
/// The parser never copies or removes tokens. Consuming a token only moves
/// the cursor, so whatever follows a parsed expression is still available
/// through [`TokenStream::remaining`].
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    /// The tokens being parsed
    tokens: &'a [Token],
    /// Current position in the token stream
    position: usize,
}

impl<'a> TokenStream<'a> {
    /// Create a new token stream from a slice of tokens
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenStream {
            tokens,
            position: 0,
        }
    }

    /// Get the current token without advancing
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    /// Get the next token and advance the position
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&'a Token> {
        let token = self.peek();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// The most recently consumed token
    pub fn previous(&self) -> Option<&'a Token> {
        self.position.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    /// Get the remaining tokens as a slice
    pub fn remaining(&self) -> &'a [Token] {
        &self.tokens[self.position..]
    }

    /// Number of tokens consumed so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Check if we're at the end of input
    pub fn is_empty(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// The location just past the last token, used to report end of input
    pub fn end_location(&self) -> Location {
        match self.tokens.last() {
            Some(last) => Location {
                line: last.location.line,
                column: last.location.column + last.lexeme.chars().count(),
                offset: last.end_offset(),
            },
            None => Location::start(),
        }
    }
}
