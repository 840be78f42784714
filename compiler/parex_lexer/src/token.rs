use std::fmt;

use crate::string_interner::InternedString;

/// Represents a token's location in the source code.
///
/// This struct tracks the position of a token in the source text, including
/// line and column numbers (1-based) and the byte offset (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Location {
    /// The 1-based line number in the source file
    pub line: usize,
    /// The 1-based column number in the source file
    pub column: usize,
    /// The 0-based byte offset from the start of the source
    pub offset: usize,
}

impl Location {
    /// The location of the first character of a source text
    pub const fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

/// The kind of a token.
///
/// The grammar only distinguishes the two parenthesis markers from
/// everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Any other lexeme
    Atom,
}

impl TokenType {
    /// Classify a raw lexeme
    pub fn of_lexeme(lexeme: &str) -> Self {
        match lexeme {
            "(" => TokenType::LeftParen,
            ")" => TokenType::RightParen,
            _ => TokenType::Atom,
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::LeftParen => "LeftParen",
            TokenType::RightParen => "RightParen",
            TokenType::Atom => "Atom",
        };
        f.write_str(name)
    }
}

/// Represents a token in the source code, including its type, lexeme, and location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The type of the token
    pub token_type: TokenType,
    /// The original source text of the token
    pub lexeme: InternedString,
    /// The location of the token in the source code
    pub location: Location,
}

impl Token {
    /// Creates a new token from a string that can be converted to an InternedString.
    /// This will intern the string if it's not already interned.
    pub fn new<S: Into<InternedString>>(token_type: TokenType, lexeme: S, location: Location) -> Self {
        Self {
            token_type,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// Creates a token from a bare lexeme, deriving its type from the text.
    ///
    /// This is the entry point for callers that bring their own tokenizer.
    pub fn from_lexeme<S: Into<InternedString>>(lexeme: S, location: Location) -> Self {
        let lexeme = lexeme.into();
        Self {
            token_type: TokenType::of_lexeme(lexeme.as_str()),
            lexeme,
            location,
        }
    }

    /// Returns true if this token opens a group
    pub fn is_open(&self) -> bool {
        self.token_type == TokenType::LeftParen
    }

    /// Returns true if this token closes a group
    pub fn is_close(&self) -> bool {
        self.token_type == TokenType::RightParen
    }

    /// Byte offset one past the end of this token
    pub fn end_offset(&self) -> usize {
        self.location.offset + self.lexeme.len()
    }
}

/// Build tokens from a sequence of lexemes.
///
/// Locations are assigned as if the lexemes were written on a single line,
/// separated by one space, so diagnostics line up with `lexemes.join(" ")`.
pub fn tokens_from_lexemes<I, S>(lexemes: I) -> Vec<Token>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut location = Location::start();
    lexemes
        .into_iter()
        .map(|lexeme| {
            let lexeme = lexeme.as_ref();
            let token = Token::from_lexeme(lexeme, location);
            location.offset += lexeme.len() + 1;
            location.column += lexeme.chars().count() + 1;
            token
        })
        .collect()
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}", self.token_type, self.location)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.line, self.column, self.offset)
    }
}
