//! Lexical analysis for parenthesized expressions.
//!
//! This crate converts source text into a stream of [`Token`]s for the parser.
//! Only three kinds of token exist: an opening parenthesis, a closing
//! parenthesis, and an atom (any run of characters that is neither whitespace
//! nor a parenthesis).

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lexer;
pub mod logos_token;
pub mod string_interner;
pub mod token;

// Re-export the main types for convenience
pub use lexer::{tokenize, Lexer};
pub use logos_token::LogosToken;
pub use string_interner::InternedString;
pub use token::{Location, Token, TokenType};
