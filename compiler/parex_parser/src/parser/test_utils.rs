//! Test utilities for the parser

// This module is only used for testing purposes
#![allow(dead_code)]

use parex_lexer::token::{tokens_from_lexemes, Location, Token, TokenType};

/// Creates a token with default location for testing
pub fn create_token(token_type: TokenType, lexeme: &str) -> Token {
    Token::new(token_type, lexeme, Location::start())
}

/// Builds tokens from bare lexemes, laid out on one line
pub fn tokens(lexemes: &[&str]) -> Vec<Token> {
    tokens_from_lexemes(lexemes)
}

/// Tokenizes a string for testing
pub fn tokenize(input: &str) -> Vec<Token> {
    parex_lexer::tokenize(input)
}

/// Builds a source string with `depth` nested groups around `atom`
pub fn nested_source(atom: &str, depth: usize) -> String {
    format!("{}{}{}", "(".repeat(depth), atom, ")".repeat(depth))
}
