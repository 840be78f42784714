use parex_lexer::token::tokens_from_lexemes;
use parex_lexer::{tokenize, Lexer, Token, TokenType};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[allow(dead_code)]
fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

#[test]
fn test_unicode_atoms_and_columns() {
    init_test_logger();
    let tokens = tokenize("(名字 ünï)");

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[1].lexeme, "名字");
    assert_eq!(tokens[2].lexeme, "ünï");

    // Columns count characters, offsets count bytes
    assert_eq!(tokens[2].location.column, 5);
    assert_eq!(tokens[2].location.offset, 1 + "名字".len() + 1);
    assert_eq!(tokens[3].location.column, 8);
}

#[test]
fn test_operators_are_atoms() {
    let tokens: Vec<Token> = Lexer::new("(+ 1 -2.5 \"s\")").collect();
    let kinds: Vec<TokenType> = tokens.iter().map(|t| t.token_type).collect();
    assert_eq!(
        kinds,
        vec![
            TokenType::LeftParen,
            TokenType::Atom,
            TokenType::Atom,
            TokenType::Atom,
            TokenType::Atom,
            TokenType::RightParen,
        ]
    );
    assert_eq!(tokens[4].lexeme, "\"s\"");
}

#[test]
fn test_lexer_agrees_with_manual_tokens() {
    let lexed = tokenize("( ( a ) )");
    let manual = tokens_from_lexemes(["(", "(", "a", ")", ")"]);
    assert_eq!(lexed, manual);
}

proptest! {
    #[test]
    fn lexemes_rejoin_to_source_without_whitespace(src in "[a-z() \n\t]{0,64}") {
        let joined: String = tokenize(&src).iter().map(|t| t.lexeme.to_string()).collect();
        let expected: String = src.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn offsets_point_at_lexemes(src in "[a-zé() ]{0,64}") {
        for token in tokenize(&src) {
            prop_assert_eq!(&src[token.location.offset..token.end_offset()], token.lexeme.as_str());
        }
    }
}
