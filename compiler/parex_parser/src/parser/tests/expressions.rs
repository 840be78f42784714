use crate::parser::test_utils::{nested_source, tokenize, tokens};
use crate::parser::*;
use crate::tests::init_test_logger;
use parex_ast::Expr;
use pretty_assertions::assert_eq;

#[test]
fn test_single_literal() {
    init_test_logger();
    let toks = tokens(&["a"]);
    let mut stream = TokenStream::new(&toks);
    assert_eq!(parse_expression(&mut stream).unwrap(), Expr::literal("a"));
    assert!(stream.is_empty());
}

#[test]
fn test_single_group() {
    let toks = tokens(&["(", "a", ")"]);
    let mut stream = TokenStream::new(&toks);
    assert_eq!(
        parse_expression(&mut stream).unwrap(),
        Expr::group(Expr::literal("a"))
    );
    assert!(stream.is_empty());
}

#[test]
fn test_double_group() {
    let toks = tokens(&["(", "(", "a", ")", ")"]);
    let mut stream = TokenStream::new(&toks);
    let expr = parse_expression(&mut stream).unwrap();
    assert_eq!(expr, Expr::group(Expr::group(Expr::literal("a"))));
    assert_eq!(expr.depth(), 2);
}

#[test]
fn test_missing_close_is_unbalanced() {
    let toks = tokens(&["(", "a"]);
    let mut stream = TokenStream::new(&toks);
    let err = parse_expression(&mut stream).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnbalancedGroup {
            found: None,
            opened_at: toks[0].location,
        }
    );
    assert_eq!(err.to_string(), "Expected )");
}

#[test]
fn test_wrong_closing_token_is_unbalanced() {
    let toks = tokens(&["(", "a", "b"]);
    let mut stream = TokenStream::new(&toks);
    match parse_expression(&mut stream) {
        Err(ParseError::UnbalancedGroup {
            found: Some(token),
            opened_at,
        }) => {
            assert_eq!(token.lexeme, "b");
            assert_eq!(opened_at, toks[0].location);
        }
        other => panic!("expected unbalanced group, got {other:?}"),
    }
}

#[test]
fn test_outer_group_left_open() {
    let toks = tokens(&["(", "(", "a", ")"]);
    let mut stream = TokenStream::new(&toks);
    let err = parse_expression(&mut stream).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnbalancedGroup {
            found: None,
            opened_at: toks[0].location,
        }
    );
}

#[test]
fn test_empty_input() {
    let mut stream = TokenStream::new(&[]);
    assert_eq!(
        parse_expression(&mut stream),
        Err(ParseError::UnexpectedEndOfInput)
    );
}

#[test]
fn test_group_without_body() {
    // "(" alone asks for an inner expression first
    let toks = tokens(&["("]);
    let mut stream = TokenStream::new(&toks);
    assert_eq!(
        parse_expression(&mut stream),
        Err(ParseError::UnexpectedEndOfInput)
    );
}

#[test]
fn test_empty_group_treats_close_as_literal() {
    // "()" reads ")" as the inner literal and then runs out
    let toks = tokens(&["(", ")"]);
    let mut stream = TokenStream::new(&toks);
    assert!(matches!(
        parse_expression(&mut stream),
        Err(ParseError::UnbalancedGroup { found: None, .. })
    ));

    let toks = tokens(&["(", ")", ")"]);
    let mut stream = TokenStream::new(&toks);
    assert_eq!(
        parse_expression(&mut stream).unwrap(),
        Expr::group(Expr::literal(")"))
    );
}

#[test]
fn test_leading_close_is_a_literal() {
    let toks = tokens(&[")"]);
    let mut stream = TokenStream::new(&toks);
    assert_eq!(parse_expression(&mut stream).unwrap(), Expr::literal(")"));
}

#[test]
fn test_trailing_tokens_are_untouched() {
    let toks = tokens(&["(", "a", ")", "b", ")"]);
    let mut stream = TokenStream::new(&toks);
    parse_expression(&mut stream).unwrap();
    assert_eq!(stream.position(), 3);
    assert_eq!(stream.remaining(), &toks[3..]);
}

#[test]
fn test_parse_group_after_open() {
    let toks = tokens(&["(", "(", "x", ")", ")"]);
    let mut stream = TokenStream::new(&toks);
    stream.next();
    let expr = parse_group(&mut stream).unwrap();
    assert_eq!(expr, Expr::nested("x", 2));
    assert!(stream.is_empty());
}

#[test]
fn test_parse_all() {
    let toks = tokenize("a (b) ((c))");
    let mut stream = TokenStream::new(&toks);
    let exprs = parse_all(&mut stream).unwrap();
    assert_eq!(
        exprs,
        vec![Expr::literal("a"), Expr::nested("b", 1), Expr::nested("c", 2)]
    );
    assert!(parse_all(&mut TokenStream::new(&[])).unwrap().is_empty());
}

#[test]
fn test_parse_single_rejects_trailing() {
    let toks = tokenize("(a) b");
    let mut stream = TokenStream::new(&toks);
    let err = parse_single(&mut stream).unwrap_err();
    assert_eq!(
        err,
        ParseError::TrailingTokens {
            token: toks[3].clone()
        }
    );
}

#[test]
fn test_depth_limit() {
    let parser = Parser::new(ParserConfig::default().with_max_depth(Some(2)));
    let toks = tokenize(&nested_source("a", 2));
    assert_eq!(
        parser.parse_expression(&mut TokenStream::new(&toks)).unwrap().depth(),
        2
    );

    let toks = tokenize(&nested_source("a", 3));
    let err = parser.parse_expression(&mut TokenStream::new(&toks)).unwrap_err();
    assert_eq!(
        err,
        ParseError::MaxNestingDepthExceeded {
            limit: 2,
            at: toks[2].location,
        }
    );
}

#[test]
fn test_zero_depth_limit_allows_literals_only() {
    let parser = Parser::new(ParserConfig::default().with_max_depth(Some(0)));
    let toks = tokens(&["a"]);
    assert!(parser.parse_expression(&mut TokenStream::new(&toks)).is_ok());
    let toks = tokens(&["(", "a", ")"]);
    assert!(matches!(
        parser.parse_expression(&mut TokenStream::new(&toks)),
        Err(ParseError::MaxNestingDepthExceeded { limit: 0, .. })
    ));
}

#[test]
fn test_parse_tokens_respects_allow_trailing() {
    let toks = tokenize("a b");
    let strict = Parser::new(ParserConfig::default());
    assert!(matches!(
        strict.parse_tokens(&toks),
        Err(ParseError::TrailingTokens { .. })
    ));

    let lenient = Parser::new(ParserConfig::default().with_allow_trailing(true));
    assert_eq!(
        lenient.parse_tokens(&toks).unwrap(),
        vec![Expr::literal("a"), Expr::literal("b")]
    );
}

#[test]
fn test_very_deep_nesting_without_limit() {
    let depth = 100_000;
    let toks = tokenize(&nested_source("deep", depth));
    let mut stream = TokenStream::new(&toks);
    let expr = parse_expression(&mut stream).unwrap();
    assert_eq!(expr.depth(), depth);
    assert_eq!(expr.innermost(), "deep");
    assert!(stream.is_empty());
}
