// Integration tests for the public parser API
use parex_ast::{to_json, Expr};
use parex_lexer::tokenize;
use parex_parser::parser::{
    parse_expression, parse_source, parse_source_with_diagnostics, render_snippet, ParseError,
    Parser, ParserConfig, TokenStream,
};
use pretty_assertions::assert_eq;

#[test]
fn test_literal_json() {
    let tokens = tokenize("a");
    let expr = parse_expression(&mut TokenStream::new(&tokens)).unwrap();
    assert_eq!(to_json(&expr).unwrap(), r#"{"type":"literal","value":"a"}"#);
}

#[test]
fn test_group_json() {
    let tokens = tokenize("(a)");
    let expr = parse_expression(&mut TokenStream::new(&tokens)).unwrap();
    assert_eq!(
        to_json(&expr).unwrap(),
        r#"{"type":"group","content":{"type":"literal","value":"a"}}"#
    );
}

#[test]
fn test_source_round_trip_through_display() {
    let exprs = parse_source(" ( ( foo ) ) ", &ParserConfig::default()).unwrap();
    assert_eq!(exprs.len(), 1);
    assert_eq!(exprs[0].to_string(), "((foo))");
}

#[test]
fn test_multiple_expressions_with_allow_trailing() {
    let config = ParserConfig::default().with_allow_trailing(true);
    let exprs = parse_source("a\n(b)\n((c))\n", &config).unwrap();
    let rendered: Vec<String> = exprs.iter().map(Expr::to_string).collect();
    assert_eq!(rendered, vec!["a", "(b)", "((c))"]);
}

#[test]
fn test_default_config_limits_depth() {
    let depth = parex_parser::parser::DEFAULT_MAX_DEPTH + 1;
    let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    assert!(matches!(
        parse_source(&source, &ParserConfig::default()),
        Err(ParseError::MaxNestingDepthExceeded { .. })
    ));
    assert_eq!(
        parse_source(&source, &ParserConfig::unlimited()).unwrap()[0].depth(),
        depth
    );
}

#[test]
fn test_rendered_diagnostic() {
    let source = "(alpha beta)";
    let diag = parse_source_with_diagnostics(source, &ParserConfig::default()).unwrap_err();
    assert_eq!(
        render_snippet(&diag, source),
        "error: Expected )\n --> 1:8\n  |\n1 | (alpha beta)\n  |        ^^^^\n  = help: Found 'beta' where ')' was required to close the group opened at line 1, column 1"
    );
}

#[test]
fn test_parser_reuses_config() {
    let parser = Parser::new(ParserConfig::default().with_max_depth(Some(4)));
    assert_eq!(parser.config().max_depth, Some(4));
    for depth in 0..=4 {
        let tokens = tokenize(&format!("{}a{}", "(".repeat(depth), ")".repeat(depth)));
        let expr = parser.parse_expression(&mut TokenStream::new(&tokens)).unwrap();
        assert_eq!(expr.depth(), depth);
    }
}
