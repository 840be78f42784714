use parex_ast::visit::Span;
use parex_lexer::token::{Location, Token};

use crate::parser::error::ParseError;

/// Severity levels for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
        }
    }
}

/// A user-facing diagnostic describing a problem in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: Span,
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic at a specific token with a custom message
    pub fn at_token<S: Into<String>>(token: &Token, message: S) -> Self {
        Self::at_span(span_from_token(token), message)
    }

    /// Create a diagnostic with an explicit span
    pub fn at_span<S: Into<String>>(span: Span, message: S) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            span,
            help: None,
        }
    }

    /// Attach a help line
    pub fn with_help<S: Into<String>>(mut self, help: S) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Build a diagnostic for a parse failure.
    ///
    /// `eof` is where the input ends; errors caused by running out of tokens
    /// point there.
    pub fn from_parse_error(err: &ParseError, eof: Location) -> Self {
        let message = err.to_string();
        match err {
            ParseError::UnbalancedGroup {
                found: Some(token),
                opened_at,
            } => Diagnostic::at_token(token, message).with_help(format!(
                "Found '{}' where ')' was required to close the group opened at line {}, column {}",
                token.lexeme, opened_at.line, opened_at.column
            )),
            ParseError::UnbalancedGroup {
                found: None,
                opened_at,
            } => Diagnostic::at_span(span_at(eof), message).with_help(format!(
                "Input ended before the group opened at line {}, column {} was closed. Did you forget a ')'?",
                opened_at.line, opened_at.column
            )),
            ParseError::UnexpectedEndOfInput => Diagnostic::at_span(span_at(eof), message)
                .with_help("An expression is an atom or a parenthesized group, e.g. 'a' or '(a)'"),
            ParseError::MaxNestingDepthExceeded { limit, at } => {
                Diagnostic::at_span(Span::new(at.offset, at.offset + 1, at.line as u32, at.column as u32), message)
                    .with_help(format!(
                        "Groups may nest at most {limit} deep. Reduce the nesting or raise the limit"
                    ))
            }
            ParseError::TrailingTokens { token } => Diagnostic::at_token(token, message)
                .with_help("Only one top-level expression is allowed. Wrap the input in a group or allow trailing expressions"),
        }
    }
}

/// Render a diagnostic with the offending source line and a caret underline.
///
/// ```text
/// error: Expected )
///  --> 1:4
///   |
/// 1 | (a b
///   |    ^
///   = help: ...
/// ```
pub fn render_snippet(diag: &Diagnostic, source: &str) -> String {
    let line_no = diag.span.line.max(1) as usize;
    let column = diag.span.column.max(1) as usize;
    let line_text = source.lines().nth(line_no - 1).unwrap_or("");
    let gutter = " ".repeat(line_no.to_string().len());

    let remaining_on_line = line_text.chars().count().saturating_sub(column - 1);
    let width = source
        .get(diag.span.start..diag.span.end)
        .map(|s| s.chars().count())
        .unwrap_or(0)
        .min(remaining_on_line)
        .max(1);

    let mut out = String::new();
    out.push_str(&format!("{}: {}\n", diag.severity.label(), diag.message));
    out.push_str(&format!("{gutter}--> {}:{}\n", line_no, column));
    out.push_str(&format!("{gutter} |\n"));
    out.push_str(&format!("{line_no} | {line_text}\n"));
    out.push_str(&format!(
        "{gutter} | {}{}",
        " ".repeat(column - 1),
        "^".repeat(width)
    ));
    if let Some(help) = &diag.help {
        out.push_str(&format!("\n{gutter} = help: {help}"));
    }
    out
}

/// Build a Span that covers an entire token
fn span_from_token(token: &Token) -> Span {
    Span {
        start: token.location.offset,
        end: token.end_offset(),
        line: token.location.line as u32,
        column: token.location.column as u32,
    }
}

/// A zero-width span at `location`
fn span_at(location: Location) -> Span {
    Span::new(
        location.offset,
        location.offset,
        location.line as u32,
        location.column as u32,
    )
}
