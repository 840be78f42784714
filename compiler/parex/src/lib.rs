//! Driver routines behind the `parex` command.
//!
//! Each `run_*` function takes the source text and writes to the given output
//! streams, returning the process exit code: 0 on success, 1 when the input
//! does not parse.

use std::io::{self, Write};

use parex_ast::to_json;
use parex_lexer::Lexer;
use parex_parser::parser::{parse_source_with_diagnostics, render_snippet, Diagnostic, ParserConfig};
use serde::Serialize;

/// Exit code for a successful run
pub const EXIT_OK: i32 = 0;
/// Exit code when the input fails to parse
pub const EXIT_PARSE_ERROR: i32 = 1;
/// Exit code for I/O and usage errors
pub const EXIT_IO_ERROR: i32 = 2;

/// JSON shape of a diagnostic for tooling
#[derive(Debug, Serialize)]
pub struct JsonDiagnostic {
    pub severity: String,
    pub message: String,
    pub line: u32,
    pub column: u32,
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl From<&Diagnostic> for JsonDiagnostic {
    fn from(diag: &Diagnostic) -> Self {
        Self {
            severity: format!("{:?}", diag.severity).to_lowercase(),
            message: diag.message.clone(),
            line: diag.span.line,
            column: diag.span.column,
            start: diag.span.start,
            end: diag.span.end,
            help: diag.help.clone(),
        }
    }
}

#[derive(Serialize)]
struct JsonError<'a> {
    error: &'a JsonDiagnostic,
}

/// Parse `source` and print each top-level expression in source form.
pub fn run_parse<W: Write, E: Write>(source: &str, config: &ParserConfig, out: &mut W, err: &mut E) -> i32 {
    match parse_source_with_diagnostics(source, config) {
        Ok(exprs) => {
            for expr in &exprs {
                if let Err(e) = writeln!(out, "{expr}") {
                    return report_io(err, e);
                }
            }
            EXIT_OK
        }
        Err(diag) => {
            log::debug!("parse failed: {}", diag.message);
            let _ = writeln!(err, "{}", render_snippet(&diag, source));
            EXIT_PARSE_ERROR
        }
    }
}

/// Parse `source` and print each top-level expression as one line of JSON.
///
/// Failures are written to `out` as `{"error": {...}}` so tools reading the
/// JSON stream see them too.
pub fn run_json<W: Write, E: Write>(source: &str, config: &ParserConfig, out: &mut W, err: &mut E) -> i32 {
    match parse_source_with_diagnostics(source, config) {
        Ok(exprs) => {
            for expr in &exprs {
                let json = match to_json(expr) {
                    Ok(json) => json,
                    Err(e) => {
                        let _ = writeln!(err, "error: failed to serialize JSON: {e}");
                        return EXIT_IO_ERROR;
                    }
                };
                if let Err(e) = writeln!(out, "{json}") {
                    return report_io(err, e);
                }
            }
            EXIT_OK
        }
        Err(diag) => {
            let diag = JsonDiagnostic::from(&diag);
            match serde_json::to_string(&JsonError { error: &diag }) {
                Ok(json) => {
                    let _ = writeln!(out, "{json}");
                }
                Err(e) => {
                    let _ = writeln!(err, "error: failed to serialize JSON: {e}");
                    return EXIT_IO_ERROR;
                }
            }
            EXIT_PARSE_ERROR
        }
    }
}

/// Print the token stream of `source`, one `line:column  Kind  lexeme` per line.
pub fn run_tokens<W: Write, E: Write>(source: &str, out: &mut W, err: &mut E) -> i32 {
    for token in Lexer::new(source) {
        let line = format!(
            "{}:{}\t{}\t{}",
            token.location.line, token.location.column, token.token_type, token.lexeme
        );
        if let Err(e) = writeln!(out, "{line}") {
            return report_io(err, e);
        }
    }
    EXIT_OK
}

fn report_io<E: Write>(err: &mut E, e: io::Error) -> i32 {
    let _ = writeln!(err, "error: failed to write output: {e}");
    EXIT_IO_ERROR
}
