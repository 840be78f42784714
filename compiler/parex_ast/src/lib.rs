//! Expression tree for parenthesized expressions.
//!
//! This crate defines [`Expr`], the value the parser produces, along with a
//! non-recursive visitor and JSON conversion.

pub mod ast;
pub mod visit;

// Re-export commonly used types
pub use ast::Expr;
pub use visit::{walk, Span, Visitor};

/// Errors raised while converting trees to or from other representations.
#[derive(Debug, thiserror::Error)]
pub enum AstError {
    /// The JSON text could not be read or written.
    #[cfg(feature = "serde")]
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A result type for AST operations.
pub type Result<T> = std::result::Result<T, AstError>;

/// Serializes an expression to compact JSON.
///
/// Literals become `{"type":"literal","value":...}` and groups become
/// `{"type":"group","content":...}`. The output is produced by a visitor, so
/// the depth of the tree does not matter.
///
/// # Example
///
/// ```
/// use parex_ast::{to_json, Expr};
///
/// let json = to_json(&Expr::nested("a", 1)).unwrap();
/// assert_eq!(json, r#"{"type":"group","content":{"type":"literal","value":"a"}}"#);
/// ```
#[cfg(feature = "serde")]
pub fn to_json(expr: &Expr) -> Result<String> {
    let mut writer = JsonWriter::default();
    walk(expr, &mut writer)?;
    Ok(writer.out)
}

/// Serializes an expression to indented JSON through serde.
///
/// Serde recurses once per group, so prefer [`to_json`] for deep trees.
#[cfg(feature = "serde")]
pub fn to_json_pretty(expr: &Expr) -> Result<String> {
    Ok(serde_json::to_string_pretty(expr)?)
}

/// Deserializes an expression from JSON.
///
/// `serde_json` stops at 128 levels of nesting, so deeper documents are
/// rejected with [`AstError::Json`].
#[cfg(feature = "serde")]
pub fn from_json(json: &str) -> Result<Expr> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(feature = "serde")]
#[derive(Default)]
struct JsonWriter {
    out: String,
}

#[cfg(feature = "serde")]
impl Visitor for JsonWriter {
    type Error = AstError;

    fn enter_group(&mut self, _depth: usize) -> Result<()> {
        self.out.push_str(r#"{"type":"group","content":"#);
        Ok(())
    }

    fn visit_literal(&mut self, value: &str, _depth: usize) -> Result<()> {
        self.out.push_str(r#"{"type":"literal","value":"#);
        self.out.push_str(&serde_json::to_string(value)?);
        self.out.push('}');
        Ok(())
    }

    fn leave_group(&mut self, _depth: usize) -> Result<()> {
        self.out.push('}');
        Ok(())
    }
}
