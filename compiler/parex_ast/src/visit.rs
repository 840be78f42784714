//! Visitor pattern implementation for traversing the expression tree.
//!
//! Traversal is driven by [`walk`], which follows the chain of groups with a
//! loop instead of recursion. A visitor sees every group on the way down, the
//! innermost literal, and every group again on the way back up.

use std::fmt;

use crate::ast::Expr;

/// A visitor for traversing an [`Expr`].
///
/// `depth` is the number of groups enclosing the current position, so the
/// outermost group is entered at depth 1.
pub trait Visitor {
    /// The error a visitor may abort the traversal with.
    type Error;

    /// Called when descending into a group.
    fn enter_group(&mut self, _depth: usize) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called once, for the literal at the bottom of the chain.
    fn visit_literal(&mut self, value: &str, depth: usize) -> Result<(), Self::Error>;

    /// Called when leaving a group, innermost first.
    fn leave_group(&mut self, _depth: usize) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Walks `expr` with `visitor`, stopping at the first error.
pub fn walk<V: Visitor + ?Sized>(expr: &Expr, visitor: &mut V) -> Result<(), V::Error> {
    let mut depth = 0;
    let mut node = expr;
    loop {
        match node {
            Expr::Group { content } => {
                depth += 1;
                visitor.enter_group(depth)?;
                node = content;
            }
            Expr::Literal { value } => {
                visitor.visit_literal(value, depth)?;
                break;
            }
        }
    }
    for level in (1..=depth).rev() {
        visitor.leave_group(level)?;
    }
    Ok(())
}

/// Writes a tree back out as parenthesized source text.
pub struct SourceWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
}

impl<'a, 'b> SourceWriter<'a, 'b> {
    /// Creates a writer targeting `f`.
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self { f }
    }
}

impl Visitor for SourceWriter<'_, '_> {
    type Error = fmt::Error;

    fn enter_group(&mut self, _depth: usize) -> fmt::Result {
        self.f.write_str("(")
    }

    fn visit_literal(&mut self, value: &str, _depth: usize) -> fmt::Result {
        self.f.write_str(value)
    }

    fn leave_group(&mut self, _depth: usize) -> fmt::Result {
        self.f.write_str(")")
    }
}

/// A span in the source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// The starting byte index (inclusive).
    pub start: usize,
    /// The ending byte index (exclusive).
    pub end: usize,
    /// The line number (1-based).
    pub line: u32,
    /// The column number (1-based).
    pub column: u32,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Creates a span that covers both this span and another.
    pub fn to(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: self.line,
            column: self.column,
        }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true for zero-width spans.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Span {
    fn default() -> Self {
        Self {
            start: 0,
            end: 0,
            line: 1,
            column: 1,
        }
    }
}
