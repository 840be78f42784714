//! The expression tree produced by the parser.
//!
//! A tree is either a literal or a group wrapping exactly one child, so every
//! tree is a chain of groups ending in a literal. The traversals below rely on
//! that shape and never recurse, which keeps arbitrarily deep trees safe to
//! clone, compare, print and drop.

use std::fmt;
use std::mem;

use parex_lexer::Token;

/// A parsed expression.
#[derive(Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "lowercase")
)]
pub enum Expr {
    /// A single token value.
    Literal {
        /// The token's text.
        value: String,
    },
    /// A parenthesized sub-expression.
    Group {
        /// The wrapped expression.
        content: Box<Expr>,
    },
}

impl Expr {
    /// Creates a literal node.
    pub fn literal<S: Into<String>>(value: S) -> Self {
        Expr::Literal {
            value: value.into(),
        }
    }

    /// Creates a literal node from a token's lexeme.
    pub fn from_token(token: &Token) -> Self {
        Expr::literal(token.lexeme.as_str())
    }

    /// Wraps `content` in a group node.
    pub fn group(content: Expr) -> Self {
        Expr::Group {
            content: Box::new(content),
        }
    }

    /// Builds `depth` nested groups around a literal.
    pub fn nested<S: Into<String>>(value: S, depth: usize) -> Self {
        let mut expr = Expr::literal(value);
        for _ in 0..depth {
            expr = Expr::group(expr);
        }
        expr
    }

    /// Returns true for group nodes.
    pub fn is_group(&self) -> bool {
        matches!(self, Expr::Group { .. })
    }

    /// Number of groups enclosing the innermost literal.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut node = self;
        while let Expr::Group { content } = node {
            depth += 1;
            node = content;
        }
        depth
    }

    /// The literal value at the bottom of the chain.
    pub fn innermost(&self) -> &str {
        let mut node = self;
        loop {
            match node {
                Expr::Group { content } => node = content,
                Expr::Literal { value } => return value,
            }
        }
    }

    /// The wrapped expression of a group, or `None` for a literal.
    pub fn content(&self) -> Option<&Expr> {
        match self {
            Expr::Group { content } => Some(content),
            Expr::Literal { .. } => None,
        }
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        Expr::nested(self.innermost(), self.depth())
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.depth() == other.depth() && self.innermost() == other.innermost()
    }
}

impl Eq for Expr {}

impl Drop for Expr {
    fn drop(&mut self) {
        let Expr::Group { content } = self else {
            return;
        };
        // Detach each child before its parent is freed so the default drop glue
        // only ever sees a shallow node.
        let mut next = mem::replace(content.as_mut(), Expr::literal(String::new()));
        while let Expr::Group { content } = &mut next {
            let inner = mem::replace(content.as_mut(), Expr::literal(String::new()));
            next = inner;
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::visit::walk(self, &mut crate::visit::SourceWriter::new(f))
    }
}
