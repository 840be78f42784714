//! Example of using the visitor pattern to traverse and process a tree.

use std::convert::Infallible;

use parex_ast::visit::{walk, Visitor};
use parex_ast::{to_json, Expr};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tree = Expr::nested("atom", 3);

    let mut printer = TreePrinter::default();
    walk(&tree, &mut printer)?;
    println!("Tree:\n{}", printer.out);

    println!("Source form: {tree}");
    println!("JSON form:   {}", to_json(&tree)?);

    Ok(())
}

/// Renders one node per line, indented by depth.
#[derive(Default)]
struct TreePrinter {
    out: String,
}

impl Visitor for TreePrinter {
    type Error = Infallible;

    fn enter_group(&mut self, depth: usize) -> Result<(), Infallible> {
        self.out.push_str(&"  ".repeat(depth - 1));
        self.out.push_str("group\n");
        Ok(())
    }

    fn visit_literal(&mut self, value: &str, depth: usize) -> Result<(), Infallible> {
        self.out.push_str(&"  ".repeat(depth));
        self.out.push_str(&format!("literal {value:?}\n"));
        Ok(())
    }
}
