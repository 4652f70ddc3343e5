use std::io::Write;

use crate::ast::Node;

const INDENT_WIDTH: usize = 2;

pub fn print_node_string(node: &Node) -> String {
    let mut buf = Vec::with_capacity(512);
    print_node(&mut buf, 0, node).unwrap();
    String::from_utf8(buf).unwrap()
}

pub fn print_node(w: &mut impl Write, i: usize, node: &Node) -> std::io::Result<()> {
    sp(w, i)?;
    match node {
        Node::Def { name, params, body } => {
            writeln!(w, "def {name}({})", params.join(", "))?;
            print_node(w, i + 1, body)?;
        }
        Node::Call { name, args } => {
            writeln!(w, "call {name}")?;
            for arg in args {
                print_node(w, i + 1, arg)?;
            }
        }
        Node::VarRef(name) => {
            writeln!(w, "var {name}")?;
        }
        Node::Integer(value) => {
            writeln!(w, "int {value}")?;
        }
    }
    Ok(())
}

fn sp(w: &mut impl Write, i: usize) -> std::io::Result<()> {
    write!(w, "{:width$}", "", width = i * INDENT_WIDTH)
}
