// def ::= "def" IDENTIFIER params expr "end"
// params ::= "(" [IDENTIFIER ("," IDENTIFIER)*] ")"
// expr ::= INTEGER
//        | IDENTIFIER "(" [expr ("," expr)*] ")"
//        | IDENTIFIER

/// A node of the syntax tree.
///
/// The tree is strict: every child is exclusively owned by its parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Def {
        name: String,
        /// List of parameters, in declaration order.
        params: Vec<String>,
        body: Box<Node>,
    },
    Integer(i64),
    Call {
        name: String,
        args: Vec<Node>,
    },
    VarRef(String),
}

impl Node {
    pub fn def(name: impl Into<String>, params: &[&str], body: Node) -> Node {
        Node::Def {
            name: name.into(),
            params: params.iter().map(|&p| p.to_owned()).collect(),
            body: Box::new(body),
        }
    }

    pub fn call(name: impl Into<String>, args: impl Into<Vec<Node>>) -> Node {
        Node::Call {
            name: name.into(),
            args: args.into(),
        }
    }

    pub fn var(name: impl Into<String>) -> Node {
        Node::VarRef(name.into())
    }
}
