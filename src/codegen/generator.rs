use std::{
    fmt::{self, Write},
    format_args as f,
    marker::PhantomData,
};

use crate::{ast::Node, codegen::env};

const DEFAULT_CODE_CAPACITY: usize = 1024;

pub struct Generator<E> {
    code: String,
    _env: PhantomData<E>,
}

impl<E> Generator<E>
where
    E: env::Env,
{
    pub fn new() -> Generator<E> {
        Generator {
            code: String::with_capacity(DEFAULT_CODE_CAPACITY),
            _env: PhantomData,
        }
    }

    /// Generates the code of a tree. A root [`Node::Def`] becomes a named
    /// function, any other root becomes a bare expression.
    pub fn generate(mut self, root: &Node) -> String {
        match root {
            Node::Def { name, params, body } => self.g_def(name, params, body),
            expr => self.g_expr(expr),
        }
        self.code
    }

    fn g_def(&mut self, name: &str, params: &[String], body: &Node) {
        self.emit(f!("{}", E::DEF_KEYWORD));
        self.g_name(name);
        self.emit(f!("("));
        self.g_params(params);
        self.emit(f!("){}", E::DEF_BODY_OPEN));
        self.g_expr(body);
        self.emit(f!("{}", E::DEF_BODY_CLOSE));
    }

    fn g_expr(&mut self, node: &Node) {
        match node {
            // Only reachable through hand-built trees.
            Node::Def { params, body, .. } => {
                self.emit(f!("{}", E::LAMBDA_OPEN));
                self.g_params(params);
                self.emit(f!("{}", E::LAMBDA_BODY_OPEN));
                self.g_expr(body);
                self.emit(f!("{}", E::LAMBDA_CLOSE));
            }
            Node::Call { name, args } => {
                self.g_name(name);
                self.emit(f!("("));
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        self.emit(f!(","));
                    }
                    self.g_expr(arg);
                }
                self.emit(f!(")"));
            }
            Node::VarRef(name) => self.g_name(name),
            Node::Integer(value) => self.emit(f!("{value}")),
        }
    }

    fn g_params(&mut self, params: &[String]) {
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.emit(f!(","));
            }
            self.g_name(param);
        }
    }

    /// Names reserved by the target get a trailing `_`. Source names are
    /// purely alphabetic, so the result can't clash with another name.
    fn g_name(&mut self, name: &str) {
        if E::is_reserved(name) {
            self.emit(f!("{name}_"));
        } else {
            self.emit(f!("{name}"));
        }
    }
}

impl<E> Default for Generator<E>
where
    E: env::Env,
{
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions.
impl<E> Generator<E> {
    fn emit(&mut self, f: fmt::Arguments<'_>) {
        self.code
            .write_fmt(f)
            .expect("code emit should be infallible");
    }
}
