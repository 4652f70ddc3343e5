use crate::{
    codegen::{self, Target},
    lexer::{self, LexError},
    parser::{self, ParseError},
};

/// The expression printed by a linked program when none is given.
pub const DEFAULT_INVOCATION: &str = "f(1,2)";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Tokenizes, parses and generates code for the source. The first error
/// aborts the compilation.
pub fn compile(src: &str, target: Target) -> Result<String, Error> {
    let tokens = lexer::tokenize(src)?;
    log::debug!("lexed {} tokens", tokens.len());

    let root = parser::parse(&tokens)?;
    log::debug!("parsed definition");

    let code = codegen::generate_for(target, &root);
    log::debug!("generated {} bytes of {target}", code.len());
    Ok(code)
}

/// Surrounds generated code with the target's runtime prelude and a statement
/// printing the value of `invocation`.
pub fn link(code: &str, target: Target, invocation: &str) -> String {
    let prelude = target.prelude();
    let print = target.print_statement(invocation);
    format!("{prelude}\n{code}\n{print}\n")
}
