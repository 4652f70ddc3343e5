#[derive(Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum Target {
    #[value(alias = "js")]
    Javascript,
    #[value(alias = "py")]
    Python,
}

impl From<Target> for defc::codegen::Target {
    fn from(value: Target) -> Self {
        match value {
            Target::Javascript => defc::codegen::Target::JavaScript,
            Target::Python => defc::codegen::Target::Python,
        }
    }
}

/// The stage after which the compiler stops, and whose result is printed.
#[derive(Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum Emit {
    /// The token listing.
    Tokens,
    /// The syntax tree.
    Ast,
    /// The generated code alone.
    Code,
    /// The generated code, linked with the runtime prelude and the invocation.
    Program,
}
