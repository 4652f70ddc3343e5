use crate::{
    ast::Node,
    codegen::{
        env::{self, Env},
        generator::Generator,
    },
};

/// Generates JavaScript code for the tree.
pub fn generate(root: &Node) -> String {
    generate_for(Target::JavaScript, root)
}

pub fn generate_for(target: Target, root: &Node) -> String {
    type JavaScriptGenerator = Generator<env::JavaScript>;
    type PythonGenerator = Generator<env::Python>;

    match target {
        Target::JavaScript => JavaScriptGenerator::new().generate(root),
        Target::Python => PythonGenerator::new().generate(root),
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Target {
    #[default]
    JavaScript,
    Python,
}

static EXTENSIONS: phf::Map<&'static str, Target> = phf::phf_map! {
    "js" => Target::JavaScript,
    "mjs" => Target::JavaScript,
    "cjs" => Target::JavaScript,
    "py" => Target::Python,
};

impl Target {
    pub const ALL: &[Target] = &[Target::JavaScript, Target::Python];

    /// Returns the target conventionally associated with a file extension
    /// (without the leading dot).
    pub fn from_extension(extension: &str) -> Option<Target> {
        EXTENSIONS
            .get(extension.to_ascii_lowercase().as_str())
            .copied()
    }

    /// The code defining the builtins that generated code may call.
    pub const fn prelude(self) -> &'static str {
        match self {
            Target::JavaScript => env::JavaScript::PRELUDE,
            Target::Python => env::Python::PRELUDE,
        }
    }

    /// Wraps `expr` in a statement printing its value.
    pub fn print_statement(self, expr: &str) -> String {
        let (open, close) = match self {
            Target::JavaScript => (env::JavaScript::PRINT_OPEN, env::JavaScript::PRINT_CLOSE),
            Target::Python => (env::Python::PRINT_OPEN, env::Python::PRINT_CLOSE),
        };
        format!("{open}{expr}{close}")
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::JavaScript => f.write_str("javascript"),
            Target::Python => f.write_str("python"),
        }
    }
}
