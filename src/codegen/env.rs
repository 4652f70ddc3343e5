/// The surface syntax of a target language.
pub trait Env {
    /// Defines the builtins that generated code may call.
    const PRELUDE: &str;

    /// Comes before `name(params)` in a function definition.
    const DEF_KEYWORD: &str;
    /// Comes between the parameter list and the returned expression.
    const DEF_BODY_OPEN: &str;
    const DEF_BODY_CLOSE: &str;

    /// Same as the `DEF_*` constants, for anonymous functions.
    const LAMBDA_OPEN: &str;
    const LAMBDA_BODY_OPEN: &str;
    const LAMBDA_CLOSE: &str;

    /// Wraps an expression in a statement that prints its value.
    const PRINT_OPEN: &str;
    const PRINT_CLOSE: &str;

    /// Whether `name` can't be used as an identifier in the target.
    fn is_reserved(name: &str) -> bool;
}

impl Env for JavaScript {
    const PRELUDE: &str = "function add(x, y) { return x + y };";

    const DEF_KEYWORD: &str = "function ";
    const DEF_BODY_OPEN: &str = " { return ";
    const DEF_BODY_CLOSE: &str = " };";

    const LAMBDA_OPEN: &str = "function(";
    const LAMBDA_BODY_OPEN: &str = ") { return ";
    const LAMBDA_CLOSE: &str = " }";

    const PRINT_OPEN: &str = "console.log(";
    const PRINT_CLOSE: &str = ");";

    fn is_reserved(name: &str) -> bool {
        JAVASCRIPT_RESERVED.contains(name)
    }
}

impl Env for Python {
    const PRELUDE: &str = "def add(x, y):\n    return x + y\n";

    const DEF_KEYWORD: &str = "def ";
    const DEF_BODY_OPEN: &str = ":\n    return ";
    const DEF_BODY_CLOSE: &str = "\n";

    const LAMBDA_OPEN: &str = "(lambda ";
    const LAMBDA_BODY_OPEN: &str = ": ";
    const LAMBDA_CLOSE: &str = ")";

    const PRINT_OPEN: &str = "print(";
    const PRINT_CLOSE: &str = ")";

    fn is_reserved(name: &str) -> bool {
        PYTHON_RESERVED.contains(name)
    }
}

pub struct JavaScript;

pub struct Python;

// Source identifiers are purely alphabetic, so only alphabetic words matter.
static JAVASCRIPT_RESERVED: phf::Set<&'static str> = phf::phf_set! {
    "await", "break", "case", "catch", "class", "const", "continue",
    "debugger", "default", "delete", "do", "else", "enum", "export",
    "extends", "false", "finally", "for", "function", "if", "implements",
    "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static",
    "super", "switch", "this", "throw", "true", "try", "typeof", "var",
    "void", "while", "with", "yield",
};

static PYTHON_RESERVED: phf::Set<&'static str> = phf::phf_set! {
    "False", "None", "True", "and", "as", "assert", "async", "await",
    "break", "class", "continue", "def", "del", "elif", "else", "except",
    "finally", "for", "from", "global", "if", "import", "in", "is",
    "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
};
