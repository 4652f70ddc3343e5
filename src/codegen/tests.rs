use indoc::indoc;
use pretty_assertions::assert_eq;

use crate::{
    ast::Node,
    codegen::{generate, generate_for, Target},
    lexer::tokenize,
    parser::parse,
};

fn gen_src(target: Target, src: &str) -> String {
    let tokens = tokenize(src).expect("failed to lex");
    let root = parse(&tokens).expect("failed to parse");
    generate_for(target, &root)
}

#[test]
fn test_javascript_def() {
    let code = gen_src(Target::JavaScript, "def f(x,y) add(x,y) end");
    assert_eq!(code, "function f(x,y) { return add(x,y) };");
}

#[test]
fn test_javascript_nested_calls() {
    let code = gen_src(Target::JavaScript, "def f() add(1,add(2,3)) end");
    assert_eq!(code, "function f() { return add(1,add(2,3)) };");
}

#[test]
fn test_javascript_zero_arity() {
    let code = gen_src(Target::JavaScript, "def f() 42 end");
    assert_eq!(code, "function f() { return 42 };");
}

#[test]
fn test_python_def() {
    let code = gen_src(Target::Python, "def f(x, y) add(x, add(y, 1)) end");
    let expected = indoc! {"
        def f(x,y):
            return add(x,add(y,1))
    "};
    assert_eq!(code, expected);
}

#[test]
fn test_default_target_is_javascript() {
    let root = Node::def("g", &["a"], Node::var("a"));
    assert_eq!(generate(&root), generate_for(Target::JavaScript, &root));
}

#[test]
fn test_generation_is_idempotent() {
    let tokens = tokenize("def f(a, b) add(a, add(b, 7)) end").unwrap();
    let root = parse(&tokens).unwrap();
    for &target in Target::ALL {
        assert_eq!(generate_for(target, &root), generate_for(target, &root));
    }
}

#[test]
fn test_expression_roots() {
    let root = Node::call("add", [Node::Integer(1), Node::var("x")]);
    assert_eq!(generate(&root), "add(1,x)");
    assert_eq!(generate(&Node::Integer(-7)), "-7");
    assert_eq!(generate(&Node::call("now", Vec::new())), "now()");
}

#[test]
fn test_def_in_expression_position() {
    let inner = Node::def("g", &["y"], Node::call("add", [Node::var("y"), Node::Integer(1)]));
    let root = Node::def("f", &[], inner);
    assert_eq!(
        generate_for(Target::JavaScript, &root),
        "function f() { return function(y) { return add(y,1) } };"
    );
    assert_eq!(
        generate_for(Target::Python, &root),
        "def f():\n    return (lambda y: add(y,1))\n"
    );
}

#[test]
fn test_target_from_extension() {
    assert_eq!(Target::from_extension("js"), Some(Target::JavaScript));
    assert_eq!(Target::from_extension("MJS"), Some(Target::JavaScript));
    assert_eq!(Target::from_extension("py"), Some(Target::Python));
    assert_eq!(Target::from_extension("rs"), None);
}

#[test]
fn test_print_statement() {
    assert_eq!(Target::JavaScript.print_statement("f(1,2)"), "console.log(f(1,2));");
    assert_eq!(Target::Python.print_statement("f(1,2)"), "print(f(1,2))");
}

#[test]
fn test_reserved_names_are_mangled() {
    let code = gen_src(Target::Python, "def lambda(pass) pass end");
    assert_eq!(code, "def lambda_(pass_):\n    return pass_\n");

    let code = gen_src(Target::JavaScript, "def f(in) in end");
    assert_eq!(code, "function f(in_) { return in_ };");

    let code = gen_src(Target::JavaScript, "def f(x, class) new(x, class, None) end");
    assert_eq!(code, "function f(x,class_) { return new_(x,class_,None) };");

    let code = gen_src(Target::Python, "def f(x, class) new(x, class, None) end");
    assert_eq!(code, "def f(x,class_):\n    return new(x,class_,None_)\n");
}

#[test]
fn test_reserved_names_in_lambda() {
    let inner = Node::def("g", &["this"], Node::var("this"));
    let root = Node::def("f", &[], inner);
    assert_eq!(
        generate_for(Target::JavaScript, &root),
        "function f() { return function(this_) { return this_ } };"
    );
}

#[test]
fn test_add_is_not_reserved() {
    let code = gen_src(Target::Python, "def f(x) add(x, 1) end");
    assert_eq!(code, "def f(x):\n    return add(x,1)\n");
}
