/// Builds a definition whose body is a left-leaning chain of `depth` nested
/// `add` calls, mixing integers and parameter references.
pub fn nested_input(depth: usize) -> String {
    let mut body = String::from("x");
    for i in 0..depth {
        let operand = if i % 2 == 0 { "y".to_owned() } else { i.to_string() };
        body = format!("add({body}, {operand})");
    }
    format!("def f(x, y)\n  {body}\nend\n")
}
