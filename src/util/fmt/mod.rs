use std::io::Write;

use crate::token::Token;

pub mod tree;

pub fn print_tokens_string(tokens: &[Token<'_>]) -> String {
    let mut buf = Vec::with_capacity(32 * tokens.len());
    print_tokens(&mut buf, tokens).unwrap();
    String::from_utf8(buf).unwrap()
}

/// Prints one token per line: span, kind and source text.
pub fn print_tokens(w: &mut impl Write, tokens: &[Token<'_>]) -> std::io::Result<()> {
    for token in tokens {
        let span = token.span().to_string();
        writeln!(w, "{span:<8} {:<12} {:?}", format!("{:?}", token.kind), token.text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_print_tokens() {
        let tokens = tokenize("def f(x) x end").unwrap();
        let expected = indoc! {r#"
            0..3     Def          "def"
            4..5     Identifier   "f"
            5..6     OpenParen    "("
            6..7     Identifier   "x"
            7..8     CloseParen   ")"
            9..10    Identifier   "x"
            11..14   End          "end"
        "#};
        assert_eq!(print_tokens_string(&tokens), expected);
    }
}
