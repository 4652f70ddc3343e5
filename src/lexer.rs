use crate::token::{Span, Token, TokenKind};

pub const SUGGESTED_TOKENS_CAPACITY: usize = 64;

/// Lexes the provided string, producing the tokens into the provided buffer.
///
/// The buffer must be empty. Panics otherwise.
///
/// Lexing stops at the first position where no pattern matches. Tokens lexed
/// before that point are left in the buffer.
pub fn lex<'src>(src: &'src str, tokens: &mut Vec<Token<'src>>) -> Result<(), LexError> {
    Lexer::new(src, tokens).lex()
}

/// A convenience function that allocates a new buffer per lexed input and
/// returns it.
pub fn tokenize(src: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut tokens = Vec::with_capacity(SUGGESTED_TOKENS_CAPACITY);
    lex(src, &mut tokens)?;
    Ok(tokens)
}

/// The lexical patterns, tried in order at the cursor. The first one that
/// matches wins.
///
/// Keywords must come before [`TokenKind::Identifier`], otherwise `def` and
/// `end` would be lexed as identifiers.
static PATTERNS: [(TokenKind, Pattern); 7] = [
    (TokenKind::Def, Pattern::Keyword("def")),
    (TokenKind::End, Pattern::Keyword("end")),
    (TokenKind::Identifier, Pattern::Run(char::is_ascii_alphabetic)),
    (TokenKind::Integer, Pattern::Run(char::is_ascii_digit)),
    (TokenKind::OpenParen, Pattern::Char('(')),
    (TokenKind::CloseParen, Pattern::Char(')')),
    (TokenKind::Comma, Pattern::Char(',')),
];

#[derive(Copy, Clone)]
enum Pattern {
    /// A whole word. It doesn't match if immediately followed by another word
    /// character, so `define` is not the keyword `def`.
    Keyword(&'static str),
    /// One or more characters satisfying the predicate (maximal munch).
    Run(fn(&char) -> bool),
    Char(char),
}

impl Pattern {
    /// Returns the length, in bytes, of the match anchored at the start of
    /// `rest`, if any.
    fn match_len(self, rest: &str) -> Option<usize> {
        match self {
            Pattern::Keyword(word) => {
                let after = rest.strip_prefix(word)?;
                let is_word_char = |c: char| c.is_ascii_alphanumeric();
                (!after.starts_with(is_word_char)).then_some(word.len())
            }
            Pattern::Run(predicate) => {
                let len = rest
                    .char_indices()
                    .find(|(_, c)| !predicate(c))
                    .map_or(rest.len(), |(i, _)| i);
                (len > 0).then_some(len)
            }
            Pattern::Char(c) => rest.starts_with(c).then_some(c.len_utf8()),
        }
    }
}

struct Lexer<'src, 'tok> {
    src: &'src str,
    cursor: usize,
    tokens: &'tok mut Vec<Token<'src>>,
}

impl<'src> Lexer<'src, '_> {
    fn new<'tok>(src: &'src str, tokens: &'tok mut Vec<Token<'src>>) -> Lexer<'src, 'tok> {
        Lexer {
            src,
            cursor: 0,
            tokens,
        }
    }

    /// Scans the source string until the input is exhausted.
    fn lex(mut self) -> Result<(), LexError> {
        assert_eq!(self.tokens.len(), 0, "must pass clean tokens buffer");
        loop {
            self.skip_whitespace();
            if self.rest().is_empty() {
                return Ok(());
            }
            let token = self.scan_token()?;
            log::trace!("lexed {token:?}");
            self.tokens.push(token);
        }
    }

    /// Tries every pattern, in priority order, at the cursor.
    fn scan_token(&mut self) -> Result<Token<'src>, LexError> {
        let rest = self.rest();
        for (kind, pattern) in &PATTERNS {
            if let Some(len) = pattern.match_len(rest) {
                let span = Span::new_of_bounds(self.cursor..self.cursor + len);
                self.cursor = span.hi();
                return Ok(Token::new(*kind, span.substr(self.src), span));
            }
        }
        Err(self.error())
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
        self.cursor += rest.len() - trimmed.len();
    }

    /// Returns the unconsumed part of the source.
    fn rest(&self) -> &'src str {
        &self.src[self.cursor..]
    }

    fn error(&self) -> LexError {
        let remaining = self.rest();
        // Only called with a non-empty remainder.
        let unexpected = remaining.chars().next().unwrap_or_default();
        let span = Span::new_of_bounds(self.cursor..self.cursor + unexpected.len_utf8());
        LexError {
            unexpected,
            span,
            remaining: remaining.to_owned(),
        }
    }
}

/// No token pattern matches at some position of the source.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{span}: unexpected character {unexpected:?}")]
pub struct LexError {
    pub unexpected: char,
    /// The span of the unexpected character.
    pub span: Span,
    /// The unconsumed source text, starting at the unexpected character.
    pub remaining: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds_and_texts(src: &str) -> Vec<(TokenKind, &str)> {
        tokenize(src)
            .expect("failed to lex")
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn tests_with_span() {
        use TokenKind::*;
        let cases = cases!(match .. {
            "def f(x,y) add(x,y) end" => [
                (Def, "def", 0..3),
                (Identifier, "f", 4..5),
                (OpenParen, "(", 5..6),
                (Identifier, "x", 6..7),
                (Comma, ",", 7..8),
                (Identifier, "y", 8..9),
                (CloseParen, ")", 9..10),
                (Identifier, "add", 11..14),
                (OpenParen, "(", 14..15),
                (Identifier, "x", 15..16),
                (Comma, ",", 16..17),
                (Identifier, "y", 17..18),
                (CloseParen, ")", 18..19),
                (End, "end", 20..23),
            ],
            "1 11 0042 123456789" => [
                (Integer, "1", 0..1),
                (Integer, "11", 2..4),
                (Integer, "0042", 5..9),
                (Integer, "123456789", 10..19),
            ],
            "f fo FOO aBc" => [
                (Identifier, "f", 0..1),
                (Identifier, "fo", 2..4),
                (Identifier, "FOO", 5..8),
                (Identifier, "aBc", 9..12),
            ],
            "abc123" => [
                (Identifier, "abc", 0..3),
                (Integer, "123", 3..6),
            ],
            "define ending defend" => [
                (Identifier, "define", 0..6),
                (Identifier, "ending", 7..13),
                (Identifier, "defend", 14..20),
            ],
            "def(end)" => [
                (Def, "def", 0..3),
                (OpenParen, "(", 3..4),
                (End, "end", 4..7),
                (CloseParen, ")", 7..8),
            ],
            "\n\tdef\r\n  end\t" => [
                (Def, "def", 2..5),
                (End, "end", 9..12),
            ],
        });

        for (input, tokens) in cases {
            let lexed = tokenize(input).expect("failed to lex");
            assert_eq!(lexed, tokens.as_slice());
        }
    }

    #[test]
    fn test_keywords_take_precedence() {
        assert_eq!(kinds_and_texts("def"), [(TokenKind::Def, "def")]);
        assert_eq!(kinds_and_texts("end"), [(TokenKind::End, "end")]);
    }

    #[test]
    fn test_empty_and_blank_sources() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_insensitive() {
        let compact = kinds_and_texts("def f(x) x end");
        let spaced = kinds_and_texts("def  f ( x )  x  end");
        assert_eq!(compact, spaced);
    }

    #[test]
    fn test_deterministic() {
        let src = "def f() add(1,add(2,3)) end";
        assert_eq!(tokenize(src), tokenize(src));
    }

    #[test]
    fn test_unexpected_char() {
        let error = tokenize("def f(x) $ end").unwrap_err();
        assert_eq!(
            error,
            LexError {
                unexpected: '$',
                span: Span::new_of_bounds(9..10),
                remaining: "$ end".to_owned(),
            }
        );
        assert_eq!(error.to_string(), "9..10: unexpected character '$'");
    }

    #[test]
    fn test_unexpected_multibyte_char() {
        let error = tokenize("def é").unwrap_err();
        assert_eq!(error.unexpected, 'é');
        assert_eq!(error.span, Span::new_of_bounds(4..6));
        assert_eq!(error.remaining, "é");
    }

    #[test]
    fn test_lex_keeps_tokens_before_error() {
        let mut tokens = Vec::new();
        let result = lex("def f -", &mut tokens);
        assert!(result.is_err());
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, [TokenKind::Def, TokenKind::Identifier]);
    }

    #[test]
    #[should_panic(expected = "must pass clean tokens buffer")]
    fn test_lex_requires_empty_buffer() {
        let mut tokens = tokenize("def").unwrap();
        let _ = lex("end", &mut tokens);
    }

    macro_rules! cases {
        (match .. {
            $($str:expr => [$(($kind:expr, $text:expr, $range:expr)),* $(,)?]),* $(,)?
        }) => {{
            &[$((
                $str,
                vec![
                    $(Token::new(
                        $kind,
                        $text,
                        Span::new_of_bounds($range.start..$range.end),
                    )),*
                ],
            )),*]
        }};
    }
    use cases;
}
