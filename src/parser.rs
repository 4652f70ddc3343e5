use crate::{
    ast::Node,
    token::{Span, Token, TokenKind},
};

type Result<T, E = ParseError> = std::result::Result<T, E>;

/// The maximum number of calls nested inside each other. The parser, the
/// generator and the tree printer all recurse once per level.
pub const MAX_NESTING: usize = 256;

/// Parses a single function definition. Every token must be consumed.
pub fn parse(tokens: &[Token<'_>]) -> Result<Node> {
    parse_with(tokens, Parser::parse_def)
}

/// Parses a single expression. Every token must be consumed.
pub fn parse_expr(tokens: &[Token<'_>]) -> Result<Node> {
    parse_with(tokens, Parser::parse_expr)
}

fn parse_with<'src, 'tok>(
    tokens: &'tok [Token<'src>],
    f: impl FnOnce(&mut Parser<'src, 'tok>) -> Result<Node>,
) -> Result<Node> {
    let mut p = Parser::new(tokens);
    let node = f(&mut p)?;
    p.finish()?;
    Ok(node)
}

struct Parser<'src, 'tok> {
    tokens: &'tok [Token<'src>],
    cursor: usize,
    /// The number of calls currently being parsed.
    depth: usize,
}

impl Parser<'_, '_> {
    fn parse_def(&mut self) -> Result<Node> {
        self.consume(TokenKind::Def)?;
        let name = self.parse_ident()?;
        let params = self.parse_list(&[TokenKind::Identifier], Parser::parse_ident)?;
        let body = self.parse_expr()?;
        self.consume(TokenKind::End)?;
        Ok(Node::Def {
            name,
            params,
            body: Box::new(body),
        })
    }

    /// Dispatches on the next two tokens, without consuming them.
    fn parse_expr(&mut self) -> Result<Node> {
        match (self.peek_kind(0), self.peek_kind(1)) {
            (Some(TokenKind::Integer), _) => self.parse_integer(),
            (Some(TokenKind::Identifier), Some(TokenKind::OpenParen)) => self.parse_call(),
            (Some(TokenKind::Identifier), _) => self.parse_var_ref(),
            _ => Err(self.unexpected(EXPR_START)),
        }
    }

    fn parse_integer(&mut self) -> Result<Node> {
        let token = self.consume(TokenKind::Integer)?;
        // The lexer only produces digits, so overflow is the only failure.
        let value = token
            .text
            .parse()
            .map_err(|_| ParseError::IntegerOutOfRange {
                text: token.text.to_owned(),
                span: token.span(),
            })?;
        Ok(Node::Integer(value))
    }

    fn parse_call(&mut self) -> Result<Node> {
        let token = self.consume(TokenKind::Identifier)?;
        if self.depth == MAX_NESTING {
            return Err(ParseError::NestingTooDeep { span: token.span() });
        }
        self.depth += 1;
        let args = self.parse_list(EXPR_START, Parser::parse_expr)?;
        self.depth -= 1;
        Ok(Node::Call {
            name: token.text.to_owned(),
            args,
        })
    }

    fn parse_var_ref(&mut self) -> Result<Node> {
        self.parse_ident().map(Node::VarRef)
    }

    fn parse_ident(&mut self) -> Result<String> {
        let token = self.consume(TokenKind::Identifier)?;
        Ok(token.text.to_owned())
    }

    /// Parses `"(" [item ("," item)*] ")"`, consuming both delimiters.
    ///
    /// `item_start` lists the token kinds which may start an item. It is only
    /// used to report errors on the first item position.
    fn parse_list<T>(
        &mut self,
        item_start: &[TokenKind],
        parse_item: impl Fn(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        self.consume(TokenKind::OpenParen)?;
        let mut items = Vec::new();
        if self.take(TokenKind::CloseParen) {
            return Ok(items);
        }
        if !self.peek_kind(0).is_some_and(|k| item_start.contains(&k)) {
            let mut expected = item_start.to_vec();
            expected.push(TokenKind::CloseParen);
            return Err(self.unexpected(&expected));
        }
        loop {
            items.push(parse_item(self)?);
            let delim = self.consume_any(&[TokenKind::Comma, TokenKind::CloseParen])?;
            if delim.is(TokenKind::CloseParen) {
                break;
            }
        }
        Ok(items)
    }

    /// Fails if any token remains unconsumed.
    fn finish(&self) -> Result<()> {
        match self.peek() {
            Some(token) => Err(ParseError::TrailingTokens {
                actual: token.kind,
                text: token.text.to_owned(),
                span: token.span(),
            }),
            None => Ok(()),
        }
    }
}

const EXPR_START: &[TokenKind] = &[TokenKind::Integer, TokenKind::Identifier];

impl<'src, 'tok> Parser<'src, 'tok> {
    fn new(tokens: &'tok [Token<'src>]) -> Parser<'src, 'tok> {
        Parser {
            tokens,
            cursor: 0,
            depth: 0,
        }
    }

    /// Returns the current token, if any.
    fn peek(&self) -> Option<Token<'src>> {
        self.tokens.get(self.cursor).copied()
    }

    /// Returns the kind of the `n`-th token after the current one.
    fn peek_kind(&self, n: usize) -> Option<TokenKind> {
        self.tokens.get(self.cursor + n).map(|t| t.kind)
    }

    /// Checks whether the current token matches the given one.
    fn is(&self, expect: TokenKind) -> bool {
        self.peek_kind(0) == Some(expect)
    }

    /// Advances if the current token matches the provided one, returning true.
    /// If not, returns false and doesn't advance.
    fn take(&mut self, expect: TokenKind) -> bool {
        if self.is(expect) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Advances if the current token matches the provided one, returning it.
    fn consume(&mut self, expect: TokenKind) -> Result<Token<'src>> {
        self.consume_any(&[expect])
    }

    /// Advances if the current token matches any of the provided kinds,
    /// returning it.
    fn consume_any(&mut self, expect: &[TokenKind]) -> Result<Token<'src>> {
        match self.peek() {
            Some(token) if expect.contains(&token.kind) => {
                self.cursor += 1;
                Ok(token)
            }
            _ => Err(self.unexpected(expect)),
        }
    }

    /// Builds the error for the current token, which is not of any of the
    /// `expected` kinds.
    fn unexpected(&self, expected: &[TokenKind]) -> ParseError {
        let expected = Box::from(expected);
        match self.peek() {
            Some(token) => ParseError::Unexpected {
                expected,
                actual: token.kind,
                text: token.text.to_owned(),
                span: token.span(),
            },
            None => ParseError::UnexpectedEof { expected },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("{span}: expected {}, but got {actual} {text:?}", one_of(.expected))]
    Unexpected {
        expected: Box<[TokenKind]>,
        actual: TokenKind,
        text: String,
        span: Span,
    },
    #[error("expected {}, but no tokens remain", one_of(.expected))]
    UnexpectedEof { expected: Box<[TokenKind]> },
    #[error("{span}: integer literal {text} is out of range")]
    IntegerOutOfRange { text: String, span: Span },
    #[error("{span}: calls are nested more than {} levels deep", MAX_NESTING)]
    NestingTooDeep { span: Span },
    #[error("{span}: unexpected {actual} {text:?} after the end of the definition")]
    TrailingTokens {
        actual: TokenKind,
        text: String,
        span: Span,
    },
}

/// Formats `a`, `a or b`, `a, b or c`.
fn one_of(kinds: &[TokenKind]) -> String {
    match kinds {
        [] => String::from("nothing"),
        [only] => only.to_string(),
        [init @ .., last] => {
            let init: Vec<_> = init.iter().map(ToString::to_string).collect();
            format!("{} or {last}", init.join(", "))
        }
    }
}
