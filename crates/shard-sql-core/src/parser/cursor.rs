//! Single-lookahead view over the token stream.

use super::error::ParseError;
use crate::lexer::{Keyword, Lexer, Span, Token, TokenKind};

/// A cursor over the tokens of one SQL statement.
///
/// The token list always ends with [`TokenKind::Eof`] and the cursor never
/// moves past it, so [`TokenCursor::current`] is always valid.
pub struct TokenCursor<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    /// Tokenizes `source` and positions the cursor on the first token.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Lexer::new(source).tokenize(),
            pos: 0,
        }
    }

    /// Returns the SQL text being parsed.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the current token.
    #[must_use]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the token after the current one.
    #[must_use]
    pub fn peek(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + 1).min(last)]
    }

    /// Returns the span of the current token.
    #[must_use]
    pub fn span(&self) -> Span {
        self.current().span
    }

    /// Moves to the next token. Stays on EOF once reached.
    pub fn advance(&mut self) {
        if !self.current().is_eof() {
            self.pos += 1;
        }
    }

    /// Checks if the current token has the same kind as `kind`.
    ///
    /// Payloads are ignored, so `TokenKind::Integer(0)` matches any integer.
    #[must_use]
    pub fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.current().kind) == core::mem::discriminant(kind)
    }

    /// Checks if the current token is the given keyword.
    #[must_use]
    pub fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current().as_keyword() == Some(keyword)
    }

    /// Checks if the current token is any of the given keywords.
    #[must_use]
    pub fn equal_any(&self, keywords: &[Keyword]) -> bool {
        self.current()
            .as_keyword()
            .is_some_and(|kw| keywords.contains(&kw))
    }

    /// Checks if the token after the current one is the given keyword.
    #[must_use]
    pub fn peek_keyword(&self, keyword: Keyword) -> bool {
        self.peek().as_keyword() == Some(keyword)
    }

    /// Consumes the current token if it has the same kind as `kind`.
    pub fn skip_if(&mut self, kind: &TokenKind) -> bool {
        let matched = self.check(kind);
        if matched {
            self.advance();
        }
        matched
    }

    /// Consumes the current token if it is the given keyword.
    pub fn skip_if_keyword(&mut self, keyword: Keyword) -> bool {
        let matched = self.check_keyword(keyword);
        if matched {
            self.advance();
        }
        matched
    }

    /// Consumes the current token if it is any of the given keywords.
    pub fn skip_if_any(&mut self, keywords: &[Keyword]) -> bool {
        let matched = self.equal_any(keywords);
        if matched {
            self.advance();
        }
        matched
    }

    /// Builds a syntax error for the current token.
    #[must_use]
    pub fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        let token = self.current();
        ParseError::unexpected(expected, token.kind.clone(), token.span)
    }

    /// Expects the current token to be of the given kind and consumes it.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if the current token has a different kind.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            let span = self.span();
            self.advance();
            Ok(span)
        } else {
            Err(self.unexpected(format!("{kind:?}")))
        }
    }

    /// Expects the current token to be the given keyword and consumes it.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if the current token is something else.
    pub fn expect_keyword(&mut self, keyword: Keyword) -> Result<Span, ParseError> {
        if self.check_keyword(keyword) {
            let span = self.span();
            self.advance();
            Ok(span)
        } else {
            Err(self.unexpected(keyword.as_str()))
        }
    }

    /// Returns true if the current token can be used as a name.
    #[must_use]
    pub fn at_identifier(&self) -> bool {
        match &self.current().kind {
            TokenKind::Identifier(_) => true,
            TokenKind::Keyword(kw) => !kw.is_reserved(),
            _ => false,
        }
    }

    /// Expects and returns a name.
    ///
    /// Non-reserved keywords are accepted and returned as written.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if the current token cannot be a name.
    pub fn expect_identifier(&mut self) -> Result<String, ParseError> {
        let token = self.current();
        let name = match &token.kind {
            TokenKind::Identifier(name) => name.clone(),
            TokenKind::Keyword(kw) if !kw.is_reserved() => {
                String::from(token.span.slice(self.source))
            }
            _ => return Err(self.unexpected("identifier")),
        };
        self.advance();
        Ok(name)
    }

    /// Skips a balanced parenthesized region starting at the current `(`.
    ///
    /// Returns the span from the opening to the closing parenthesis.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if the current token is not `(` or the region
    /// is not closed before the end of input.
    pub fn skip_parentheses(&mut self) -> Result<Span, ParseError> {
        let open = self.expect(&TokenKind::LeftParen)?;
        let mut depth = 1_usize;
        loop {
            match &self.current().kind {
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => {
                    depth -= 1;
                    if depth == 0 {
                        let close = self.span();
                        self.advance();
                        return Ok(Span::new(open.start, close.end));
                    }
                }
                TokenKind::Eof => return Err(self.unexpected("')'")),
                _ => {}
            }
            self.advance();
        }
    }
}
