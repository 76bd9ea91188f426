//! Tokenizer.

use super::{Keyword, Span, Token, TokenKind};

/// Splits SQL text into tokens with byte spans.
///
/// Malformed input never stops the lexer: it yields a
/// [`TokenKind::Error`] token and carries on, leaving the parser to report
/// it at the right position.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    start: usize,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the source text being tokenized.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// Tokenizes the whole input. The last token is always EOF.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        self.skip_trivia();
        self.start = self.pos;

        let Some(c) = self.bump() else {
            return self.token(TokenKind::Eof);
        };
        let kind = match c {
            '\'' => self
                .delimited('\'')
                .map_or_else(|| unterminated("string literal"), TokenKind::String),
            '"' | '`' | '[' => {
                let close = if c == '[' { ']' } else { c };
                self.delimited(close)
                    .map_or_else(|| unterminated("quoted identifier"), TokenKind::Identifier)
            }
            c if c.is_ascii_digit() => self.number(),
            c if c.is_alphabetic() || c == '_' => self.word(),
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '.' => TokenKind::Dot,
            '?' => TokenKind::Question,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '=' => TokenKind::Eq,
            '<' if self.eat('=') => TokenKind::LtEq,
            '<' if self.eat('>') => TokenKind::NotEq,
            '<' => TokenKind::Lt,
            '>' if self.eat('=') => TokenKind::GtEq,
            '>' => TokenKind::Gt,
            '!' if self.eat('=') => TokenKind::NotEq,
            '|' if self.eat('|') => TokenKind::Concat,
            other => TokenKind::Error(format!("Unexpected character: {other}")),
        };
        self.token(kind)
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
    }

    const fn token(&self, kind: TokenKind) -> Token {
        Token::new(kind, Span::new(self.start, self.pos))
    }

    /// Skips whitespace, `-- line` and `/* block */` comments.
    fn skip_trivia(&mut self) {
        loop {
            self.eat_while(char::is_whitespace);
            if self.rest().starts_with("--") {
                self.eat_while(|c| c != '\n');
            } else if self.rest().starts_with("/*") {
                self.pos += 2;
                match self.rest().find("*/") {
                    Some(end) => self.pos += end + 2,
                    None => self.pos = self.input.len(),
                }
            } else {
                return;
            }
        }
    }

    /// Identifier or keyword. `$` and `#` may appear after the first
    /// character, as in Oracle and SQL Server names.
    fn word(&mut self) -> TokenKind {
        self.eat_while(|c| c.is_alphanumeric() || matches!(c, '_' | '$' | '#'));
        let text = &self.input[self.start..self.pos];
        Keyword::from_str(text).map_or_else(
            || TokenKind::Identifier(String::from(text)),
            TokenKind::Keyword,
        )
    }

    /// Integer, decimal or exponent literal; the first digit is consumed.
    fn number(&mut self) -> TokenKind {
        let is_digit = |c: char| c.is_ascii_digit();
        self.eat_while(is_digit);

        let mut is_float = false;
        let mut after = self.rest().chars();
        if after.next() == Some('.') && after.next().is_some_and(is_digit) {
            is_float = true;
            self.bump();
            self.eat_while(is_digit);
        }
        let mut after = self.rest().chars();
        if matches!(after.next(), Some('e' | 'E'))
            && after.next().is_some_and(|c| c.is_ascii_digit() || c == '+' || c == '-')
        {
            is_float = true;
            self.bump();
            if !self.eat('+') {
                self.eat('-');
            }
            self.eat_while(is_digit);
        }

        let text = &self.input[self.start..self.pos];
        if is_float {
            text.parse()
                .map_or_else(|e| TokenKind::Error(format!("Invalid float: {e}")), TokenKind::Float)
        } else {
            text.parse().map_or_else(
                |e| TokenKind::Error(format!("Invalid integer: {e}")),
                TokenKind::Integer,
            )
        }
    }

    /// Reads up to `close`, the opening delimiter already consumed. A
    /// doubled `close` stands for itself. Returns `None` at end of input.
    fn delimited(&mut self, close: char) -> Option<String> {
        let mut content = String::new();
        loop {
            let c = self.bump()?;
            if c == close && !self.eat(close) {
                return Some(content);
            }
            content.push(c);
        }
    }
}

fn unterminated(what: &str) -> TokenKind {
    TokenKind::Error(format!("Unterminated {what}"))
}
