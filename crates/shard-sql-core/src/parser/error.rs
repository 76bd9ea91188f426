//! Parser error types.

use thiserror::Error;

use crate::lexer::{Span, TokenKind};

/// Why a statement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The token stream does not match the grammar.
    Syntax,
    /// A recognized vendor construct that cannot be sharded safely.
    Unsupported,
}

/// A parse error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} at position {}..{}", span.start, span.end)]
pub struct ParseError {
    /// Syntax violation or unsupported construct.
    pub kind: ParseErrorKind,
    /// The error message.
    pub message: String,
    /// The location of the error.
    pub span: Span,
    /// Expected tokens (if applicable).
    pub expected: Option<String>,
    /// The actual token found.
    pub found: Option<TokenKind>,
}

impl ParseError {
    /// Creates a new syntax error.
    #[must_use]
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ParseErrorKind::Syntax,
            message: message.into(),
            span,
            expected: None,
            found: None,
        }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: TokenKind, span: Span) -> Self {
        let expected: String = expected.into();
        let message = if found == TokenKind::Eof {
            format!("Unexpected end of input: expected {expected}")
        } else {
            format!("Unexpected token: expected {expected}, found {found:?}")
        };
        Self {
            kind: ParseErrorKind::Syntax,
            message,
            span,
            expected: Some(expected),
            found: Some(found),
        }
    }

    /// Creates an error for a construct that is recognized but rejected.
    #[must_use]
    pub fn unsupported(construct: impl Into<String>, span: Span) -> Self {
        let construct: String = construct.into();
        tracing::debug!(construct = %construct, start = span.start, "rejecting unsupported construct");
        Self {
            kind: ParseErrorKind::Unsupported,
            message: format!("Unsupported construct: {construct}"),
            span,
            expected: None,
            found: None,
        }
    }

    /// Returns true for syntax violations.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Syntax)
    }

    /// Returns true for rejected vendor constructs.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Unsupported)
    }
}
