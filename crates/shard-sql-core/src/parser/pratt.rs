//! Operator precedence for the Pratt expression loop.

use crate::ast::{BinaryOp, UnaryOp};
use crate::lexer::{Keyword, TokenKind};

/// Precedence levels, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Or = 1,
    And,
    /// Prefix `NOT`.
    Not,
    /// `=`, `<>`, `<`, `IS`, `IN`, `BETWEEN`, `LIKE` and the `NOT` forms.
    Comparison,
    /// `+`, `-` and `||`.
    Additive,
    /// `*`, `/` and `%`.
    Multiplicative,
    /// Prefix `-`, and `PRIOR` inside `CONNECT BY`.
    Negation,
}

impl Precedence {
    /// Returns `(left, right)` binding powers. Every level is
    /// left-associative.
    #[must_use]
    pub const fn binding_power(self) -> (u8, u8) {
        let level = self as u8 * 2;
        (level - 1, level)
    }
}

/// Returns the unary operator a token starts and the binding power of its
/// operand.
#[must_use]
pub const fn prefix_operator(kind: &TokenKind) -> Option<(UnaryOp, u8)> {
    let (op, precedence) = match kind {
        TokenKind::Minus => (UnaryOp::Neg, Precedence::Negation),
        TokenKind::Keyword(Keyword::Not) => (UnaryOp::Not, Precedence::Not),
        _ => return None,
    };
    Some((op, precedence.binding_power().1))
}

/// Returns the infix binding powers of a token, or `None` if it does not
/// continue an expression.
#[must_use]
pub const fn infix_binding_power(kind: &TokenKind) -> Option<(u8, u8)> {
    let precedence = match kind {
        TokenKind::Keyword(Keyword::Or) => Precedence::Or,
        TokenKind::Keyword(Keyword::And) => Precedence::And,
        TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::Lt
        | TokenKind::LtEq
        | TokenKind::Gt
        | TokenKind::GtEq
        | TokenKind::Keyword(
            Keyword::Is | Keyword::In | Keyword::Between | Keyword::Like | Keyword::Not,
        ) => Precedence::Comparison,
        TokenKind::Plus | TokenKind::Minus | TokenKind::Concat => Precedence::Additive,
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => Precedence::Multiplicative,
        _ => return None,
    };
    Some(precedence.binding_power())
}

/// Maps a plain binary operator token. `IS`, `IN`, `BETWEEN` and `NOT`
/// need their own grammar and are not covered here.
#[must_use]
pub const fn binary_operator(kind: &TokenKind) -> Option<BinaryOp> {
    Some(match kind {
        TokenKind::Keyword(Keyword::Or) => BinaryOp::Or,
        TokenKind::Keyword(Keyword::And) => BinaryOp::And,
        TokenKind::Keyword(Keyword::Like) => BinaryOp::Like,
        TokenKind::Eq => BinaryOp::Eq,
        TokenKind::NotEq => BinaryOp::NotEq,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::LtEq => BinaryOp::LtEq,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::GtEq => BinaryOp::GtEq,
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Concat => BinaryOp::Concat,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::Percent => BinaryOp::Mod,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn left(kind: &TokenKind) -> u8 {
        infix_binding_power(kind).unwrap().0
    }

    #[test]
    fn test_levels_increase() {
        assert!(left(&TokenKind::Keyword(Keyword::Or)) < left(&TokenKind::Keyword(Keyword::And)));
        assert!(left(&TokenKind::Keyword(Keyword::And)) < left(&TokenKind::Eq));
        assert!(left(&TokenKind::Eq) < left(&TokenKind::Plus));
        assert!(left(&TokenKind::Plus) < left(&TokenKind::Star));
    }

    #[test]
    fn test_not_operand_stops_at_and() {
        let (_, operand_bp) = prefix_operator(&TokenKind::Keyword(Keyword::Not)).unwrap();
        assert!(left(&TokenKind::Keyword(Keyword::And)) < operand_bp);
        assert!(left(&TokenKind::Eq) >= operand_bp);
    }

    #[test]
    fn test_negation_binds_tighter_than_multiplication() {
        let (op, operand_bp) = prefix_operator(&TokenKind::Minus).unwrap();
        assert_eq!(op, UnaryOp::Neg);
        assert!(left(&TokenKind::Star) < operand_bp);
    }

    #[test]
    fn test_binary_operator() {
        assert_eq!(binary_operator(&TokenKind::Concat), Some(BinaryOp::Concat));
        assert_eq!(binary_operator(&TokenKind::Keyword(Keyword::In)), None);
        assert_eq!(binary_operator(&TokenKind::LeftParen), None);
        assert_eq!(prefix_operator(&TokenKind::Plus), None);
    }
}
