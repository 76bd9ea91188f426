//! Expressions.
//!
//! The parser keeps just enough structure to find sharding predicates and
//! count bind parameters. Nothing here is ever rendered back to SQL.

use serde::{Deserialize, Serialize};

use super::condition::ConditionValue;
use crate::lexer::Span;

/// A constant written in the SQL text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Integer(i64),
    Float(f64),
    /// Unquoted content; `''` is already folded to `'`.
    String(String),
    Boolean(bool),
    Null,
}

/// Operators with two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Or,
    And,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Like,
    Add,
    Sub,
    Concat,
    Mul,
    Div,
    Mod,
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-x`
    Neg,
    /// `NOT x`
    Not,
}

/// `name([DISTINCT] args)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// Upper-cased for the built-in aggregates, as written otherwise.
    pub name: String,
    pub args: Vec<Expr>,
    pub distinct: bool,
}

/// An expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),

    /// `name` or `owner.name`, where owner is a table name or alias.
    Column {
        owner: Option<String>,
        name: String,
        /// Covers the owner too when there is one.
        span: Span,
    },

    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },

    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },

    Function(FunctionCall),

    /// `expr IS [NOT] NULL`
    IsNull { expr: Box<Expr>, negated: bool },

    /// `expr [NOT] IN (list)`
    In {
        expr: Box<Expr>,
        list: Vec<Expr>,
        negated: bool,
    },

    /// `expr [NOT] BETWEEN low AND high`
    Between {
        expr: Box<Expr>,
        low: Box<Expr>,
        high: Box<Expr>,
        negated: bool,
    },

    /// Simple (`CASE x WHEN ...`) or searched (`CASE WHEN ...`) form.
    Case {
        operand: Option<Box<Expr>>,
        when_clauses: Vec<(Expr, Expr)>,
        else_clause: Option<Box<Expr>>,
    },

    Paren(Box<Expr>),

    /// A `?` bind parameter.
    Placeholder {
        /// 0-based ordinal among all placeholders of the statement.
        index: usize,
        span: Span,
    },

    /// `*` or `owner.*`.
    Wildcard { owner: Option<String> },
}

impl Expr {
    /// An unqualified column with no source position.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column {
            owner: None,
            name: name.into(),
            span: Span::default(),
        }
    }

    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Literal(Literal::Integer(value))
    }

    /// Builds `self op right`.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: Self) -> Self {
        Self::Binary {
            left: Box::new(self),
            op,
            right: Box::new(right),
        }
    }

    /// Strips any number of enclosing parentheses.
    #[must_use]
    pub fn unparenthesized(&self) -> &Self {
        let mut expr = self;
        while let Self::Paren(inner) = expr {
            expr = inner;
        }
        expr
    }

    /// Returns the value a sharding condition can carry: a literal or a
    /// placeholder, possibly parenthesized.
    #[must_use]
    pub fn sharding_value(&self) -> Option<ConditionValue> {
        match self.unparenthesized() {
            Self::Literal(literal) => Some(ConditionValue::Literal(literal.clone())),
            Self::Placeholder { index, .. } => Some(ConditionValue::Parameter(*index)),
            _ => None,
        }
    }

    /// Splits a predicate into its top-level `AND` operands, left to right.
    ///
    /// Parenthesized `AND`s are flattened too; an `OR` is kept whole.
    #[must_use]
    pub fn conjuncts(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            if let Self::Binary {
                left,
                op: BinaryOp::And,
                right,
            } = expr.unparenthesized()
            {
                stack.push(right);
                stack.push(left);
            } else {
                out.push(expr.unparenthesized());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq(column: &str, value: i64) -> Expr {
        Expr::column(column).binary(BinaryOp::Eq, Expr::integer(value))
    }

    #[test]
    fn test_unparenthesized() {
        let expr = Expr::Paren(Box::new(Expr::Paren(Box::new(Expr::integer(1)))));
        assert_eq!(expr.unparenthesized(), &Expr::integer(1));
    }

    #[test]
    fn test_sharding_value() {
        let placeholder = Expr::Paren(Box::new(Expr::Placeholder {
            index: 4,
            span: Span::new(10, 11),
        }));
        assert_eq!(placeholder.sharding_value(), Some(ConditionValue::Parameter(4)));
        assert_eq!(
            Expr::integer(7).sharding_value(),
            Some(ConditionValue::Literal(Literal::Integer(7)))
        );
        assert_eq!(Expr::column("a").sharding_value(), None);
        assert_eq!(eq("a", 1).sharding_value(), None);
    }

    #[test]
    fn test_conjuncts_flatten_nested_and() {
        let (a, b, c) = (eq("a", 1), eq("b", 2), eq("c", 3));
        let tail = Expr::Paren(Box::new(b.clone().binary(BinaryOp::And, c.clone())));
        let expr = a.clone().binary(BinaryOp::And, tail);
        assert_eq!(expr.conjuncts(), vec![&a, &b, &c]);
    }

    #[test]
    fn test_conjuncts_keep_or_whole() {
        let expr = eq("a", 1).binary(BinaryOp::Or, eq("b", 2));
        assert_eq!(expr.conjuncts(), vec![&expr]);
    }
}
