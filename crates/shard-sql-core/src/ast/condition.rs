//! Sharding conditions extracted from the WHERE clause.

use serde::{Deserialize, Serialize};

use super::Literal;

/// A column resolved to the logic table it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConditionColumn {
    /// Logic table name, as written in FROM.
    pub table: String,
    /// Column name.
    pub name: String,
}

/// A value a sharding column is compared against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConditionValue {
    /// A literal known at parse time.
    Literal(Literal),
    /// The 0-based ordinal of a bind parameter.
    Parameter(usize),
}

/// The comparison a condition was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShardingOperator {
    /// `column = value`
    Equal,
    /// `column IN (v1, v2, ...)`
    In,
    /// `column BETWEEN low AND high`
    Between,
}

/// A predicate on a sharding column that routing can evaluate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// The sharding column.
    pub column: ConditionColumn,
    /// How the values relate to the column.
    pub operator: ShardingOperator,
    /// The compared values; two for `Between`.
    pub values: Vec<ConditionValue>,
}
