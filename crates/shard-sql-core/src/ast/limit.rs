//! Normalized pagination.
//!
//! Vendors spell pagination differently (`TOP n`, `OFFSET n ROWS FETCH NEXT m
//! ROWS ONLY`, ...). Every dialect folds its own syntax into one [`Limit`] so
//! the routing engine can reason about "skip this many, return that many"
//! without knowing which grammar produced it.

use serde::{Deserialize, Serialize};

/// How many rows to return or skip.
///
/// The value is either known at parse time or bound later through a `?`
/// placeholder, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LimitValue {
    /// A literal, non-negative integer written in the SQL text.
    Literal(u64),
    /// The 0-based ordinal of the bind parameter supplying the value.
    Parameter(usize),
}

impl LimitValue {
    /// Returns the literal value, if any.
    #[must_use]
    pub const fn literal(&self) -> Option<u64> {
        match self {
            Self::Literal(value) => Some(*value),
            Self::Parameter(_) => None,
        }
    }

    /// Returns the bind parameter index, if any.
    #[must_use]
    pub const fn parameter_index(&self) -> Option<usize> {
        match self {
            Self::Literal(_) => None,
            Self::Parameter(index) => Some(*index),
        }
    }
}

/// Pagination extracted from a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Limit {
    /// Rows to skip.
    pub offset: Option<LimitValue>,
    /// Rows to return.
    pub row_count: Option<LimitValue>,
    /// Whether the dialect writes the offset before the row count.
    pub offset_before_row_count: bool,
}

impl Limit {
    /// Creates an empty limit.
    #[must_use]
    pub const fn new(offset_before_row_count: bool) -> Self {
        Self {
            offset: None,
            row_count: None,
            offset_before_row_count,
        }
    }

    /// Folds `other` into `self`.
    ///
    /// Components already present on `self` win; only missing ones are taken
    /// from `other`.
    pub fn merge(&mut self, other: Self) {
        if self.offset.is_none() {
            self.offset = other.offset;
        }
        if self.row_count.is_none() {
            self.row_count = other.row_count;
        }
        self.offset_before_row_count |= other.offset_before_row_count;
    }
}
