//! Positional rewrite tokens.
//!
//! A rewrite token marks a span of the original SQL text that the routing
//! engine may replace when it generates the per-shard SQL. The parser never
//! serializes SQL itself; it only records where the edits go.

use serde::{Deserialize, Serialize};

/// A positional edit record keyed by its byte offset in the original SQL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SqlToken {
    /// A logic table name that must become a physical table name.
    Table {
        /// Offset of the first byte of the name, quotes included.
        begin: usize,
        /// The name exactly as written, quotes included.
        original_literals: String,
    },
    /// A literal row count.
    RowCount {
        /// Offset of the first digit.
        begin: usize,
        /// The literal value.
        row_count: u64,
    },
    /// A literal offset.
    Offset {
        /// Offset of the first digit.
        begin: usize,
        /// The literal value.
        offset: u64,
    },
}

impl SqlToken {
    /// Returns the byte offset this token is anchored at.
    #[must_use]
    pub const fn begin(&self) -> usize {
        match self {
            Self::Table { begin, .. } | Self::RowCount { begin, .. } | Self::Offset { begin, .. } => {
                *begin
            }
        }
    }
}
