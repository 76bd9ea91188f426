//! Sharding rule configuration.
//!
//! The parser consults the rule to decide which table names become
//! [`SqlToken::Table`](crate::ast::SqlToken::Table) rewrite tokens and which
//! WHERE predicates become sharding conditions. Lookups ignore ASCII case,
//! matching how unquoted identifiers behave in every supported vendor.
//!
//! ```rust
//! use shard_sql_core::ShardingRule;
//!
//! let rule = ShardingRule::from_json(
//!     r#"{"tables": [{"logic_table": "t_order", "sharding_columns": ["user_id"]}]}"#,
//! )
//! .unwrap();
//! assert!(rule.contains_table("T_ORDER"));
//! assert!(rule.is_sharding_column("t_order", "USER_ID"));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a sharding rule.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The configuration is not valid JSON or does not match the schema.
    #[error("invalid sharding rule: {0}")]
    Json(#[from] serde_json::Error),

    /// The same logic table is configured twice.
    #[error("logic table '{0}' is configured more than once")]
    DuplicateTable(String),
}

/// Sharding configuration of one logic table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRule {
    /// The table name used in application SQL.
    pub logic_table: String,
    /// Columns whose values select the target shard.
    #[serde(default)]
    pub sharding_columns: Vec<String>,
    /// Physical tables backing the logic table.
    #[serde(default)]
    pub actual_tables: Vec<String>,
}

impl TableRule {
    /// Creates a rule for a logic table with no sharding column.
    #[must_use]
    pub fn new(logic_table: impl Into<String>) -> Self {
        Self {
            logic_table: logic_table.into(),
            ..Self::default()
        }
    }

    /// Adds a sharding column.
    #[must_use]
    pub fn sharding_column(mut self, column: impl Into<String>) -> Self {
        self.sharding_columns.push(column.into());
        self
    }

    /// Adds a physical table.
    #[must_use]
    pub fn actual_table(mut self, table: impl Into<String>) -> Self {
        self.actual_tables.push(table.into());
        self
    }

    /// Returns true if `column` is one of this table's sharding columns.
    #[must_use]
    pub fn is_sharding_column(&self, column: &str) -> bool {
        self.sharding_columns
            .iter()
            .any(|c| c.eq_ignore_ascii_case(column))
    }
}

/// The immutable set of logic tables known to the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardingRule {
    /// Configured logic tables.
    #[serde(default)]
    pub tables: Vec<TableRule>,
}

impl ShardingRule {
    /// Creates a rule from table rules.
    #[must_use]
    pub const fn new(tables: Vec<TableRule>) -> Self {
        Self { tables }
    }

    /// Loads a rule from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::Json`] for malformed input and
    /// [`RuleError::DuplicateTable`] when a logic table appears twice.
    pub fn from_json(json: &str) -> Result<Self, RuleError> {
        let rule: Self = serde_json::from_str(json)?;
        for (i, table) in rule.tables.iter().enumerate() {
            if rule.tables[..i]
                .iter()
                .any(|other| other.logic_table.eq_ignore_ascii_case(&table.logic_table))
            {
                return Err(RuleError::DuplicateTable(table.logic_table.clone()));
            }
        }
        tracing::debug!(tables = rule.tables.len(), "loaded sharding rule");
        Ok(rule)
    }

    /// Looks up the rule of a logic table.
    #[must_use]
    pub fn table_rule(&self, logic_table: &str) -> Option<&TableRule> {
        self.tables
            .iter()
            .find(|t| t.logic_table.eq_ignore_ascii_case(logic_table))
    }

    /// Returns true if `table` is a configured logic table.
    #[must_use]
    pub fn contains_table(&self, table: &str) -> bool {
        self.table_rule(table).is_some()
    }

    /// Returns true if `column` shards `table`.
    #[must_use]
    pub fn is_sharding_column(&self, table: &str, column: &str) -> bool {
        self.table_rule(table)
            .is_some_and(|t| t.is_sharding_column(column))
    }
}
