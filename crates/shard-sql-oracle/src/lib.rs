//! # shard-sql-oracle
//!
//! Oracle-specific SELECT grammar for `shard-sql-core`.
//!
//! # How Oracle differs from other dialects
//!
//! - **[Hierarchical queries]**: `START WITH ... CONNECT BY [NOCYCLE] ...`,
//!   in either order, where `PRIOR` may prefix any operand of the
//!   `CONNECT BY` condition. The conditions are parsed (so their bind
//!   parameters are counted) and then discarded.
//! - **[MODEL clause]**: spreadsheet-style calculations after HAVING.
//!   The main model is skipped; reference models are rejected.
//! - **[Flashback queries]**: `AS OF SCN|TIMESTAMP` and `VERSIONS BETWEEN`
//!   read past versions of a table and are rejected as unsupported.
//! - **Table suffixes**: `SAMPLE [BLOCK] (n) [SEED (n)]`,
//!   `PARTITION (p)`, `SUBPARTITION (p)`, `PIVOT`/`UNPIVOT` and the
//!   `ONLY (table)` form are skipped.
//! - **`UNIQUE`** is a synonym for `DISTINCT`; `CONNECT_BY_ROOT` in front
//!   of a select item is ignored.
//! - **`GROUP BY`** extensions `ROLLUP`, `CUBE` and `GROUPING SETS` are
//!   rejected as unsupported.
//! - **NULL ordering**: `NULLS FIRST` sorts NULLs ascending, `NULLS LAST`
//!   descending; ascending when absent.
//! - **Locking**: `FOR UPDATE [OF ...] [NOWAIT | WAIT n | SKIP LOCKED]`
//!   is accepted and has no effect on the result.
//!
//! [Hierarchical queries]: https://docs.oracle.com/en/database/oracle/oracle-database/19/sqlrf/Hierarchical-Queries.html
//! [MODEL clause]: https://docs.oracle.com/en/database/oracle/oracle-database/19/dwhsg/sql-modeling-data-warehouses.html
//! [Flashback queries]: https://docs.oracle.com/en/database/oracle/oracle-database/19/adfns/flashback.html
//!
//! ## Example
//!
//! ```rust
//! use shard_sql_core::ShardingRule;
//! use shard_sql_oracle::parse_select;
//!
//! let stmt = parse_select(
//!     "SELECT a FROM t START WITH a = 1 CONNECT BY PRIOR b = c",
//!     &ShardingRule::default(),
//! )
//! .unwrap();
//! assert!(stmt.limit.is_none());
//! ```

mod dialect;

pub use dialect::OracleDialect;

use shard_sql_core::{ParseError, SelectParser, SelectStatement, ShardingRule};

/// Parses an Oracle SELECT statement.
///
/// # Errors
///
/// Returns a syntax error for malformed input and an unsupported error for
/// constructs that cannot be sharded (flashback queries, ROLLUP/CUBE,
/// MODEL reference models, subqueries, set operators).
pub fn parse_select(sql: &str, rule: &ShardingRule) -> Result<SelectStatement, ParseError> {
    SelectParser::new(sql, &OracleDialect, rule).parse()
}
