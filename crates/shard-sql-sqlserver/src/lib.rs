//! # shard-sql-sqlserver
//!
//! SQL Server (T-SQL) SELECT grammar for `shard-sql-core`.
//!
//! # How SQL Server differs from other dialects
//!
//! - **[TOP]**: `TOP n`, `TOP (n)` or `TOP ?` right after `SELECT [DISTINCT]`
//!   sets the row count. `WITH TIES` is accepted; `PERCENT` is rejected.
//! - **[OFFSET / FETCH]**: `OFFSET n ROWS [FETCH NEXT m ROWS ONLY]` after
//!   ORDER BY. The resulting [`Limit`](shard_sql_core::Limit) is flagged as
//!   writing the offset before the row count. A row count given by both TOP
//!   and FETCH is a syntax error.
//! - **`ROW_NUMBER() OVER (ORDER BY ...)`** is recognized as a select item,
//!   the classic pre-2012 pagination idiom. `PARTITION BY` inside the window
//!   is rejected.
//! - **Table hints**: `WITH (NOLOCK)` after a table factor is skipped.
//! - **`FOR BROWSE` and `FOR XML ...`** are skipped; other FOR clauses are
//!   rejected.
//! - **NULL ordering**: NULLs compare lower than any value, so the null
//!   order is always descending.
//!
//! [TOP]: https://learn.microsoft.com/en-us/sql/t-sql/queries/top-transact-sql
//! [OFFSET / FETCH]: https://learn.microsoft.com/en-us/sql/t-sql/queries/select-order-by-clause-transact-sql
//!
//! ## Example
//!
//! ```rust
//! use shard_sql_core::{LimitValue, ShardingRule};
//! use shard_sql_sqlserver::parse_select;
//!
//! let stmt = parse_select(
//!     "SELECT a FROM t ORDER BY a OFFSET ? ROWS FETCH NEXT 10 ROWS ONLY",
//!     &ShardingRule::default(),
//! )
//! .unwrap();
//! let limit = stmt.limit.unwrap();
//! assert_eq!(limit.offset, Some(LimitValue::Parameter(0)));
//! assert_eq!(limit.row_count, Some(LimitValue::Literal(10)));
//! assert!(limit.offset_before_row_count);
//! ```

mod dialect;

pub use dialect::SqlServerDialect;

use shard_sql_core::{ParseError, SelectParser, SelectStatement, ShardingRule};

/// Parses a SQL Server SELECT statement.
///
/// # Errors
///
/// Returns a syntax error for malformed input and an unsupported error for
/// constructs that cannot be sharded (`TOP ... PERCENT`, windows with
/// `PARTITION BY`, `FOR UPDATE`, subqueries, set operators).
pub fn parse_select(sql: &str, rule: &ShardingRule) -> Result<SelectStatement, ParseError> {
    SelectParser::new(sql, &SqlServerDialect, rule).parse()
}
