#![allow(dead_code)]

use shard_sql_core::{ParseError, SelectStatement, ShardingRule, TableRule};

/// Installs a test-writer subscriber; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// `t_order` sharded by `user_id`, `t_order_item` by `order_id`.
pub fn order_rule() -> ShardingRule {
    ShardingRule::new(vec![
        TableRule::new("t_order").sharding_column("user_id"),
        TableRule::new("t_order_item").sharding_column("order_id"),
    ])
}

pub fn parse(sql: &str) -> Result<SelectStatement, ParseError> {
    init_tracing();
    shard_sql_sqlserver::parse_select(sql, &ShardingRule::default())
}

pub fn parse_select(sql: &str) -> SelectStatement {
    parse(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_sharded(sql: &str) -> SelectStatement {
    init_tracing();
    shard_sql_sqlserver::parse_select(sql, &order_rule())
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    parse(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn assert_unsupported(sql: &str) {
    let err = parse_err(sql);
    assert!(err.is_unsupported(), "expected unsupported for {sql}, got {err:?}");
}

/// Parses a statement whose vendor clauses must leave no trace: no limit
/// and no rewrite tokens.
pub fn parse_skipped(sql: &str) -> SelectStatement {
    let stmt = parse_select(sql);
    assert!(stmt.limit.is_none(), "unexpected limit for {sql}");
    assert!(stmt.sql_tokens().is_empty(), "unexpected tokens for {sql}");
    stmt
}
