#![allow(dead_code)]

use shard_sql_core::ast::{Expr, SelectItem, SelectStatement};
use shard_sql_core::{GenericDialect, ParseError, SelectParser, ShardingRule, TableRule};

/// Installs a test-writer subscriber; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// A rule with `t_order` sharded by `user_id` and `order_id`, and
/// `t_order_item` sharded by `order_id`.
pub fn order_rule() -> ShardingRule {
    ShardingRule::new(vec![
        TableRule::new("t_order")
            .sharding_column("user_id")
            .sharding_column("order_id")
            .actual_table("t_order_0")
            .actual_table("t_order_1"),
        TableRule::new("t_order_item").sharding_column("order_id"),
    ])
}

pub fn parse_with(sql: &str, rule: &ShardingRule) -> Result<SelectStatement, ParseError> {
    init_tracing();
    SelectParser::new(sql, &GenericDialect, rule).parse()
}

pub fn parse_select(sql: &str) -> SelectStatement {
    parse_with(sql, &ShardingRule::default())
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_sharded(sql: &str) -> SelectStatement {
    parse_with(sql, &order_rule())
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    parse_with(sql, &ShardingRule::default())
        .expect_err(&format!("Expected parse error for: {sql}"))
}

/// Returns the expression of the n-th select item.
pub fn item_expr(stmt: &SelectStatement, n: usize) -> &Expr {
    match &stmt.items[n] {
        SelectItem::Expression { expr, .. } => expr,
        other => panic!("Expected expression item, got {other:?}"),
    }
}
