//! Tests for table rewrite tokens and sharding conditions.

mod common;
use common::*;

use shard_sql_core::ast::{ConditionColumn, ConditionValue, Literal, ShardingOperator};
use shard_sql_core::SqlToken;

fn table_token(begin: usize, literals: &str) -> SqlToken {
    SqlToken::Table {
        begin,
        original_literals: String::from(literals),
    }
}

#[test]
fn no_tokens_without_rule() {
    let stmt = parse_select("SELECT * FROM t_order WHERE user_id = 1");
    assert!(stmt.sql_tokens().is_empty());
    assert!(stmt.conditions.is_empty());
}

#[test]
fn logic_table_gets_token() {
    let stmt = parse_sharded("SELECT * FROM t_order");
    assert_eq!(stmt.sql_tokens(), &[table_token(14, "t_order")]);
}

#[test]
fn unconfigured_table_gets_no_token() {
    let stmt = parse_sharded("SELECT * FROM t_user");
    assert!(stmt.sql_tokens().is_empty());
}

#[test]
fn quoted_table_keeps_quotes() {
    let stmt = parse_sharded("SELECT * FROM \"t_order\" o");
    assert_eq!(stmt.sql_tokens(), &[table_token(14, "\"t_order\"")]);
}

#[test]
fn schema_qualified_table_token_starts_at_name() {
    let stmt = parse_sharded("SELECT * FROM db.T_ORDER");
    assert_eq!(stmt.sql_tokens(), &[table_token(17, "T_ORDER")]);
}

#[test]
fn every_occurrence_is_recorded_in_order() {
    let sql = "SELECT t_order.user_id FROM t_order JOIN t_order_item ON t_order.order_id = t_order_item.order_id";
    let stmt = parse_sharded(sql);
    let begins: Vec<usize> = stmt.sql_tokens().iter().map(SqlToken::begin).collect();
    let mut expected: Vec<usize> = sql.match_indices("t_order").map(|(i, _)| i).collect();
    expected.sort_unstable();
    assert_eq!(begins, expected);
}

#[test]
fn equal_condition_with_literal() {
    let stmt = parse_sharded("SELECT * FROM t_order WHERE user_id = 10 AND status = 'PAID'");
    assert_eq!(stmt.conditions.len(), 1);
    let condition = &stmt.conditions[0];
    assert_eq!(
        condition.column,
        ConditionColumn {
            table: String::from("t_order"),
            name: String::from("user_id"),
        }
    );
    assert_eq!(condition.operator, ShardingOperator::Equal);
    assert_eq!(
        condition.values,
        vec![ConditionValue::Literal(Literal::Integer(10))]
    );
}

#[test]
fn reversed_equal_condition() {
    let stmt = parse_sharded("SELECT * FROM t_order WHERE ? = user_id");
    assert_eq!(stmt.conditions[0].values, vec![ConditionValue::Parameter(0)]);
}

#[test]
fn in_and_between_conditions() {
    let stmt = parse_sharded(
        "SELECT * FROM t_order o WHERE o.user_id IN (?, 2) AND o.order_id BETWEEN ? AND 100",
    );
    assert_eq!(stmt.conditions.len(), 2);
    assert_eq!(stmt.conditions[0].operator, ShardingOperator::In);
    assert_eq!(
        stmt.conditions[0].values,
        vec![
            ConditionValue::Parameter(0),
            ConditionValue::Literal(Literal::Integer(2)),
        ]
    );
    assert_eq!(stmt.conditions[1].operator, ShardingOperator::Between);
    assert_eq!(
        stmt.conditions[1].values,
        vec![
            ConditionValue::Parameter(1),
            ConditionValue::Literal(Literal::Integer(100)),
        ]
    );
}

#[test]
fn owner_resolves_through_alias() {
    let stmt = parse_sharded(
        "SELECT * FROM t_order o JOIN t_order_item i ON o.order_id = i.order_id WHERE i.order_id = 7",
    );
    assert_eq!(stmt.conditions.len(), 1);
    assert_eq!(stmt.conditions[0].column.table, "t_order_item");
}

#[test]
fn ambiguous_unqualified_column_is_skipped() {
    let stmt = parse_sharded(
        "SELECT * FROM t_order o JOIN t_order_item i ON o.order_id = i.order_id WHERE order_id = 7",
    );
    assert!(stmt.conditions.is_empty());
}

#[test]
fn unqualified_column_resolves_to_the_only_sharded_table() {
    let stmt = parse_sharded("SELECT * FROM t_order, t_user WHERE user_id = 1");
    assert_eq!(stmt.conditions.len(), 1);
    assert_eq!(stmt.conditions[0].column.table, "t_order");
}

#[test]
fn or_and_negated_predicates_are_skipped() {
    let stmt = parse_sharded(
        "SELECT * FROM t_order WHERE (user_id = 1 OR user_id = 2) AND order_id NOT IN (1) AND order_id > 5",
    );
    assert!(stmt.conditions.is_empty());
}

#[test]
fn non_sharding_column_is_skipped() {
    let stmt = parse_sharded("SELECT * FROM t_order WHERE status = 1");
    assert!(stmt.conditions.is_empty());
}

#[test]
fn negated_conjunct_does_not_hide_its_neighbour() {
    let stmt = parse_sharded("SELECT * FROM t_order WHERE NOT order_id = 3 AND user_id = 1");
    assert_eq!(stmt.conditions.len(), 1);
    assert_eq!(stmt.conditions[0].column.name, "user_id");
}
