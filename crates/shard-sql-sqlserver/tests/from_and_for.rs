//! Tests for table hints and FOR clauses.

mod common;
use common::*;

use shard_sql_core::ast::{ConditionColumn, JoinType, TableRef};
use shard_sql_core::{LimitValue, SqlToken};

#[test]
fn nolock_hint_is_skipped() {
    let stmt = parse_sharded("SELECT * FROM t_order o WITH (NOLOCK) WHERE o.user_id = 1");
    assert_eq!(
        stmt.conditions[0].column,
        ConditionColumn {
            table: "t_order".into(),
            name: "user_id".into(),
        }
    );
    assert_eq!(
        stmt.sql_tokens(),
        &[SqlToken::Table {
            begin: 14,
            original_literals: "t_order".into(),
        }]
    );
}

#[test]
fn hint_before_join() {
    let stmt = parse_sharded(
        "SELECT * FROM t_order o WITH (NOLOCK) \
         JOIN t_order_item i ON o.user_id = i.user_id",
    );
    let TableRef::Join { join, .. } = &stmt.from[0] else {
        panic!("Expected join, got {:?}", stmt.from[0]);
    };
    assert_eq!(join.join_type, JoinType::Inner);
    assert_eq!(stmt.sql_tokens().len(), 2);
}

#[test]
fn hint_after_each_comma_table() {
    let stmt = parse_select("SELECT * FROM a WITH (NOLOCK), b WITH (READUNCOMMITTED, INDEX(ix))");
    assert_eq!(stmt.from.len(), 2);
}

#[test]
fn hint_between_joined_table_and_on_is_rejected() {
    let err = parse_err("SELECT * FROM a JOIN b WITH (NOLOCK) ON a.id = b.id");
    assert!(err.is_syntax());
    assert_eq!(err.expected.as_deref(), Some("ON or USING"));
}

#[test]
fn hint_after_on_clause_is_rejected() {
    let err = parse_err("SELECT * FROM a JOIN b ON a.id = b.id WITH (NOLOCK)");
    assert!(err.is_syntax());
    assert_eq!(err.expected.as_deref(), Some("end of statement"));
}

#[test]
fn hint_after_cross_joined_table() {
    let stmt = parse_select("SELECT * FROM a CROSS JOIN b WITH (NOLOCK) JOIN c ON b.id = c.id");
    let TableRef::Join { join, left } = &stmt.from[0] else {
        panic!("Expected join, got {:?}", stmt.from[0]);
    };
    assert_eq!(join.join_type, JoinType::Inner);
    assert!(matches!(**left, TableRef::Join { .. }));
}

#[test]
fn for_browse() {
    let stmt = parse_select("SELECT a FROM t FOR BROWSE");
    assert_eq!(stmt.items.len(), 1);
}

#[test]
fn for_xml_options() {
    for sql in [
        "SELECT a FROM t FOR XML AUTO",
        "SELECT a FROM t FOR XML RAW, TYPE",
        "SELECT a FROM t FOR XML RAW('item'), ELEMENTS XSINIL",
        "SELECT a FROM t FOR XML PATH('row'), ROOT('rows'), ELEMENTS ABSENT",
        "SELECT a FROM t FOR XML EXPLICIT, XMLSCHEMA",
    ] {
        parse_skipped(sql);
    }
    let stmt = parse_select("SELECT a FROM t ORDER BY a OFFSET 0 ROWS FOR XML PATH;");
    assert_eq!(stmt.limit.unwrap().offset, Some(LimitValue::Literal(0)));
}

#[test]
fn for_without_clause_is_a_syntax_error() {
    for sql in ["SELECT a FROM t FOR", "SELECT a FROM t FOR;"] {
        let err = parse_err(sql);
        assert!(err.is_syntax(), "{sql}: {err:?}");
        assert_eq!(err.expected.as_deref(), Some("BROWSE or XML"));
    }
}

#[test]
fn for_xml_requires_an_option() {
    let err = parse_err("SELECT a FROM t FOR XML");
    assert!(err.is_syntax());
    assert_eq!(err.expected.as_deref(), Some("FOR XML option"));
}

#[test]
fn for_update_is_unsupported() {
    let err = parse_err("SELECT a FROM t FOR UPDATE");
    assert!(err.is_unsupported());
    assert!(err.message.contains("FOR UPDATE"));
}

#[test]
fn subquery_in_from_is_unsupported() {
    assert_unsupported(
        "SELECT * FROM (SELECT ROW_NUMBER() OVER (ORDER BY a) rn, a FROM t) x WHERE rn > 10",
    );
}
