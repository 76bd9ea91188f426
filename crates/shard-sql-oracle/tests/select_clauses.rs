//! Tests for Oracle variants of the common clauses.

mod common;
use common::*;

use shard_sql_core::ast::OrderDirection;

#[test]
fn unique_is_distinct() {
    assert!(parse_select("SELECT UNIQUE a FROM t").distinct);
    assert!(parse_select("SELECT DISTINCT a FROM t").distinct);
}

#[test]
fn nulls_first_and_last() {
    let stmt = parse_select("SELECT a FROM t ORDER BY a NULLS FIRST, b DESC NULLS LAST, c");
    let nulls: Vec<OrderDirection> = stmt.order_by.iter().map(|o| o.null_order).collect();
    assert_eq!(
        nulls,
        vec![OrderDirection::Asc, OrderDirection::Desc, OrderDirection::Asc]
    );
    assert_eq!(stmt.order_by[1].direction, OrderDirection::Desc);
}

#[test]
fn nulls_followed_by_other_token_is_syntax_error() {
    let err = parse_err("SELECT a FROM t ORDER BY a NULLS b");
    assert!(err.is_syntax());
}

#[test]
fn rollup_cube_grouping_are_unsupported() {
    assert_unsupported("SELECT a, b FROM t GROUP BY ROLLUP (a, b)");
    assert_unsupported("SELECT a, b FROM t GROUP BY CUBE (a, b)");
    assert_unsupported("SELECT a, b FROM t GROUP BY GROUPING SETS ((a), (b))");
    assert_unsupported("SELECT a, b FROM t GROUP BY a, ROLLUP (b)");
}

#[test]
fn grouping_function_in_select_list_is_fine() {
    parse_skipped("SELECT GROUPING(a) FROM t GROUP BY a");
}

#[test]
fn for_update_variants() {
    for sql in [
        "SELECT a FROM t FOR UPDATE",
        "SELECT a FROM t FOR UPDATE NOWAIT",
        "SELECT a FROM t FOR UPDATE WAIT 5",
        "SELECT a FROM t FOR UPDATE SKIP LOCKED",
        "SELECT a FROM t t1 FOR UPDATE OF t1.a, t1.b NOWAIT",
    ] {
        let stmt = parse_select(sql);
        assert!(stmt.limit.is_none(), "{sql}");
    }
}

#[test]
fn for_update_wait_requires_integer() {
    let err = parse_err("SELECT a FROM t FOR UPDATE WAIT");
    assert!(err.is_syntax());
}

#[test]
fn for_without_update_is_syntax_error() {
    let err = parse_err("SELECT a FROM t FOR SHARE");
    assert!(err.is_syntax());
}

#[test]
fn minus_is_unsupported() {
    assert_unsupported("SELECT a FROM t MINUS SELECT a FROM u");
}

#[test]
fn clause_order() {
    let stmt = parse_select(
        "SELECT UNIQUE a, COUNT(*) FROM t WHERE b = ? CONNECT BY PRIOR a = c GROUP BY a HAVING COUNT(*) > ? ORDER BY a NULLS LAST FOR UPDATE",
    );
    assert_eq!(stmt.parameters_index(), 2);
    assert_eq!(stmt.order_by[0].null_order, OrderDirection::Desc);
}

#[test]
fn top_is_not_oracle_syntax() {
    let err = parse_err("SELECT TOP 5 a FROM t");
    assert!(err.is_syntax());
}
