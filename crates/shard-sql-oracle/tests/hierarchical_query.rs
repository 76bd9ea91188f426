//! Tests for START WITH / CONNECT BY.

mod common;
use common::*;

#[test]
fn start_with_then_connect_by_prior() {
    let stmt = parse_select("SELECT a FROM t START WITH a=1 CONNECT BY PRIOR b=c");
    assert!(stmt.limit.is_none());
    assert!(stmt.sql_tokens().is_empty());
    assert_eq!(stmt.items.len(), 1);
}

#[test]
fn connect_by_before_start_with() {
    let stmt = parse_select(
        "SELECT employee_id FROM employees WHERE dept = 10 CONNECT BY PRIOR employee_id = manager_id START WITH manager_id IS NULL",
    );
    assert!(stmt.where_clause.is_some());
}

#[test]
fn connect_by_nocycle_prior() {
    parse_skipped("SELECT a FROM t CONNECT BY NOCYCLE PRIOR a = b");
    parse_skipped("SELECT a FROM t CONNECT BY NOCYCLE a = b");
}

#[test]
fn prior_on_right_operand() {
    let stmt = parse_skipped("SELECT a FROM t CONNECT BY manager_id = PRIOR employee_id");
    assert_eq!(stmt.items.len(), 1);
    assert!(stmt.where_clause.is_none());
}

#[test]
fn prior_in_every_conjunct() {
    let stmt = parse_skipped(
        "SELECT a FROM t CONNECT BY NOCYCLE PRIOR a = b AND PRIOR c = d AND e = PRIOR ? ORDER BY a",
    );
    assert_eq!(stmt.parameters_index(), 1);
    assert_eq!(stmt.order_by.len(), 1);
}

#[test]
fn prior_outside_connect_by_is_rejected() {
    let err = parse_err("SELECT a FROM t START WITH PRIOR a = 1 CONNECT BY PRIOR a = b");
    assert!(err.is_syntax());
    let err = parse_err("SELECT a FROM t WHERE a = PRIOR b");
    assert!(err.is_syntax());
}

#[test]
fn hierarchical_placeholders_are_counted() {
    let stmt = parse_select("SELECT a FROM t WHERE x = ? START WITH a = ? CONNECT BY PRIOR b = c AND d < ?");
    assert_eq!(stmt.parameters_index(), 3);
}

#[test]
fn connect_by_root_is_skipped_in_select_list() {
    let stmt = parse_select("SELECT CONNECT_BY_ROOT last_name boss, a FROM t CONNECT BY PRIOR a = b");
    assert_eq!(stmt.items.len(), 2);
    assert_eq!(stmt.items[0].alias(), Some("boss"));
}

#[test]
fn start_requires_with() {
    let err = parse_err("SELECT a FROM t START a = 1");
    assert!(err.is_syntax());
}

#[test]
fn connect_requires_by() {
    let err = parse_err("SELECT a FROM t CONNECT a = 1");
    assert!(err.is_syntax());
}

#[test]
fn hierarchical_clause_precedes_group_by() {
    let stmt = parse_select("SELECT a, COUNT(*) FROM t CONNECT BY PRIOR a = b GROUP BY a");
    assert_eq!(stmt.group_by.len(), 1);
}
