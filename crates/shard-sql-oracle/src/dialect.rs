//! Oracle dialect implementation.

use shard_sql_core::ast::{OrderDirection, SelectStatement, TableRef};
use shard_sql_core::dialect::SelectDialect;
use shard_sql_core::lexer::{Keyword, TokenKind};
use shard_sql_core::parser::{ParseError, SelectParser};
use tracing::trace;

/// Oracle dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct OracleDialect;

impl OracleDialect {
    /// Creates a new Oracle dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SelectDialect for OracleDialect {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn distinct_synonyms(&self) -> &'static [Keyword] {
        &[Keyword::Unique]
    }

    fn skipped_keywords_before_select_item(&self) -> &'static [Keyword] {
        &[Keyword::ConnectByRoot]
    }

    fn unsupported_keywords_before_group_by_item(&self) -> &'static [Keyword] {
        &[Keyword::Rollup, Keyword::Cube, Keyword::Grouping]
    }

    fn parse_null_order(
        &self,
        parser: &mut SelectParser<'_>,
    ) -> Result<OrderDirection, ParseError> {
        parser.parse_nulls_first_last()
    }

    fn parse_table_factor(
        &self,
        parser: &mut SelectParser<'_>,
        stmt: &mut SelectStatement,
    ) -> Result<TableRef, ParseError> {
        let table = if parser.cursor_mut().skip_if_keyword(Keyword::Only) {
            let cursor = parser.cursor_mut();
            let parenthesized = cursor.skip_if(&TokenKind::LeftParen);
            let table = parse_query_table_expression(parser, stmt)?;
            if parenthesized {
                parser.cursor_mut().expect(&TokenKind::RightParen)?;
            }
            table
        } else {
            let table = parse_query_table_expression(parser, stmt)?;
            skip_pivot_clause(parser)?;
            table
        };
        reject_flashback_query(parser)?;
        Ok(table)
    }

    fn parse_internal(
        &self,
        parser: &mut SelectParser<'_>,
        stmt: &mut SelectStatement,
    ) -> Result<(), ParseError> {
        parser.parse_distinct(stmt)?;
        parser.parse_select_list(stmt)?;
        parser.parse_from(stmt)?;
        parser.parse_where(stmt)?;
        skip_hierarchical_query_clause(parser, stmt)?;
        parser.parse_group_by(stmt)?;
        parser.parse_having(stmt)?;
        skip_model_clause(parser)?;
        parser.parse_order_by(stmt)?;
        skip_for_update(parser, stmt)
    }
}

/// `table [alias] [SAMPLE ...] [PARTITION ...] [SUBPARTITION ...]`
fn parse_query_table_expression(
    parser: &mut SelectParser<'_>,
    stmt: &mut SelectStatement,
) -> Result<TableRef, ParseError> {
    let table = parser.parse_table_factor_internal(stmt)?;
    skip_sample_clause(parser)?;
    skip_partition_extension(parser, Keyword::Partition)?;
    skip_partition_extension(parser, Keyword::Subpartition)?;
    Ok(table)
}

fn skip_sample_clause(parser: &mut SelectParser<'_>) -> Result<(), ParseError> {
    let cursor = parser.cursor_mut();
    if !cursor.skip_if_keyword(Keyword::Sample) {
        return Ok(());
    }
    cursor.skip_if_keyword(Keyword::Block);
    cursor.skip_parentheses()?;
    if cursor.skip_if_keyword(Keyword::Seed) {
        cursor.skip_parentheses()?;
    }
    trace!("skipped SAMPLE clause");
    Ok(())
}

/// `PARTITION (name)`, `PARTITION FOR (key)` and the SUBPARTITION forms.
fn skip_partition_extension(
    parser: &mut SelectParser<'_>,
    keyword: Keyword,
) -> Result<(), ParseError> {
    let cursor = parser.cursor_mut();
    if !cursor.skip_if_keyword(keyword) {
        return Ok(());
    }
    if cursor.skip_if_keyword(Keyword::For) {
        cursor.skip_parentheses()?;
    } else {
        cursor.skip_parentheses()?;
        if cursor.skip_if_keyword(Keyword::For) {
            cursor.skip_parentheses()?;
        }
    }
    trace!(keyword = keyword.as_str(), "skipped partition extension");
    Ok(())
}

fn skip_pivot_clause(parser: &mut SelectParser<'_>) -> Result<(), ParseError> {
    let cursor = parser.cursor_mut();
    if cursor.skip_if_keyword(Keyword::Pivot) {
        cursor.skip_if_keyword(Keyword::Xml);
        cursor.skip_parentheses()?;
        trace!("skipped PIVOT clause");
    } else if cursor.skip_if_keyword(Keyword::Unpivot) {
        if cursor.skip_if_any(&[Keyword::Include, Keyword::Exclude]) {
            cursor.expect_keyword(Keyword::Nulls)?;
        }
        cursor.skip_parentheses()?;
        trace!("skipped UNPIVOT clause");
    }
    Ok(())
}

/// `VERSIONS BETWEEN ...` and `AS OF SCN|TIMESTAMP ...` read historical
/// data that the shards cannot be asked for consistently.
fn reject_flashback_query(parser: &SelectParser<'_>) -> Result<(), ParseError> {
    let cursor = parser.cursor();
    if cursor.check_keyword(Keyword::Versions) && cursor.peek_keyword(Keyword::Between) {
        return Err(ParseError::unsupported(
            "flashback query (VERSIONS BETWEEN)",
            cursor.span(),
        ));
    }
    if cursor.check_keyword(Keyword::As) && cursor.peek_keyword(Keyword::Of) {
        return Err(ParseError::unsupported(
            "flashback query (AS OF)",
            cursor.span(),
        ));
    }
    Ok(())
}

/// CONNECT BY may come before and/or after START WITH.
fn skip_hierarchical_query_clause(
    parser: &mut SelectParser<'_>,
    stmt: &mut SelectStatement,
) -> Result<(), ParseError> {
    skip_connect_by(parser, stmt)?;
    skip_start_with(parser, stmt)?;
    skip_connect_by(parser, stmt)
}

fn skip_start_with(
    parser: &mut SelectParser<'_>,
    stmt: &mut SelectStatement,
) -> Result<(), ParseError> {
    if !parser.cursor_mut().skip_if_keyword(Keyword::Start) {
        return Ok(());
    }
    parser.cursor_mut().expect_keyword(Keyword::With)?;
    parser.parse_expression(stmt)?;
    trace!("skipped START WITH clause");
    Ok(())
}

fn skip_connect_by(
    parser: &mut SelectParser<'_>,
    stmt: &mut SelectStatement,
) -> Result<(), ParseError> {
    let cursor = parser.cursor_mut();
    if !cursor.skip_if_keyword(Keyword::Connect) {
        return Ok(());
    }
    cursor.expect_keyword(Keyword::By)?;
    cursor.skip_if_keyword(Keyword::Nocycle);
    parser.parse_hierarchical_condition(stmt)?;
    trace!("skipped CONNECT BY clause");
    Ok(())
}

fn skip_model_clause(parser: &mut SelectParser<'_>) -> Result<(), ParseError> {
    let cursor = parser.cursor_mut();
    if !cursor.skip_if_keyword(Keyword::Model) {
        return Ok(());
    }
    skip_cell_reference_options(parser)?;

    let cursor = parser.cursor_mut();
    if cursor.skip_if_keyword(Keyword::Return) {
        if !cursor.skip_if_any(&[Keyword::All, Keyword::Updated]) {
            return Err(cursor.unexpected("ALL or UPDATED"));
        }
        cursor.expect_keyword(Keyword::Rows)?;
    }

    // REFERENCE name ON (subquery) <column clause> <cell reference options>
    if cursor.skip_if_keyword(Keyword::Reference) {
        cursor.expect_identifier()?;
        cursor.expect_keyword(Keyword::On)?;
        cursor.skip_parentheses()?;
        return Err(ParseError::unsupported(
            "MODEL reference column clause",
            cursor.span(),
        ));
    }

    skip_main_model(parser)?;
    trace!("skipped MODEL clause");
    Ok(())
}

fn skip_cell_reference_options(parser: &mut SelectParser<'_>) -> Result<(), ParseError> {
    let cursor = parser.cursor_mut();
    if cursor.skip_if_any(&[Keyword::Ignore, Keyword::Keep]) {
        cursor.expect_keyword(Keyword::Nav)?;
    }
    if cursor.skip_if_keyword(Keyword::Unique) {
        if cursor.skip_if_keyword(Keyword::Single) {
            cursor.expect_keyword(Keyword::Reference)?;
        } else {
            cursor.expect_keyword(Keyword::Dimension)?;
        }
    }
    Ok(())
}

fn skip_main_model(parser: &mut SelectParser<'_>) -> Result<(), ParseError> {
    let cursor = parser.cursor_mut();
    if cursor.skip_if_keyword(Keyword::Main) {
        cursor.expect_identifier()?;
    }
    if cursor.skip_if_keyword(Keyword::Partition) {
        cursor.expect_keyword(Keyword::By)?;
        if !cursor.check(&TokenKind::LeftParen) {
            return Err(ParseError::unsupported(
                "PARTITION BY without parentheses in MODEL",
                cursor.span(),
            ));
        }
        cursor.skip_parentheses()?;
    }
    cursor.expect_keyword(Keyword::Dimension)?;
    cursor.expect_keyword(Keyword::By)?;
    cursor.skip_parentheses()?;
    cursor.expect_keyword(Keyword::Measures)?;
    cursor.skip_parentheses()?;
    skip_cell_reference_options(parser)?;
    skip_model_rules(parser)
}

/// `[RULES [UPDATE|UPSERT [ALL]] [AUTOMATIC|SEQUENTIAL ORDER]]
/// [ITERATE (n) [UNTIL (cond)]] (rule, ...)`
fn skip_model_rules(parser: &mut SelectParser<'_>) -> Result<(), ParseError> {
    let cursor = parser.cursor_mut();
    if cursor.skip_if_keyword(Keyword::Rules) {
        if cursor.skip_if_keyword(Keyword::Upsert) {
            cursor.skip_if_keyword(Keyword::All);
        } else {
            cursor.skip_if_keyword(Keyword::Update);
        }
        if cursor.skip_if_any(&[Keyword::Automatic, Keyword::Sequential]) {
            cursor.expect_keyword(Keyword::Order)?;
        }
    }
    if cursor.skip_if_keyword(Keyword::Iterate) {
        cursor.skip_parentheses()?;
        if cursor.skip_if_keyword(Keyword::Until) {
            cursor.skip_parentheses()?;
        }
    }
    cursor.skip_parentheses()?;
    Ok(())
}

/// `FOR UPDATE [OF column, ...] [NOWAIT | WAIT n | SKIP LOCKED]`
fn skip_for_update(
    parser: &mut SelectParser<'_>,
    stmt: &mut SelectStatement,
) -> Result<(), ParseError> {
    if !parser.cursor_mut().skip_if_keyword(Keyword::For) {
        return Ok(());
    }
    parser.cursor_mut().expect_keyword(Keyword::Update)?;
    if parser.cursor_mut().skip_if_keyword(Keyword::Of) {
        loop {
            parser.parse_expression(stmt)?;
            if !parser.cursor_mut().skip_if(&TokenKind::Comma) {
                break;
            }
        }
    }
    let cursor = parser.cursor_mut();
    if cursor.skip_if_keyword(Keyword::Wait) {
        cursor.expect(&TokenKind::Integer(0))?;
    } else if cursor.skip_if_keyword(Keyword::Skip) {
        cursor.expect_keyword(Keyword::Locked)?;
    } else {
        cursor.skip_if_keyword(Keyword::Nowait);
    }
    trace!("skipped FOR UPDATE clause");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracle_dialect() {
        let dialect = OracleDialect::new();
        assert_eq!(dialect.name(), "oracle");
        assert_eq!(dialect.distinct_synonyms(), &[Keyword::Unique]);
        assert_eq!(
            dialect.skipped_keywords_before_select_item(),
            &[Keyword::ConnectByRoot]
        );
        assert!(dialect
            .unsupported_keywords_before_group_by_item()
            .contains(&Keyword::Cube));
    }
}
