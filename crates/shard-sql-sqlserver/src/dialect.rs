//! SQL Server dialect implementation.

use shard_sql_core::ast::{
    JoinType, Limit, LimitValue, OrderDirection, SelectItem, SelectStatement, SqlToken, TableRef,
};
use shard_sql_core::dialect::SelectDialect;
use shard_sql_core::lexer::{Keyword, TokenKind};
use shard_sql_core::parser::{ParseError, SelectParser};
use tracing::trace;

/// SQL Server dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlServerDialect;

impl SqlServerDialect {
    /// Creates a new SQL Server dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SelectDialect for SqlServerDialect {
    fn name(&self) -> &'static str {
        "sqlserver"
    }

    /// SQL Server has no NULLS FIRST/LAST; NULLs sort as the lowest value.
    fn parse_null_order(
        &self,
        _parser: &mut SelectParser<'_>,
    ) -> Result<OrderDirection, ParseError> {
        Ok(OrderDirection::Desc)
    }

    fn is_row_number_select_item(&self, parser: &SelectParser<'_>) -> bool {
        parser.cursor().check_keyword(Keyword::RowNumber)
    }

    /// `ROW_NUMBER() OVER ([ORDER BY ...]) [AS] alias`
    fn parse_row_number_select_item(
        &self,
        parser: &mut SelectParser<'_>,
        stmt: &mut SelectStatement,
    ) -> Result<SelectItem, ParseError> {
        let cursor = parser.cursor_mut();
        cursor.expect_keyword(Keyword::RowNumber)?;
        cursor.skip_parentheses()?;
        cursor.expect_keyword(Keyword::Over)?;
        cursor.expect(&TokenKind::LeftParen)?;
        if cursor.check_keyword(Keyword::Partition) {
            return Err(ParseError::unsupported(
                "PARTITION BY in ROW_NUMBER() OVER",
                cursor.span(),
            ));
        }
        let order_by = if cursor.skip_if_keyword(Keyword::Order) {
            cursor.expect_keyword(Keyword::By)?;
            parser.parse_order_by_items(stmt)?
        } else {
            vec![]
        };
        parser.cursor_mut().expect(&TokenKind::RightParen)?;
        let alias = parser.parse_alias()?;
        Ok(SelectItem::RowNumber { order_by, alias })
    }

    fn parse_join_table(
        &self,
        parser: &mut SelectParser<'_>,
        stmt: &mut SelectStatement,
        left: TableRef,
    ) -> Result<TableRef, ParseError> {
        // A hint may only follow a table factor, not an ON or USING clause.
        let after_table_factor = match &left {
            TableRef::Table { .. } => true,
            TableRef::Join { join, .. } => join.join_type == JoinType::Cross,
        };
        let cursor = parser.cursor_mut();
        if after_table_factor && cursor.skip_if_keyword(Keyword::With) {
            cursor.skip_parentheses()?;
            trace!("skipped table hint");
        }
        parser.parse_join_table_internal(stmt, left)
    }

    fn parse_internal(
        &self,
        parser: &mut SelectParser<'_>,
        stmt: &mut SelectStatement,
    ) -> Result<(), ParseError> {
        parser.parse_distinct(stmt)?;
        parse_top(parser, stmt)?;
        parser.parse_select_list(stmt)?;
        parser.parse_from(stmt)?;
        parser.parse_where(stmt)?;
        parser.parse_group_by(stmt)?;
        parser.parse_having(stmt)?;
        parser.parse_order_by(stmt)?;
        parse_offset_fetch(parser, stmt)?;
        skip_for(parser)
    }
}

/// `TOP n`, `TOP (n)`, `TOP ?`, `TOP (?)`, optionally `WITH TIES`.
fn parse_top(parser: &mut SelectParser<'_>, stmt: &mut SelectStatement) -> Result<(), ParseError> {
    if !parser.cursor_mut().skip_if_keyword(Keyword::Top) {
        return Ok(());
    }
    let parenthesized = parser.cursor_mut().skip_if(&TokenKind::LeftParen);
    let (row_count, span) = parser.parse_limit_value(stmt)?;
    let cursor = parser.cursor_mut();
    if parenthesized {
        cursor.expect(&TokenKind::RightParen)?;
    }
    if cursor.check_keyword(Keyword::Percent) {
        return Err(ParseError::unsupported("TOP ... PERCENT", cursor.span()));
    }
    if cursor.skip_if_keyword(Keyword::With) {
        cursor.expect_keyword(Keyword::Ties)?;
    }

    if let LimitValue::Literal(value) = row_count {
        stmt.add_sql_token(SqlToken::RowCount {
            begin: span.start,
            row_count: value,
        });
    }
    stmt.limit_or_insert(false).row_count = Some(row_count);
    Ok(())
}

/// `OFFSET n ROW[S] [FETCH FIRST|NEXT m ROW[S] ONLY]`
fn parse_offset_fetch(
    parser: &mut SelectParser<'_>,
    stmt: &mut SelectStatement,
) -> Result<(), ParseError> {
    if !parser.cursor_mut().skip_if_keyword(Keyword::Offset) {
        return Ok(());
    }
    let (offset, offset_span) = parser.parse_limit_value(stmt)?;
    expect_row_or_rows(parser)?;
    if let LimitValue::Literal(value) = offset {
        stmt.add_sql_token(SqlToken::Offset {
            begin: offset_span.start,
            offset: value,
        });
    }

    let mut limit = Limit {
        offset: Some(offset),
        ..Limit::new(true)
    };
    if parser.cursor_mut().skip_if_keyword(Keyword::Fetch) {
        let cursor = parser.cursor_mut();
        if !cursor.skip_if_any(&[Keyword::First, Keyword::Next]) {
            return Err(cursor.unexpected("FIRST or NEXT"));
        }
        let (row_count, span) = parser.parse_limit_value(stmt)?;
        expect_row_or_rows(parser)?;
        parser.cursor_mut().expect_keyword(Keyword::Only)?;

        if stmt.limit.is_some_and(|existing| existing.row_count.is_some()) {
            return Err(ParseError::new(
                "Row count specified by both TOP and FETCH",
                span,
            ));
        }
        if let LimitValue::Literal(value) = row_count {
            stmt.add_sql_token(SqlToken::RowCount {
                begin: span.start,
                row_count: value,
            });
        }
        limit.row_count = Some(row_count);
    }
    stmt.limit_or_insert(true).merge(limit);
    Ok(())
}

fn expect_row_or_rows(parser: &mut SelectParser<'_>) -> Result<(), ParseError> {
    let cursor = parser.cursor_mut();
    if cursor.skip_if_any(&[Keyword::Row, Keyword::Rows]) {
        Ok(())
    } else {
        Err(cursor.unexpected("ROW or ROWS"))
    }
}

/// `FOR BROWSE` or `FOR XML option, ...`; any other FOR clause is rejected.
fn skip_for(parser: &mut SelectParser<'_>) -> Result<(), ParseError> {
    let cursor = parser.cursor_mut();
    if !cursor.skip_if_keyword(Keyword::For) {
        return Ok(());
    }
    if cursor.skip_if_keyword(Keyword::Browse) {
        trace!("skipped FOR BROWSE");
        return Ok(());
    }
    if cursor.current().is_eof() || cursor.check(&TokenKind::Semicolon) {
        return Err(cursor.unexpected("BROWSE or XML"));
    }
    if !cursor.skip_if_keyword(Keyword::Xml) {
        let token = cursor.current();
        let construct = format!("FOR {}", token.span.slice(cursor.source()));
        return Err(ParseError::unsupported(construct, token.span));
    }
    loop {
        match cursor.current().as_keyword() {
            Some(Keyword::Raw | Keyword::Path | Keyword::Root | Keyword::Xmlschema) => {
                cursor.advance();
                if cursor.check(&TokenKind::LeftParen) {
                    cursor.skip_parentheses()?;
                }
            }
            Some(Keyword::Auto | Keyword::Explicit | Keyword::Type) => cursor.advance(),
            Some(Keyword::Elements) => {
                cursor.advance();
                cursor.skip_if_any(&[Keyword::Xsinil, Keyword::Absent]);
            }
            _ => return Err(cursor.unexpected("FOR XML option")),
        }
        if !cursor.skip_if(&TokenKind::Comma) {
            break;
        }
    }
    trace!("skipped FOR XML");
    Ok(())
}
