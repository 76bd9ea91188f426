//! SQL Dialect support.
//!
//! Vendors extend the SELECT grammar in different places. The base grammar
//! lives in [`SelectParser`]; a [`SelectDialect`] plugs vendor clauses into
//! it through a fixed set of hook points. The driver only ever talks to the
//! dialect through this trait.

mod generic;

pub use generic::GenericDialect;

use crate::ast::{OrderDirection, SelectItem, SelectStatement, TableRef};
use crate::lexer::Keyword;
use crate::parser::{ParseError, SelectParser};

/// Hook points a vendor dialect implements on top of the base grammar.
///
/// Dialects are stateless; all parse state lives in the [`SelectParser`]
/// and the [`SelectStatement`] passed to each hook.
pub trait SelectDialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Keywords accepted in place of `DISTINCT`.
    fn distinct_synonyms(&self) -> &'static [Keyword] {
        &[]
    }

    /// Keywords silently skipped in front of a select item.
    fn skipped_keywords_before_select_item(&self) -> &'static [Keyword] {
        &[]
    }

    /// Keywords rejected as unsupported at the start of a GROUP BY item.
    fn unsupported_keywords_before_group_by_item(&self) -> &'static [Keyword] {
        &[]
    }

    /// Consumes an optional NULL ordering suffix after an ORDER BY item.
    ///
    /// The default accepts `NULLS FIRST` and `NULLS LAST`.
    ///
    /// # Errors
    ///
    /// Returns a syntax error for a malformed suffix.
    fn parse_null_order(&self, parser: &mut SelectParser<'_>) -> Result<OrderDirection, ParseError> {
        parser.parse_nulls_first_last()
    }

    /// Parses one table factor of the FROM clause.
    ///
    /// # Errors
    ///
    /// Propagates any grammar violation.
    fn parse_table_factor(
        &self,
        parser: &mut SelectParser<'_>,
        stmt: &mut SelectStatement,
    ) -> Result<TableRef, ParseError> {
        parser.parse_table_factor_internal(stmt)
    }

    /// Returns true if the current token starts the dialect's row-numbering
    /// select item.
    fn is_row_number_select_item(&self, _parser: &SelectParser<'_>) -> bool {
        false
    }

    /// Parses the dialect's row-numbering select item.
    ///
    /// Only called when [`Self::is_row_number_select_item`] returned true.
    ///
    /// # Errors
    ///
    /// Propagates any grammar violation.
    fn parse_row_number_select_item(
        &self,
        parser: &mut SelectParser<'_>,
        _stmt: &mut SelectStatement,
    ) -> Result<SelectItem, ParseError> {
        Err(parser.cursor().unexpected("select item"))
    }

    /// Parses the joins following `left`, if any.
    ///
    /// # Errors
    ///
    /// Propagates any grammar violation.
    fn parse_join_table(
        &self,
        parser: &mut SelectParser<'_>,
        stmt: &mut SelectStatement,
        left: TableRef,
    ) -> Result<TableRef, ParseError> {
        parser.parse_join_table_internal(stmt, left)
    }

    /// Parses everything between `SELECT` and the end of the statement.
    ///
    /// The default runs the common clause sequence.
    ///
    /// # Errors
    ///
    /// Propagates any grammar violation or unsupported construct.
    fn parse_internal(
        &self,
        parser: &mut SelectParser<'_>,
        stmt: &mut SelectStatement,
    ) -> Result<(), ParseError> {
        parser.parse_distinct(stmt)?;
        parser.parse_select_list(stmt)?;
        parser.parse_from(stmt)?;
        parser.parse_where(stmt)?;
        parser.parse_group_by(stmt)?;
        parser.parse_having(stmt)?;
        parser.parse_order_by(stmt)
    }
}
