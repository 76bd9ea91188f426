//! SELECT statement AST types.

use super::condition::Condition;
use super::expression::Expr;
use super::limit::Limit;
use super::sql_token::SqlToken;
use crate::lexer::Span;

/// Sort direction, used both for rows and for NULL placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

/// An ORDER BY entry.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    /// The expression to order by.
    pub expr: Expr,
    /// The row direction.
    pub direction: OrderDirection,
    /// Where NULLs sort, resolved by the dialect.
    pub null_order: OrderDirection,
}

/// An entry of the select list.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectItem {
    /// `*` or `owner.*`.
    Star {
        /// Table qualifier (optional).
        owner: Option<String>,
    },
    /// Any other expression.
    Expression {
        /// The expression.
        expr: Expr,
        /// Column alias.
        alias: Option<String>,
    },
    /// A windowed row-numbering pseudo-column used for paging.
    RowNumber {
        /// The ORDER BY inside the OVER clause.
        order_by: Vec<OrderItem>,
        /// Column alias.
        alias: Option<String>,
    },
}

impl SelectItem {
    /// Column name under which the row-numbering item is exposed.
    pub const ROW_NUMBER_COLUMN: &'static str = "ROW_NUMBER";

    /// Returns the alias, if one was written.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        match self {
            Self::Star { .. } => None,
            Self::Expression { alias, .. } | Self::RowNumber { alias, .. } => alias.as_deref(),
        }
    }
}

/// `[INNER] JOIN`, `LEFT|RIGHT|FULL [OUTER] JOIN` or `CROSS JOIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

/// The right-hand side of a join.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    pub join_type: JoinType,
    pub table: TableRef,
    /// Absent for CROSS and USING joins.
    pub on: Option<Expr>,
    pub using: Vec<String>,
}

/// A table reference in FROM clause.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRef {
    /// A named table.
    Table {
        /// Schema name (optional).
        schema: Option<String>,
        /// Table name.
        name: String,
        /// Alias.
        alias: Option<String>,
        /// Span of the table name, without schema.
        span: Span,
    },
    /// A joined table.
    Join {
        /// Left side of the join.
        left: Box<TableRef>,
        /// The join clause.
        join: Box<JoinClause>,
    },
}

impl TableRef {
    /// Visits every named table in this tree, left to right.
    pub fn for_each_table<'a>(&'a self, f: &mut impl FnMut(&'a str, Option<&'a str>)) {
        match self {
            Self::Table { name, alias, .. } => f(name, alias.as_deref()),
            Self::Join { left, join } => {
                left.for_each_table(f);
                join.table.for_each_table(f);
            }
        }
    }
}

/// A SELECT statement under construction, then handed to routing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectStatement {
    /// Whether DISTINCT (or a dialect synonym) was given.
    pub distinct: bool,
    /// The select list.
    pub items: Vec<SelectItem>,
    /// Comma-separated FROM entries, each possibly a join tree.
    pub from: Vec<TableRef>,
    /// The WHERE predicate.
    pub where_clause: Option<Expr>,
    /// GROUP BY expressions.
    pub group_by: Vec<Expr>,
    /// The HAVING predicate.
    pub having: Option<Expr>,
    /// ORDER BY items.
    pub order_by: Vec<OrderItem>,
    /// Pagination, if any clause produced one.
    pub limit: Option<Limit>,
    /// Sharding conditions found in WHERE.
    pub conditions: Vec<Condition>,
    parameters_index: usize,
    sql_tokens: Vec<SqlToken>,
}

impl SelectStatement {
    /// Creates an empty statement.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `?` placeholders consumed so far.
    #[must_use]
    pub const fn parameters_index(&self) -> usize {
        self.parameters_index
    }

    /// Claims the next placeholder ordinal.
    ///
    /// Must be called exactly once per `?` consumed.
    pub fn consume_parameter(&mut self) -> usize {
        let index = self.parameters_index;
        self.parameters_index += 1;
        index
    }

    /// Rewrite tokens, ordered by offset.
    #[must_use]
    pub fn sql_tokens(&self) -> &[SqlToken] {
        &self.sql_tokens
    }

    /// Records a rewrite token, keeping the list ordered by offset.
    pub fn add_sql_token(&mut self, token: SqlToken) {
        let at = self
            .sql_tokens
            .partition_point(|existing| existing.begin() <= token.begin());
        self.sql_tokens.insert(at, token);
    }

    /// Returns the limit, creating an empty one if none exists yet.
    pub fn limit_or_insert(&mut self, offset_before_row_count: bool) -> &mut Limit {
        self.limit
            .get_or_insert_with(|| Limit::new(offset_before_row_count))
    }

    /// Returns `(name, alias)` for every table referenced in FROM.
    #[must_use]
    pub fn tables(&self) -> Vec<(&str, Option<&str>)> {
        let mut tables = Vec::new();
        for table_ref in &self.from {
            table_ref.for_each_table(&mut |name, alias| tables.push((name, alias)));
        }
        tables
    }
}
