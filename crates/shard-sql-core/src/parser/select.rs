//! Base SELECT grammar driver.

use tracing::{debug, trace};

use super::cursor::TokenCursor;
use super::error::ParseError;
use super::pratt::{binary_operator, infix_binding_power, prefix_operator, Precedence};
use crate::ast::{
    BinaryOp, Condition, ConditionColumn, Expr, FunctionCall, JoinClause, JoinType, LimitValue,
    Literal, OrderDirection, OrderItem, SelectItem, SelectStatement, ShardingOperator, SqlToken,
    TableRef, UnaryOp,
};
use crate::dialect::SelectDialect;
use crate::lexer::{Keyword, Span, TokenKind};
use crate::rule::ShardingRule;

/// Parses one SELECT statement for a given dialect.
///
/// The driver owns the token cursor and runs the common grammar. Every
/// vendor-specific decision is delegated to the [`SelectDialect`].
///
/// ```rust
/// use shard_sql_core::{GenericDialect, SelectParser, ShardingRule};
///
/// let rule = ShardingRule::default();
/// let stmt = SelectParser::new("SELECT a FROM t WHERE b = ?", &GenericDialect, &rule)
///     .parse()
///     .unwrap();
/// assert_eq!(stmt.parameters_index(), 1);
/// ```
pub struct SelectParser<'a> {
    cursor: TokenCursor<'a>,
    dialect: &'a dyn SelectDialect,
    rule: &'a ShardingRule,
    /// Set while a `CONNECT BY` condition is parsed: `PRIOR` may then
    /// prefix any operand.
    prior_operands: bool,
}

impl<'a> SelectParser<'a> {
    /// Creates a parser for `sql`.
    #[must_use]
    pub fn new(sql: &'a str, dialect: &'a dyn SelectDialect, rule: &'a ShardingRule) -> Self {
        Self {
            cursor: TokenCursor::new(sql),
            dialect,
            rule,
            prior_operands: false,
        }
    }

    /// Parses the statement.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if the input does not match the grammar, or an
    /// unsupported error for recognized constructs that cannot be sharded.
    pub fn parse(mut self) -> Result<SelectStatement, ParseError> {
        let dialect = self.dialect;
        debug!(dialect = dialect.name(), "parsing select statement");

        let mut stmt = SelectStatement::new();
        self.cursor.expect_keyword(Keyword::Select)?;
        dialect.parse_internal(&mut self, &mut stmt)?;
        self.parse_rest()?;

        debug!(
            dialect = dialect.name(),
            items = stmt.items.len(),
            limit = ?stmt.limit,
            tokens = stmt.sql_tokens().len(),
            conditions = stmt.conditions.len(),
            "parsed select statement"
        );
        Ok(stmt)
    }

    /// Returns the token cursor.
    #[must_use]
    pub const fn cursor(&self) -> &TokenCursor<'a> {
        &self.cursor
    }

    /// Returns the token cursor for dialect clauses.
    pub fn cursor_mut(&mut self) -> &mut TokenCursor<'a> {
        &mut self.cursor
    }

    /// Returns the sharding rule.
    #[must_use]
    pub const fn rule(&self) -> &'a ShardingRule {
        self.rule
    }

    /// Returns the dialect driving this parse.
    #[must_use]
    pub fn dialect(&self) -> &'a dyn SelectDialect {
        self.dialect
    }

    // --- Common clauses ---

    /// Parses `DISTINCT`, a dialect synonym of it, or `ALL`.
    ///
    /// # Errors
    ///
    /// This never fails.
    pub fn parse_distinct(&mut self, stmt: &mut SelectStatement) -> Result<(), ParseError> {
        if self.cursor.skip_if_keyword(Keyword::Distinct)
            || self.cursor.skip_if_any(self.dialect.distinct_synonyms())
        {
            stmt.distinct = true;
        } else {
            self.cursor.skip_if_keyword(Keyword::All);
        }
        Ok(())
    }

    /// Parses the select list.
    ///
    /// # Errors
    ///
    /// Propagates any grammar violation.
    pub fn parse_select_list(&mut self, stmt: &mut SelectStatement) -> Result<(), ParseError> {
        loop {
            let item = self.parse_select_item(stmt)?;
            stmt.items.push(item);
            if !self.cursor.skip_if(&TokenKind::Comma) {
                break;
            }
        }
        Ok(())
    }

    fn parse_select_item(&mut self, stmt: &mut SelectStatement) -> Result<SelectItem, ParseError> {
        let dialect = self.dialect;
        if self
            .cursor
            .skip_if_any(dialect.skipped_keywords_before_select_item())
        {
            trace!("skipped keyword before select item");
        }
        if dialect.is_row_number_select_item(self) {
            return dialect.parse_row_number_select_item(self, stmt);
        }

        let expr = self.parse_expression(stmt)?;
        if let Expr::Wildcard { owner } = expr {
            return Ok(SelectItem::Star { owner });
        }
        let alias = self.parse_alias()?;
        Ok(SelectItem::Expression { expr, alias })
    }

    /// Parses `[AS] alias`.
    ///
    /// Without `AS`, only a plain identifier is taken as an alias so that
    /// clause keywords are never swallowed. `AS OF` is left in place for
    /// dialects with flashback queries.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if `AS` is not followed by a name.
    pub fn parse_alias(&mut self) -> Result<Option<String>, ParseError> {
        if self.cursor.check_keyword(Keyword::As) && self.cursor.peek_keyword(Keyword::Of) {
            return Ok(None);
        }
        if self.cursor.skip_if_keyword(Keyword::As) {
            if let TokenKind::String(alias) = &self.cursor.current().kind {
                let alias = alias.clone();
                self.cursor.advance();
                return Ok(Some(alias));
            }
            return self.cursor.expect_identifier().map(Some);
        }
        if self.cursor.check(&TokenKind::Identifier(String::new())) {
            return self.cursor.expect_identifier().map(Some);
        }
        Ok(None)
    }

    /// Parses an optional FROM clause.
    ///
    /// # Errors
    ///
    /// Propagates any grammar violation.
    pub fn parse_from(&mut self, stmt: &mut SelectStatement) -> Result<(), ParseError> {
        if !self.cursor.skip_if_keyword(Keyword::From) {
            return Ok(());
        }
        loop {
            let table_ref = self.parse_table_reference(stmt)?;
            stmt.from.push(table_ref);
            if !self.cursor.skip_if(&TokenKind::Comma) {
                break;
            }
        }
        Ok(())
    }

    /// Parses a table factor followed by its joins.
    ///
    /// # Errors
    ///
    /// Propagates any grammar violation.
    pub fn parse_table_reference(
        &mut self,
        stmt: &mut SelectStatement,
    ) -> Result<TableRef, ParseError> {
        let factor = self.parse_table_factor(stmt)?;
        self.parse_join_table(stmt, factor)
    }

    /// Parses a table factor through the dialect hook.
    ///
    /// # Errors
    ///
    /// Propagates any grammar violation.
    pub fn parse_table_factor(
        &mut self,
        stmt: &mut SelectStatement,
    ) -> Result<TableRef, ParseError> {
        let dialect = self.dialect;
        dialect.parse_table_factor(self, stmt)
    }

    /// Parses joins through the dialect hook.
    ///
    /// # Errors
    ///
    /// Propagates any grammar violation.
    pub fn parse_join_table(
        &mut self,
        stmt: &mut SelectStatement,
        left: TableRef,
    ) -> Result<TableRef, ParseError> {
        let dialect = self.dialect;
        dialect.parse_join_table(self, stmt, left)
    }

    /// Parses `[schema.]name [alias]` or a parenthesized table reference.
    ///
    /// A logic table from the sharding rule produces a table rewrite token.
    ///
    /// # Errors
    ///
    /// Subqueries are unsupported; anything else malformed is a syntax error.
    pub fn parse_table_factor_internal(
        &mut self,
        stmt: &mut SelectStatement,
    ) -> Result<TableRef, ParseError> {
        if self.cursor.check(&TokenKind::LeftParen) {
            if self.cursor.peek_keyword(Keyword::Select) {
                return Err(ParseError::unsupported("subquery", self.cursor.span()));
            }
            self.cursor.advance();
            let inner = self.parse_table_reference(stmt)?;
            self.cursor.expect(&TokenKind::RightParen)?;
            return Ok(inner);
        }

        let mut span = self.cursor.span();
        let first = self.cursor.expect_identifier()?;
        let (schema, name) = if self.cursor.skip_if(&TokenKind::Dot) {
            span = self.cursor.span();
            let table_name = self.cursor.expect_identifier()?;
            (Some(first), table_name)
        } else {
            (None, first)
        };
        self.add_table_token(stmt, &name, span);

        let alias = self.parse_alias()?;
        Ok(TableRef::Table {
            schema,
            name,
            alias,
            span,
        })
    }

    fn add_table_token(&self, stmt: &mut SelectStatement, name: &str, span: Span) {
        if self.rule.contains_table(name) {
            stmt.add_sql_token(SqlToken::Table {
                begin: span.start,
                original_literals: String::from(span.slice(self.cursor.source())),
            });
        }
    }

    /// Parses one join after `left`, then hands back to the dialect hook for
    /// the next one.
    ///
    /// # Errors
    ///
    /// Returns a syntax error for a join without ON/USING.
    pub fn parse_join_table_internal(
        &mut self,
        stmt: &mut SelectStatement,
        left: TableRef,
    ) -> Result<TableRef, ParseError> {
        let Some(join_type) = self.parse_join_type()? else {
            return Ok(left);
        };
        let right = self.parse_table_factor(stmt)?;

        let (on, using) = if join_type == JoinType::Cross {
            (None, vec![])
        } else if self.cursor.skip_if_keyword(Keyword::On) {
            (Some(self.parse_expression(stmt)?), vec![])
        } else if self.cursor.skip_if_keyword(Keyword::Using) {
            self.cursor.expect(&TokenKind::LeftParen)?;
            let mut cols = vec![];
            loop {
                cols.push(self.cursor.expect_identifier()?);
                if !self.cursor.skip_if(&TokenKind::Comma) {
                    break;
                }
            }
            self.cursor.expect(&TokenKind::RightParen)?;
            (None, cols)
        } else {
            return Err(self.cursor.unexpected("ON or USING"));
        };

        let joined = TableRef::Join {
            left: Box::new(left),
            join: Box::new(JoinClause {
                join_type,
                table: right,
                on,
                using,
            }),
        };
        self.parse_join_table(stmt, joined)
    }

    fn parse_join_type(&mut self) -> Result<Option<JoinType>, ParseError> {
        let Some(keyword) = self.cursor.current().as_keyword() else {
            return Ok(None);
        };
        let join_type = match keyword {
            Keyword::Join => {
                self.cursor.advance();
                return Ok(Some(JoinType::Inner));
            }
            Keyword::Inner => JoinType::Inner,
            Keyword::Left => JoinType::Left,
            Keyword::Right => JoinType::Right,
            Keyword::Full => JoinType::Full,
            Keyword::Cross => JoinType::Cross,
            _ => return Ok(None),
        };
        self.cursor.advance();
        if matches!(join_type, JoinType::Left | JoinType::Right | JoinType::Full) {
            self.cursor.skip_if_keyword(Keyword::Outer);
        }
        self.cursor.expect_keyword(Keyword::Join)?;
        Ok(Some(join_type))
    }

    /// Parses an optional WHERE clause and collects sharding conditions.
    ///
    /// # Errors
    ///
    /// Propagates any grammar violation.
    pub fn parse_where(&mut self, stmt: &mut SelectStatement) -> Result<(), ParseError> {
        if !self.cursor.skip_if_keyword(Keyword::Where) {
            return Ok(());
        }
        let predicate = self.parse_expression(stmt)?;
        let conditions = self.sharding_conditions(stmt, &predicate);
        stmt.conditions.extend(conditions);
        stmt.where_clause = Some(predicate);
        Ok(())
    }

    /// Parses an optional GROUP BY clause.
    ///
    /// # Errors
    ///
    /// Returns an unsupported error when an item starts with one of the
    /// dialect's rejected keywords.
    pub fn parse_group_by(&mut self, stmt: &mut SelectStatement) -> Result<(), ParseError> {
        if !self.cursor.skip_if_keyword(Keyword::Group) {
            return Ok(());
        }
        self.cursor.expect_keyword(Keyword::By)?;
        let unsupported = self.dialect.unsupported_keywords_before_group_by_item();
        loop {
            if let Some(keyword) = self.cursor.current().as_keyword() {
                if unsupported.contains(&keyword) {
                    return Err(ParseError::unsupported(keyword.as_str(), self.cursor.span()));
                }
            }
            let expr = self.parse_expression(stmt)?;
            stmt.group_by.push(expr);
            if !self.cursor.skip_if(&TokenKind::Comma) {
                break;
            }
        }
        Ok(())
    }

    /// Parses an optional HAVING clause.
    ///
    /// # Errors
    ///
    /// Propagates any grammar violation.
    pub fn parse_having(&mut self, stmt: &mut SelectStatement) -> Result<(), ParseError> {
        if self.cursor.skip_if_keyword(Keyword::Having) {
            stmt.having = Some(self.parse_expression(stmt)?);
        }
        Ok(())
    }

    /// Parses an optional ORDER BY clause into the statement.
    ///
    /// # Errors
    ///
    /// Propagates any grammar violation.
    pub fn parse_order_by(&mut self, stmt: &mut SelectStatement) -> Result<(), ParseError> {
        if !self.cursor.skip_if_keyword(Keyword::Order) {
            return Ok(());
        }
        self.cursor.expect_keyword(Keyword::By)?;
        stmt.order_by = self.parse_order_by_items(stmt)?;
        Ok(())
    }

    /// Parses a comma-separated list of ORDER BY items.
    ///
    /// # Errors
    ///
    /// Propagates any grammar violation.
    pub fn parse_order_by_items(
        &mut self,
        stmt: &mut SelectStatement,
    ) -> Result<Vec<OrderItem>, ParseError> {
        let dialect = self.dialect;
        let mut items = vec![];
        loop {
            let expr = self.parse_expression(stmt)?;
            let direction = if self.cursor.skip_if_keyword(Keyword::Desc) {
                OrderDirection::Desc
            } else {
                self.cursor.skip_if_keyword(Keyword::Asc);
                OrderDirection::Asc
            };
            let null_order = dialect.parse_null_order(self)?;
            items.push(OrderItem {
                expr,
                direction,
                null_order,
            });
            if !self.cursor.skip_if(&TokenKind::Comma) {
                break;
            }
        }
        Ok(items)
    }

    /// Parses `[NULLS FIRST | NULLS LAST]`.
    ///
    /// FIRST and an absent suffix mean ascending, LAST means descending.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if `NULLS` is followed by anything else.
    pub fn parse_nulls_first_last(&mut self) -> Result<OrderDirection, ParseError> {
        if !self.cursor.skip_if_keyword(Keyword::Nulls) || self.cursor.skip_if_keyword(Keyword::First)
        {
            return Ok(OrderDirection::Asc);
        }
        if self.cursor.skip_if_keyword(Keyword::Last) {
            return Ok(OrderDirection::Desc);
        }
        Err(self.cursor.unexpected("FIRST or LAST"))
    }

    /// Parses a pagination value: an integer literal or a `?` placeholder.
    ///
    /// A placeholder claims the next parameter ordinal. Returns the value
    /// and the span of the token it was read from.
    ///
    /// # Errors
    ///
    /// Returns a syntax error for any other token.
    pub fn parse_limit_value(
        &mut self,
        stmt: &mut SelectStatement,
    ) -> Result<(LimitValue, Span), ParseError> {
        let token = self.cursor.current();
        let span = token.span;
        let value = match token.kind {
            TokenKind::Integer(n) => {
                let n = u64::try_from(n).map_err(|_| ParseError::new("Negative row count", span))?;
                LimitValue::Literal(n)
            }
            TokenKind::Question => LimitValue::Parameter(stmt.consume_parameter()),
            _ => return Err(self.cursor.unexpected("integer or '?'")),
        };
        self.cursor.advance();
        Ok((value, span))
    }

    /// Checks what follows the dialect clauses: no set operator, an optional
    /// `;`, then end of input.
    fn parse_rest(&mut self) -> Result<(), ParseError> {
        if let Some(keyword @ (Keyword::Union | Keyword::Intersect | Keyword::Except | Keyword::Minus)) =
            self.cursor.current().as_keyword()
        {
            return Err(ParseError::unsupported(keyword.as_str(), self.cursor.span()));
        }
        self.cursor.skip_if(&TokenKind::Semicolon);
        if self.cursor.current().is_eof() {
            Ok(())
        } else {
            Err(self.cursor.unexpected("end of statement"))
        }
    }

    // --- Sharding conditions ---

    fn sharding_conditions(&self, stmt: &SelectStatement, predicate: &Expr) -> Vec<Condition> {
        predicate
            .conjuncts()
            .into_iter()
            .filter_map(|conjunct| self.sharding_condition(stmt, conjunct))
            .collect()
    }

    fn sharding_condition(&self, stmt: &SelectStatement, expr: &Expr) -> Option<Condition> {
        let (column, operator, operands): (&Expr, ShardingOperator, Vec<&Expr>) = match expr {
            Expr::Binary {
                left,
                op: BinaryOp::Eq,
                right,
            } => {
                if matches!(left.unparenthesized(), Expr::Column { .. }) {
                    (&**left, ShardingOperator::Equal, vec![&**right])
                } else {
                    (&**right, ShardingOperator::Equal, vec![&**left])
                }
            }
            Expr::In {
                expr,
                list,
                negated: false,
            } => (&**expr, ShardingOperator::In, list.iter().collect()),
            Expr::Between {
                expr,
                low,
                high,
                negated: false,
            } => (&**expr, ShardingOperator::Between, vec![&**low, &**high]),
            _ => return None,
        };

        let column = self.resolve_sharding_column(stmt, column.unparenthesized())?;
        let values = operands
            .into_iter()
            .map(Expr::sharding_value)
            .collect::<Option<Vec<_>>>()?;

        trace!(table = %column.table, column = %column.name, ?operator, "sharding condition");
        Some(Condition {
            column,
            operator,
            values,
        })
    }

    fn resolve_sharding_column(
        &self,
        stmt: &SelectStatement,
        expr: &Expr,
    ) -> Option<ConditionColumn> {
        let Expr::Column { owner, name, .. } = expr else {
            return None;
        };
        let tables = stmt.tables();
        let table = match owner {
            Some(owner) => tables
                .iter()
                .find(|(table, alias)| {
                    alias.is_some_and(|a| a.eq_ignore_ascii_case(owner))
                        || table.eq_ignore_ascii_case(owner)
                })
                .map(|(table, _)| *table)?,
            None if tables.len() == 1 => tables[0].0,
            None => {
                let mut candidates = tables
                    .iter()
                    .filter(|(table, _)| self.rule.is_sharding_column(table, name));
                let (table, _) = candidates.next()?;
                if candidates.next().is_some() {
                    return None;
                }
                *table
            }
        };
        if !self.rule.is_sharding_column(table, name) {
            return None;
        }
        Some(ConditionColumn {
            table: String::from(table),
            name: name.clone(),
        })
    }

    // --- Expressions ---

    /// Parses an expression.
    ///
    /// Every `?` consumed claims the next parameter ordinal of `stmt`.
    ///
    /// # Errors
    ///
    /// Subqueries are unsupported; anything else malformed is a syntax error.
    pub fn parse_expression(&mut self, stmt: &mut SelectStatement) -> Result<Expr, ParseError> {
        self.parse_expression_bp(stmt, 0)
    }

    /// Parses a hierarchical `CONNECT BY` condition, where any operand may
    /// be written `PRIOR operand`.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if the condition is malformed.
    pub fn parse_hierarchical_condition(
        &mut self,
        stmt: &mut SelectStatement,
    ) -> Result<Expr, ParseError> {
        self.prior_operands = true;
        let result = self.parse_expression_bp(stmt, 0);
        self.prior_operands = false;
        result
    }

    #[allow(clippy::while_let_loop)]
    fn parse_expression_bp(
        &mut self,
        stmt: &mut SelectStatement,
        min_bp: u8,
    ) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_prefix(stmt)?;

        loop {
            let (l_bp, r_bp) = match infix_binding_power(&self.cursor.current().kind) {
                Some(bp) => bp,
                None => break,
            };
            if l_bp < min_bp {
                break;
            }

            match self.cursor.current().kind {
                TokenKind::Keyword(Keyword::Is) => {
                    self.cursor.advance();
                    let negated = self.cursor.skip_if_keyword(Keyword::Not);
                    self.cursor.expect_keyword(Keyword::Null)?;
                    lhs = Expr::IsNull {
                        expr: Box::new(lhs),
                        negated,
                    };
                }
                TokenKind::Keyword(Keyword::Not) => {
                    self.cursor.advance();
                    lhs = match self.cursor.current().as_keyword() {
                        Some(Keyword::In) => self.parse_in(stmt, lhs, true)?,
                        Some(Keyword::Between) => self.parse_between(stmt, lhs, r_bp, true)?,
                        Some(Keyword::Like) => {
                            self.cursor.advance();
                            let rhs = self.parse_expression_bp(stmt, r_bp)?;
                            Expr::Unary {
                                op: UnaryOp::Not,
                                operand: Box::new(lhs.binary(BinaryOp::Like, rhs)),
                            }
                        }
                        _ => return Err(self.cursor.unexpected("IN, BETWEEN or LIKE")),
                    };
                }
                TokenKind::Keyword(Keyword::In) => lhs = self.parse_in(stmt, lhs, false)?,
                TokenKind::Keyword(Keyword::Between) => {
                    lhs = self.parse_between(stmt, lhs, r_bp, false)?;
                }
                _ => {
                    let Some(op) = binary_operator(&self.cursor.current().kind) else {
                        break;
                    };
                    self.cursor.advance();
                    let rhs = self.parse_expression_bp(stmt, r_bp)?;
                    lhs = lhs.binary(op, rhs);
                }
            }
        }

        Ok(lhs)
    }

    fn parse_in(
        &mut self,
        stmt: &mut SelectStatement,
        lhs: Expr,
        negated: bool,
    ) -> Result<Expr, ParseError> {
        self.cursor.expect_keyword(Keyword::In)?;
        if self.cursor.check(&TokenKind::LeftParen) && self.cursor.peek_keyword(Keyword::Select) {
            return Err(ParseError::unsupported("subquery", self.cursor.span()));
        }
        self.cursor.expect(&TokenKind::LeftParen)?;
        let list = self.parse_expression_list(stmt)?;
        self.cursor.expect(&TokenKind::RightParen)?;
        Ok(Expr::In {
            expr: Box::new(lhs),
            list,
            negated,
        })
    }

    fn parse_between(
        &mut self,
        stmt: &mut SelectStatement,
        lhs: Expr,
        r_bp: u8,
        negated: bool,
    ) -> Result<Expr, ParseError> {
        self.cursor.expect_keyword(Keyword::Between)?;
        let low = self.parse_expression_bp(stmt, r_bp)?;
        self.cursor.expect_keyword(Keyword::And)?;
        let high = self.parse_expression_bp(stmt, r_bp)?;
        Ok(Expr::Between {
            expr: Box::new(lhs),
            low: Box::new(low),
            high: Box::new(high),
            negated,
        })
    }

    fn parse_prefix(&mut self, stmt: &mut SelectStatement) -> Result<Expr, ParseError> {
        if self.prior_operands && self.cursor.skip_if_keyword(Keyword::Prior) {
            let (_, bp) = Precedence::Negation.binding_power();
            return self.parse_expression_bp(stmt, bp);
        }
        if let Some((op, bp)) = prefix_operator(&self.cursor.current().kind) {
            self.cursor.advance();
            let operand = self.parse_expression_bp(stmt, bp)?;
            return Ok(Expr::Unary {
                op,
                operand: Box::new(operand),
            });
        }
        self.parse_primary(stmt)
    }

    fn parse_primary(&mut self, stmt: &mut SelectStatement) -> Result<Expr, ParseError> {
        let token = self.cursor.current().clone();

        match token.kind {
            TokenKind::Integer(n) => {
                self.cursor.advance();
                Ok(Expr::Literal(Literal::Integer(n)))
            }
            TokenKind::Float(f) => {
                self.cursor.advance();
                Ok(Expr::Literal(Literal::Float(f)))
            }
            TokenKind::String(s) => {
                self.cursor.advance();
                Ok(Expr::Literal(Literal::String(s)))
            }
            TokenKind::Keyword(Keyword::True) => {
                self.cursor.advance();
                Ok(Expr::Literal(Literal::Boolean(true)))
            }
            TokenKind::Keyword(Keyword::False) => {
                self.cursor.advance();
                Ok(Expr::Literal(Literal::Boolean(false)))
            }
            TokenKind::Keyword(Keyword::Null) => {
                self.cursor.advance();
                Ok(Expr::Literal(Literal::Null))
            }

            TokenKind::Question => {
                self.cursor.advance();
                Ok(Expr::Placeholder {
                    index: stmt.consume_parameter(),
                    span: token.span,
                })
            }

            TokenKind::Star => {
                self.cursor.advance();
                Ok(Expr::Wildcard { owner: None })
            }

            TokenKind::LeftParen => {
                if self.cursor.peek_keyword(Keyword::Select) {
                    return Err(ParseError::unsupported("subquery", token.span));
                }
                self.cursor.advance();
                let expr = self.parse_expression(stmt)?;
                self.cursor.expect(&TokenKind::RightParen)?;
                Ok(Expr::Paren(Box::new(expr)))
            }

            TokenKind::Keyword(Keyword::Exists) => {
                Err(ParseError::unsupported("subquery", token.span))
            }

            TokenKind::Keyword(
                kw @ (Keyword::Count | Keyword::Sum | Keyword::Avg | Keyword::Min | Keyword::Max),
            ) => {
                self.cursor.advance();
                self.parse_function_call(stmt, String::from(kw.as_str()))
            }

            TokenKind::Keyword(Keyword::Case) => self.parse_case_expression(stmt),

            _ if self.cursor.at_identifier() => {
                let name = self.cursor.expect_identifier()?;

                if self.cursor.check(&TokenKind::LeftParen) {
                    return self.parse_function_call(stmt, name);
                }

                if self.cursor.skip_if(&TokenKind::Dot) {
                    self.add_table_token(stmt, &name, token.span);
                    if self.cursor.skip_if(&TokenKind::Star) {
                        return Ok(Expr::Wildcard { owner: Some(name) });
                    }
                    let end = self.cursor.span().end;
                    let column = self.cursor.expect_identifier()?;
                    return Ok(Expr::Column {
                        owner: Some(name),
                        name: column,
                        span: Span::new(token.span.start, end),
                    });
                }

                Ok(Expr::Column {
                    owner: None,
                    name,
                    span: token.span,
                })
            }

            _ => Err(self.cursor.unexpected("expression")),
        }
    }

    fn parse_function_call(
        &mut self,
        stmt: &mut SelectStatement,
        name: String,
    ) -> Result<Expr, ParseError> {
        self.cursor.expect(&TokenKind::LeftParen)?;

        let distinct = self.cursor.skip_if_keyword(Keyword::Distinct);

        let args = if self.cursor.check(&TokenKind::RightParen) {
            vec![]
        } else if self.cursor.skip_if(&TokenKind::Star) {
            vec![Expr::Wildcard { owner: None }]
        } else {
            self.parse_expression_list(stmt)?
        };

        self.cursor.expect(&TokenKind::RightParen)?;

        Ok(Expr::Function(FunctionCall {
            name,
            args,
            distinct,
        }))
    }

    fn parse_case_expression(&mut self, stmt: &mut SelectStatement) -> Result<Expr, ParseError> {
        self.cursor.expect_keyword(Keyword::Case)?;

        let operand = if self.cursor.check_keyword(Keyword::When) {
            None
        } else {
            Some(Box::new(self.parse_expression(stmt)?))
        };

        let mut when_clauses = vec![];
        while self.cursor.skip_if_keyword(Keyword::When) {
            let when_expr = self.parse_expression(stmt)?;
            self.cursor.expect_keyword(Keyword::Then)?;
            let then_expr = self.parse_expression(stmt)?;
            when_clauses.push((when_expr, then_expr));
        }
        if when_clauses.is_empty() {
            return Err(self.cursor.unexpected("WHEN"));
        }

        let else_clause = if self.cursor.skip_if_keyword(Keyword::Else) {
            Some(Box::new(self.parse_expression(stmt)?))
        } else {
            None
        };

        self.cursor.expect_keyword(Keyword::End)?;

        Ok(Expr::Case {
            operand,
            when_clauses,
            else_clause,
        })
    }

    fn parse_expression_list(
        &mut self,
        stmt: &mut SelectStatement,
    ) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = vec![];
        loop {
            exprs.push(self.parse_expression(stmt)?);
            if !self.cursor.skip_if(&TokenKind::Comma) {
                break;
            }
        }
        Ok(exprs)
    }
}
