//! # shard-sql-core
//!
//! SELECT parsing core for a database-sharding middleware.
//!
//! This crate provides:
//! - A hand-written lexer producing tokens with byte spans
//! - A recursive descent SELECT parser with Pratt expression parsing
//! - The [`SelectDialect`] hook points vendor dialects plug into
//! - A normalized pagination model ([`Limit`], [`LimitValue`])
//! - Positional rewrite tokens ([`SqlToken`]) for patching the original SQL
//!
//! The parser never re-serializes SQL. It records where the routing engine
//! must substitute text (logic table names, literal row counts and offsets)
//! and which WHERE predicates constrain sharding columns.
//!
//! ## Example
//!
//! ```rust
//! use shard_sql_core::{
//!     GenericDialect, SelectParser, ShardingRule, SqlToken, TableRule,
//! };
//!
//! let rule = ShardingRule::new(vec![TableRule::new("t_order").sharding_column("user_id")]);
//! let stmt = SelectParser::new(
//!     "SELECT * FROM t_order WHERE user_id = ?",
//!     &GenericDialect,
//!     &rule,
//! )
//! .parse()
//! .unwrap();
//!
//! assert_eq!(
//!     stmt.sql_tokens(),
//!     &[SqlToken::Table {
//!         begin: 14,
//!         original_literals: String::from("t_order"),
//!     }]
//! );
//! assert_eq!(stmt.conditions.len(), 1);
//! ```
//!
//! ## Unsupported constructs
//!
//! Some syntax is recognized but rejected with
//! [`ParseErrorKind::Unsupported`] because the result could not be routed
//! correctly: subqueries and set operators here, plus vendor constructs
//! rejected by the dialect crates.

pub mod ast;
pub mod dialect;
pub mod lexer;
pub mod parser;
pub mod rule;

pub use ast::{Limit, LimitValue, SelectStatement, SqlToken};
pub use dialect::{GenericDialect, SelectDialect};
pub use lexer::{Keyword, Lexer, Span, Token, TokenKind};
pub use parser::{ParseError, ParseErrorKind, SelectParser, TokenCursor};
pub use rule::{RuleError, ShardingRule, TableRule};
