//! Abstract Syntax Tree (AST) types for SELECT statements.

mod condition;
mod expression;
mod limit;
mod sql_token;
mod statement;

pub use condition::{Condition, ConditionColumn, ConditionValue, ShardingOperator};
pub use expression::{BinaryOp, Expr, FunctionCall, Literal, UnaryOp};
pub use limit::{Limit, LimitValue};
pub use sql_token::SqlToken;
pub use statement::{
    JoinClause, JoinType, OrderDirection, OrderItem, SelectItem, SelectStatement, TableRef,
};
