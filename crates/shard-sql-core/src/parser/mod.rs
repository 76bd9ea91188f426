//! SQL Parser
//!
//! A hand-written recursive descent parser with Pratt expression parsing.
//! [`SelectParser`] runs the common SELECT grammar and calls into a
//! [`SelectDialect`](crate::dialect::SelectDialect) at fixed hook points.

mod cursor;
mod error;
mod pratt;
mod select;

pub use cursor::TokenCursor;
pub use error::{ParseError, ParseErrorKind};
pub use select::SelectParser;
