//! SQL Lexer/Tokenizer
//!
//! A hand-written lexer shared by every dialect. It produces tokens with
//! byte spans so that later stages can patch the original text in place.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
