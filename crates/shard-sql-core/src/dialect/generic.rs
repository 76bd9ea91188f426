//! The dialect with no vendor extensions.

use super::SelectDialect;

/// Runs the base grammar unchanged: no pagination clause, `NULLS
/// FIRST|LAST` ordering, plain table factors and joins.
///
/// Useful on its own for ANSI-style statements and as the reference the
/// vendor dialects are tested against.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl SelectDialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }
}
