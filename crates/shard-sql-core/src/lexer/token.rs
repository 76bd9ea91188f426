//! Token types for the SQL lexer.

use super::Span;

macro_rules! define_keywords {
    ($($variant:ident = $text:literal),* $(,)?) => {
        /// SQL keywords known to any of the supported dialects.
        ///
        /// The lexer is shared by all dialects, so a vendor keyword is a
        /// keyword everywhere. Non-reserved keywords may still be used as
        /// table and column names (see [`Keyword::is_reserved`]).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Keyword {
            $(
                #[doc = concat!("`", $text, "`")]
                $variant,
            )*
        }

        impl Keyword {
            /// Attempts to parse a keyword from a string (case-insensitive).
            #[must_use]
            #[allow(clippy::should_implement_trait)]
            pub fn from_str(s: &str) -> Option<Self> {
                match s.to_ascii_uppercase().as_str() {
                    $($text => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Returns the keyword as a string.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)*
                }
            }
        }
    };
}

define_keywords! {
    // Query structure
    Select = "SELECT",
    From = "FROM",
    Where = "WHERE",
    Group = "GROUP",
    Having = "HAVING",
    Order = "ORDER",
    By = "BY",
    Distinct = "DISTINCT",
    All = "ALL",
    As = "AS",
    With = "WITH",
    For = "FOR",
    Of = "OF",
    Update = "UPDATE",
    Only = "ONLY",

    // Joins
    Join = "JOIN",
    Inner = "INNER",
    Left = "LEFT",
    Right = "RIGHT",
    Full = "FULL",
    Outer = "OUTER",
    Cross = "CROSS",
    On = "ON",
    Using = "USING",

    // Set operations
    Union = "UNION",
    Intersect = "INTERSECT",
    Except = "EXCEPT",
    Minus = "MINUS",

    // Predicates
    And = "AND",
    Or = "OR",
    Not = "NOT",
    In = "IN",
    Between = "BETWEEN",
    Like = "LIKE",
    Is = "IS",
    Null = "NULL",
    True = "TRUE",
    False = "FALSE",
    Exists = "EXISTS",

    // Ordering
    Asc = "ASC",
    Desc = "DESC",
    Nulls = "NULLS",
    First = "FIRST",
    Last = "LAST",

    // Aggregates
    Count = "COUNT",
    Sum = "SUM",
    Avg = "AVG",
    Min = "MIN",
    Max = "MAX",

    // Expressions
    Case = "CASE",
    When = "WHEN",
    Then = "THEN",
    Else = "ELSE",
    End = "END",
    Over = "OVER",
    Partition = "PARTITION",
    Unique = "UNIQUE",

    // Pagination
    Offset = "OFFSET",
    Fetch = "FETCH",
    Next = "NEXT",
    Row = "ROW",
    Rows = "ROWS",

    // Oracle
    Start = "START",
    Connect = "CONNECT",
    Prior = "PRIOR",
    Nocycle = "NOCYCLE",
    ConnectByRoot = "CONNECT_BY_ROOT",
    Rollup = "ROLLUP",
    Cube = "CUBE",
    Grouping = "GROUPING",
    Model = "MODEL",
    Return = "RETURN",
    Updated = "UPDATED",
    Reference = "REFERENCE",
    Ignore = "IGNORE",
    Keep = "KEEP",
    Nav = "NAV",
    Dimension = "DIMENSION",
    Single = "SINGLE",
    Main = "MAIN",
    Measures = "MEASURES",
    Rules = "RULES",
    Upsert = "UPSERT",
    Automatic = "AUTOMATIC",
    Sequential = "SEQUENTIAL",
    Iterate = "ITERATE",
    Until = "UNTIL",
    Sample = "SAMPLE",
    Block = "BLOCK",
    Seed = "SEED",
    Subpartition = "SUBPARTITION",
    Versions = "VERSIONS",
    Scn = "SCN",
    Timestamp = "TIMESTAMP",
    Pivot = "PIVOT",
    Unpivot = "UNPIVOT",
    Include = "INCLUDE",
    Exclude = "EXCLUDE",
    Nowait = "NOWAIT",
    Wait = "WAIT",
    Skip = "SKIP",
    Locked = "LOCKED",

    // SQL Server
    Top = "TOP",
    Percent = "PERCENT",
    Ties = "TIES",
    RowNumber = "ROW_NUMBER",
    Browse = "BROWSE",
    Xml = "XML",
    Raw = "RAW",
    Auto = "AUTO",
    Explicit = "EXPLICIT",
    Path = "PATH",
    Type = "TYPE",
    Xmlschema = "XMLSCHEMA",
    Elements = "ELEMENTS",
    Xsinil = "XSINIL",
    Absent = "ABSENT",
    Root = "ROOT",
}

impl Keyword {
    /// Returns true if the keyword can never be used as a plain identifier.
    ///
    /// Reserved keywords either drive the clause structure or start a
    /// special expression form. Everything else (mostly vendor option words
    /// such as `TYPE` or `SEED`) may name a table or column.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        matches!(
            self,
            Self::Select
                | Self::From
                | Self::Where
                | Self::Group
                | Self::Having
                | Self::Order
                | Self::By
                | Self::Distinct
                | Self::All
                | Self::As
                | Self::With
                | Self::For
                | Self::Of
                | Self::Only
                | Self::Join
                | Self::Inner
                | Self::Left
                | Self::Right
                | Self::Full
                | Self::Outer
                | Self::Cross
                | Self::On
                | Self::Using
                | Self::Union
                | Self::Intersect
                | Self::Except
                | Self::Minus
                | Self::And
                | Self::Or
                | Self::Not
                | Self::In
                | Self::Between
                | Self::Like
                | Self::Is
                | Self::Null
                | Self::True
                | Self::False
                | Self::Exists
                | Self::Asc
                | Self::Desc
                | Self::Case
                | Self::When
                | Self::Then
                | Self::Else
                | Self::End
                | Self::Unique
                | Self::Offset
                | Self::Fetch
                | Self::Start
                | Self::Connect
                | Self::Prior
                | Self::ConnectByRoot
                | Self::Model
                | Self::Top
                | Self::RowNumber
        )
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Integer literal (e.g., 42)
    Integer(i64),
    /// Float literal (e.g., 3.14)
    Float(f64),
    /// String literal (e.g., 'hello')
    String(String),

    // Identifiers and keywords
    /// Identifier, bare or quoted (`"name"`, `` `name` ``, `[name]`)
    Identifier(String),
    /// SQL keyword
    Keyword(Keyword),

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// =
    Eq,
    /// != or <>
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,
    /// ||
    Concat,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,
    /// ? (positional bind parameter)
    Question,

    // Special
    /// End of input
    Eof,
    /// Invalid/unknown token
    Error(String),
}

/// A token with its span in the source code.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_from_str() {
        assert_eq!(Keyword::from_str("SELECT"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("top"), Some(Keyword::Top));
        assert_eq!(Keyword::from_str("Row_Number"), Some(Keyword::RowNumber));
        assert_eq!(
            Keyword::from_str("connect_by_root"),
            Some(Keyword::ConnectByRoot)
        );
        assert_eq!(Keyword::from_str("t_order"), None);
    }

    #[test]
    fn test_keyword_as_str() {
        assert_eq!(Keyword::Select.as_str(), "SELECT");
        assert_eq!(Keyword::Xsinil.as_str(), "XSINIL");
        assert_eq!(Keyword::RowNumber.as_str(), "ROW_NUMBER");
    }

    #[test]
    fn test_reserved_keywords() {
        assert!(Keyword::From.is_reserved());
        assert!(Keyword::Top.is_reserved());
        assert!(!Keyword::Type.is_reserved());
        assert!(!Keyword::Seed.is_reserved());
    }

    #[test]
    fn test_token_as_keyword() {
        let select = Token::new(TokenKind::Keyword(Keyword::Select), Span::new(0, 6));
        let plus = Token::new(TokenKind::Plus, Span::new(0, 1));
        assert_eq!(select.as_keyword(), Some(Keyword::Select));
        assert_eq!(plus.as_keyword(), None);
        assert!(Token::new(TokenKind::Eof, Span::new(0, 0)).is_eof());
    }
}
