//! Reserved SQL keywords.
//!
//! The [`Keyword`] enumeration is the closed list of reserved words. A word
//! that matches one of them (ignoring ASCII case) is always lexed as a
//! keyword, whatever position it appears in; deciding whether a keyword may
//! stand in for a name is left to the parser.

use core::fmt;

use serde::Serialize;

/// SQL keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Keyword {
    // Data Manipulation Language (DML)
    Select,
    From,
    Where,

    // Filtering & conditions
    Between,
    Distinct,
    Like,
    In,

    // Grouping & ordering
    Group,
    By,
    Order,
    Having,

    // Joins
    Join,
    Inner,
    Left,
    Right,
    Full,
    Outer,
    Cross,
    On,
    Using,

    // Logical operators
    And,
    Or,
    Not,

    // Limit & pagination
    Limit,
    Offset,
    Top,
    Fetch,

    // Aggregates
    Min,
    Max,
    Count,
    Sum,
    Avg,

    // Integer types
    Int,
    Integer,
    Tinyint,
    Smallint,
    Mediumint,
    Bigint,
    Int2,
    Int4,
    Int8,

    // Floating point types
    Float,
    Float4,
    Float8,
    Float32,
    Float64,
    Double,
    Real,
    Decimal,
    Numeric,

    // String types
    Varchar,
    Text,

    // Boolean types
    Boolean,
    Bool,

    // Date/time types
    Date,
    Time,
    Datetime,
    Timestamp,
    Year,
    Interval,

    // Set operations
    Union,
    Intersect,
    Except,
    Minus,

    // CASE expressions
    Case,
    When,
    Then,
    Else,
    End,

    // Other common keywords
    As,
    All,
    Any,
    Some,
    Exists,
}

static KEYWORDS: phf::Map<&'static str, Keyword> = phf::phf_map! {
    "SELECT" => Keyword::Select,
    "FROM" => Keyword::From,
    "WHERE" => Keyword::Where,
    "BETWEEN" => Keyword::Between,
    "DISTINCT" => Keyword::Distinct,
    "LIKE" => Keyword::Like,
    "IN" => Keyword::In,
    "GROUP" => Keyword::Group,
    "BY" => Keyword::By,
    "ORDER" => Keyword::Order,
    "HAVING" => Keyword::Having,
    "JOIN" => Keyword::Join,
    "INNER" => Keyword::Inner,
    "LEFT" => Keyword::Left,
    "RIGHT" => Keyword::Right,
    "FULL" => Keyword::Full,
    "OUTER" => Keyword::Outer,
    "CROSS" => Keyword::Cross,
    "ON" => Keyword::On,
    "USING" => Keyword::Using,
    "AND" => Keyword::And,
    "OR" => Keyword::Or,
    "NOT" => Keyword::Not,
    "LIMIT" => Keyword::Limit,
    "OFFSET" => Keyword::Offset,
    "TOP" => Keyword::Top,
    "FETCH" => Keyword::Fetch,
    "MIN" => Keyword::Min,
    "MAX" => Keyword::Max,
    "COUNT" => Keyword::Count,
    "SUM" => Keyword::Sum,
    "AVG" => Keyword::Avg,
    "INT" => Keyword::Int,
    "INTEGER" => Keyword::Integer,
    "TINYINT" => Keyword::Tinyint,
    "SMALLINT" => Keyword::Smallint,
    "MEDIUMINT" => Keyword::Mediumint,
    "BIGINT" => Keyword::Bigint,
    "INT2" => Keyword::Int2,
    "INT4" => Keyword::Int4,
    "INT8" => Keyword::Int8,
    "FLOAT" => Keyword::Float,
    "FLOAT4" => Keyword::Float4,
    "FLOAT8" => Keyword::Float8,
    "FLOAT32" => Keyword::Float32,
    "FLOAT64" => Keyword::Float64,
    "DOUBLE" => Keyword::Double,
    "REAL" => Keyword::Real,
    "DECIMAL" => Keyword::Decimal,
    "NUMERIC" => Keyword::Numeric,
    "VARCHAR" => Keyword::Varchar,
    "TEXT" => Keyword::Text,
    "BOOLEAN" => Keyword::Boolean,
    "BOOL" => Keyword::Bool,
    "DATE" => Keyword::Date,
    "TIME" => Keyword::Time,
    "DATETIME" => Keyword::Datetime,
    "TIMESTAMP" => Keyword::Timestamp,
    "YEAR" => Keyword::Year,
    "INTERVAL" => Keyword::Interval,
    "UNION" => Keyword::Union,
    "INTERSECT" => Keyword::Intersect,
    "EXCEPT" => Keyword::Except,
    "MINUS" => Keyword::Minus,
    "CASE" => Keyword::Case,
    "WHEN" => Keyword::When,
    "THEN" => Keyword::Then,
    "ELSE" => Keyword::Else,
    "END" => Keyword::End,
    "AS" => Keyword::As,
    "ALL" => Keyword::All,
    "ANY" => Keyword::Any,
    "SOME" => Keyword::Some,
    "EXISTS" => Keyword::Exists,
};

/// Longest keyword spelling, in bytes. Longer words skip the table lookup.
const MAX_KEYWORD_LEN: usize = 9;

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::Select,
        Self::From,
        Self::Where,
        Self::Between,
        Self::Distinct,
        Self::Like,
        Self::In,
        Self::Group,
        Self::By,
        Self::Order,
        Self::Having,
        Self::Join,
        Self::Inner,
        Self::Left,
        Self::Right,
        Self::Full,
        Self::Outer,
        Self::Cross,
        Self::On,
        Self::Using,
        Self::And,
        Self::Or,
        Self::Not,
        Self::Limit,
        Self::Offset,
        Self::Top,
        Self::Fetch,
        Self::Min,
        Self::Max,
        Self::Count,
        Self::Sum,
        Self::Avg,
        Self::Int,
        Self::Integer,
        Self::Tinyint,
        Self::Smallint,
        Self::Mediumint,
        Self::Bigint,
        Self::Int2,
        Self::Int4,
        Self::Int8,
        Self::Float,
        Self::Float4,
        Self::Float8,
        Self::Float32,
        Self::Float64,
        Self::Double,
        Self::Real,
        Self::Decimal,
        Self::Numeric,
        Self::Varchar,
        Self::Text,
        Self::Boolean,
        Self::Bool,
        Self::Date,
        Self::Time,
        Self::Datetime,
        Self::Timestamp,
        Self::Year,
        Self::Interval,
        Self::Union,
        Self::Intersect,
        Self::Except,
        Self::Minus,
        Self::Case,
        Self::When,
        Self::Then,
        Self::Else,
        Self::End,
        Self::As,
        Self::All,
        Self::Any,
        Self::Some,
        Self::Exists,
    ];

    /// Looks up a keyword by spelling (case-insensitive).
    #[must_use]
    pub fn lookup(word: &str) -> Option<Self> {
        if word.len() > MAX_KEYWORD_LEN || !word.is_ascii() {
            return None;
        }
        KEYWORDS.get(word.to_ascii_uppercase().as_str()).copied()
    }

    /// Returns true if `word` is a reserved keyword (case-insensitive).
    #[must_use]
    pub fn is_reserved(word: &str) -> bool {
        Self::lookup(word).is_some()
    }

    /// Returns the canonical upper-case spelling of the keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Between => "BETWEEN",
            Self::Distinct => "DISTINCT",
            Self::Like => "LIKE",
            Self::In => "IN",
            Self::Group => "GROUP",
            Self::By => "BY",
            Self::Order => "ORDER",
            Self::Having => "HAVING",
            Self::Join => "JOIN",
            Self::Inner => "INNER",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Full => "FULL",
            Self::Outer => "OUTER",
            Self::Cross => "CROSS",
            Self::On => "ON",
            Self::Using => "USING",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Limit => "LIMIT",
            Self::Offset => "OFFSET",
            Self::Top => "TOP",
            Self::Fetch => "FETCH",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Count => "COUNT",
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::Int => "INT",
            Self::Integer => "INTEGER",
            Self::Tinyint => "TINYINT",
            Self::Smallint => "SMALLINT",
            Self::Mediumint => "MEDIUMINT",
            Self::Bigint => "BIGINT",
            Self::Int2 => "INT2",
            Self::Int4 => "INT4",
            Self::Int8 => "INT8",
            Self::Float => "FLOAT",
            Self::Float4 => "FLOAT4",
            Self::Float8 => "FLOAT8",
            Self::Float32 => "FLOAT32",
            Self::Float64 => "FLOAT64",
            Self::Double => "DOUBLE",
            Self::Real => "REAL",
            Self::Decimal => "DECIMAL",
            Self::Numeric => "NUMERIC",
            Self::Varchar => "VARCHAR",
            Self::Text => "TEXT",
            Self::Boolean => "BOOLEAN",
            Self::Bool => "BOOL",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Datetime => "DATETIME",
            Self::Timestamp => "TIMESTAMP",
            Self::Year => "YEAR",
            Self::Interval => "INTERVAL",
            Self::Union => "UNION",
            Self::Intersect => "INTERSECT",
            Self::Except => "EXCEPT",
            Self::Minus => "MINUS",
            Self::Case => "CASE",
            Self::When => "WHEN",
            Self::Then => "THEN",
            Self::Else => "ELSE",
            Self::End => "END",
            Self::As => "AS",
            Self::All => "ALL",
            Self::Any => "ANY",
            Self::Some => "SOME",
            Self::Exists => "EXISTS",
        }
    }

    /// Returns true for keywords that name a column data type.
    #[must_use]
    pub const fn is_data_type(&self) -> bool {
        matches!(
            self,
            Self::Int
                | Self::Integer
                | Self::Tinyint
                | Self::Smallint
                | Self::Mediumint
                | Self::Bigint
                | Self::Int2
                | Self::Int4
                | Self::Int8
                | Self::Float
                | Self::Float4
                | Self::Float8
                | Self::Float32
                | Self::Float64
                | Self::Double
                | Self::Real
                | Self::Decimal
                | Self::Numeric
                | Self::Varchar
                | Self::Text
                | Self::Boolean
                | Self::Bool
                | Self::Date
                | Self::Time
                | Self::Datetime
                | Self::Timestamp
                | Self::Year
                | Self::Interval
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
