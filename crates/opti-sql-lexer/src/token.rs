//! Token types for the SQL lexer.

use core::fmt;

use serde::Serialize;

use crate::{Keyword, Location, Span};

/// The broad classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenType {
    Keyword,
    Identifier,
    Literal,
    Operator,
    Delimiter,
    EndOfFile,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::Literal => "literal",
            Self::Operator => "operator",
            Self::Delimiter => "delimiter",
            Self::EndOfFile => "end of file",
        };
        f.write_str(name)
    }
}

/// The value of a literal token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SqlLiteral {
    /// String literal (e.g., 'hello'), already unescaped.
    String(String),
    /// Integer literal (e.g., 42)
    Integer(i64),
    /// Float literal (e.g., 3.14, 1e10)
    Float(f64),
    /// `TRUE` or `FALSE`
    Boolean(bool),
    /// `NULL`
    Null,
}

impl SqlLiteral {
    /// Renders the literal as SQL that lexes back to the same value.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::String(s) => format!("'{}'", s.replace('\'', "''")),
            Self::Integer(i) => i.to_string(),
            // `{:?}` keeps a decimal point or exponent, so the value lexes as a float again.
            Self::Float(f) => format!("{f:?}"),
            Self::Boolean(true) => String::from("TRUE"),
            Self::Boolean(false) => String::from("FALSE"),
            Self::Null => String::from("NULL"),
        }
    }
}

/// Operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
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
    /// ||
    Concat,
}

impl Operator {
    /// Returns the canonical spelling of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Concat => "||",
        }
    }
}

/// Delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Delimiter {
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
}

impl Delimiter {
    /// Returns the delimiter character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Self::LeftParen => '(',
            Self::RightParen => ')',
            Self::Comma => ',',
            Self::Semicolon => ';',
            Self::Dot => '.',
        }
    }
}

/// The kind of token, with the data that only that kind carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum TokenKind {
    /// SQL keyword
    Keyword(Keyword),
    /// Identifier; `Some` holds the parts of a dotted name, outermost first.
    Identifier(Option<Vec<String>>),
    /// Literal value
    Literal(SqlLiteral),
    /// Operator
    Operator(Operator),
    /// Delimiter
    Delimiter(Delimiter),
    /// End of input
    EndOfFile,
}

/// A token with its source text and location.
///
/// Tokens are built through the per-kind constructors, which makes it
/// impossible for a non-identifier to carry a qualified name or for a
/// non-literal to carry a literal value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    text: String,
    kind: TokenKind,
    span: Span,
    location: Location,
}

impl Token {
    /// Creates a keyword token. `text` is the source spelling.
    #[must_use]
    pub fn keyword(
        keyword: Keyword,
        text: impl Into<String>,
        span: Span,
        location: Location,
    ) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Keyword(keyword),
            span,
            location,
        }
    }

    /// Creates a single-part identifier token.
    #[must_use]
    pub fn identifier(text: impl Into<String>, span: Span, location: Location) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Identifier(None),
            span,
            location,
        }
    }

    /// Creates an identifier token for a dotted name.
    ///
    /// A name with fewer than two parts is not qualified, so it yields a plain
    /// identifier. A qualified name's `text` must be the dotted source path.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `parts` has more than one entry and `text`
    /// contains no `.`.
    #[must_use]
    pub fn qualified_identifier(
        text: impl Into<String>,
        parts: Vec<String>,
        span: Span,
        location: Location,
    ) -> Self {
        let text = text.into();
        let parts = (parts.len() > 1).then_some(parts);
        debug_assert!(
            parts.is_none() || text.contains('.'),
            "qualified identifier text {text:?} has no dotted path"
        );
        Self {
            text,
            kind: TokenKind::Identifier(parts),
            span,
            location,
        }
    }

    /// Creates a literal token.
    #[must_use]
    pub fn literal(
        value: SqlLiteral,
        text: impl Into<String>,
        span: Span,
        location: Location,
    ) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Literal(value),
            span,
            location,
        }
    }

    /// Creates an operator token.
    #[must_use]
    pub fn operator(
        op: Operator,
        text: impl Into<String>,
        span: Span,
        location: Location,
    ) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Operator(op),
            span,
            location,
        }
    }

    /// Creates a delimiter token.
    #[must_use]
    pub fn delimiter(delim: Delimiter, span: Span, location: Location) -> Self {
        Self {
            text: delim.as_char().to_string(),
            kind: TokenKind::Delimiter(delim),
            span,
            location,
        }
    }

    /// Creates the end-of-file token.
    #[must_use]
    pub const fn eof(span: Span, location: Location) -> Self {
        Self {
            text: String::new(),
            kind: TokenKind::EndOfFile,
            span,
            location,
        }
    }

    /// The token text: unescaped contents for string literals, the source
    /// slice for everything else.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the token kind with its payload.
    #[must_use]
    pub const fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Returns the broad token classification.
    #[must_use]
    pub const fn token_type(&self) -> TokenType {
        match self.kind {
            TokenKind::Keyword(_) => TokenType::Keyword,
            TokenKind::Identifier(_) => TokenType::Identifier,
            TokenKind::Literal(_) => TokenType::Literal,
            TokenKind::Operator(_) => TokenType::Operator,
            TokenKind::Delimiter(_) => TokenType::Delimiter,
            TokenKind::EndOfFile => TokenType::EndOfFile,
        }
    }

    /// The location in the source code, in bytes.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// The line and column of the first character.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// Returns the parts of a dotted identifier, outermost first.
    #[must_use]
    pub fn qualified_name(&self) -> Option<&[String]> {
        match &self.kind {
            TokenKind::Identifier(Some(parts)) => Some(parts),
            _ => None,
        }
    }

    /// Returns the name of a single-part identifier, with any surrounding
    /// double quotes removed and `""` unescaped.
    ///
    /// Dotted identifiers return `None`; use [`Token::qualified_name`].
    #[must_use]
    pub fn identifier_name(&self) -> Option<String> {
        match &self.kind {
            TokenKind::Identifier(None) => Some(unquote_identifier(&self.text)),
            _ => None,
        }
    }

    /// Returns the value of a literal token.
    #[must_use]
    pub const fn literal_value(&self) -> Option<&SqlLiteral> {
        match &self.kind {
            TokenKind::Literal(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn keyword_value(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }

    /// Returns the operator if this is an operator token.
    #[must_use]
    pub const fn operator_value(&self) -> Option<Operator> {
        match &self.kind {
            TokenKind::Operator(op) => Some(*op),
            _ => None,
        }
    }

    /// Returns the delimiter if this is a delimiter token.
    #[must_use]
    pub const fn delimiter_value(&self) -> Option<Delimiter> {
        match &self.kind {
            TokenKind::Delimiter(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfFile)
    }

    /// Returns true if this is a keyword.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self.kind, TokenKind::Keyword(_))
    }
}

/// Strips the double quotes from a quoted identifier. Bare names are returned as is.
fn unquote_identifier(raw: &str) -> String {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .map_or_else(|| String::from(raw), |inner| inner.replace("\"\"", "\""))
}

/// Writes the token as SQL that lexes back to an equivalent token.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::Literal(lit @ SqlLiteral::String(_)) => f.write_str(&lit.to_sql()),
            _ => f.write_str(&self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(start: usize, end: usize) -> (Span, Location) {
        let col = u32::try_from(start).unwrap() + 1;
        (Span::new(start, end), Location::new(1, col))
    }

    #[test]
    fn test_token_is_eof() {
        let (span, loc) = at(0, 0);
        let eof = Token::eof(span, loc);
        let select = Token::keyword(Keyword::Select, "SELECT", Span::new(0, 6), loc);
        assert!(eof.is_eof());
        assert_eq!(eof.text(), "");
        assert!(!select.is_eof());
    }

    #[test]
    fn test_token_keyword_value() {
        let (span, loc) = at(0, 6);
        let select = Token::keyword(Keyword::Select, "select", span, loc);
        let plus = Token::operator(Operator::Plus, "+", Span::new(0, 1), loc);
        assert_eq!(select.keyword_value(), Some(Keyword::Select));
        assert_eq!(select.text(), "select");
        assert_eq!(plus.keyword_value(), None);
        assert_eq!(plus.operator_value(), Some(Operator::Plus));
    }

    #[test]
    fn test_single_part_qualified_identifier_is_plain() {
        let (span, loc) = at(0, 3);
        let tok = Token::qualified_identifier("foo", vec![String::from("foo")], span, loc);
        assert_eq!(tok.token_type(), TokenType::Identifier);
        assert_eq!(tok.qualified_name(), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "has no dotted path")]
    fn test_qualified_identifier_requires_dotted_text() {
        let (span, loc) = at(0, 2);
        let _ = Token::qualified_identifier(
            "ab",
            vec![String::from("a"), String::from("b")],
            span,
            loc,
        );
    }

    #[test]
    fn test_payloads_are_exclusive() {
        let (span, loc) = at(0, 5);
        let ident = Token::qualified_identifier(
            "a.b.c",
            vec![String::from("a"), String::from("b"), String::from("c")],
            span,
            loc,
        );
        assert_eq!(ident.qualified_name().map(<[String]>::len), Some(3));
        assert!(ident.literal_value().is_none());

        let lit = Token::literal(SqlLiteral::Integer(7), "7", span, loc);
        assert_eq!(lit.literal_value(), Some(&SqlLiteral::Integer(7)));
        assert!(lit.qualified_name().is_none());
        assert_eq!(lit.token_type(), TokenType::Literal);
    }

    #[test]
    fn test_identifier_name_unquotes() {
        let (span, loc) = at(0, 10);
        let quoted = Token::identifier("\"my \"\"col\"\"\"", span, loc);
        assert_eq!(quoted.identifier_name().as_deref(), Some("my \"col\""));
        let bare = Token::identifier("users", span, loc);
        assert_eq!(bare.identifier_name().as_deref(), Some("users"));
    }

    #[test]
    fn test_delimiter_text() {
        let (span, loc) = at(0, 1);
        let tok = Token::delimiter(Delimiter::Semicolon, span, loc);
        assert_eq!(tok.text(), ";");
        assert_eq!(tok.delimiter_value(), Some(Delimiter::Semicolon));
    }

    #[test]
    fn test_display_requotes_strings() {
        let (span, loc) = at(0, 7);
        let tok = Token::literal(SqlLiteral::String(String::from("it's")), "it's", span, loc);
        assert_eq!(tok.to_string(), "'it''s'");

        let kw = Token::keyword(Keyword::From, "from", span, loc);
        assert_eq!(kw.to_string(), "from");
    }

    #[test]
    fn test_literal_to_sql() {
        assert_eq!(SqlLiteral::Float(1.0).to_sql(), "1.0");
        assert_eq!(SqlLiteral::Float(1.5e10).to_sql(), "15000000000.0");
        assert_eq!(SqlLiteral::Integer(-3).to_sql(), "-3");
        assert_eq!(SqlLiteral::Boolean(false).to_sql(), "FALSE");
        assert_eq!(SqlLiteral::Null.to_sql(), "NULL");
    }

    #[test]
    fn test_serialize_literal_value() {
        let json = serde_json::to_value(SqlLiteral::Integer(42)).unwrap();
        assert_eq!(json, serde_json::json!({"type": "integer", "value": 42}));
        let json = serde_json::to_value(SqlLiteral::Null).unwrap();
        assert_eq!(json, serde_json::json!({"type": "null"}));
    }
}
