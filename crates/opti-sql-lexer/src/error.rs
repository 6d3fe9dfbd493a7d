//! Lex error types.

use core::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::{Location, Span};

/// The category of a [`LexError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LexErrorKind {
    UnterminatedString,
    UnexpectedCharacter,
    MalformedNumericLiteral,
    InvalidEncoding,
    UnterminatedComment,
}

/// Why a numeric literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NumericError {
    /// `e` or `E` (and an optional sign) with no digits after it.
    MissingExponentDigits,
    /// An integer literal that does not fit in an `i64`.
    IntegerOutOfRange,
    /// A float literal whose value overflows to infinity.
    FloatOutOfRange,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::MissingExponentDigits => "exponent has no digits",
            Self::IntegerOutOfRange => "integer out of range",
            Self::FloatOutOfRange => "float out of range",
        };
        f.write_str(msg)
    }
}

/// An error raised while tokenizing.
///
/// Every variant records the offending source text and where it starts.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum LexError {
    /// A string literal or quoted identifier reached end of input.
    #[error("unterminated string literal at {location}: {snippet}")]
    UnterminatedString {
        snippet: String,
        span: Span,
        location: Location,
    },

    /// A character that cannot start any token.
    #[error("unexpected character {ch:?} at {location}")]
    UnexpectedCharacter {
        ch: char,
        snippet: String,
        span: Span,
        location: Location,
    },

    /// A numeric literal that is not well formed.
    #[error("malformed numeric literal `{snippet}` at {location}: {reason}")]
    MalformedNumericLiteral {
        reason: NumericError,
        snippet: String,
        span: Span,
        location: Location,
    },

    /// The input bytes are not valid UTF-8.
    #[error("invalid UTF-8 sequence {snippet} at {location}")]
    InvalidEncoding {
        snippet: String,
        span: Span,
        location: Location,
    },

    /// A `/* ... */` comment reached end of input.
    #[error("unterminated block comment at {location}")]
    UnterminatedComment {
        snippet: String,
        span: Span,
        location: Location,
    },
}

impl LexError {
    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> LexErrorKind {
        match self {
            Self::UnterminatedString { .. } => LexErrorKind::UnterminatedString,
            Self::UnexpectedCharacter { .. } => LexErrorKind::UnexpectedCharacter,
            Self::MalformedNumericLiteral { .. } => LexErrorKind::MalformedNumericLiteral,
            Self::InvalidEncoding { .. } => LexErrorKind::InvalidEncoding,
            Self::UnterminatedComment { .. } => LexErrorKind::UnterminatedComment,
        }
    }

    /// The byte span of the offending input.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnterminatedString { span, .. }
            | Self::UnexpectedCharacter { span, .. }
            | Self::MalformedNumericLiteral { span, .. }
            | Self::InvalidEncoding { span, .. }
            | Self::UnterminatedComment { span, .. } => *span,
        }
    }

    /// The line and column where the offending input starts.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::UnterminatedString { location, .. }
            | Self::UnexpectedCharacter { location, .. }
            | Self::MalformedNumericLiteral { location, .. }
            | Self::InvalidEncoding { location, .. }
            | Self::UnterminatedComment { location, .. } => *location,
        }
    }

    /// The offending source text.
    #[must_use]
    pub fn snippet(&self) -> &str {
        match self {
            Self::UnterminatedString { snippet, .. }
            | Self::UnexpectedCharacter { snippet, .. }
            | Self::MalformedNumericLiteral { snippet, .. }
            | Self::InvalidEncoding { snippet, .. }
            | Self::UnterminatedComment { snippet, .. } => snippet,
        }
    }
}

/// All errors recorded by a batch tokenization pass, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} lex error(s):\n{}", .0.len(), .0.iter().map(|e| format!("  - {e}")).collect::<Vec<_>>().join("\n"))]
pub struct LexErrors(pub Vec<LexError>);

impl LexErrors {
    /// Returns the first recorded error.
    #[must_use]
    pub fn first(&self) -> Option<&LexError> {
        self.0.first()
    }

    /// Iterates over the recorded errors.
    pub fn iter(&self) -> core::slice::Iter<'_, LexError> {
        self.0.iter()
    }
}

impl IntoIterator for LexErrors {
    type Item = LexError;
    type IntoIter = std::vec::IntoIter<LexError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LexErrors {
    type Item = &'a LexError;
    type IntoIter = core::slice::Iter<'a, LexError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
