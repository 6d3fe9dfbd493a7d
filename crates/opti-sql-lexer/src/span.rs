//! Source location tracking for tokens and lex errors.

use core::fmt;

use serde::Serialize;

/// Represents a span in the source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of the span in bytes. An inverted span is empty.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Merges two spans into one that covers both.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        let start = if self.start < other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end > other.end {
            self.end
        } else {
            other.end
        };
        Self { start, end }
    }

    /// Returns the slice of `source` covered by this span, if it is in bounds.
    #[must_use]
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A human-readable position: 1-based line and 1-based column.
///
/// Columns count characters, not bytes, so a multi-byte identifier does not
/// skew the column of whatever follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Location {
    /// Line number, starting at 1.
    pub line: u32,
    /// Column number, starting at 1.
    pub column: u32,
}

impl Location {
    /// The first character of any input.
    pub const START: Self = Self { line: 1, column: 1 };

    /// Creates a new location.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns the location after consuming `c`.
    #[must_use]
    pub const fn advance(self, c: char) -> Self {
        if c == '\n' {
            Self {
                line: self.line + 1,
                column: 1,
            }
        } else {
            Self {
                line: self.line,
                column: self.column + 1,
            }
        }
    }

    /// Computes the location of byte `offset` within `source`.
    ///
    /// Offsets past the end, or inside a multi-byte character, resolve to the
    /// location of the last character boundary before them.
    #[must_use]
    pub fn of(source: &str, offset: usize) -> Self {
        source
            .char_indices()
            .take_while(|(i, _)| *i < offset)
            .fold(Self::START, |loc, (_, c)| loc.advance(c))
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(5, 10);
        assert_eq!(span.start, 5);
        assert_eq!(span.end, 10);
    }

    #[test]
    fn test_span_len() {
        let span = Span::new(5, 10);
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn test_inverted_span_len() {
        let span = Span { start: 5, end: 2 };
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
    }

    #[test]
    fn test_span_is_empty() {
        let empty = Span::new(5, 5);
        let non_empty = Span::new(5, 10);
        assert!(empty.is_empty());
        assert!(!non_empty.is_empty());
    }

    #[test]
    fn test_span_merge() {
        let span1 = Span::new(5, 10);
        let span2 = Span::new(8, 15);
        let merged = span1.merge(span2);
        assert_eq!(merged.start, 5);
        assert_eq!(merged.end, 15);
    }

    #[test]
    fn test_span_slice() {
        let source = "SELECT id";
        assert_eq!(Span::new(7, 9).slice(source), Some("id"));
        assert_eq!(Span::new(7, 20).slice(source), None);
    }

    #[test]
    fn test_location_advance() {
        let loc = Location::START.advance('a').advance('b');
        assert_eq!(loc, Location::new(1, 3));
        assert_eq!(loc.advance('\n'), Location::new(2, 1));
    }

    #[test]
    fn test_location_of_offset() {
        let source = "SELECT\n  id";
        assert_eq!(Location::of(source, 0), Location::START);
        assert_eq!(Location::of(source, 9), Location::new(2, 3));
        assert_eq!(Location::of(source, 100), Location::new(2, 5));
    }

    #[test]
    fn test_location_counts_characters() {
        // 'é' is two bytes but one column.
        let source = "é x";
        assert_eq!(Location::of(source, 3), Location::new(1, 3));
    }

    #[test]
    fn test_location_display() {
        assert_eq!(Location::new(3, 14).to_string(), "3:14");
    }
}
