//! The output of a tokenization pass.

use serde::Serialize;

use crate::{LexError, LexErrors, Token};

/// Tokens produced by one pass, plus any errors recorded in batch mode.
///
/// The token list always ends with exactly one end-of-file token. When
/// `errors` is non-empty the tokens are only a best effort and must not be
/// treated as a complete lexing of the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenStream {
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl TokenStream {
    pub(crate) const fn new(tokens: Vec<Token>, errors: Vec<LexError>) -> Self {
        Self { tokens, errors }
    }

    /// Returns the tokens, ending with the end-of-file token.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the recorded errors in source order.
    #[must_use]
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Returns true if any error was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of tokens, including the end-of-file token.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the stream holds no tokens. Streams built by the lexer
    /// always hold at least the end-of-file token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Splits the stream into its tokens and errors.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Token>, Vec<LexError>) {
        (self.tokens, self.errors)
    }

    /// Returns the tokens if no error was recorded.
    ///
    /// # Errors
    ///
    /// Returns every recorded error if there was at least one.
    pub fn into_result(self) -> Result<Vec<Token>, LexErrors> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(LexErrors(self.errors))
        }
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = core::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
