//! SQL Tokenizer implementation.

use tracing::{debug, trace};

use crate::config::{LexMode, LexerConfig};
use crate::error::NumericError;
use crate::{
    Delimiter, Keyword, LexError, Location, Operator, Span, SqlLiteral, Token, TokenStream,
};

/// Longest snippet copied into an error, in characters.
const MAX_SNIPPET_CHARS: usize = 40;

/// A lexer that tokenizes SQL input.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// Line and column of `pos`.
    loc: Location,
    /// The byte position of the start of the current token.
    start: usize,
    /// Line and column of `start`.
    start_loc: Location,
    config: LexerConfig,
}

impl<'a> Lexer<'a> {
    /// Creates a new fail-fast lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self::with_config(input, LexerConfig::fail_fast())
    }

    /// Creates a new lexer with the given configuration.
    #[must_use]
    pub const fn with_config(input: &'a str, config: LexerConfig) -> Self {
        Self {
            input,
            pos: 0,
            loc: Location::START,
            start: 0,
            start_loc: Location::START,
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Returns the byte offset where the next token scan will begin.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Moves the lexer to byte `offset`, so that scanning restarts there.
    ///
    /// Returns false, leaving the lexer untouched, if `offset` is past the end
    /// of the input or not on a character boundary.
    pub fn seek(&mut self, offset: usize) -> bool {
        if !self.input.is_char_boundary(offset) {
            return false;
        }
        self.pos = offset;
        self.start = offset;
        self.loc = Location::of(self.input, offset);
        self.start_loc = self.loc;
        true
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        self.loc = self.loc.advance(c);
        Some(c)
    }

    /// Advances while `pred` holds for the current character.
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Advances if the current character is `expected`.
    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            self.eat_while(char::is_whitespace);

            // Single-line comment (-- ...)
            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                self.eat_while(|c| c != '\n');
                continue;
            }

            // Block comment (/* ... */), not nested
            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                let open = self.pos;
                let open_loc = self.loc;
                self.advance(); // /
                self.advance(); // *
                loop {
                    match self.advance() {
                        Some('*') => {
                            if self.eat('/') {
                                break;
                            }
                        }
                        Some(_) => {}
                        None => {
                            return Err(LexError::UnterminatedComment {
                                snippet: self.snippet(open, self.pos),
                                span: Span::new(open, self.pos),
                                location: open_loc,
                            });
                        }
                    }
                }
                continue;
            }

            return Ok(());
        }
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// The source text of the current token.
    fn current_text(&self) -> &'a str {
        let input = self.input;
        &input[self.start..self.pos]
    }

    /// Copies `start..end` for an error message, cut to a readable length.
    fn snippet(&self, start: usize, end: usize) -> String {
        let text = &self.input[start..end];
        match text.char_indices().nth(MAX_SNIPPET_CHARS) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => String::from(text),
        }
    }

    fn operator(&self, op: Operator) -> Token {
        Token::operator(op, self.current_text(), self.make_span(), self.start_loc)
    }

    fn delimiter(&self, delim: Delimiter) -> Token {
        Token::delimiter(delim, self.make_span(), self.start_loc)
    }

    fn unexpected(&self, ch: char) -> LexError {
        LexError::UnexpectedCharacter {
            ch,
            snippet: String::from(self.current_text()),
            span: self.make_span(),
            location: self.start_loc,
        }
    }

    fn malformed_number(&self, reason: NumericError) -> LexError {
        LexError::MalformedNumericLiteral {
            reason,
            snippet: self.snippet(self.start, self.pos),
            span: self.make_span(),
            location: self.start_loc,
        }
    }

    /// Scans a word: a literal word, a keyword, or the first part of an
    /// identifier. The first character has been consumed.
    fn scan_word(&mut self) -> Result<Token, LexError> {
        self.eat_while(is_identifier_char);
        let word = self.current_text();

        if let Some(value) = literal_word(word) {
            return Ok(Token::literal(value, word, self.make_span(), self.start_loc));
        }

        if let Some(keyword) = Keyword::lookup(word) {
            return Ok(Token::keyword(keyword, word, self.make_span(), self.start_loc));
        }

        self.scan_qualified_name(String::from(word))
    }

    /// Scans a double-quoted identifier and any dotted parts after it. The
    /// opening quote has been consumed.
    fn scan_quoted_identifier(&mut self) -> Result<Token, LexError> {
        let name = self.scan_quoted_body('"', self.start, self.start_loc)?;
        self.scan_qualified_name(name)
    }

    /// Extends an identifier through `.part` segments.
    ///
    /// A bare segment that is a keyword or literal word ends the chain before
    /// its dot, as does a dot not followed by a name.
    fn scan_qualified_name(&mut self, first: String) -> Result<Token, LexError> {
        let mut parts = vec![first];

        while self.peek() == Some('.') {
            match self.peek_next() {
                Some('"') => {
                    self.advance(); // .
                    let open = self.pos;
                    let open_loc = self.loc;
                    self.advance(); // "
                    parts.push(self.scan_quoted_body('"', open, open_loc)?);
                }
                Some(c) if is_identifier_start(c) => {
                    let input = self.input;
                    let seg_start = self.pos + 1;
                    let seg_end = input[seg_start..]
                        .char_indices()
                        .find(|&(_, c)| !is_identifier_char(c))
                        .map_or(input.len(), |(i, _)| seg_start + i);
                    let segment = &input[seg_start..seg_end];
                    if is_reserved_word(segment) {
                        break;
                    }
                    while self.pos < seg_end {
                        self.advance();
                    }
                    parts.push(String::from(segment));
                }
                _ => break,
            }
        }

        Ok(Token::qualified_identifier(
            self.current_text(),
            parts,
            self.make_span(),
            self.start_loc,
        ))
    }

    /// Scans the body of a quoted string or identifier up to and including
    /// the closing quote. A doubled quote stands for one quote character.
    fn scan_quoted_body(
        &mut self,
        quote: char,
        open: usize,
        open_loc: Location,
    ) -> Result<String, LexError> {
        let mut value = String::new();
        loop {
            match self.advance() {
                Some(c) if c == quote => {
                    if self.eat(quote) {
                        value.push(quote);
                    } else {
                        return Ok(value);
                    }
                }
                Some(c) => value.push(c),
                None => {
                    return Err(LexError::UnterminatedString {
                        snippet: self.snippet(open, self.pos),
                        span: Span::new(open, self.pos),
                        location: open_loc,
                    });
                }
            }
        }
    }

    /// Scans a string literal. The opening quote has been consumed.
    fn scan_string(&mut self) -> Result<Token, LexError> {
        let value = self.scan_quoted_body('\'', self.start, self.start_loc)?;
        Ok(Token::literal(
            SqlLiteral::String(value.clone()),
            value,
            self.make_span(),
            self.start_loc,
        ))
    }

    /// Scans a number (integer or float). The first digit has been consumed.
    fn scan_number(&mut self) -> Result<Token, LexError> {
        let mut is_float = false;

        self.eat_while(|c| c.is_ascii_digit());

        // Fraction; a dot not followed by a digit is left for the next token.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.advance(); // .
            self.eat_while(|c| c.is_ascii_digit());
        }

        // Exponent
        if matches!(self.peek(), Some('e' | 'E')) {
            is_float = true;
            self.advance(); // e/E
            if matches!(self.peek(), Some('+' | '-')) {
                self.advance();
            }
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Err(self.malformed_number(NumericError::MissingExponentDigits));
            }
            self.eat_while(|c| c.is_ascii_digit());
        }

        let text = self.current_text();
        let value = if is_float {
            text.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(SqlLiteral::Float)
                .ok_or_else(|| self.malformed_number(NumericError::FloatOutOfRange))?
        } else {
            text.parse::<i64>()
                .map(SqlLiteral::Integer)
                .map_err(|_| self.malformed_number(NumericError::IntegerOutOfRange))?
        };

        Ok(Token::literal(value, text, self.make_span(), self.start_loc))
    }

    /// Scans the next token.
    ///
    /// After the input is exhausted every call returns an end-of-file token.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if the next token is malformed. The offending
    /// input has been consumed, so calling again resumes after it.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments()?;
        self.start = self.pos;
        self.start_loc = self.loc;

        let Some(c) = self.advance() else {
            return Ok(Token::eof(self.make_span(), self.start_loc));
        };

        match c {
            // Delimiters
            '(' => Ok(self.delimiter(Delimiter::LeftParen)),
            ')' => Ok(self.delimiter(Delimiter::RightParen)),
            ',' => Ok(self.delimiter(Delimiter::Comma)),
            ';' => Ok(self.delimiter(Delimiter::Semicolon)),
            '.' => Ok(self.delimiter(Delimiter::Dot)),

            // Single-character operators
            '+' => Ok(self.operator(Operator::Plus)),
            '-' => Ok(self.operator(Operator::Minus)),
            '*' => Ok(self.operator(Operator::Star)),
            '/' => Ok(self.operator(Operator::Slash)),
            '%' => Ok(self.operator(Operator::Percent)),
            '=' => Ok(self.operator(Operator::Eq)),

            // Potentially multi-character operators
            '<' => {
                if self.eat('=') {
                    Ok(self.operator(Operator::LtEq))
                } else if self.eat('>') {
                    Ok(self.operator(Operator::NotEq))
                } else {
                    Ok(self.operator(Operator::Lt))
                }
            }
            '>' => {
                if self.eat('=') {
                    Ok(self.operator(Operator::GtEq))
                } else {
                    Ok(self.operator(Operator::Gt))
                }
            }
            '!' => {
                if self.eat('=') {
                    Ok(self.operator(Operator::NotEq))
                } else {
                    Err(self.unexpected(c))
                }
            }
            '|' => {
                if self.eat('|') {
                    Ok(self.operator(Operator::Concat))
                } else {
                    Err(self.unexpected(c))
                }
            }

            '\'' => self.scan_string(),
            '"' => self.scan_quoted_identifier(),

            c if c.is_ascii_digit() => self.scan_number(),
            c if is_identifier_start(c) => self.scan_word(),

            _ => Err(self.unexpected(c)),
        }
    }

    /// Tokenizes the entire input, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first [`LexError`]; tokens scanned before it are discarded.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        debug!(mode = "fail-fast", bytes = self.input.len(), "Tokenizing");
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token().inspect_err(|err| {
                debug!(error = %err, "Tokenizing aborted");
            })?;
            trace!(
                kind = %token.token_type(),
                text = token.text(),
                span = %token.span(),
                "Token"
            );
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        debug!(tokens = tokens.len(), "Tokenized");
        Ok(tokens)
    }

    /// Tokenizes the entire input, recording errors and resuming after each.
    ///
    /// Stops early, still ending with an end-of-file token, once
    /// [`LexerConfig::max_errors`] errors have been recorded.
    #[must_use]
    pub fn tokenize_batch(&mut self) -> TokenStream {
        debug!(mode = "batch", bytes = self.input.len(), "Tokenizing");
        let mut tokens = Vec::new();
        let mut errors = Vec::new();
        loop {
            match self.next_token() {
                Ok(token) => {
                    trace!(
                        kind = %token.token_type(),
                        text = token.text(),
                        span = %token.span(),
                        "Token"
                    );
                    let is_eof = token.is_eof();
                    tokens.push(token);
                    if is_eof {
                        break;
                    }
                }
                Err(err) => {
                    debug!(error = %err, resume_at = self.pos, "Recovered from lex error");
                    errors.push(err);
                    if self
                        .config
                        .max_errors
                        .is_some_and(|limit| errors.len() >= limit.get())
                    {
                        debug!(errors = errors.len(), "Error limit reached");
                        tokens.push(Token::eof(Span::new(self.pos, self.pos), self.loc));
                        break;
                    }
                }
            }
        }
        debug!(tokens = tokens.len(), errors = errors.len(), "Tokenized");
        TokenStream::new(tokens, errors)
    }

    /// Tokenizes the entire input in the configured [`LexMode`].
    ///
    /// # Errors
    ///
    /// In fail-fast mode, returns the first [`LexError`]. Batch mode never
    /// fails; its errors are carried in the returned stream.
    pub fn run(&mut self) -> Result<TokenStream, LexError> {
        match self.config.mode {
            LexMode::FailFast => self
                .tokenize()
                .map(|tokens| TokenStream::new(tokens, Vec::new())),
            LexMode::Batch => Ok(self.tokenize_batch()),
        }
    }
}

/// Tokenizes `source` in the mode selected by `config`.
///
/// # Errors
///
/// In fail-fast mode, returns the first [`LexError`]. Batch mode never
/// fails; its errors are carried in the returned stream.
pub fn tokenize(source: &str, config: &LexerConfig) -> Result<TokenStream, LexError> {
    Lexer::with_config(source, config.clone()).run()
}

/// Tokenizes raw bytes, which must be valid UTF-8.
///
/// Invalid UTF-8 is reported as [`LexError::InvalidEncoding`] before any
/// token is scanned. In batch mode that error is returned inside a stream
/// holding only the end-of-file token.
///
/// # Errors
///
/// In fail-fast mode, returns the encoding error or the first [`LexError`].
pub fn tokenize_bytes(source: &[u8], config: &LexerConfig) -> Result<TokenStream, LexError> {
    let err = match std::str::from_utf8(source) {
        Ok(text) => return tokenize(text, config),
        Err(e) => e,
    };

    let valid = err.valid_up_to();
    let bad_len = err.error_len().unwrap_or(source.len() - valid);
    let prefix = String::from_utf8_lossy(&source[..valid]);
    let error = LexError::InvalidEncoding {
        snippet: source[valid..valid + bad_len]
            .iter()
            .map(|b| format!("\\x{b:02X}"))
            .collect(),
        span: Span::new(valid, valid + bad_len),
        location: Location::of(&prefix, valid),
    };
    debug!(error = %error, "Rejected input");

    match config.mode {
        LexMode::FailFast => Err(error),
        LexMode::Batch => Ok(TokenStream::new(
            vec![Token::eof(Span::default(), Location::START)],
            vec![error],
        )),
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// `TRUE`, `FALSE` and `NULL`, in any case.
fn literal_word(word: &str) -> Option<SqlLiteral> {
    if word.eq_ignore_ascii_case("true") {
        Some(SqlLiteral::Boolean(true))
    } else if word.eq_ignore_ascii_case("false") {
        Some(SqlLiteral::Boolean(false))
    } else if word.eq_ignore_ascii_case("null") {
        Some(SqlLiteral::Null)
    } else {
        None
    }
}

/// Words that can never be part of a dotted name.
fn is_reserved_word(word: &str) -> bool {
    literal_word(word).is_some() || Keyword::is_reserved(word)
}
