//! # opti-sql-lexer
//!
//! A hand-written SQL tokenizer.
//!
//! This crate provides:
//! - A single-pass, maximal-munch lexer producing keyword, identifier,
//!   literal, operator and delimiter tokens
//! - Dotted names (`schema.table.column`) lexed as one identifier carrying
//!   its parts
//! - Fail-fast and batch (error-collecting) modes
//!
//! ## Tokenizing
//!
//! ```rust
//! use opti_sql_lexer::{Lexer, SqlLiteral, TokenType};
//!
//! let tokens = Lexer::new("SELECT u.name FROM users u WHERE u.bio = 'it''s me'")
//!     .tokenize()
//!     .unwrap();
//!
//! assert_eq!(tokens[0].token_type(), TokenType::Keyword);
//! assert_eq!(
//!     tokens[1].qualified_name(),
//!     Some(&[String::from("u"), String::from("name")][..])
//! );
//! assert_eq!(
//!     tokens[8].literal_value(),
//!     Some(&SqlLiteral::String(String::from("it's me")))
//! );
//! assert!(tokens.last().unwrap().is_eof());
//! ```
//!
//! ## Collecting errors
//!
//! In batch mode the lexer records each error, skips the offending input and
//! keeps going:
//!
//! ```rust
//! use opti_sql_lexer::{tokenize, LexErrorKind, LexerConfig};
//!
//! let stream = tokenize("SELECT # FROM 'oops", &LexerConfig::batch()).unwrap();
//! let kinds: Vec<_> = stream.errors().iter().map(|e| e.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     vec![LexErrorKind::UnexpectedCharacter, LexErrorKind::UnterminatedString]
//! );
//! assert!(stream.into_result().is_err());
//! ```

pub mod config;
pub mod error;
mod keyword;
mod span;
mod stream;
mod token;
mod tokenizer;

pub use config::{LexMode, LexerConfig};
pub use error::{LexError, LexErrorKind, LexErrors, NumericError};
pub use keyword::Keyword;
pub use span::{Location, Span};
pub use stream::TokenStream;
pub use token::{Delimiter, Operator, SqlLiteral, Token, TokenKind, TokenType};
pub use tokenizer::{tokenize, tokenize_bytes, Lexer};
