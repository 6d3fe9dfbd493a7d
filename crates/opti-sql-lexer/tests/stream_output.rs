//! Tests for the token stream as handed to downstream consumers.

mod common;
use common::*;

use opti_sql_lexer::{
    tokenize, LexMode, Lexer, LexerConfig, TokenStream, TokenType,
};
use serde_json::json;
use std::num::NonZeroUsize;

#[test]
fn serialize_tokens() {
    let tokens = lex("SELECT s.a, 'x' FROM t");
    let value = serde_json::to_value(&tokens).unwrap();

    assert_eq!(
        value[0],
        json!({
            "text": "SELECT",
            "kind": {"type": "Keyword", "value": "SELECT"},
            "span": {"start": 0, "end": 6},
            "location": {"line": 1, "column": 1}
        })
    );
    assert_eq!(
        value[1]["kind"],
        json!({"type": "Identifier", "value": ["s", "a"]})
    );
    assert_eq!(value[2]["kind"], json!({"type": "Delimiter", "value": "Comma"}));
    assert_eq!(
        value[3]["kind"],
        json!({"type": "Literal", "value": {"type": "string", "value": "x"}})
    );
    assert_eq!(value[5]["kind"], json!({"type": "Identifier", "value": null}));
    assert_eq!(value[6]["kind"], json!({"type": "EndOfFile"}));
}

#[test]
fn serialize_stream_with_errors() {
    let stream = lex_batch("a ~");
    let value = serde_json::to_value(&stream).unwrap();
    let errors = value["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["UnexpectedCharacter"]["ch"], json!("~"));
    assert_eq!(value["tokens"].as_array().unwrap().len(), 2);
}

#[test]
fn stream_iterates_in_order() {
    let stream: TokenStream = tokenize("a + 1", &LexerConfig::default()).unwrap();
    let types: Vec<_> = (&stream).into_iter().map(|t| t.token_type()).collect();
    assert_eq!(
        types,
        vec![
            TokenType::Identifier,
            TokenType::Operator,
            TokenType::Literal,
            TokenType::EndOfFile,
        ]
    );
    let (tokens, errors) = stream.into_parts();
    assert_eq!(tokens.len(), 4);
    assert!(errors.is_empty());
}

#[test]
fn pull_tokens_one_at_a_time() {
    let mut lexer = Lexer::new("a,b");
    let mut texts = Vec::new();
    loop {
        let token = lexer.next_token().unwrap();
        if token.is_eof() {
            break;
        }
        texts.push(token.text().to_string());
    }
    assert_eq!(texts, vec!["a", ",", "b"]);
    assert_eq!(lexer.position(), 3);
}

#[test]
fn restart_from_token_position() {
    let sql = "SELECT a FROM t; SELECT b FROM u";
    let tokens = lex(sql);
    let second = tokens
        .iter()
        .position(|t| t.text() == ";")
        .map(|i| &tokens[i + 1])
        .unwrap();

    let mut lexer = Lexer::new(sql);
    assert!(lexer.seek(second.span().start));
    let rest = lexer.tokenize().unwrap();
    assert_eq!(rest.as_slice(), &tokens[5..]);
}

#[test]
fn config_from_environment() {
    std::env::set_var(opti_sql_lexer::config::MODE_ENV, "batch");
    std::env::set_var(opti_sql_lexer::config::MAX_ERRORS_ENV, "4");
    let config = LexerConfig::from_env();
    std::env::remove_var(opti_sql_lexer::config::MODE_ENV);
    std::env::remove_var(opti_sql_lexer::config::MAX_ERRORS_ENV);

    assert_eq!(config.mode, LexMode::Batch);
    assert_eq!(config.max_errors.map(NonZeroUsize::get), Some(4));
    assert_eq!(Lexer::with_config("", config.clone()).config(), &config);
}
