#![allow(dead_code)]

use opti_sql_lexer::{
    LexError, Lexer, LexerConfig, Token, TokenKind, TokenStream, TokenType,
};

/// Installs a test-writer subscriber so `RUST_LOG`-style output shows up
/// under `cargo test -- --nocapture`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub fn lex(sql: &str) -> Vec<Token> {
    Lexer::new(sql)
        .tokenize()
        .unwrap_or_else(|e| panic!("Failed to tokenize: {sql}\nError: {e}"))
}

pub fn lex_err(sql: &str) -> LexError {
    Lexer::new(sql)
        .tokenize()
        .expect_err(&format!("Expected lex error for: {sql}"))
}

pub fn lex_batch(sql: &str) -> TokenStream {
    Lexer::with_config(sql, LexerConfig::batch()).tokenize_batch()
}

pub fn types(sql: &str) -> Vec<TokenType> {
    lex(sql).iter().map(Token::token_type).collect()
}

pub fn kinds(sql: &str) -> Vec<TokenKind> {
    lex(sql).iter().map(|t| t.kind().clone()).collect()
}

/// Rebuilds the source from the tokens and the gaps between their spans.
/// Gaps hold the whitespace and comments the lexer skipped.
pub fn rebuild(sql: &str, tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut prev_end = 0;
    for token in tokens {
        let span = token.span();
        out.push_str(&sql[prev_end..span.start]);
        out.push_str(&token.to_string());
        prev_end = span.end;
    }
    out.push_str(&sql[prev_end..]);
    out
}

/// Joins the rendered tokens with single spaces.
pub fn reserialize(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter(|t| !t.is_eof())
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Checks that re-lexing the space-joined rendering gives the same kinds and
/// values, and that doing it twice is a fixed point.
pub fn idempotent(sql: &str) {
    let first = lex(sql);
    let rendered = reserialize(&first);
    let second = lex(&rendered);
    assert_eq!(
        first.iter().map(Token::kind).collect::<Vec<_>>(),
        second.iter().map(Token::kind).collect::<Vec<_>>(),
        "Re-lex changed the token sequence.\n  Input:    {sql}\n  Rendered: {rendered}"
    );
    assert_eq!(reserialize(&second), rendered);
}

/// A grab bag of realistic statements.
pub const CORPUS: &[&str] = &[
    "SELECT id, name FROM users WHERE active = TRUE",
    "select u.id, o.total from app.users u inner join app.orders o on u.id = o.user_id",
    "SELECT COUNT(*) AS n FROM t GROUP BY region HAVING COUNT(*) >= 10 ORDER BY n LIMIT 5 OFFSET 10",
    "SELECT * FROM logs WHERE msg LIKE '%it''s%' AND level <> 'debug' OR code != 404",
    "SELECT price * 1.5e2 / 3 % 7 - -2 + 0.25 FROM items",
    "SELECT CASE WHEN x = NULL THEN 'none' ELSE first || ' ' || last END FROM people",
    "SELECT t.desc, t.set, p.values FROM t CROSS JOIN p;",
    "SELECT a FROM t WHERE b BETWEEN 1 AND 10 AND c NOT IN (1, 2)",
    "SELECT DISTINCT \"Weird Table\".x FROM \"Weird Table\" WHERE \"select\" = 1",
    "SELECT v FROM t UNION ALL SELECT v FROM s EXCEPT SELECT v FROM r",
    "SELECT a FROM t WHERE EXISTS (SELECT 1 FROM s WHERE s.a = t.a) -- trailing\n",
    "/* header */ SELECT\n\ta\n  , b /* inline */ FROM c",
];
