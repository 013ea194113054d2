//! Lexer tests for Quiver.
//!
//! Covers: the 8 keywords, the 6 symbols, the asymmetric connect check,
//! identifier termination rules, the canonical counter program, and the
//! 100-iteration determinism test.

use quiver_lexer::{scan, Lexer, Token, KEYWORDS};

const COUNTER: &str = include_str!("../../../fixtures/counter.quiver");

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

/// Lex source text and return just the tokens.
fn tokens(source: &str) -> Vec<Token> {
    scan(source)
        .expect("unexpected lex failure")
        .into_iter()
        .map(|l| l.token)
        .collect()
}

fn id(text: &str) -> Token {
    Token::ident(text)
}

// ─────────────────────────────────────────────────────────────────────
// Keywords & symbols
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_all_keywords() {
    let pairs = [
        ("action", Token::Action),
        ("state", Token::State),
        ("reduce", Token::Reduce),
        ("with", Token::With),
        ("for", Token::For),
        ("test", Token::Test),
        ("assert", Token::Assert),
        ("is", Token::Is),
    ];
    assert_eq!(pairs.len(), KEYWORDS.len());
    for (src, expected) in &pairs {
        assert_eq!(tokens(src), vec![expected.clone()], "keyword '{src}'");
    }
}

#[test]
fn test_all_symbols() {
    assert_eq!(
        tokens(": = + - { }"),
        vec![
            Token::Colon,
            Token::Equals,
            Token::Plus,
            Token::Minus,
            Token::LBrace,
            Token::RBrace,
        ]
    );
}

#[test]
fn test_keywords_are_case_sensitive() {
    assert_eq!(tokens("Action STATE"), vec![id("Action"), id("STATE")]);
}

// ─────────────────────────────────────────────────────────────────────
// Connect check
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_keyword_glued_to_text_is_identifier() {
    assert_eq!(tokens("actionX"), vec![id("actionX")]);
    assert_eq!(tokens("testing"), vec![id("testing")]);
}

#[test]
fn test_keyword_followed_by_newline() {
    assert_eq!(tokens("reduce\nCounter"), vec![Token::Reduce, id("Counter")]);
}

#[test]
fn test_open_brace_requires_separation() {
    // `{` carries the connect check, so a glued brace becomes part of an identifier.
    assert_eq!(tokens("{state"), vec![id("{state")]);
    assert_eq!(tokens("{ state"), vec![Token::LBrace, Token::State]);
}

#[test]
fn test_close_brace_may_be_glued() {
    // `}` has no connect check.
    assert_eq!(tokens("}state"), vec![Token::RBrace, Token::State]);
    assert_eq!(tokens("}}"), vec![Token::RBrace, Token::RBrace]);
}

#[test]
fn test_sign_symbols_may_be_glued() {
    assert_eq!(tokens("-1"), vec![Token::Minus, id("1")]);
    assert_eq!(tokens("+5"), vec![Token::Plus, id("5")]);
    assert_eq!(tokens("+="), vec![Token::Plus, Token::Equals]);
}

#[test]
fn test_colon_and_equals_may_be_glued() {
    assert_eq!(tokens(":Int"), vec![Token::Colon, id("Int")]);
    assert_eq!(tokens("=0"), vec![Token::Equals, id("0")]);
}

// ─────────────────────────────────────────────────────────────────────
// Identifiers
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_identifier_stops_at_colon() {
    assert_eq!(
        tokens("Counter: Int"),
        vec![id("Counter"), Token::Colon, id("Int")]
    );
    assert_eq!(tokens("value:10"), vec![id("value"), Token::Colon, id("10")]);
}

#[test]
fn test_identifier_swallows_symbols_after_first_char() {
    // Only whitespace and `:` end an identifier.
    assert_eq!(tokens("1}"), vec![id("1}")]);
    assert_eq!(tokens("a+=b"), vec![id("a+=b")]);
}

#[test]
fn test_keyword_glued_to_symbols_is_identifier() {
    assert_eq!(tokens("state+=1"), vec![id("state+=1")]);
}

#[test]
fn test_compound_name_is_separate_identifiers() {
    assert_eq!(
        tokens("action Increment by value: Int"),
        vec![
            Token::Action,
            id("Increment"),
            id("by"),
            id("value"),
            Token::Colon,
            id("Int"),
        ]
    );
}

// ─────────────────────────────────────────────────────────────────────
// Canonical counter program
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_counter_declarations_prefix() {
    let expected = vec![
        Token::Action, id("Increment"),
        Token::Action, id("Decrement"),
        Token::State, id("Counter"), Token::Colon, id("Int"), Token::Equals, id("0"),
        Token::Reduce, id("Counter"), Token::With, id("Increment"), Token::LBrace,
            Token::State, Token::Plus, Token::Equals, id("1"),
        Token::RBrace,
        Token::Reduce, id("Counter"), Token::With, id("Decrement"), Token::LBrace,
            Token::State, Token::Minus, Token::Equals, id("1"),
        Token::RBrace,
    ];
    let actual = tokens(COUNTER);
    assert_eq!(&actual[..expected.len()], &expected[..]);
}

#[test]
fn test_counter_full_token_stream() {
    let expected = vec![
        Token::Action, id("Increment"),
        Token::Action, id("Decrement"),
        Token::State, id("Counter"), Token::Colon, id("Int"), Token::Equals, id("0"),
        Token::Reduce, id("Counter"), Token::With, id("Increment"), Token::LBrace,
            Token::State, Token::Plus, Token::Equals, id("1"),
        Token::RBrace,
        Token::Reduce, id("Counter"), Token::With, id("Decrement"), Token::LBrace,
            Token::State, Token::Minus, Token::Equals, id("1"),
        Token::RBrace,
        Token::Test, id("Simple"), id("increment"), Token::For, id("Counter"), Token::LBrace,
            Token::Assert, Token::State, Token::Is, id("0"),
            Token::State, Token::Equals, id("10"),
            Token::Reduce, id("Increment"),
            Token::Assert, Token::State, Token::Is, id("11"),
        Token::RBrace,
        Token::Test, Token::For, id("Counter"), Token::LBrace,
            Token::Reduce, id("Decrement"),
            Token::Assert, Token::State, Token::Is, Token::Minus, id("1"),
        Token::RBrace,
        Token::Test, id("Symmetric"), id("actions"), Token::For, id("Counter"), Token::LBrace,
            Token::Reduce, id("Increment"),
            Token::Reduce, id("Decrement"),
            Token::Assert, Token::State, Token::Is, id("0"),
        Token::RBrace,
        Token::Action, id("Increment"), id("by"), id("value"), Token::Colon, id("Int"),
        Token::Action, id("Decrement"), id("by"), id("value"), Token::Colon, id("Int"),
        Token::Reduce, id("Counter"), Token::LBrace,
            Token::With, id("Increment"), id("by"), id("value"), Token::LBrace,
                Token::State, Token::Plus, Token::Equals, Token::Action,
            Token::RBrace,
            Token::With, id("Decrement"), id("by"), id("value"), Token::LBrace,
                Token::State, Token::Minus, Token::Equals, Token::Action,
            Token::RBrace,
        Token::RBrace,
        Token::Test, id("Increment"), id("by"), id("value"), Token::For, id("Counter"), Token::LBrace,
            Token::Reduce, id("Increment"),
            Token::Reduce, id("Increment"), id("by"), id("value"), Token::Colon, id("10"),
            Token::Assert, Token::State, Token::Is, id("11"),
        Token::RBrace,
    ];
    assert_eq!(tokens(COUNTER), expected);
}

#[test]
fn test_counter_spans_follow_lines() {
    let lexemes = scan(COUNTER).unwrap();
    // `state Counter: Int = 0` is on line 4.
    let state = lexemes
        .iter()
        .find(|l| l.token == Token::State)
        .expect("state keyword");
    assert_eq!(state.span.line, 4);
    assert_eq!(state.span.column, 1);
}

// ─────────────────────────────────────────────────────────────────────
// Determinism
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_lexer_determinism_100_iterations() {
    let first = Lexer::new(COUNTER).scan().unwrap();
    for i in 0..100 {
        let again = Lexer::new(COUNTER).scan().unwrap();
        assert_eq!(first, again, "Determinism failure at iteration {i}");
    }
}
