//! Token types for the Quiver lexer.
//!
//! Defines [`Token`] covering every lexeme of the language and
//! [`Lexeme`], which pairs a token with a source [`Span`].

use quiver_types::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The 8 reserved words.
///
/// These can never be part of a compound name: the lexer emits the keyword
/// token instead of [`Token::Identifier`] whenever one stands alone.
pub const KEYWORDS: &[&str] = &[
    "action", "state", "reduce", "with", "for", "test", "assert", "is",
];

// ─────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────

/// Every token of the Quiver language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Token {
    // ── Keywords ─────────────────────────────────────────────

    /// `action`
    Action,
    /// `state`
    State,
    /// `reduce`
    Reduce,
    /// `with`
    With,
    /// `for`
    For,
    /// `test`
    Test,
    /// `assert`
    Assert,
    /// `is`
    Is,

    // ── Symbols ──────────────────────────────────────────────

    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    // ── Identifiers ──────────────────────────────────────────

    /// Any other run of characters: names, types, and literal values.
    Identifier(String),
}

impl Token {
    /// Classify a piece of source text, falling back to an identifier.
    pub fn from_text(text: &str) -> Token {
        match text {
            "action" => Token::Action,
            "state" => Token::State,
            "reduce" => Token::Reduce,
            "with" => Token::With,
            "for" => Token::For,
            "test" => Token::Test,
            "assert" => Token::Assert,
            "is" => Token::Is,
            ":" => Token::Colon,
            "=" => Token::Equals,
            "+" => Token::Plus,
            "-" => Token::Minus,
            "{" => Token::LBrace,
            "}" => Token::RBrace,
            other => Token::Identifier(other.to_string()),
        }
    }

    /// Shorthand for building an identifier token.
    pub fn ident(text: impl Into<String>) -> Token {
        Token::Identifier(text.into())
    }

    /// Returns `true` for the 8 reserved words.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Token::Action
                | Token::State
                | Token::Reduce
                | Token::With
                | Token::For
                | Token::Test
                | Token::Assert
                | Token::Is
        )
    }

    /// Returns the identifier text, if this is an identifier.
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Token::Identifier(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Token::Action => "action",
            Token::State => "state",
            Token::Reduce => "reduce",
            Token::With => "with",
            Token::For => "for",
            Token::Test => "test",
            Token::Assert => "assert",
            Token::Is => "is",
            Token::Colon => ":",
            Token::Equals => "=",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::Identifier(text) => text.as_str(),
        };
        f.write_str(s)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Lexeme
// ─────────────────────────────────────────────────────────────────────

/// A token together with where it was found.
///
/// The span is advisory: the parser only ever looks at the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexeme {
    pub token: Token,
    pub span: Span,
}

impl Lexeme {
    pub fn new(token: Token, span: Span) -> Self {
        Self { token, span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_keywords() {
        assert_eq!(Token::from_text("action"), Token::Action);
        assert_eq!(Token::from_text("reduce"), Token::Reduce);
        assert_eq!(Token::from_text("is"), Token::Is);
        assert_eq!(Token::from_text("{"), Token::LBrace);
        assert_eq!(Token::from_text("Counter"), Token::ident("Counter"));
    }

    #[test]
    fn test_keyword_case_sensitivity() {
        assert_eq!(Token::from_text("Action"), Token::ident("Action"));
        assert_eq!(Token::from_text("STATE"), Token::ident("STATE"));
    }

    #[test]
    fn test_display_roundtrip_keywords() {
        for &kw in KEYWORDS {
            let token = Token::from_text(kw);
            assert!(token.is_keyword(), "'{kw}' should be a keyword");
            assert_eq!(token.to_string(), kw);
        }
    }

    #[test]
    fn test_symbols_are_not_keywords() {
        for sym in [":", "=", "+", "-", "{", "}"] {
            let token = Token::from_text(sym);
            assert!(!token.is_keyword());
            assert_eq!(token.to_string(), sym);
        }
    }

    #[test]
    fn test_json_shape() {
        assert_eq!(
            serde_json::to_string(&Token::Action).unwrap(),
            r#"{"kind":"action"}"#
        );
        assert_eq!(
            serde_json::to_string(&Token::ident("Counter")).unwrap(),
            r#"{"kind":"identifier","text":"Counter"}"#
        );
    }
}
