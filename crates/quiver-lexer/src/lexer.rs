//! Core Quiver lexer: converts source text to a lexeme stream.
//!
//! Scanning is positional: whitespace (including newlines) between tokens
//! is skipped, then every fixed-text scanner is tried in priority order
//! before falling back to the identifier scanner.
//!
//! Keywords and `{` only match when followed by whitespace or the end of
//! input, so `actionX` is one identifier. `:`, `=`, `+`, `-` and `}` match
//! regardless of what follows, which is how `-1` becomes `-` + `1`.

use quiver_types::{ErrorCode, Span};
use serde::Serialize;
use thiserror::Error;

use crate::token::{Lexeme, Token};

/// Fixed-text scanners in priority order, with their "connect check":
/// `true` means the match must be followed by whitespace or end of input.
const FIXED_SCANNERS: &[(&str, bool)] = &[
    ("action", true),
    ("state", true),
    ("reduce", true),
    ("with", true),
    ("for", true),
    ("test", true),
    ("assert", true),
    ("is", true),
    (":", false),
    ("=", false),
    ("+", false),
    ("-", false),
    ("{", true),
    ("}", false),
];

/// Lexing failure.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LexError {
    /// No scanner matched at a non-whitespace position.
    #[error("unrecognized input at {span}")]
    UnrecognizedInput { span: Span },
}

impl LexError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnrecognizedInput { .. } => ErrorCode::UNRECOGNIZED_INPUT,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LexError::UnrecognizedInput { span } => *span,
        }
    }
}

/// Lex a whole source string.
pub fn scan(source: &str) -> Result<Vec<Lexeme>, LexError> {
    Lexer::new(source).scan()
}

/// The Quiver lexer.
///
/// A pure function of its input: every call to [`Lexer::scan`] starts from
/// a fresh cursor.
pub struct Lexer<'src> {
    /// The full source text.
    source: &'src str,
    /// Current byte offset into `source`.
    pos: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based, in characters).
    col: u32,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Lex the entire source into lexemes, in input order.
    pub fn scan(mut self) -> Result<Vec<Lexeme>, LexError> {
        let mut lexemes = Vec::new();

        loop {
            self.skip_whitespace();
            if self.at_end() {
                break;
            }

            let lexeme = match self.scan_fixed() {
                Some(lexeme) => lexeme,
                None => self
                    .scan_identifier()
                    .ok_or(LexError::UnrecognizedInput {
                        span: self.current_span(),
                    })?,
            };
            lexemes.push(lexeme);
        }

        Ok(lexemes)
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn current_span(&self) -> Span {
        Span::point(self.line, self.col)
    }

    fn span_from(&self, start_line: u32, start_col: u32) -> Span {
        Span::new(start_line, start_col, self.line, self.col)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Scanners
    // ─────────────────────────────────────────────────────────────

    /// Try each keyword/symbol scanner in priority order.
    fn scan_fixed(&mut self) -> Option<Lexeme> {
        let rest = self.rest();
        let (text, _) = FIXED_SCANNERS.iter().copied().find(|&(text, connect)| {
            let Some(after) = rest.strip_prefix(text) else {
                return false;
            };
            !connect || after.chars().next().map_or(true, char::is_whitespace)
        })?;

        let (start_line, start_col) = (self.line, self.col);
        for _ in text.chars() {
            self.advance();
        }
        Some(Lexeme::new(
            Token::from_text(text),
            self.span_from(start_line, start_col),
        ))
    }

    /// Consume up to (not including) the next whitespace or `:`.
    fn scan_identifier(&mut self) -> Option<Lexeme> {
        let start = self.pos;
        let (start_line, start_col) = (self.line, self.col);
        while self.peek().is_some_and(|ch| !ch.is_whitespace() && ch != ':') {
            self.advance();
        }
        if self.pos == start {
            return None;
        }
        Some(Lexeme::new(
            Token::Identifier(self.source[start..self.pos].to_string()),
            self.span_from(start_line, start_col),
        ))
    }
}
