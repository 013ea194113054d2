//! Core parser infrastructure: token cursor, speculation, and helpers.

use quiver_lexer::Token;
use quiver_types::ast::Ast;

use crate::error::{Expectation, ParseError};

/// Result of one production.
///
/// `Ok(None)` means the leading keyword was absent and nothing was consumed.
/// Once the leading keyword matches, the production either returns a node
/// or fails with the expectation it could not meet.
pub(crate) type Production<T> = Result<Option<T>, ParseError>;

/// Parse a whole token stream into top-level definitions.
pub fn parse_program(tokens: Vec<Token>) -> Result<Ast, ParseError> {
    Parser::new(tokens).parse()
}

/// The Quiver parser.
///
/// A cursor over an owned token buffer. The position is a plain index, so a
/// snapshot is a copy of it and restoring is an assignment.
pub struct Parser {
    /// The token stream.
    tokens: Vec<Token>,
    /// Current index into `tokens`.
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse the complete program: `topLevel*` followed by end of input.
    pub fn parse(mut self) -> Result<Ast, ParseError> {
        let mut definitions = Vec::new();
        while let Some(definition) = self.parse_top_level()? {
            definitions.push(definition);
        }
        if !self.at_end() {
            return Err(self.error(Expectation::TopLevelDefinition));
        }
        Ok(definitions)
    }

    // ── Token Cursor ──────────────────────────────────────────────────────────

    /// The token under the cursor, or `None` at end of input.
    pub(crate) fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Advance past the current token.
    pub(crate) fn consume(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Step back one token.
    pub(crate) fn rollback(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    pub(crate) fn snapshot(&self) -> usize {
        self.pos
    }

    pub(crate) fn restore(&mut self, snapshot: usize) {
        self.pos = snapshot;
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Build an error at the current position.
    pub(crate) fn error(&self, expectation: Expectation) -> ParseError {
        ParseError::new(expectation, self.pos)
    }

    // ── Primitive Matchers ────────────────────────────────────────────────────

    /// Consume `expected` if it is the current token.
    pub(crate) fn parse_keyword(&mut self, expected: &Token) -> bool {
        if self.current() == Some(expected) {
            self.consume();
            true
        } else {
            false
        }
    }

    /// Consume every token of `sequence` or none of them.
    pub(crate) fn parse_all_keywords(&mut self, sequence: &[Token]) -> bool {
        let snapshot = self.snapshot();
        if sequence.iter().all(|token| self.parse_keyword(token)) {
            true
        } else {
            self.restore(snapshot);
            false
        }
    }

    /// Consume an identifier token and return its text.
    pub(crate) fn parse_identifier(&mut self) -> Option<String> {
        let text = self.current()?.as_identifier()?.to_string();
        self.consume();
        Some(text)
    }

    /// Greedily consume a run of identifiers forming a compound name.
    pub(crate) fn parse_identifier_sequence(&mut self) -> Vec<String> {
        self.parse_many(Self::parse_identifier)
    }

    /// Apply `parse` until it stops matching.
    pub(crate) fn parse_many<T>(&mut self, mut parse: impl FnMut(&mut Self) -> Option<T>) -> Vec<T> {
        std::iter::from_fn(|| parse(self)).collect()
    }

    /// Apply a committing production until it reports no match.
    pub(crate) fn parse_many_committed<T>(
        &mut self,
        mut parse: impl FnMut(&mut Self) -> Production<T>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = Vec::new();
        while let Some(item) = parse(self)? {
            items.push(item);
        }
        Ok(items)
    }

    // ── Expect Helpers ────────────────────────────────────────────────────────

    /// Require `expected`, failing with `expectation` otherwise.
    pub(crate) fn expect_keyword(
        &mut self,
        expected: &Token,
        expectation: Expectation,
    ) -> Result<(), ParseError> {
        if self.parse_keyword(expected) {
            Ok(())
        } else {
            Err(self.error(expectation))
        }
    }

    /// Require an identifier, failing with `expectation` otherwise.
    pub(crate) fn expect_identifier(&mut self, expectation: Expectation) -> Result<String, ParseError> {
        self.parse_identifier().ok_or_else(|| self.error(expectation))
    }

    /// Require a non-empty compound name.
    pub(crate) fn expect_identifier_sequence(
        &mut self,
        expectation: Expectation,
    ) -> Result<Vec<String>, ParseError> {
        let name = self.parse_identifier_sequence();
        if name.is_empty() {
            Err(self.error(expectation))
        } else {
            Ok(name)
        }
    }
}
