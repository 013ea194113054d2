use quiver_binder::SemanticError;
use quiver_lexer::{Lexeme, LexError};
use quiver_parser::ParseError;
use quiver_types::{Diagnostic, ErrorCode, SourceFile, Span};
use serde::Serialize;
use thiserror::Error;

/// Failure of one of the compile-time stages.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "stage", content = "error", rename_all = "snake_case")]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

impl CompileError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CompileError::Lex(e) => e.code(),
            CompileError::Parse(e) => e.code(),
            CompileError::Semantic(e) => e.code(),
        }
    }

    /// Render as a positioned diagnostic.
    ///
    /// `lexemes` resolves a parse error's token index to a span; an index
    /// past the last lexeme points at the end of input. Semantic errors are
    /// not tied to a location.
    pub fn to_diagnostic(&self, file: &SourceFile, lexemes: &[Lexeme]) -> Diagnostic {
        let span = match self {
            CompileError::Lex(e) => Some(e.span()),
            CompileError::Parse(e) => Some(token_span(lexemes, e.position)),
            CompileError::Semantic(_) => None,
        };
        let source_line = span
            .and_then(|s| file.line(s.line))
            .unwrap_or_default();
        Diagnostic::new(self.code(), self.to_string(), span, source_line)
    }
}

fn token_span(lexemes: &[Lexeme], position: usize) -> Span {
    match lexemes.get(position) {
        Some(lexeme) => lexeme.span,
        None => lexemes
            .last()
            .map_or(Span::point(1, 1), |lexeme| lexeme.span.end()),
    }
}
