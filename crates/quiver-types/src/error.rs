use crate::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error category, determined by error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Syntax,
    Semantic,
    Runtime,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "syntax"),
            Self::Semantic => write!(f, "semantic"),
            Self::Runtime => write!(f, "runtime"),
        }
    }
}

/// Numeric error code (E100–E399).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    // ── Lexical & syntax errors (E100–E199) ──
    pub const UNRECOGNIZED_INPUT: Self = Self(100);
    pub const ACTION_IDENTIFIER_EXPECTED: Self = Self(101);
    pub const ACTION_TYPE_EXPECTED: Self = Self(102);
    pub const STATE_NAME_EXPECTED: Self = Self(103);
    pub const COLON_EXPECTED: Self = Self(104);
    pub const STATE_TYPE_EXPECTED: Self = Self(105);
    pub const EQUALS_EXPECTED: Self = Self(106);
    pub const STATE_DEFAULT_VALUE_EXPECTED: Self = Self(107);
    pub const REDUCE_STATE_EXPECTED: Self = Self(108);
    pub const REDUCE_WITH_EXPECTED: Self = Self(109);
    pub const REDUCE_ACTION_EXPECTED: Self = Self(110);
    pub const EXPRESSION_OPERATOR_EXPECTED: Self = Self(111);
    pub const EXPRESSION_VALUE_EXPECTED: Self = Self(112);
    pub const OPEN_BRACE_EXPECTED: Self = Self(113);
    pub const CLOSE_BRACE_EXPECTED: Self = Self(114);
    pub const TEST_FOR_EXPECTED: Self = Self(115);
    pub const TEST_STATE_EXPECTED: Self = Self(116);
    pub const ASSERT_STATE_EXPECTED: Self = Self(117);
    pub const ASSERT_IS_EXPECTED: Self = Self(118);
    pub const ASSERT_VALUE_EXPECTED: Self = Self(119);
    pub const ASSIGN_EQUALS_EXPECTED: Self = Self(120);
    pub const ASSIGN_VALUE_EXPECTED: Self = Self(121);
    pub const PAYLOAD_VALUE_EXPECTED: Self = Self(122);
    pub const TOP_LEVEL_DEFINITION_EXPECTED: Self = Self(123);

    // ── Semantic errors (E200–E299) ──
    pub const STATE_ALREADY_DEFINED: Self = Self(200);
    pub const ACTION_ALREADY_DEFINED: Self = Self(201);
    pub const UNKNOWN_STATE: Self = Self(202);
    pub const UNKNOWN_ACTION: Self = Self(203);
    pub const TEST_ALREADY_DECLARED: Self = Self(204);

    // ── Dispatch errors (E300–E399) ──
    pub const UNKNOWN_ACTION_DISPATCHED: Self = Self(300);
    pub const ACTION_PAYLOAD_MISMATCH: Self = Self(301);
    pub const UNKNOWN_STATE_VALUE: Self = Self(302);
    pub const MISSING_PAYLOAD: Self = Self(303);
    pub const NON_INTEGER_STATE: Self = Self(310);
    pub const NOT_AN_INTEGER: Self = Self(311);
    pub const ARITHMETIC_OVERFLOW: Self = Self(312);
    pub const OUTPUT_SERIALIZATION: Self = Self(399);

    /// Get the category for this error code.
    pub fn category(self) -> ErrorCategory {
        match self.0 {
            200..=299 => ErrorCategory::Semantic,
            300..=399 => ErrorCategory::Runtime,
            _ => ErrorCategory::Syntax,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// A structured, positioned error ready for the embedding shell.
///
/// The shell renders these; it must not parse free-form strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Error code (e.g., E203).
    pub code: ErrorCode,
    /// Error category (derived from code).
    pub category: ErrorCategory,
    /// Human-readable error message.
    pub message: String,
    /// Source location, when the error can be tied to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    /// The exact source line for context (empty without a span).
    pub source_line: String,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(
        code: ErrorCode,
        message: impl Into<String>,
        span: Option<Span>,
        source_line: impl Into<String>,
    ) -> Self {
        Self {
            code,
            category: code.category(),
            message: message.into(),
            span,
            source_line: source_line.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(span) = self.span {
            write!(f, "{}: ", span)?;
        }
        write!(f, "{} [{}] {}", self.code, self.category, self.message)
    }
}

impl std::error::Error for Diagnostic {}
