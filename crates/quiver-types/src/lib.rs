//! Shared types for the Quiver pipeline.
//!
//! This crate defines the AST node types, compound identifiers, source
//! spans, diagnostics, and the non-empty collection wrapper used across
//! all pipeline stages.

mod error;
mod ident;
mod non_empty;
mod span;
pub mod ast;

pub use error::{Diagnostic, ErrorCategory, ErrorCode};
pub use ident::{ActionIdentifier, StateIdentifier, TestIdentifier};
pub use non_empty::{EmptyCollection, NonEmpty};
pub use span::{SourceFile, Span};

/// The only numeric state type the interpreter knows how to mutate.
pub const INT_TYPE: &str = "Int";
