//! Quiver compiler: orchestrates the full pipeline.
//!
//! ```text
//! Quiver Source → Lexer → Parser → Binder → Test Runner → CompileOutput
//! ```
//!
//! Every stage is a pure function of its input. [`compile`] never fails as
//! a Rust call: a failing stage is reported through
//! [`CompileOutput::diagnostic`].

mod error;
mod fingerprint;
mod pipeline;

pub use error::CompileError;
pub use fingerprint::fingerprint;
pub use pipeline::{compile, compile_program, compile_source, CompileOutput};
