//! Quiver parser: converts a token stream into an AST.
//!
//! Backtracking recursive descent. Each production matches its leading
//! keyword or consumes nothing; after the keyword it commits, and the first
//! unmet expectation aborts the whole parse.

mod error;
mod parse_decl;
mod parse_expr;
mod parser;

pub use error::{Expectation, ParseError};
pub use parser::{parse_program, Parser};
