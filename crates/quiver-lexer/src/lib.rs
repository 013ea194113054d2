//! Quiver lexer: converts source text into a lexeme stream.

pub mod lexer;
pub mod token;

pub use lexer::{scan, LexError, Lexer};
pub use token::{Lexeme, Token, KEYWORDS};
