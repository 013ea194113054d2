//! Quiver binder: turns an AST into a validated [`Program`].

mod binder;
mod error;
mod program;

pub use binder::bind;
pub use error::SemanticError;
pub use program::{Program, StateReducers, StateTests};
