//! Quiver interpreter and declarative test runner.
//!
//! Executes a bound [`quiver_binder::Program`] directly: actions are
//! dispatched through their reducers, and `test` blocks run hermetically,
//! one fresh interpreter per test.

pub mod error;
pub mod interpreter;
pub mod test_runner;
pub mod value;

pub use error::{ArithmeticDefect, DispatchError, DispatchResult};
pub use interpreter::Interpreter;
pub use test_runner::{run_all, run_test, TestResults, Verdict};
pub use value::{ActionPayload, ActionValue, StateValue};
