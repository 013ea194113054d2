//! Quiver test runner: executes `test ... for <state> { }` blocks.
//!
//! Each test gets a fresh [`Interpreter`], so no test can observe another's
//! state and verdicts do not depend on execution order.

use std::collections::BTreeMap;
use std::fmt;

use quiver_binder::Program;
use quiver_types::ast::{TestDefinition, TestExpression};
use quiver_types::{StateIdentifier, TestIdentifier};
use serde::Serialize;

use crate::error::DispatchError;
use crate::interpreter::Interpreter;
use crate::value::{ActionValue, StateValue};

/// Outcome of one test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    Ok,
    /// An `assert state is` did not hold; later expressions were skipped.
    AssertFailed {
        expected: StateValue,
        actual: StateValue,
    },
    /// A dispatch failed; later expressions were skipped.
    Error(DispatchError),
}

impl Verdict {
    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Ok)
    }

    /// Single-character annotation for a test listing.
    pub fn glyph(&self) -> char {
        match self {
            Verdict::Ok => '✓',
            Verdict::AssertFailed { .. } => '✗',
            Verdict::Error(_) => '!',
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Ok => write!(f, "ok"),
            Verdict::AssertFailed { expected, actual } => {
                write!(f, "expected {expected}, got {actual}")
            }
            Verdict::Error(e) => write!(f, "error: {e}"),
        }
    }
}

/// Verdicts for every test, keyed by state and then test name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TestResults {
    tests: BTreeMap<StateIdentifier, BTreeMap<TestIdentifier, Verdict>>,
}

impl TestResults {
    pub fn get(&self, state: &StateIdentifier, test: &TestIdentifier) -> Option<&Verdict> {
        self.tests.get(state)?.get(test)
    }

    /// Every verdict in state order, then test order.
    pub fn iter(&self) -> impl Iterator<Item = (&StateIdentifier, &TestIdentifier, &Verdict)> {
        self.tests
            .iter()
            .flat_map(|(state, tests)| tests.iter().map(move |(test, v)| (state, test, v)))
    }

    pub fn len(&self) -> usize {
        self.tests.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn passed(&self) -> usize {
        self.iter().filter(|(_, _, v)| v.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.len() - self.passed()
    }

    fn insert(&mut self, state: StateIdentifier, test: TestIdentifier, verdict: Verdict) {
        self.tests.entry(state).or_default().insert(test, verdict);
    }
}

impl fmt::Display for TestResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (state, test, verdict) in self.iter() {
            let name = if test.is_empty() {
                "(unnamed)".to_string()
            } else {
                test.to_string()
            };
            match verdict {
                Verdict::Ok => writeln!(f, "  {} {state}: {name}", verdict.glyph())?,
                other => writeln!(f, "  {} {state}: {name}: {other}", other.glyph())?,
            }
        }
        writeln!(f, "\n{} passed, {} failed", self.passed(), self.failed())
    }
}

/// Run every declared test.
pub fn run_all(program: &Program) -> TestResults {
    let mut results = TestResults::default();
    for (state, tests) in program.tests() {
        for (name, test) in tests {
            let verdict = run_test(program, state, test);
            tracing::debug!(state = %state, test = %name, verdict = %verdict, "test finished");
            results.insert(state.clone(), name.clone(), verdict);
        }
    }
    results
}

/// Run one test against a fresh interpreter.
pub fn run_test(program: &Program, state: &StateIdentifier, test: &TestDefinition) -> Verdict {
    let mut interpreter = Interpreter::new(program);

    for expression in &test.expressions {
        let step = match expression {
            TestExpression::AssertState(value) => {
                let expected = StateValue::from(value);
                match interpreter.value(state) {
                    Some(actual) if *actual == expected => Ok(()),
                    Some(actual) => {
                        return Verdict::AssertFailed {
                            expected,
                            actual: actual.clone(),
                        }
                    }
                    None => Err(DispatchError::UnknownState {
                        state: state.clone(),
                    }),
                }
            }
            TestExpression::AssignState(value) => interpreter.assign(state, StateValue::from(value)),
            TestExpression::ReduceAction(reduce) => {
                let action = match &reduce.value {
                    Some(payload) => ActionValue::with_payload(reduce.action_identifier(), payload),
                    None => ActionValue::new(reduce.action_identifier()),
                };
                interpreter.dispatch(&action)
            }
        };

        if let Err(e) = step {
            return Verdict::Error(e);
        }
    }

    Verdict::Ok
}
