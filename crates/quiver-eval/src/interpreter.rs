//! Tree-walking interpreter over a bound [`Program`].
//!
//! Dispatch is atomic: every reducer expression is evaluated against a
//! staged copy of the affected state values, and the copy is committed only
//! after the last expression succeeded.

use std::collections::BTreeMap;

use quiver_binder::Program;
use quiver_types::ast::{ExpressionDefinition, ExpressionValue, Operator, SingleReduceDefinition};
use quiver_types::{StateIdentifier, INT_TYPE};

use crate::error::{ArithmeticDefect, DispatchError, DispatchResult};
use crate::value::{ActionValue, StateValue};

/// Runtime state of one program.
///
/// Cheap to construct; borrows the program, which is never mutated.
#[derive(Debug, Clone)]
pub struct Interpreter<'p> {
    program: &'p Program,
    state: BTreeMap<StateIdentifier, StateValue>,
}

impl<'p> Interpreter<'p> {
    /// Seed every declared state with its declared type and initial literal.
    pub fn new(program: &'p Program) -> Self {
        let state = program
            .state()
            .iter()
            .map(|(id, definition)| {
                (
                    id.clone(),
                    StateValue::new(&definition.type_name, &definition.value),
                )
            })
            .collect();
        Self { program, state }
    }

    pub fn state(&self) -> &BTreeMap<StateIdentifier, StateValue> {
        &self.state
    }

    pub fn value(&self, state: &StateIdentifier) -> Option<&StateValue> {
        self.state.get(state)
    }

    /// Overwrite a state value directly, without going through a reducer.
    pub fn assign(&mut self, state: &StateIdentifier, value: StateValue) -> DispatchResult<()> {
        let slot = self
            .state
            .get_mut(state)
            .ok_or_else(|| DispatchError::UnknownState {
                state: state.clone(),
            })?;
        *slot = value;
        Ok(())
    }

    /// Apply `action` through every reducer bound to it.
    pub fn dispatch(&mut self, action: &ActionValue) -> DispatchResult<()> {
        let program = self.program;
        let definition = program.actions().get(&action.action).ok_or_else(|| {
            DispatchError::UnknownAction {
                action: action.action.clone(),
            }
        })?;

        let expected = definition.payload_type.as_deref();
        let actual = action.payload_type();
        if expected != actual {
            return Err(DispatchError::ActionPayloadMismatch {
                action: action.action.clone(),
                expected: expected.map(str::to_string),
                actual: actual.map(str::to_string),
            });
        }

        tracing::trace!(action = %action.action, payload = ?action.payload, "dispatch");

        let Some(bound) = program.reducers_for(&action.action) else {
            return Ok(());
        };

        let mut staged = BTreeMap::new();
        for (state_id, reducers) in bound {
            let current = self
                .state
                .get(state_id)
                .ok_or_else(|| DispatchError::UnknownState {
                    state: state_id.clone(),
                })?;
            let mut context = Reduction {
                state_id,
                state: current.clone(),
                action,
            };
            for reducer in reducers {
                context.apply(reducer)?;
            }
            staged.insert(state_id.clone(), context.state);
        }

        self.state.extend(staged);
        Ok(())
    }
}

/// Evaluation context for one state during one dispatch.
struct Reduction<'a> {
    state_id: &'a StateIdentifier,
    state: StateValue,
    action: &'a ActionValue,
}

impl Reduction<'_> {
    fn apply(&mut self, reducer: &SingleReduceDefinition) -> DispatchResult<()> {
        reducer
            .expressions
            .iter()
            .try_for_each(|expression| self.evaluate(expression))
    }

    fn evaluate(&mut self, expression: &ExpressionDefinition) -> DispatchResult<()> {
        if self.state.type_name != INT_TYPE {
            return Err(ArithmeticDefect::NonIntegerState {
                state: self.state_id.clone(),
                type_name: self.state.type_name.clone(),
            }
            .into());
        }
        let current = parse_int(&self.state.value)?;
        let operand = self.operand(&expression.value)?;
        let next = match expression.operator {
            Operator::Increment => current.checked_add(operand),
            Operator::Decrement => current.checked_sub(operand),
        }
        .ok_or_else(|| ArithmeticDefect::Overflow {
            state: self.state_id.clone(),
        })?;
        self.state.value = next.to_string();
        Ok(())
    }

    fn operand(&self, value: &ExpressionValue) -> DispatchResult<i64> {
        match value {
            ExpressionValue::Identifier(literal) => parse_int(literal),
            ExpressionValue::ActionPayload => {
                let payload =
                    self.action
                        .payload
                        .as_ref()
                        .ok_or_else(|| DispatchError::MissingPayload {
                            action: self.action.action.clone(),
                        })?;
                parse_int(&payload.value)
            }
        }
    }
}

/// Decimal integer with an optional leading sign.
fn parse_int(text: &str) -> DispatchResult<i64> {
    text.parse::<i64>().map_err(|_| {
        ArithmeticDefect::NotAnInteger {
            value: text.to_string(),
        }
        .into()
    })
}
