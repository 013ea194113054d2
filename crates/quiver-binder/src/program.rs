//! The semantic model of a Quiver source file.

use std::collections::BTreeMap;

use quiver_types::ast::{
    ActionDefinition, SingleReduceDefinition, StateDefinition, StateReducersDefinition,
    TestDefinition, TestExpression,
};
use quiver_types::{ActionIdentifier, StateIdentifier, TestIdentifier};
use serde::Serialize;

use crate::error::SemanticError;

/// Reducers bound to one action, keyed by the state they mutate.
pub type StateReducers = BTreeMap<StateIdentifier, Vec<SingleReduceDefinition>>;

/// Tests declared for one state, keyed by test name.
pub type StateTests = BTreeMap<TestIdentifier, TestDefinition>;

/// Validated symbol tables.
///
/// Every key of `reducers` is a declared action and every state key under it
/// is a declared state; every key of `tests` is a declared state. Built only
/// by [`crate::bind`] and immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Program {
    state: BTreeMap<StateIdentifier, StateDefinition>,
    actions: BTreeMap<ActionIdentifier, ActionDefinition>,
    reducers: BTreeMap<ActionIdentifier, StateReducers>,
    tests: BTreeMap<StateIdentifier, StateTests>,
}

impl Program {
    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn state(&self) -> &BTreeMap<StateIdentifier, StateDefinition> {
        &self.state
    }

    pub fn actions(&self) -> &BTreeMap<ActionIdentifier, ActionDefinition> {
        &self.actions
    }

    pub fn reducers(&self) -> &BTreeMap<ActionIdentifier, StateReducers> {
        &self.reducers
    }

    pub fn tests(&self) -> &BTreeMap<StateIdentifier, StateTests> {
        &self.tests
    }

    /// Reducers bound to `action`, by state. `None` if nothing reduces it.
    pub fn reducers_for(&self, action: &ActionIdentifier) -> Option<&StateReducers> {
        self.reducers.get(action)
    }

    pub fn test(&self, state: &StateIdentifier, test: &TestIdentifier) -> Option<&TestDefinition> {
        self.tests.get(state)?.get(test)
    }

    /// Total number of tests across all states.
    pub fn test_count(&self) -> usize {
        self.tests.values().map(BTreeMap::len).sum()
    }

    // ── Construction ──────────────────────────────────────────────────────────

    pub(crate) fn append_state(&mut self, state: &StateDefinition) -> Result<(), SemanticError> {
        let id = state.identifier();
        if let Some(declared) = self.state.get(&id) {
            return Err(SemanticError::StateAlreadyDefined {
                state: state.clone(),
                declared: declared.clone(),
            });
        }
        self.state.insert(id, state.clone());
        Ok(())
    }

    pub(crate) fn append_action(&mut self, action: &ActionDefinition) -> Result<(), SemanticError> {
        let id = action.identifier();
        if let Some(declared) = self.actions.get(&id) {
            return Err(SemanticError::ActionAlreadyDefined {
                action: action.clone(),
                declared: declared.clone(),
            });
        }
        self.actions.insert(id, action.clone());
        Ok(())
    }

    /// Reducers accumulate: a second block for the same action and state
    /// appends after the first.
    pub(crate) fn append_reducers(
        &mut self,
        definition: &StateReducersDefinition,
    ) -> Result<(), SemanticError> {
        let state = self.require_state(definition.state_identifier())?;
        for reducer in &definition.reducers {
            let action = self.require_action(reducer.action_identifier())?;
            self.reducers
                .entry(action)
                .or_default()
                .entry(state.clone())
                .or_default()
                .push(reducer.clone());
        }
        Ok(())
    }

    pub(crate) fn append_test(&mut self, test: &TestDefinition) -> Result<(), SemanticError> {
        let state = self.require_state(test.state_identifier())?;
        let name = test.identifier();
        if self.test(&state, &name).is_some() {
            return Err(SemanticError::TestAlreadyDeclared { state, test: name });
        }
        for expression in &test.expressions {
            if let TestExpression::ReduceAction(reduce) = expression {
                self.require_action(reduce.action_identifier())?;
            }
        }
        self.tests.entry(state).or_default().insert(name, test.clone());
        Ok(())
    }

    fn require_state(&self, id: StateIdentifier) -> Result<StateIdentifier, SemanticError> {
        if self.state.contains_key(&id) {
            Ok(id)
        } else {
            Err(SemanticError::UnknownStateIdentifier { identifier: id })
        }
    }

    fn require_action(&self, id: ActionIdentifier) -> Result<ActionIdentifier, SemanticError> {
        if self.actions.contains_key(&id) {
            Ok(id)
        } else {
            Err(SemanticError::UnknownActionIdentifier { identifier: id })
        }
    }
}
