//! AST node types for the Quiver language.
//!
//! The AST preserves source order. Names are kept as the raw identifier
//! parts; the binder turns them into [`crate::StateIdentifier`] /
//! [`crate::ActionIdentifier`] / [`crate::TestIdentifier`] keys.

use serde::{Deserialize, Serialize};

use crate::{ActionIdentifier, NonEmpty, StateIdentifier, TestIdentifier};

// ══════════════════════════════════════════════════════════════════════════════
// Top Level
// ══════════════════════════════════════════════════════════════════════════════

/// A parsed program: every top-level definition in source order.
pub type Ast = Vec<TopLevelDefinition>;

/// One top-level definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TopLevelDefinition {
    Action(ActionDefinition),
    State(StateDefinition),
    Reducers(StateReducersDefinition),
    Test(TestDefinition),
}

// ══════════════════════════════════════════════════════════════════════════════
// Declarations
// ══════════════════════════════════════════════════════════════════════════════

/// `action Increment by value: Int`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDefinition {
    /// Compound name, at least one part.
    pub name: Vec<String>,
    /// Payload type, if the action carries one.
    pub payload_type: Option<String>,
}

impl ActionDefinition {
    pub fn identifier(&self) -> ActionIdentifier {
        ActionIdentifier::new(&self.name)
    }
}

/// `state Counter: Int = 0`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    pub name: String,
    pub type_name: String,
    /// Initial value, kept as the literal identifier text.
    pub value: String,
}

impl StateDefinition {
    pub fn identifier(&self) -> StateIdentifier {
        StateIdentifier::new([self.name.as_str()])
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Reducers
// ══════════════════════════════════════════════════════════════════════════════

/// `reduce Counter with Increment { ... }` or
/// `reduce Counter { with Increment { ... } with Decrement { ... } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateReducersDefinition {
    pub state: String,
    pub reducers: NonEmpty<SingleReduceDefinition>,
}

impl StateReducersDefinition {
    pub fn state_identifier(&self) -> StateIdentifier {
        StateIdentifier::new([self.state.as_str()])
    }
}

/// `with Increment by value { state += action }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleReduceDefinition {
    pub action: Vec<String>,
    pub expressions: Vec<ExpressionDefinition>,
}

impl SingleReduceDefinition {
    pub fn action_identifier(&self) -> ActionIdentifier {
        ActionIdentifier::new(&self.action)
    }
}

/// `state += 1`, `state -= action`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionDefinition {
    pub operator: Operator,
    pub value: ExpressionValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// `+=`
    Increment,
    /// `-=`
    Decrement,
}

/// Right-hand side of a reducer expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpressionValue {
    /// A literal, e.g. `1`.
    Identifier(String),
    /// The `action` keyword: the dispatched action's payload.
    ActionPayload,
}

// ══════════════════════════════════════════════════════════════════════════════
// Tests
// ══════════════════════════════════════════════════════════════════════════════

/// `test Simple increment for Counter { ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestDefinition {
    /// Compound name; empty for `test for Counter { ... }`.
    pub name: Vec<String>,
    pub state: String,
    pub expressions: Vec<TestExpression>,
}

impl TestDefinition {
    pub fn identifier(&self) -> TestIdentifier {
        TestIdentifier::new(&self.name)
    }

    pub fn state_identifier(&self) -> StateIdentifier {
        StateIdentifier::new([self.state.as_str()])
    }
}

/// A single step of a test body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TestExpression {
    /// `assert state is -1`
    AssertState(ValueDefinition),
    /// `state = 10`
    AssignState(ValueDefinition),
    /// `reduce Increment by value: 10`
    ReduceAction(ReduceExpression),
}

/// `reduce <action> (: <payload>)?` inside a test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReduceExpression {
    pub action: Vec<String>,
    pub value: Option<String>,
}

impl ReduceExpression {
    pub fn action_identifier(&self) -> ActionIdentifier {
        ActionIdentifier::new(&self.action)
    }
}

/// An optionally signed literal: `10`, `-1`, `+5`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueDefinition {
    pub sign: Option<Sign>,
    pub magnitude: String,
}

impl ValueDefinition {
    /// The literal as state text. `+` is dropped, `-` is kept.
    pub fn render(&self) -> String {
        match self.sign {
            Some(Sign::Minus) => format!("-{}", self.magnitude),
            Some(Sign::Plus) | None => self.magnitude.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    Plus,
    Minus,
}
