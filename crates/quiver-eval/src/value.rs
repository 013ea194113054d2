//! Runtime values: typed state values and dispatch requests.

use quiver_types::ast::ValueDefinition;
use quiver_types::{ActionIdentifier, INT_TYPE};
use serde::Serialize;
use std::fmt;

/// The current value of one state: its declared type and the value as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StateValue {
    pub type_name: String,
    pub value: String,
}

impl StateValue {
    pub fn new(type_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            value: value.into(),
        }
    }

    /// An `Int` value.
    pub fn int(value: impl Into<String>) -> Self {
        Self::new(INT_TYPE, value)
    }
}

impl From<&ValueDefinition> for StateValue {
    /// Test literals are always `Int`; a `+` sign is dropped.
    fn from(value: &ValueDefinition) -> Self {
        StateValue::int(value.render())
    }
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.value, self.type_name)
    }
}

/// The payload carried by a dispatched action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ActionPayload {
    pub value: String,
}

/// A request to apply an action to an interpreter's state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ActionValue {
    pub action: ActionIdentifier,
    pub payload: Option<ActionPayload>,
}

impl ActionValue {
    /// An action without payload.
    pub fn new(action: impl Into<ActionIdentifier>) -> Self {
        Self {
            action: action.into(),
            payload: None,
        }
    }

    pub fn with_payload(action: impl Into<ActionIdentifier>, value: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            payload: Some(ActionPayload {
                value: value.into(),
            }),
        }
    }

    /// The payload type as seen by the type check: payloads are always `Int`.
    pub fn payload_type(&self) -> Option<&'static str> {
        self.payload.as_ref().map(|_| INT_TYPE)
    }
}
