use quiver_types::{ActionIdentifier, ErrorCode, StateIdentifier};
use serde::Serialize;
use thiserror::Error;

/// Result type for dispatch.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// A dispatch that could not be applied. The runtime state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DispatchError {
    #[error("unknown action '{action}'")]
    UnknownAction { action: ActionIdentifier },

    /// The payload's presence or type disagrees with the declaration.
    #[error(
        "action '{action}' expects {} payload, got {}",
        type_label(expected),
        type_label(actual)
    )]
    ActionPayloadMismatch {
        action: ActionIdentifier,
        expected: Option<String>,
        actual: Option<String>,
    },

    #[error("no runtime value for state '{state}'")]
    UnknownState { state: StateIdentifier },

    /// `action` used as a value in a reducer for a dispatch without payload.
    #[error("reducer for action '{action}' reads a payload it was not given")]
    MissingPayload { action: ActionIdentifier },

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticDefect),
}

/// A value that cannot take part in integer arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "defect", rename_all = "snake_case")]
pub enum ArithmeticDefect {
    #[error("state '{state}' has type '{type_name}', not Int")]
    NonIntegerState {
        state: StateIdentifier,
        type_name: String,
    },

    #[error("'{value}' is not an integer")]
    NotAnInteger { value: String },

    #[error("arithmetic overflow in state '{state}'")]
    Overflow { state: StateIdentifier },
}

impl DispatchError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DispatchError::UnknownAction { .. } => ErrorCode::UNKNOWN_ACTION_DISPATCHED,
            DispatchError::ActionPayloadMismatch { .. } => ErrorCode::ACTION_PAYLOAD_MISMATCH,
            DispatchError::UnknownState { .. } => ErrorCode::UNKNOWN_STATE_VALUE,
            DispatchError::MissingPayload { .. } => ErrorCode::MISSING_PAYLOAD,
            DispatchError::Arithmetic(defect) => defect.code(),
        }
    }
}

impl ArithmeticDefect {
    pub fn code(&self) -> ErrorCode {
        match self {
            ArithmeticDefect::NonIntegerState { .. } => ErrorCode::NON_INTEGER_STATE,
            ArithmeticDefect::NotAnInteger { .. } => ErrorCode::NOT_AN_INTEGER,
            ArithmeticDefect::Overflow { .. } => ErrorCode::ARITHMETIC_OVERFLOW,
        }
    }
}

fn type_label(ty: &Option<String>) -> &str {
    ty.as_deref().unwrap_or("no")
}
