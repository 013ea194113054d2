use quiver_types::ast::{ActionDefinition, StateDefinition};
use quiver_types::{ActionIdentifier, ErrorCode, StateIdentifier, TestIdentifier};
use serde::Serialize;
use thiserror::Error;

/// The first semantic violation found while binding.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SemanticError {
    /// A second `state` with an existing name.
    #[error("state '{}' is already defined", .state.name)]
    StateAlreadyDefined {
        state: StateDefinition,
        declared: StateDefinition,
    },

    /// A second `action` with an existing compound name.
    #[error("action '{}' is already defined", .action.identifier())]
    ActionAlreadyDefined {
        action: ActionDefinition,
        declared: ActionDefinition,
    },

    #[error("unknown state '{identifier}'")]
    UnknownStateIdentifier { identifier: StateIdentifier },

    #[error("unknown action '{identifier}'")]
    UnknownActionIdentifier { identifier: ActionIdentifier },

    /// Two tests for the same state share a name (including the empty name).
    #[error("test '{test}' is already declared for state '{state}'")]
    TestAlreadyDeclared {
        state: StateIdentifier,
        test: TestIdentifier,
    },
}

impl SemanticError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SemanticError::StateAlreadyDefined { .. } => ErrorCode::STATE_ALREADY_DEFINED,
            SemanticError::ActionAlreadyDefined { .. } => ErrorCode::ACTION_ALREADY_DEFINED,
            SemanticError::UnknownStateIdentifier { .. } => ErrorCode::UNKNOWN_STATE,
            SemanticError::UnknownActionIdentifier { .. } => ErrorCode::UNKNOWN_ACTION,
            SemanticError::TestAlreadyDeclared { .. } => ErrorCode::TEST_ALREADY_DECLARED,
        }
    }
}
