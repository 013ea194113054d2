use quiver_types::ErrorCode;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The grammar position at which parsing stopped.
///
/// There is one variant per place in the grammar that can fail after its
/// construct has committed, so a failure names the construct that raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    ActionIdentifier,
    ActionTypeIdentifier,
    StateNameIdentifier,
    Colon,
    StateTypeIdentifier,
    Equals,
    StateDefaultValue,
    ReduceStateIdentifier,
    ReduceWithKeyword,
    ReduceActionIdentifier,
    ExpressionOperator,
    ExpressionValue,
    BlockOpenBrace,
    BlockCloseBrace,
    TestForKeyword,
    TestStateIdentifier,
    AssertStateKeyword,
    AssertIsKeyword,
    AssertValue,
    AssignEquals,
    AssignValue,
    ActionPayloadValue,
    TopLevelDefinition,
}

impl Expectation {
    pub fn code(self) -> ErrorCode {
        match self {
            Expectation::ActionIdentifier => ErrorCode::ACTION_IDENTIFIER_EXPECTED,
            Expectation::ActionTypeIdentifier => ErrorCode::ACTION_TYPE_EXPECTED,
            Expectation::StateNameIdentifier => ErrorCode::STATE_NAME_EXPECTED,
            Expectation::Colon => ErrorCode::COLON_EXPECTED,
            Expectation::StateTypeIdentifier => ErrorCode::STATE_TYPE_EXPECTED,
            Expectation::Equals => ErrorCode::EQUALS_EXPECTED,
            Expectation::StateDefaultValue => ErrorCode::STATE_DEFAULT_VALUE_EXPECTED,
            Expectation::ReduceStateIdentifier => ErrorCode::REDUCE_STATE_EXPECTED,
            Expectation::ReduceWithKeyword => ErrorCode::REDUCE_WITH_EXPECTED,
            Expectation::ReduceActionIdentifier => ErrorCode::REDUCE_ACTION_EXPECTED,
            Expectation::ExpressionOperator => ErrorCode::EXPRESSION_OPERATOR_EXPECTED,
            Expectation::ExpressionValue => ErrorCode::EXPRESSION_VALUE_EXPECTED,
            Expectation::BlockOpenBrace => ErrorCode::OPEN_BRACE_EXPECTED,
            Expectation::BlockCloseBrace => ErrorCode::CLOSE_BRACE_EXPECTED,
            Expectation::TestForKeyword => ErrorCode::TEST_FOR_EXPECTED,
            Expectation::TestStateIdentifier => ErrorCode::TEST_STATE_EXPECTED,
            Expectation::AssertStateKeyword => ErrorCode::ASSERT_STATE_EXPECTED,
            Expectation::AssertIsKeyword => ErrorCode::ASSERT_IS_EXPECTED,
            Expectation::AssertValue => ErrorCode::ASSERT_VALUE_EXPECTED,
            Expectation::AssignEquals => ErrorCode::ASSIGN_EQUALS_EXPECTED,
            Expectation::AssignValue => ErrorCode::ASSIGN_VALUE_EXPECTED,
            Expectation::ActionPayloadValue => ErrorCode::PAYLOAD_VALUE_EXPECTED,
            Expectation::TopLevelDefinition => ErrorCode::TOP_LEVEL_DEFINITION_EXPECTED,
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            Expectation::ActionIdentifier => "action name",
            Expectation::ActionTypeIdentifier => "action payload type",
            Expectation::StateNameIdentifier => "state name",
            Expectation::Colon => "':' after state name",
            Expectation::StateTypeIdentifier => "state type",
            Expectation::Equals => "'=' after state type",
            Expectation::StateDefaultValue => "state default value",
            Expectation::ReduceStateIdentifier => "state name after 'reduce'",
            Expectation::ReduceWithKeyword => "'with'",
            Expectation::ReduceActionIdentifier => "action name",
            Expectation::ExpressionOperator => "'+=' or '-='",
            Expectation::ExpressionValue => "value or 'action'",
            Expectation::BlockOpenBrace => "'{'",
            Expectation::BlockCloseBrace => "'}'",
            Expectation::TestForKeyword => "'for'",
            Expectation::TestStateIdentifier => "state name after 'for'",
            Expectation::AssertStateKeyword => "'state' after 'assert'",
            Expectation::AssertIsKeyword => "'is'",
            Expectation::AssertValue => "asserted value",
            Expectation::AssignEquals => "'=' after 'state'",
            Expectation::AssignValue => "assigned value",
            Expectation::ActionPayloadValue => "action payload value",
            Expectation::TopLevelDefinition => "'action', 'state', 'reduce' or 'test'",
        };
        write!(f, "expected {what}")
    }
}

/// The first unmet grammar expectation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{expectation} (token {position})")]
pub struct ParseError {
    pub expectation: Expectation,
    /// Index of the offending token; equal to the token count at end of input.
    pub position: usize,
}

impl ParseError {
    pub fn new(expectation: Expectation, position: usize) -> Self {
        Self {
            expectation,
            position,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.expectation.code()
    }
}
