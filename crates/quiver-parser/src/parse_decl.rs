//! Top-level and declaration parsing.
//!
//! Handles `action`, `state`, and `reduce` definitions; `test` blocks live
//! in `parse_test`.

use quiver_lexer::Token;
use quiver_types::ast::*;
use quiver_types::NonEmpty;

use crate::error::Expectation;
use crate::parser::{Parser, Production};

impl Parser {
    // ══════════════════════════════════════════════════════════════════════════
    // Top Level
    // ══════════════════════════════════════════════════════════════════════════

    /// `topLevel := action | state | reducers | test`
    pub(crate) fn parse_top_level(&mut self) -> Production<TopLevelDefinition> {
        if let Some(action) = self.parse_action()? {
            return Ok(Some(TopLevelDefinition::Action(action)));
        }
        if let Some(state) = self.parse_state()? {
            return Ok(Some(TopLevelDefinition::State(state)));
        }
        if let Some(reducers) = self.parse_reducers()? {
            return Ok(Some(TopLevelDefinition::Reducers(reducers)));
        }
        if let Some(test) = self.parse_test()? {
            return Ok(Some(TopLevelDefinition::Test(test)));
        }
        Ok(None)
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Declarations
    // ══════════════════════════════════════════════════════════════════════════

    /// `action := "action" ID+ (":" ID)?`
    pub(crate) fn parse_action(&mut self) -> Production<ActionDefinition> {
        if !self.parse_keyword(&Token::Action) {
            return Ok(None);
        }
        let name = self.expect_identifier_sequence(Expectation::ActionIdentifier)?;
        let payload_type = if self.parse_keyword(&Token::Colon) {
            Some(self.expect_identifier(Expectation::ActionTypeIdentifier)?)
        } else {
            None
        };
        Ok(Some(ActionDefinition { name, payload_type }))
    }

    /// `state := "state" ID ":" ID "=" ID`
    pub(crate) fn parse_state(&mut self) -> Production<StateDefinition> {
        if !self.parse_keyword(&Token::State) {
            return Ok(None);
        }
        let name = self.expect_identifier(Expectation::StateNameIdentifier)?;
        self.expect_keyword(&Token::Colon, Expectation::Colon)?;
        let type_name = self.expect_identifier(Expectation::StateTypeIdentifier)?;
        self.expect_keyword(&Token::Equals, Expectation::Equals)?;
        let value = self.expect_identifier(Expectation::StateDefaultValue)?;
        Ok(Some(StateDefinition {
            name,
            type_name,
            value,
        }))
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Reducers
    // ══════════════════════════════════════════════════════════════════════════

    /// `reducers := "reduce" ID ( singleReduce | "{" singleReduce+ "}" )`
    pub(crate) fn parse_reducers(&mut self) -> Production<StateReducersDefinition> {
        if !self.parse_keyword(&Token::Reduce) {
            return Ok(None);
        }
        let state = self.expect_identifier(Expectation::ReduceStateIdentifier)?;

        let reducers = match self.current() {
            Some(Token::With) => match self.parse_single_reduce()? {
                Some(reducer) => NonEmpty::singleton(reducer),
                None => return Err(self.error(Expectation::ReduceWithKeyword)),
            },
            Some(Token::LBrace) => {
                self.consume();
                let reducers = self.parse_many_committed(Self::parse_single_reduce)?;
                let reducers = NonEmpty::try_from(reducers)
                    .map_err(|_| self.error(Expectation::ReduceWithKeyword))?;
                self.expect_keyword(&Token::RBrace, Expectation::BlockCloseBrace)?;
                reducers
            }
            _ => return Err(self.error(Expectation::BlockOpenBrace)),
        };

        Ok(Some(StateReducersDefinition { state, reducers }))
    }

    /// `singleReduce := "with" ID+ "{" expression* "}"`
    pub(crate) fn parse_single_reduce(&mut self) -> Production<SingleReduceDefinition> {
        if !self.parse_keyword(&Token::With) {
            return Ok(None);
        }
        let action = self.expect_identifier_sequence(Expectation::ReduceActionIdentifier)?;
        self.expect_keyword(&Token::LBrace, Expectation::BlockOpenBrace)?;
        let expressions = self.parse_many_committed(Self::parse_expression)?;
        self.expect_keyword(&Token::RBrace, Expectation::BlockCloseBrace)?;
        Ok(Some(SingleReduceDefinition {
            action,
            expressions,
        }))
    }
}
