//! Reducer expressions and signed values.

use quiver_lexer::Token;
use quiver_types::ast::*;

use crate::error::{Expectation, ParseError};
use crate::parser::{Parser, Production};

impl Parser {
    /// `expression := "state" ("+=" | "-=") (ID | "action")`
    pub(crate) fn parse_expression(&mut self) -> Production<ExpressionDefinition> {
        if !self.parse_keyword(&Token::State) {
            return Ok(None);
        }
        let operator = self
            .parse_operator()
            .ok_or_else(|| self.error(Expectation::ExpressionOperator))?;
        let value = self.parse_expression_value()?;
        Ok(Some(ExpressionDefinition { operator, value }))
    }

    /// `+=` or `-=`, each matched as a two-token unit.
    fn parse_operator(&mut self) -> Option<Operator> {
        if self.parse_all_keywords(&[Token::Plus, Token::Equals]) {
            Some(Operator::Increment)
        } else if self.parse_all_keywords(&[Token::Minus, Token::Equals]) {
            Some(Operator::Decrement)
        } else {
            None
        }
    }

    fn parse_expression_value(&mut self) -> Result<ExpressionValue, ParseError> {
        if self.parse_keyword(&Token::Action) {
            return Ok(ExpressionValue::ActionPayload);
        }
        self.expect_identifier(Expectation::ExpressionValue)
            .map(ExpressionValue::Identifier)
    }

    /// `value := ("+" | "-")? ID`
    ///
    /// A sign that is not followed by an identifier is given back, so the
    /// caller sees no match at all.
    pub(crate) fn parse_value(&mut self) -> Option<ValueDefinition> {
        let sign = if self.parse_keyword(&Token::Plus) {
            Some(Sign::Plus)
        } else if self.parse_keyword(&Token::Minus) {
            Some(Sign::Minus)
        } else {
            None
        };
        match self.parse_identifier() {
            Some(magnitude) => Some(ValueDefinition { sign, magnitude }),
            None => {
                if sign.is_some() {
                    self.rollback();
                }
                None
            }
        }
    }
}
