use quiver_types::ast::TopLevelDefinition;

use crate::error::SemanticError;
use crate::program::Program;

/// Build a [`Program`] from parsed definitions.
///
/// Two passes: declarations first, so `action`/`state` may appear anywhere
/// in the source, then reducers and tests in source order. The first
/// violation aborts binding.
pub fn bind(definitions: &[TopLevelDefinition]) -> Result<Program, SemanticError> {
    let mut program = Program::default();

    for definition in definitions {
        match definition {
            TopLevelDefinition::Action(action) => program.append_action(action)?,
            TopLevelDefinition::State(state) => program.append_state(state)?,
            TopLevelDefinition::Reducers(_) | TopLevelDefinition::Test(_) => {}
        }
    }

    for definition in definitions {
        match definition {
            TopLevelDefinition::Reducers(reducers) => program.append_reducers(reducers)?,
            TopLevelDefinition::Test(test) => program.append_test(test)?,
            TopLevelDefinition::Action(_) | TopLevelDefinition::State(_) => {}
        }
    }

    Ok(program)
}
