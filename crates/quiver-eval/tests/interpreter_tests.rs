//! Interpreter tests for Quiver.
//!
//! Covers: seeding from declarations, dispatch through inline and block
//! reducers, payload checks, arithmetic defects, atomic rollback, and the
//! canonical counter scenario.

use quiver_binder::{bind, Program};
use quiver_eval::{ActionValue, ArithmeticDefect, DispatchError, Interpreter, StateValue};
use quiver_lexer::scan;
use quiver_parser::parse_program;
use quiver_types::{ActionIdentifier, ErrorCode, StateIdentifier};

const COUNTER: &str = include_str!("../../../fixtures/counter.quiver");

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

fn program(source: &str) -> Program {
    let tokens = scan(source)
        .expect("unexpected lex failure")
        .into_iter()
        .map(|l| l.token)
        .collect();
    let ast = parse_program(tokens).expect("unexpected parse failure");
    bind(&ast).expect("unexpected semantic error")
}

fn counter_value(interpreter: &Interpreter<'_>) -> String {
    interpreter
        .value(&StateIdentifier::parse("Counter"))
        .expect("Counter is declared")
        .value
        .clone()
}

// ─────────────────────────────────────────────────────────────────────
// Seeding
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_seeded_from_declarations() {
    let program = program("state Counter: Int = 0\nstate Label: Text = hello");
    let interpreter = Interpreter::new(&program);
    assert_eq!(interpreter.state().len(), 2);
    assert_eq!(
        interpreter.value(&StateIdentifier::parse("Counter")),
        Some(&StateValue::int("0"))
    );
    assert_eq!(
        interpreter.value(&StateIdentifier::parse("Label")),
        Some(&StateValue::new("Text", "hello"))
    );
}

// ─────────────────────────────────────────────────────────────────────
// Canonical counter
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_counter_increment_increment_decrement() {
    let program = program(COUNTER);
    let mut interpreter = Interpreter::new(&program);
    interpreter.dispatch(&ActionValue::new("Increment")).unwrap();
    interpreter.dispatch(&ActionValue::new("Increment")).unwrap();
    interpreter.dispatch(&ActionValue::new("Decrement")).unwrap();
    assert_eq!(counter_value(&interpreter), "1");
}

#[test]
fn test_counter_payload_reducers() {
    let program = program(COUNTER);
    let mut interpreter = Interpreter::new(&program);

    interpreter.dispatch(&ActionValue::new("Increment")).unwrap();
    assert_eq!(counter_value(&interpreter), "1");

    interpreter
        .dispatch(&ActionValue::with_payload("Increment by value", "10"))
        .unwrap();
    assert_eq!(counter_value(&interpreter), "11");

    interpreter
        .dispatch(&ActionValue::with_payload("Decrement by value", "5"))
        .unwrap();
    assert_eq!(counter_value(&interpreter), "6");

    interpreter.dispatch(&ActionValue::new("Decrement")).unwrap();
    assert_eq!(counter_value(&interpreter), "5");
}

#[test]
fn test_unknown_action() {
    let program = program(COUNTER);
    let mut interpreter = Interpreter::new(&program);
    let err = interpreter.dispatch(&ActionValue::new("Bogus")).unwrap_err();
    assert_eq!(
        err,
        DispatchError::UnknownAction {
            action: ActionIdentifier::parse("Bogus")
        }
    );
    assert_eq!(err.code(), ErrorCode::UNKNOWN_ACTION_DISPATCHED);
}

#[test]
fn test_action_without_reducers_is_a_no_op() {
    let program = program("action Ping\nstate C: Int = 3");
    let mut interpreter = Interpreter::new(&program);
    interpreter.dispatch(&ActionValue::new("Ping")).unwrap();
    assert_eq!(
        interpreter.value(&StateIdentifier::parse("C")),
        Some(&StateValue::int("3"))
    );
}

// ─────────────────────────────────────────────────────────────────────
// Payload checks
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_payload_missing() {
    let program = program(COUNTER);
    let mut interpreter = Interpreter::new(&program);
    let err = interpreter
        .dispatch(&ActionValue::new("Increment by value"))
        .unwrap_err();
    assert_eq!(
        err,
        DispatchError::ActionPayloadMismatch {
            action: ActionIdentifier::parse("Increment by value"),
            expected: Some("Int".into()),
            actual: None,
        }
    );
}

#[test]
fn test_payload_unexpected() {
    let program = program(COUNTER);
    let mut interpreter = Interpreter::new(&program);
    let err = interpreter
        .dispatch(&ActionValue::with_payload("Increment", "1"))
        .unwrap_err();
    assert_eq!(
        err,
        DispatchError::ActionPayloadMismatch {
            action: ActionIdentifier::parse("Increment"),
            expected: None,
            actual: Some("Int".into()),
        }
    );
}

#[test]
fn test_payload_declared_with_other_type() {
    let program = program("action Rename: Text\nstate C: Int = 0");
    let mut interpreter = Interpreter::new(&program);
    let err = interpreter
        .dispatch(&ActionValue::with_payload("Rename", "7"))
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ACTION_PAYLOAD_MISMATCH);
}

#[test]
fn test_reducer_reads_missing_payload() {
    let program = program("action Bump\nstate C: Int = 0\nreduce C with Bump { state += action }");
    let mut interpreter = Interpreter::new(&program);
    let err = interpreter.dispatch(&ActionValue::new("Bump")).unwrap_err();
    assert_eq!(
        err,
        DispatchError::MissingPayload {
            action: ActionIdentifier::parse("Bump")
        }
    );
}

#[test]
fn test_negative_payload() {
    let program = program(COUNTER);
    let mut interpreter = Interpreter::new(&program);
    interpreter
        .dispatch(&ActionValue::with_payload("Increment by value", "-4"))
        .unwrap();
    assert_eq!(counter_value(&interpreter), "-4");
}

// ─────────────────────────────────────────────────────────────────────
// Arithmetic defects
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_non_integer_state() {
    let program = program("action Go\nstate Name: Text = x\nreduce Name with Go { state += 1 }");
    let mut interpreter = Interpreter::new(&program);
    let err = interpreter.dispatch(&ActionValue::new("Go")).unwrap_err();
    assert_eq!(
        err,
        DispatchError::Arithmetic(ArithmeticDefect::NonIntegerState {
            state: StateIdentifier::parse("Name"),
            type_name: "Text".into(),
        })
    );
}

#[test]
fn test_state_value_not_an_integer() {
    let program = program("action Go\nstate C: Int = zero\nreduce C with Go { state += 1 }");
    let mut interpreter = Interpreter::new(&program);
    let err = interpreter.dispatch(&ActionValue::new("Go")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NOT_AN_INTEGER);
}

#[test]
fn test_literal_not_an_integer() {
    let program = program("action Go\nstate C: Int = 0\nreduce C with Go { state += one }");
    let mut interpreter = Interpreter::new(&program);
    let err = interpreter.dispatch(&ActionValue::new("Go")).unwrap_err();
    assert_eq!(
        err,
        DispatchError::Arithmetic(ArithmeticDefect::NotAnInteger {
            value: "one".into()
        })
    );
}

#[test]
fn test_overflow_is_typed() {
    let program = program(&format!(
        "action Go\nstate C: Int = {}\nreduce C with Go {{ state += 1 }}",
        i64::MAX
    ));
    let mut interpreter = Interpreter::new(&program);
    let err = interpreter.dispatch(&ActionValue::new("Go")).unwrap_err();
    assert_eq!(
        err,
        DispatchError::Arithmetic(ArithmeticDefect::Overflow {
            state: StateIdentifier::parse("C")
        })
    );
}

// ─────────────────────────────────────────────────────────────────────
// Atomicity
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_failed_dispatch_leaves_state_unchanged() {
    let program = program(
        "action Go\n\
         state A: Int = 0\n\
         state B: Int = 0\n\
         reduce A with Go { state += 5 }\n\
         reduce B with Go { state += 1 state += bad }",
    );
    let mut interpreter = Interpreter::new(&program);
    let before = interpreter.state().clone();
    assert!(interpreter.dispatch(&ActionValue::new("Go")).is_err());
    assert_eq!(interpreter.state(), &before);
}

#[test]
fn test_reducers_apply_in_declaration_order() {
    let program = program(
        "action Go\n\
         state C: Int = 1\n\
         reduce C with Go { state += 2 }\n\
         reduce C { with Go { state -= 10 } }",
    );
    let mut interpreter = Interpreter::new(&program);
    interpreter.dispatch(&ActionValue::new("Go")).unwrap();
    assert_eq!(
        interpreter.value(&StateIdentifier::parse("C")),
        Some(&StateValue::int("-7"))
    );
}

#[test]
fn test_assign_bypasses_reducers() {
    let program = program(COUNTER);
    let mut interpreter = Interpreter::new(&program);
    interpreter
        .assign(&StateIdentifier::parse("Counter"), StateValue::int("10"))
        .unwrap();
    interpreter.dispatch(&ActionValue::new("Increment")).unwrap();
    assert_eq!(counter_value(&interpreter), "11");

    let err = interpreter
        .assign(&StateIdentifier::parse("Missing"), StateValue::int("1"))
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::UNKNOWN_STATE_VALUE);
}

// ─────────────────────────────────────────────────────────────────────
// Determinism
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_dispatch_determinism_100_iterations() {
    let program = program(COUNTER);
    let actions = [
        ActionValue::new("Increment"),
        ActionValue::with_payload("Increment by value", "7"),
        ActionValue::new("Decrement"),
        ActionValue::with_payload("Decrement by value", "3"),
    ];
    let run = || {
        let mut interpreter = Interpreter::new(&program);
        for action in &actions {
            interpreter.dispatch(action).unwrap();
        }
        interpreter.state().clone()
    };
    let first = run();
    for i in 0..100 {
        assert_eq!(first, run(), "Determinism failure at iteration {i}");
    }
}
