//! Tests for arithmetic strategies and their contexts

use rstest::rstest;

use patterns::domain::{Context, DomainError, FnContext, Operation};

#[rstest]
#[case("addition", 7, 3, 10)]
#[case("subtraction", 7, 3, 4)]
#[case("multiplication", 7, 3, 21)]
#[case("  Multiplication ", -2, 6, -12)]
fn given_action_when_executing_then_result(
    #[case] action: &str,
    #[case] a: i64,
    #[case] b: i64,
    #[case] expected: i64,
) {
    let operation: Operation = action.parse().unwrap();
    let context = Context::with_strategy(operation.strategy());

    assert_eq!(context.execute_strategy(a, b), Ok(expected));
}

#[rstest]
#[case("division")]
#[case("")]
fn given_unknown_action_when_parsing_then_invalid_action(#[case] action: &str) {
    let result: Result<Operation, _> = action.parse();
    assert_eq!(result, Err(DomainError::InvalidAction(action.to_string())));
}

#[test]
fn given_context_without_strategy_when_executing_then_errors() {
    let context = Context::new();
    assert!(context.strategy().is_none());
    assert_eq!(context.execute_strategy(1, 1), Err(DomainError::NoStrategy));
}

#[test]
fn given_overflowing_operands_when_multiplying_then_overflow_error() {
    let context = Context::with_strategy(Operation::Multiplication.strategy());

    let err = context.execute_strategy(i64::MAX, 2).unwrap_err();

    assert!(matches!(err, DomainError::Overflow { operation: "multiplication", .. }));
}

#[test]
fn given_closure_context_when_strategy_swapped_then_follows_new_closure() {
    let mut context = FnContext::new(|a, b| a * b);
    assert_eq!(context.execute(5, 5), 25);

    context.set_strategy(|a, b| a + b);
    assert_eq!(context.execute(5, 5), 10);
}

#[test]
fn given_capturing_closure_when_swapped_for_another_then_follows_new_state() {
    let offset = 100;
    let mut context = FnContext::new(move |a, b| a + b + offset);
    assert_eq!(context.execute(1, 2), 103);

    let scale = 10;
    context.set_strategy(move |a, b| a * b * scale);
    assert_eq!(context.execute(1, 2), 20);
}
