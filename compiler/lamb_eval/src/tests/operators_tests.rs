//! Tests for binary operator implementations.

use crate::operators::evaluate_binary;
use crate::{EvalErrorKind, Value};
use lamb_ir::BinaryOp;
use proptest::prelude::*;

fn kind(result: crate::EvalResult) -> EvalErrorKind {
    match result {
        Ok(value) => panic!("expected an error, got {value:?}"),
        Err(err) => err.into_kind(),
    }
}

#[test]
fn test_int_arithmetic() {
    assert_eq!(
        evaluate_binary(BinaryOp::Add, &Value::int(2), &Value::int(3)),
        Ok(Value::int(5))
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Sub, &Value::int(5), &Value::int(3)),
        Ok(Value::int(2))
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Mul, &Value::int(4), &Value::int(-3)),
        Ok(Value::int(-12))
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Div, &Value::int(7), &Value::int(2)),
        Ok(Value::int(3))
    );
}

#[test]
fn test_int_division_truncates_toward_zero() {
    assert_eq!(
        evaluate_binary(BinaryOp::Div, &Value::int(-7), &Value::int(2)),
        Ok(Value::int(-3))
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Div, &Value::int(7), &Value::int(-2)),
        Ok(Value::int(-3))
    );
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        kind(evaluate_binary(BinaryOp::Div, &Value::int(5), &Value::int(0))),
        EvalErrorKind::DivisionByZero
    );
    assert_eq!(
        kind(evaluate_binary(BinaryOp::Div, &Value::float(5.0), &Value::float(0.0))),
        EvalErrorKind::DivisionByZero
    );
}

#[test]
fn test_integer_overflow_is_an_error() {
    assert!(matches!(
        kind(evaluate_binary(BinaryOp::Add, &Value::int(i64::MAX), &Value::int(1))),
        EvalErrorKind::IntegerOverflow { .. }
    ));
    assert!(matches!(
        kind(evaluate_binary(BinaryOp::Div, &Value::int(i64::MIN), &Value::int(-1))),
        EvalErrorKind::IntegerOverflow { .. }
    ));
}

#[test]
fn test_pow_yields_float() {
    assert_eq!(
        evaluate_binary(BinaryOp::Pow, &Value::int(2), &Value::int(10)),
        Ok(Value::float(1024.0))
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Pow, &Value::int(2), &Value::int(-1)),
        Ok(Value::float(0.5))
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Pow, &Value::float(2.0), &Value::float(3.0)),
        Ok(Value::float(8.0))
    );
}

#[test]
fn test_float_arithmetic() {
    assert_eq!(
        evaluate_binary(BinaryOp::Add, &Value::float(1.5), &Value::float(2.25)),
        Ok(Value::float(3.75))
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Div, &Value::float(1.0), &Value::float(4.0)),
        Ok(Value::float(0.25))
    );
}

#[test]
fn test_comparisons() {
    let cases = [
        (BinaryOp::Lt, 2, 3, true),
        (BinaryOp::Gt, 2, 3, false),
        (BinaryOp::LtEq, 3, 3, true),
        (BinaryOp::GtEq, 2, 3, false),
        (BinaryOp::Eq, 4, 4, true),
        (BinaryOp::NotEq, 4, 4, false),
    ];
    for (op, a, b, expected) in cases {
        assert_eq!(
            evaluate_binary(op, &Value::int(a), &Value::int(b)),
            Ok(Value::bool(expected)),
            "{a} {} {b}",
            op.as_symbol()
        );
    }
}

#[test]
fn test_nan_is_unordered() {
    let nan = Value::float(f64::NAN);
    assert_eq!(
        evaluate_binary(BinaryOp::Eq, &nan, &nan),
        Ok(Value::bool(false))
    );
    assert_eq!(
        evaluate_binary(BinaryOp::NotEq, &nan, &nan),
        Ok(Value::bool(true))
    );
}

#[test]
fn test_bool_comparisons() {
    assert_eq!(
        evaluate_binary(BinaryOp::Lt, &Value::bool(false), &Value::bool(true)),
        Ok(Value::bool(true))
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Eq, &Value::bool(true), &Value::bool(true)),
        Ok(Value::bool(true))
    );
    assert_eq!(
        evaluate_binary(BinaryOp::GtEq, &Value::bool(false), &Value::bool(true)),
        Ok(Value::bool(false))
    );
}

#[test]
fn test_bool_arithmetic_is_rejected() {
    assert!(matches!(
        kind(evaluate_binary(BinaryOp::Add, &Value::bool(true), &Value::bool(false))),
        EvalErrorKind::TypeMismatch { .. }
    ));
}

#[test]
fn test_mixed_types_are_rejected() {
    assert_eq!(
        kind(evaluate_binary(BinaryOp::Add, &Value::int(1), &Value::float(1.0))),
        EvalErrorKind::TypeMismatch {
            context: "operator `+`".to_owned(),
            operand: "int and float".to_owned(),
        }
    );
    assert!(matches!(
        kind(evaluate_binary(BinaryOp::Eq, &Value::int(1), &Value::bool(true))),
        EvalErrorKind::TypeMismatch { .. }
    ));
}

proptest! {
    #[test]
    fn int_addition_agrees_with_checked_add(a in any::<i64>(), b in any::<i64>()) {
        let result = evaluate_binary(BinaryOp::Add, &Value::int(a), &Value::int(b));
        match a.checked_add(b) {
            Some(sum) => {
                prop_assert_eq!(result, Ok(Value::int(sum)));
            }
            None => {
                prop_assert!(result.is_err());
            }
        }
    }

    #[test]
    fn int_comparison_agrees_with_host(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(
            evaluate_binary(BinaryOp::Lt, &Value::int(a), &Value::int(b)),
            Ok(Value::bool(a < b))
        );
    }
}
