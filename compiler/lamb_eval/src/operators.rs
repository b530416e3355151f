//! Binary operator implementations for the evaluator.
//!
//! Both operands must reduce to the same runtime type. Ints and floats
//! support arithmetic and comparison; bools support comparison only.
//! Integer arithmetic is checked: overflow and division by zero are
//! errors, never wraparound.

use std::cmp::Ordering;

use lamb_ir::{BinaryOp, Expr};

use crate::errors::{division_by_zero, integer_overflow, type_mismatch, EvalResult};
use crate::Value;

/// Evaluate a binary operation on two evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Plain(Expr::Int(a)), Value::Plain(Expr::Int(b))) => eval_int_binary(op, *a, *b),
        (Value::Plain(Expr::Float(a)), Value::Plain(Expr::Float(b))) => {
            eval_float_binary(op, *a, *b)
        }
        (Value::Plain(Expr::Bool(a)), Value::Plain(Expr::Bool(b))) => {
            eval_bool_binary(op, *a, *b)
        }
        _ => Err(type_mismatch(
            operator_context(op),
            format!("{} and {}", left.type_name(), right.type_name()),
        )),
    }
}

fn operator_context(op: BinaryOp) -> String {
    format!("operator `{}`", op.as_symbol())
}

/// Map an `Ordering` through a comparison operator.
///
/// `None` (an unordered float comparison) satisfies only `<>`.
fn compare(op: BinaryOp, ordering: Option<Ordering>) -> bool {
    match op {
        BinaryOp::Eq => ordering == Some(Ordering::Equal),
        BinaryOp::NotEq => ordering != Some(Ordering::Equal),
        BinaryOp::Lt => ordering == Some(Ordering::Less),
        BinaryOp::LtEq => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        BinaryOp::Gt => ordering == Some(Ordering::Greater),
        BinaryOp::GtEq => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Pow => false,
    }
}

#[inline]
fn checked(result: Option<i64>, operation: &str) -> EvalResult {
    result.map(Value::int).ok_or_else(|| integer_overflow(operation))
}

/// Binary operations on integers.
#[allow(
    clippy::cast_precision_loss,
    reason = "exponentiation is defined to produce a float"
)]
fn eval_int_binary(op: BinaryOp, a: i64, b: i64) -> EvalResult {
    match op {
        BinaryOp::Add => checked(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                // checked_div truncates toward zero; it only fails on MIN / -1.
                checked(a.checked_div(b), "division")
            }
        }
        BinaryOp::Pow => Ok(Value::float((a as f64).powf(b as f64))),
        BinaryOp::Eq
        | BinaryOp::NotEq
        | BinaryOp::Lt
        | BinaryOp::LtEq
        | BinaryOp::Gt
        | BinaryOp::GtEq => Ok(Value::bool(compare(op, Some(a.cmp(&b))))),
    }
}

/// Binary operations on floats.
fn eval_float_binary(op: BinaryOp, a: f64, b: f64) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::float(a + b)),
        BinaryOp::Sub => Ok(Value::float(a - b)),
        BinaryOp::Mul => Ok(Value::float(a * b)),
        BinaryOp::Div => {
            if b == 0.0 {
                Err(division_by_zero())
            } else {
                Ok(Value::float(a / b))
            }
        }
        BinaryOp::Pow => Ok(Value::float(a.powf(b))),
        // partial_cmp gives IEEE 754 semantics (NaN unordered, -0.0 == 0.0).
        BinaryOp::Eq
        | BinaryOp::NotEq
        | BinaryOp::Lt
        | BinaryOp::LtEq
        | BinaryOp::Gt
        | BinaryOp::GtEq => Ok(Value::bool(compare(op, a.partial_cmp(&b)))),
    }
}

/// Binary operations on booleans. `false < true`.
fn eval_bool_binary(op: BinaryOp, a: bool, b: bool) -> EvalResult {
    if op.is_arithmetic() {
        return Err(type_mismatch(operator_context(op), "bool and bool"));
    }
    Ok(Value::bool(compare(op, Some(a.cmp(&b)))))
}
