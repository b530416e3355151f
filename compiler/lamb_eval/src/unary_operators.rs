//! Unary operator implementations for the evaluator.

use lamb_ir::{Expr, UnaryOp};

use crate::errors::{integer_overflow, type_mismatch, EvalResult};
use crate::Value;

/// Evaluate a unary operation on an evaluated operand.
///
/// Each operator accepts exactly one runtime type: `-` ints, `-.` floats and
/// `not` bools.
pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Neg, Value::Plain(Expr::Int(n))) => n
            .checked_neg()
            .map(Value::int)
            .ok_or_else(|| integer_overflow("negation")),
        (UnaryOp::NegFloat, Value::Plain(Expr::Float(x))) => Ok(Value::float(-x)),
        (UnaryOp::Not, Value::Plain(Expr::Bool(b))) => Ok(Value::bool(!b)),
        _ => Err(type_mismatch(
            format!("operator `{}`", op.as_symbol()),
            operand.type_name(),
        )),
    }
}
