//! Abstract syntax for Lamb programs.

mod display;
mod expr;
mod operators;

pub use display::{ExprDisplay, FunctionDisplay};
pub use expr::{Expr, Function};
pub use operators::{BinaryOp, UnaryOp};
