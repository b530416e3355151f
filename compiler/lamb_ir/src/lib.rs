//! Lamb IR - expression model for the Lamb interpreter.
//!
//! This crate owns everything the evaluator needs to know about program
//! structure:
//!
//! - [`Expr`]: the closed set of expression node kinds
//! - [`BinaryOp`] / [`UnaryOp`]: operator sets
//! - [`Name`] / [`StringInterner`]: interned identifiers
//! - [`substitute`]: capture-avoiding substitution, used by the
//!   substitution-based evaluation strategy
//!
//! Parsing is not part of this crate; front ends build trees directly or
//! through the `Expr` constructors.

mod ast;
mod interner;
mod name;
pub mod subst;

pub use ast::{BinaryOp, Expr, ExprDisplay, Function, FunctionDisplay, UnaryOp};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use subst::{free_vars, substitute};
