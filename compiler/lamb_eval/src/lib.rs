#![deny(clippy::arithmetic_side_effects)]
//! Lamb Eval - evaluation engine for the Lamb language.
//!
//! Reduces a [`lamb_ir::Expr`] to a [`Value`] under one of four strategies:
//!
//! - `Trivial`: returns the expression unchanged
//! - `Substitution`: rewrites bodies with capture-avoiding substitution
//! - `Dynamic`: function bodies resolve free names in the caller's environment
//! - `Lexical`: functions are closures over their defining environment
//!
//! # Architecture
//!
//! - `Environment` / `Cell`: persistent binding lists over shared mutable cells
//! - `Value`: plain expressions and closures, rendered by [`stringify`]
//! - `evaluate_binary` / `evaluate_unary`: enum-based operator dispatch
//! - `Interpreter`: the recursive core, configured by `InterpreterBuilder`
//! - `EvalError`: typed failures, split into faults and the language's `raise`

mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod stack;
mod strategy;
mod tracing_setup;
mod unary_operators;
mod value;

pub use environment::{Cell, Environment};
pub use errors::{EvalError, EvalErrorKind, EvalResult, FailureClass};
pub use interpreter::{
    eval_dynamic, eval_lexical, eval_substitution, eval_trivial, evaluate, Interpreter,
    InterpreterBuilder,
};
pub use operators::evaluate_binary;
pub use stack::ensure_sufficient_stack;
pub use strategy::{Strategy, UnknownStrategy};
pub use tracing_setup::init_tracing;
pub use unary_operators::evaluate_unary;
pub use value::{stringify, Closure, Value, ValueDisplay};

#[cfg(test)]
mod tests;
