//! Error taxonomy for evaluation.
//!
//! Every failure is an [`EvalError`] carrying a typed [`EvalErrorKind`].
//! The factory functions below are the construction API; call sites never
//! build kinds by hand.
//!
//! Failures split into two classes. Host-level faults (unbound names, type
//! mismatches, arithmetic faults, the unassigned placeholder) mean the
//! program is wrong. `Raise` is the object language's own exception and is
//! kept apart so that a handler construct could catch it selectively.

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Which side of the fault/exception split an error falls on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureClass {
    /// Runtime or host-level fault.
    Fault,
    /// The object language's `raise`.
    Raise,
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("unbound variable: {name}")]
    UnboundVariable { name: String },

    /// An operator or construct received an operand of the wrong runtime type.
    #[error("type mismatch in {context}: got {operand}")]
    TypeMismatch { context: String, operand: String },

    #[error("not a function: {value}")]
    NotAFunction { value: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: String },

    /// The configured recursion limit was exceeded.
    #[error("evaluation exceeded the maximum depth of {depth}")]
    StackOverflow { depth: usize },

    /// A `let rec` placeholder was read before it was backpatched.
    #[error("internal error: unassigned let rec placeholder was evaluated")]
    UnassignedSentinel,

    #[error("exception raised")]
    Raise,
}

impl EvalErrorKind {
    pub fn class(&self) -> FailureClass {
        match self {
            EvalErrorKind::Raise => FailureClass::Raise,
            _ => FailureClass::Fault,
        }
    }
}

/// An evaluation failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    kind: EvalErrorKind,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }

    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }

    pub fn into_kind(self) -> EvalErrorKind {
        self.kind
    }

    pub fn class(&self) -> FailureClass {
        self.kind.class()
    }

    /// Whether this is the object-language exception rather than a fault.
    pub fn is_raise(&self) -> bool {
        self.class() == FailureClass::Raise
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Factory functions

pub fn unbound_variable(name: &str) -> EvalError {
    EvalErrorKind::UnboundVariable {
        name: name.to_owned(),
    }
    .into()
}

pub fn type_mismatch(context: impl Into<String>, operand: impl Into<String>) -> EvalError {
    EvalErrorKind::TypeMismatch {
        context: context.into(),
        operand: operand.into(),
    }
    .into()
}

pub fn not_a_function(value: impl Into<String>) -> EvalError {
    EvalErrorKind::NotAFunction {
        value: value.into(),
    }
    .into()
}

pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

pub fn integer_overflow(operation: &str) -> EvalError {
    EvalErrorKind::IntegerOverflow {
        operation: operation.to_owned(),
    }
    .into()
}

pub fn stack_overflow(depth: usize) -> EvalError {
    EvalErrorKind::StackOverflow { depth }.into()
}

pub fn unassigned_sentinel() -> EvalError {
    EvalErrorKind::UnassignedSentinel.into()
}

pub fn raise() -> EvalError {
    EvalErrorKind::Raise.into()
}
