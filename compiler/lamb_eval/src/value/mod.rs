//! Runtime values.
//!
//! A value is either a fully reduced expression ([`Value::Plain`]) or a
//! function paired with the environment it was created in
//! ([`Value::Closure`]). Only the lexical strategy produces closures.

use std::fmt;

use lamb_ir::{Expr, Function, StringInterner};

use crate::Environment;

/// A function literal together with its defining environment.
#[derive(Clone, Debug)]
pub struct Closure {
    pub function: Function,
    pub env: Environment,
}

impl PartialEq for Closure {
    /// Closures are equal when they have the same code and share one environment.
    fn eq(&self, other: &Self) -> bool {
        self.function == other.function && self.env.ptr_eq(&other.env)
    }
}

/// Result of evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A literal or function expression with no attached environment.
    Plain(Expr),
    Closure(Closure),
}

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Plain(Expr::Int(n))
    }

    #[inline]
    pub fn float(x: f64) -> Self {
        Value::Plain(Expr::Float(x))
    }

    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Plain(Expr::Bool(b))
    }

    /// The `let rec` placeholder. Never a valid evaluation result.
    pub fn unassigned() -> Self {
        Value::Plain(Expr::Unassigned)
    }

    /// Pair a function literal with the environment it is defined in.
    pub fn make_closure(function: Function, env: Environment) -> Self {
        Value::Closure(Closure { function, env })
    }

    pub fn is_unassigned(&self) -> bool {
        matches!(self, Value::Plain(Expr::Unassigned))
    }

    /// The underlying expression, dropping a closure's environment.
    ///
    /// Used by the substitution strategy, which has no environments.
    pub fn into_expr(self) -> Expr {
        match self {
            Value::Plain(expr) => expr,
            Value::Closure(closure) => Expr::Fun(closure.function),
        }
    }

    /// Runtime type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Plain(Expr::Int(_)) => "int",
            Value::Plain(Expr::Float(_)) => "float",
            Value::Plain(Expr::Bool(_)) => "bool",
            Value::Plain(Expr::Fun(_)) => "function",
            Value::Plain(Expr::Unassigned) => "unassigned",
            Value::Plain(_) => "expression",
            Value::Closure(_) => "closure",
        }
    }

    /// Render this value.
    ///
    /// With `include_env`, closures list their captured bindings; closures
    /// nested inside that listing are always rendered without theirs.
    pub fn display<'a>(
        &'a self,
        interner: &'a StringInterner,
        include_env: bool,
    ) -> ValueDisplay<'a> {
        ValueDisplay {
            value: self,
            interner,
            include_env,
        }
    }
}

/// Render `value` as text, with or without closure environments.
pub fn stringify(value: &Value, interner: &StringInterner, include_env: bool) -> String {
    value.display(interner, include_env).to_string()
}

/// A value paired with the interner that owns its names.
pub struct ValueDisplay<'a> {
    value: &'a Value,
    interner: &'a StringInterner,
    include_env: bool,
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Plain(expr) => write!(f, "{}", expr.display(self.interner)),
            Value::Closure(Closure { function, env }) => {
                write!(f, "<{}", function.display(self.interner))?;
                if self.include_env {
                    f.write_str(" | {")?;
                    for (i, (name, cell)) in env.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(
                            f,
                            "{} = {}",
                            self.interner.lookup(name),
                            cell.get().display(self.interner, false)
                        )?;
                    }
                    f.write_str("}")?;
                }
                f.write_str(">")
            }
        }
    }
}
