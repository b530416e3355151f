//! Tree-walking interpreter.
//!
//! One recursive core, [`Interpreter::eval_expr`], implements all four
//! strategies. Rules that agree across strategies (literals, operators,
//! conditionals, `raise`) live here; the rules that differ are split out:
//!
//! - `binding`: `let` and `let rec`
//! - `function_call`: application

mod binding;
mod builder;
mod function_call;

pub use builder::InterpreterBuilder;

use lamb_ir::{Expr, Name, StringInterner};
use tracing::debug;

use crate::errors::{
    raise, stack_overflow, type_mismatch, unassigned_sentinel, unbound_variable, EvalResult,
};
use crate::operators::evaluate_binary;
use crate::stack::ensure_sufficient_stack;
use crate::unary_operators::evaluate_unary;
use crate::{Environment, Strategy, Value};

/// Evaluator for one strategy.
///
/// Created through [`InterpreterBuilder`] or [`Interpreter::new`].
pub struct Interpreter<'a> {
    /// Resolves names for substitution and diagnostics.
    interner: &'a StringInterner,
    strategy: Strategy,
    /// Recursion limit; `None` grows the stack without bound.
    max_depth: Option<usize>,
    /// Current recursion depth.
    depth: usize,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with no recursion limit.
    pub fn new(interner: &'a StringInterner, strategy: Strategy) -> Self {
        InterpreterBuilder::new(interner).strategy(strategy).build()
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Evaluate `expr` in `env`.
    ///
    /// Any failure aborts the whole evaluation; there is no partial result.
    #[tracing::instrument(level = "debug", skip_all, fields(strategy = %self.strategy))]
    pub fn eval(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        if self.strategy == Strategy::Trivial {
            return Ok(Value::Plain(expr.clone()));
        }

        self.depth = 0;
        let result = self.eval_expr(expr, env);
        if let Err(err) = &result {
            debug!(%err, raise = err.is_raise(), "evaluation failed");
        }
        result
    }

    /// Recursive entry: depth accounting and stack growth around [`Self::eval_inner`].
    pub(crate) fn eval_expr(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        let depth = self.depth.saturating_add(1);
        if let Some(max) = self.max_depth {
            if depth > max {
                return Err(stack_overflow(max));
            }
        }

        self.depth = depth;
        let result = ensure_sufficient_stack(|| self.eval_inner(expr, env));
        self.depth = depth.saturating_sub(1);
        result
    }

    #[tracing::instrument(level = "trace", skip_all, fields(kind = expr.kind_name()))]
    fn eval_inner(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        match expr {
            Expr::Ident(name) => self.lookup(env, *name),
            Expr::Int(_) | Expr::Float(_) | Expr::Bool(_) => Ok(Value::Plain(expr.clone())),
            Expr::Unary { op, operand } => {
                let operand = self.eval_expr(operand, env)?;
                evaluate_unary(*op, &operand)
            }
            Expr::Binary { op, left, right } => {
                let left = self.eval_expr(left, env)?;
                let right = self.eval_expr(right, env)?;
                evaluate_binary(*op, &left, &right)
            }
            Expr::If {
                cond,
                then_branch,
                else_branch,
            } => match self.eval_expr(cond, env)? {
                Value::Plain(Expr::Bool(true)) => self.eval_expr(then_branch, env),
                Value::Plain(Expr::Bool(false)) => self.eval_expr(else_branch, env),
                other => Err(type_mismatch("conditional guard", other.type_name())),
            },
            Expr::Fun(function) => {
                if self.strategy.makes_closures() {
                    Ok(Value::make_closure(function.clone(), env.clone()))
                } else {
                    Ok(Value::Plain(expr.clone()))
                }
            }
            Expr::Let { name, value, body } => self.eval_let(*name, value, body, env),
            Expr::LetRec { name, value, body } => self.eval_let_rec(*name, value, body, env),
            Expr::Raise => Err(raise()),
            Expr::Unassigned => Err(unassigned_sentinel()),
            Expr::App { callee, arg } => self.eval_application(callee, arg, env),
        }
    }

    /// Resolve `name`, refusing to hand out an unpatched `let rec` placeholder.
    fn lookup(&self, env: &Environment, name: Name) -> EvalResult {
        let value = env
            .lookup(name)
            .ok_or_else(|| unbound_variable(self.interner.lookup(name)))?;
        if value.is_unassigned() {
            return Err(unassigned_sentinel());
        }
        Ok(value)
    }
}

/// Evaluate `expr` in `env` under `strategy`, without a recursion limit.
pub fn evaluate(
    interner: &StringInterner,
    strategy: Strategy,
    expr: &Expr,
    env: &Environment,
) -> EvalResult {
    Interpreter::new(interner, strategy).eval(expr, env)
}

/// Return `expr` unchanged, wrapped as a plain value.
pub fn eval_trivial(interner: &StringInterner, expr: &Expr, env: &Environment) -> EvalResult {
    evaluate(interner, Strategy::Trivial, expr, env)
}

/// Evaluate by substitution.
pub fn eval_substitution(interner: &StringInterner, expr: &Expr, env: &Environment) -> EvalResult {
    evaluate(interner, Strategy::Substitution, expr, env)
}

/// Evaluate with dynamic scoping.
pub fn eval_dynamic(interner: &StringInterner, expr: &Expr, env: &Environment) -> EvalResult {
    evaluate(interner, Strategy::Dynamic, expr, env)
}

/// Evaluate with lexical scoping (closures).
pub fn eval_lexical(interner: &StringInterner, expr: &Expr, env: &Environment) -> EvalResult {
    evaluate(interner, Strategy::Lexical, expr, env)
}
