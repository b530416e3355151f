//! Function application.
//!
//! The three reducing strategies differ only in where the body runs:
//!
//! - substitution: the argument is substituted into the body
//! - dynamic: the body runs in the caller's environment
//! - lexical: the body runs in the closure's captured environment

use lamb_ir::{substitute, Expr, Function};

use super::Interpreter;
use crate::errors::{not_a_function, EvalResult};
use crate::{Cell, Closure, Environment, Value};

impl Interpreter<'_> {
    #[tracing::instrument(level = "trace", skip_all)]
    pub(super) fn eval_application(
        &mut self,
        callee: &Expr,
        arg: &Expr,
        env: &Environment,
    ) -> EvalResult {
        let callee = self.eval_expr(callee, env)?;

        match callee {
            Value::Closure(Closure {
                function,
                env: captured,
            }) if self.strategy.makes_closures() => {
                let arg = self.eval_expr(arg, env)?;
                self.call_in(&function, arg, &captured)
            }
            Value::Plain(Expr::Fun(function)) if !self.strategy.makes_closures() => {
                let arg = self.eval_expr(arg, env)?;
                if self.strategy.substitutes() {
                    let body = substitute(
                        self.interner,
                        function.param,
                        &arg.into_expr(),
                        &function.body,
                    );
                    self.eval_expr(&body, env)
                } else {
                    self.call_in(&function, arg, env)
                }
            }
            other => Err(not_a_function(
                other.display(self.interner, false).to_string(),
            )),
        }
    }

    /// Run `function`'s body with its parameter bound to `arg` on top of `scope`.
    fn call_in(&mut self, function: &Function, arg: Value, scope: &Environment) -> EvalResult {
        let env = scope.extend(function.param, Cell::new(arg));
        self.eval_expr(&function.body, &env)
    }
}
