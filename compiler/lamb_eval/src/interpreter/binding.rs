//! `let` and `let rec`.
//!
//! Under substitution, a binding is eliminated by rewriting its body. The
//! environment strategies allocate a cell instead; `let rec` binds the cell
//! before evaluating the definition and backpatches it afterwards, so the
//! definition reaches itself through that same cell.

use lamb_ir::{substitute, Expr, Name};
use tracing::{debug, trace};

use super::Interpreter;
use crate::errors::EvalResult;
use crate::{Cell, Environment};

impl Interpreter<'_> {
    pub(super) fn eval_let(
        &mut self,
        name: Name,
        value: &Expr,
        body: &Expr,
        env: &Environment,
    ) -> EvalResult {
        let bound = self.eval_expr(value, env)?;

        if self.strategy.substitutes() {
            let body = substitute(self.interner, name, &bound.into_expr(), body);
            return self.eval_expr(&body, env);
        }

        trace!(name = self.interner.lookup(name), "let binding");
        let env = env.extend(name, Cell::new(bound));
        self.eval_expr(body, &env)
    }

    pub(super) fn eval_let_rec(
        &mut self,
        name: Name,
        value: &Expr,
        body: &Expr,
        env: &Environment,
    ) -> EvalResult {
        if self.strategy.substitutes() {
            // Unroll once: each self-reference becomes the whole recursive
            // definition again.
            let recursive = Expr::let_rec(name, value.clone(), Expr::ident(name));
            let unrolled = substitute(self.interner, name, &recursive, value);
            let bound = self.eval_expr(&unrolled, env)?;
            let body = substitute(self.interner, name, &bound.into_expr(), body);
            return self.eval_expr(&body, env);
        }

        let cell = Cell::unassigned();
        let env = env.extend(name, cell.clone());
        let bound = self.eval_expr(value, &env)?;
        debug!(
            name = self.interner.lookup(name),
            kind = bound.type_name(),
            "backpatching let rec"
        );
        cell.set(bound);
        self.eval_expr(body, &env)
    }
}
