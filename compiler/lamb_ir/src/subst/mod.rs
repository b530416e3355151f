//! Capture-avoiding substitution.
//!
//! `substitute(interner, name, replacement, expr)` replaces every free
//! occurrence of `name` in `expr` by `replacement`. A binder that would
//! capture a free variable of `replacement` is renamed to a fresh name first,
//! so the result never changes what the replacement's variables refer to.
//! The input tree is never modified.

use rustc_hash::FxHashSet;

use crate::{Expr, Function, Name, StringInterner};

/// Collect the free variables of `expr`.
pub fn free_vars(expr: &Expr) -> FxHashSet<Name> {
    let mut free = FxHashSet::default();
    collect_free(expr, &mut Vec::new(), &mut free);
    free
}

/// Whether `name` occurs free in `expr`.
pub fn is_free_in(name: Name, expr: &Expr) -> bool {
    free_vars(expr).contains(&name)
}

fn collect_free(expr: &Expr, bound: &mut Vec<Name>, free: &mut FxHashSet<Name>) {
    match expr {
        Expr::Ident(name) => {
            if !bound.contains(name) {
                free.insert(*name);
            }
        }
        Expr::Int(_) | Expr::Float(_) | Expr::Bool(_) | Expr::Raise | Expr::Unassigned => {}
        Expr::Unary { operand, .. } => collect_free(operand, bound, free),
        Expr::Binary { left, right, .. } => {
            collect_free(left, bound, free);
            collect_free(right, bound, free);
        }
        Expr::If {
            cond,
            then_branch,
            else_branch,
        } => {
            collect_free(cond, bound, free);
            collect_free(then_branch, bound, free);
            collect_free(else_branch, bound, free);
        }
        Expr::Fun(Function { param, body }) => {
            bound.push(*param);
            collect_free(body, bound, free);
            bound.pop();
        }
        Expr::Let { name, value, body } => {
            collect_free(value, bound, free);
            bound.push(*name);
            collect_free(body, bound, free);
            bound.pop();
        }
        Expr::LetRec { name, value, body } => {
            bound.push(*name);
            collect_free(value, bound, free);
            collect_free(body, bound, free);
            bound.pop();
        }
        Expr::App { callee, arg } => {
            collect_free(callee, bound, free);
            collect_free(arg, bound, free);
        }
    }
}

/// Replace the free occurrences of `name` in `expr` with `replacement`.
pub fn substitute(interner: &StringInterner, name: Name, replacement: &Expr, expr: &Expr) -> Expr {
    Substitution::new(interner, name, replacement).apply(expr)
}

/// A single pending `name := replacement` rewrite.
struct Substitution<'a> {
    interner: &'a StringInterner,
    name: Name,
    replacement: &'a Expr,
    /// Free variables of `replacement`; binders in this set must be renamed.
    replacement_free: FxHashSet<Name>,
}

impl<'a> Substitution<'a> {
    fn new(interner: &'a StringInterner, name: Name, replacement: &'a Expr) -> Self {
        Substitution {
            interner,
            name,
            replacement,
            replacement_free: free_vars(replacement),
        }
    }

    fn apply(&self, expr: &Expr) -> Expr {
        match expr {
            Expr::Ident(var) if *var == self.name => self.replacement.clone(),
            Expr::Ident(_)
            | Expr::Int(_)
            | Expr::Float(_)
            | Expr::Bool(_)
            | Expr::Raise
            | Expr::Unassigned => expr.clone(),
            Expr::Unary { op, operand } => Expr::unary(*op, self.apply(operand)),
            Expr::Binary { op, left, right } => {
                Expr::binary(*op, self.apply(left), self.apply(right))
            }
            Expr::If {
                cond,
                then_branch,
                else_branch,
            } => Expr::if_then_else(
                self.apply(cond),
                self.apply(then_branch),
                self.apply(else_branch),
            ),
            Expr::Fun(Function { param, body }) => {
                let (param, mut scoped) = self.under_binder(*param, &[&**body]);
                Expr::fun(param, scoped.remove(0))
            }
            Expr::Let { name, value, body } => {
                let value = self.apply(value);
                let (name, mut scoped) = self.under_binder(*name, &[&**body]);
                Expr::let_in(name, value, scoped.remove(0))
            }
            Expr::LetRec { name, value, body } => {
                let (name, mut scoped) = self.under_binder(*name, &[&**value, &**body]);
                let body = scoped.remove(1);
                Expr::let_rec(name, scoped.remove(0), body)
            }
            Expr::App { callee, arg } => Expr::app(self.apply(callee), self.apply(arg)),
        }
    }

    /// Substitute into the expressions scoped by `binder`.
    ///
    /// Returns the (possibly renamed) binder and the rewritten expressions, in
    /// the order given.
    fn under_binder(&self, binder: Name, scoped: &[&Expr]) -> (Name, Vec<Expr>) {
        // The binder shadows the substituted name.
        if binder == self.name {
            return (binder, scoped.iter().map(|e| (*e).clone()).collect());
        }

        let needs_rename = self.replacement_free.contains(&binder)
            && scoped.iter().any(|e| is_free_in(self.name, e));
        if !needs_rename {
            return (binder, scoped.iter().map(|e| self.apply(e)).collect());
        }

        let mut avoid = self.replacement_free.clone();
        avoid.insert(self.name);
        for e in scoped {
            avoid.extend(free_vars(e));
        }
        let fresh = fresh_name(self.interner, binder, &avoid);
        let rename = Expr::ident(fresh);
        let renamed = scoped
            .iter()
            .map(|e| self.apply(&substitute(self.interner, binder, &rename, e)))
            .collect();
        (fresh, renamed)
    }
}

/// Pick a name derived from `base` that is not in `avoid`.
fn fresh_name(interner: &StringInterner, base: Name, avoid: &FxHashSet<Name>) -> Name {
    let stem = interner.lookup(base);
    (1u64..)
        .map(|i| interner.intern(&format!("{stem}'{i}")))
        .find(|candidate| !avoid.contains(candidate))
        .unwrap_or(base)
}

#[cfg(test)]
mod tests;
