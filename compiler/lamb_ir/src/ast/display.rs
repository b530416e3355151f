//! Source-like rendering of expressions.
//!
//! Names need the interner to print, so rendering goes through
//! [`Expr::display`], which pairs a node with an interner.

use std::fmt;

use crate::{Expr, Function, StringInterner};

/// An expression paired with the interner that owns its names.
pub struct ExprDisplay<'a> {
    expr: &'a Expr,
    interner: &'a StringInterner,
}

impl Expr {
    /// Render this expression as source-like text.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> ExprDisplay<'a> {
        ExprDisplay {
            expr: self,
            interner,
        }
    }
}

impl Function {
    /// Render this function literal as `fun param -> body`.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> FunctionDisplay<'a> {
        FunctionDisplay {
            function: self,
            interner,
        }
    }
}

/// A function literal paired with its interner.
pub struct FunctionDisplay<'a> {
    function: &'a Function,
    interner: &'a StringInterner,
}

impl fmt::Display for FunctionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fun {} -> {}",
            self.interner.lookup(self.function.param),
            self.function.body.display(self.interner)
        )
    }
}

impl ExprDisplay<'_> {
    /// Write `expr`, parenthesized unless it is atomic.
    fn operand(&self, f: &mut fmt::Formatter<'_>, expr: &Expr) -> fmt::Result {
        if expr.is_atomic() {
            write!(f, "{}", expr.display(self.interner))
        } else {
            write!(f, "({})", expr.display(self.interner))
        }
    }
}

impl fmt::Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = self.interner;
        match self.expr {
            Expr::Ident(name) => f.write_str(interner.lookup(*name)),
            Expr::Int(n) => write!(f, "{n}"),
            // Debug keeps the trailing `.0` on integral floats.
            Expr::Float(x) => write!(f, "{x:?}"),
            Expr::Bool(b) => write!(f, "{b}"),
            Expr::Unary { op, operand } => {
                let sep = if op.as_symbol().ends_with(char::is_alphabetic) {
                    " "
                } else {
                    ""
                };
                write!(f, "({}{sep}", op.as_symbol())?;
                self.operand(f, operand)?;
                f.write_str(")")
            }
            Expr::Binary { op, left, right } => {
                f.write_str("(")?;
                self.operand(f, left)?;
                write!(f, " {} ", op.as_symbol())?;
                self.operand(f, right)?;
                f.write_str(")")
            }
            Expr::If {
                cond,
                then_branch,
                else_branch,
            } => write!(
                f,
                "if {} then {} else {}",
                cond.display(interner),
                then_branch.display(interner),
                else_branch.display(interner)
            ),
            Expr::Fun(function) => write!(f, "{}", function.display(interner)),
            Expr::Let { name, value, body } => write!(
                f,
                "let {} = {} in {}",
                interner.lookup(*name),
                value.display(interner),
                body.display(interner)
            ),
            Expr::LetRec { name, value, body } => write!(
                f,
                "let rec {} = {} in {}",
                interner.lookup(*name),
                value.display(interner),
                body.display(interner)
            ),
            Expr::Raise => f.write_str("raise"),
            Expr::Unassigned => f.write_str("<unassigned>"),
            Expr::App { callee, arg } => {
                self.operand(f, callee)?;
                f.write_str(" ")?;
                self.operand(f, arg)
            }
        }
    }
}
