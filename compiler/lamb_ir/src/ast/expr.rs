//! Expression nodes.
//!
//! `Expr` is the closed set of node kinds the evaluator consumes. Trees are
//! immutable once built; substitution and evaluation produce new trees.

use crate::{BinaryOp, Name, UnaryOp};

/// A one-parameter function literal: `fun param -> body`.
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    pub param: Name,
    pub body: Box<Expr>,
}

impl Function {
    pub fn new(param: Name, body: Expr) -> Self {
        Function {
            param,
            body: Box::new(body),
        }
    }
}

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Variable reference.
    Ident(Name),
    /// 64-bit signed integer literal.
    Int(i64),
    /// 64-bit float literal.
    Float(f64),
    /// Boolean literal.
    Bool(bool),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `if cond then then_branch else else_branch`
    If {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    Fun(Function),
    /// `let name = value in body`
    Let {
        name: Name,
        value: Box<Expr>,
        body: Box<Expr>,
    },
    /// `let rec name = value in body`; `name` is in scope in both `value` and `body`.
    LetRec {
        name: Name,
        value: Box<Expr>,
        body: Box<Expr>,
    },
    /// Raise the language's exception.
    Raise,
    /// Placeholder held by a `let rec` cell before its value is backpatched.
    ///
    /// Never produced by a parser and never a valid evaluation result.
    Unassigned,
    /// Function application `callee arg`.
    App {
        callee: Box<Expr>,
        arg: Box<Expr>,
    },
}

impl Expr {
    pub fn ident(name: Name) -> Self {
        Expr::Ident(name)
    }

    pub fn int(n: i64) -> Self {
        Expr::Int(n)
    }

    pub fn float(f: f64) -> Self {
        Expr::Float(f)
    }

    pub fn bool(b: bool) -> Self {
        Expr::Bool(b)
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn if_then_else(cond: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Expr::If {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn fun(param: Name, body: Expr) -> Self {
        Expr::Fun(Function::new(param, body))
    }

    pub fn let_in(name: Name, value: Expr, body: Expr) -> Self {
        Expr::Let {
            name,
            value: Box::new(value),
            body: Box::new(body),
        }
    }

    pub fn let_rec(name: Name, value: Expr, body: Expr) -> Self {
        Expr::LetRec {
            name,
            value: Box::new(value),
            body: Box::new(body),
        }
    }

    pub fn app(callee: Expr, arg: Expr) -> Self {
        Expr::App {
            callee: Box::new(callee),
            arg: Box::new(arg),
        }
    }

    /// Whether rendering this node as an operand needs no parentheses.
    pub(crate) fn is_atomic(&self) -> bool {
        matches!(
            self,
            Expr::Ident(_)
                | Expr::Int(_)
                | Expr::Float(_)
                | Expr::Bool(_)
                | Expr::Raise
                | Expr::Unassigned
                | Expr::Unary { .. }
                | Expr::Binary { .. }
        )
    }

    /// Short description of the node kind, for diagnostics and tracing.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Ident(_) => "identifier",
            Expr::Int(_) => "int",
            Expr::Float(_) => "float",
            Expr::Bool(_) => "bool",
            Expr::Unary { .. } => "unary operation",
            Expr::Binary { .. } => "binary operation",
            Expr::If { .. } => "conditional",
            Expr::Fun(_) => "function",
            Expr::Let { .. } => "let",
            Expr::LetRec { .. } => "let rec",
            Expr::Raise => "raise",
            Expr::Unassigned => "unassigned",
            Expr::App { .. } => "application",
        }
    }
}

impl From<Function> for Expr {
    fn from(function: Function) -> Self {
        Expr::Fun(function)
    }
}
