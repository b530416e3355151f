use super::*;
use crate::BinaryOp;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_replaces_free_occurrence() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let expr = Expr::binary(BinaryOp::Add, Expr::ident(x), Expr::int(1));
    let result = substitute(&interner, x, &Expr::int(41), &expr);
    assert_eq!(
        result,
        Expr::binary(BinaryOp::Add, Expr::int(41), Expr::int(1))
    );
}

#[test]
fn test_function_parameter_shadows() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let expr = Expr::fun(x, Expr::ident(x));
    let result = substitute(&interner, x, &Expr::int(5), &expr);
    assert_eq!(result, expr);
}

#[test]
fn test_let_value_is_outside_binder() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    // let x = x in x  -- only the bound expression sees the outer x
    let expr = Expr::let_in(x, Expr::ident(x), Expr::ident(x));
    let result = substitute(&interner, x, &Expr::int(7), &expr);
    assert_eq!(result, Expr::let_in(x, Expr::int(7), Expr::ident(x)));
}

#[test]
fn test_let_rec_binds_in_value_and_body() {
    let interner = StringInterner::new();
    let f = interner.intern("f");
    let expr = Expr::let_rec(f, Expr::ident(f), Expr::ident(f));
    let result = substitute(&interner, f, &Expr::int(0), &expr);
    assert_eq!(result, expr);
}

#[test]
fn test_renames_capturing_binder() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");
    // (fun y -> x)[x := y] must not become fun y -> y
    let expr = Expr::fun(y, Expr::ident(x));
    let result = substitute(&interner, x, &Expr::ident(y), &expr);

    let Expr::Fun(Function { param, body }) = &result else {
        panic!("expected a function, got {result:?}");
    };
    assert_ne!(*param, y);
    assert_eq!(**body, Expr::ident(y));
    assert_eq!(interner.lookup(*param), "y'1");
}

#[test]
fn test_renamed_binder_keeps_bound_occurrences() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");
    // (fun y -> y + x)[x := y]
    let expr = Expr::fun(
        y,
        Expr::binary(BinaryOp::Add, Expr::ident(y), Expr::ident(x)),
    );
    let result = substitute(&interner, x, &Expr::ident(y), &expr);

    let Expr::Fun(Function { param, body }) = &result else {
        panic!("expected a function, got {result:?}");
    };
    assert_eq!(
        **body,
        Expr::binary(BinaryOp::Add, Expr::ident(*param), Expr::ident(y))
    );
}

#[test]
fn test_no_rename_when_name_not_free_under_binder() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");
    let expr = Expr::fun(y, Expr::ident(y));
    let result = substitute(&interner, x, &Expr::ident(y), &expr);
    assert_eq!(result, expr);
}

#[test]
fn test_free_vars() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");
    let f = interner.intern("f");
    let expr = Expr::let_rec(
        f,
        Expr::fun(x, Expr::app(Expr::ident(f), Expr::ident(y))),
        Expr::app(Expr::ident(f), Expr::ident(x)),
    );
    let free = free_vars(&expr);
    assert!(free.contains(&y));
    assert!(free.contains(&x));
    assert!(!free.contains(&f));
    assert!(is_free_in(y, &expr));
    assert!(!is_free_in(f, &expr));
}

fn arb_closed_arith() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        any::<i64>().prop_map(Expr::int),
        any::<bool>().prop_map(Expr::bool),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        (inner.clone(), inner).prop_map(|(l, r)| Expr::binary(BinaryOp::Add, l, r))
    })
}

proptest! {
    #[test]
    fn substituting_into_closed_expression_is_identity(
        expr in arb_closed_arith(),
        n in any::<i64>(),
    ) {
        let interner = StringInterner::new();
        let x = interner.intern("x");
        prop_assert_eq!(substitute(&interner, x, &Expr::int(n), &expr), expr);
    }
}
