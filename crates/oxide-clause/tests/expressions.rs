mod common;

use common::{render, render_err};
use oxide_clause::builder::{
    add, and, div, eq, eq_l, gt_l, if_expr, like, literal, lte_l, mul, neq_l, not, or, sql_func,
    sub, tuple,
};
use oxide_clause::{col, Column, Error, Expr, IntoExpr, SqlValue};

#[test]
fn test_single_element_conjunction_matches_element() {
    let inner = gt_l(col("age"), 18);
    assert_eq!(render(&and([inner.clone()])), render(&inner));
    assert_eq!(render(&or([inner.clone()])), render(&inner));
}

#[test]
fn test_nested_conjunctions() {
    let expr = and([
        eq_l(col("active"), true),
        or([lte_l(col("age"), 12), gt_l(col("age"), 65)]),
    ]);
    assert_eq!(
        render(&expr),
        r#"("active"=TRUE AND ("age"<=12 OR "age">65))"#
    );
}

#[test]
fn test_empty_conjunction_is_an_error() {
    let err = render_err(&and(Vec::<oxide_clause::BoolExpr>::new()));
    assert!(matches!(err, Error::EmptyConjunction { .. }));
}

#[test]
fn test_error_bubbles_up_through_ancestors() {
    let expr = not(and([
        eq_l(col("a"), 1),
        or(Vec::<oxide_clause::BoolExpr>::new()),
    ]));
    assert_eq!(
        render_err(&expr),
        Error::EmptyConjunction {
            sql: String::from(r#"NOT (("a"=1 AND "#)
        }
    );
}

#[test]
fn test_null_literal_equality() {
    assert_eq!(render(&eq_l(col("x"), SqlValue::Null)), r#""x" IS NULL"#);
    assert_eq!(render(&neq_l(col("x"), None::<&str>)), r#""x" IS NOT NULL"#);
    assert_eq!(render(&eq_l(col("x"), "y")), r#""x"='y'"#);
    assert_eq!(render(&neq_l(col("x"), "y")), r#""x"!='y'"#);
}

#[test]
fn test_f32_literal_renders_as_written() {
    assert_eq!(render(&eq_l(col("x"), 0.1_f32)), r#""x"=0.1"#);
}

#[test]
fn test_equality_between_columns() {
    let expr = eq(
        Column::qualified("orders", "user_id"),
        Column::qualified("users", "id"),
    );
    assert_eq!(render(&expr), r#""orders"."user_id"="users"."id""#);
}

#[test]
fn test_arithmetic_combinators() {
    let total = mul([col("price").into_expr(), literal(3).into_expr()]);
    assert_eq!(render(&total), r#"("price" * 3)"#);

    let nested = add([
        total,
        sub([col("fee").into_expr(), col("discount").into_expr()]),
    ]);
    assert_eq!(
        render(&nested),
        r#"(("price" * 3) + ("fee" - "discount"))"#
    );

    assert_eq!(render(&div([literal(10)])), "10");
    assert!(matches!(
        render_err(&div(Vec::<Expr>::new())),
        Error::EmptyArithmetic { .. }
    ));
}

#[test]
fn test_boolean_expression_as_operand() {
    let expr = eq(gt_l(col("score"), 10), literal(true));
    assert_eq!(render(&expr), r#""score">10=TRUE"#);
}

#[test]
fn test_tuple() {
    assert_eq!(render(&tuple([col("a"), col("b")])), r#"("a","b")"#);
    assert_eq!(render(&tuple([literal(1)])), "(1)");
    assert!(matches!(
        render_err(&tuple(Vec::<Expr>::new())),
        Error::EmptyTuple { .. }
    ));
}

#[test]
fn test_tuple_comparison() {
    let expr = eq(
        tuple([col("a"), col("b")]),
        tuple([literal(1), literal(2)]),
    );
    assert_eq!(render(&expr), r#"("a","b")=(1,2)"#);
}

#[test]
fn test_function_calls() {
    assert_eq!(render(&sql_func("count", [col("id")])), r#"count("id")"#);
    assert_eq!(
        render(&sql_func("row_num2", Vec::<Expr>::new())),
        "row_num2()"
    );
    assert_eq!(
        render(&sql_func(
            "COALESCE",
            [col("nickname").into_expr(), literal("anonymous").into_expr()]
        )),
        r#"COALESCE("nickname",'anonymous')"#
    );
}

#[test]
fn test_function_name_rejects_injection() {
    for name in ["", "1st", "count(*); DROP TABLE users; --", "my-func", "a.b"] {
        let err = render_err(&sql_func(name, [col("id")]));
        assert!(
            matches!(&err, Error::InvalidFunctionName { name: n, .. } if n == name),
            "unexpected error for {name:?}: {err:?}"
        );
    }
}

#[test]
fn test_function_argument_error_propagates() {
    let expr = sql_func("MAX", [tuple(Vec::<Expr>::new())]);
    assert_eq!(
        render_err(&expr),
        Error::EmptyTuple {
            sql: String::from("MAX(")
        }
    );
}

#[test]
fn test_if_expression() {
    let expr = if_expr(gt_l(col("qty"), 0), literal("in stock"), literal("sold out"));
    assert_eq!(
        render(&expr),
        r#"IF("qty">0,'in stock','sold out')"#
    );
}

#[test]
fn test_like_with_columns() {
    let expr = like(col("name"), col("pattern"));
    assert_eq!(render(&expr), r#""name" LIKE "pattern""#);
}

#[test]
fn test_literal_escaping() {
    assert_eq!(
        render(&eq_l(col("name"), "'; DROP TABLE users; --")),
        r#""name"='''; DROP TABLE users; --'"#
    );
}

#[test]
fn test_shared_subtree_renders_identically() {
    let shared = or([eq_l(col("a"), 1), eq_l(col("b"), 2)]);
    let first = and([shared.clone(), eq_l(col("c"), 3)]);
    let second = not(shared.clone());

    assert_eq!(render(&first), r#"(("a"=1 OR "b"=2) AND "c"=3)"#);
    assert_eq!(render(&second), r#"NOT (("a"=1 OR "b"=2))"#);
    assert_eq!(render(&first), render(&first));
}

#[test]
fn test_concurrent_serialization() {
    let expr = and([eq_l(col("a"), 1), in_list_fixture()]);
    let expected = render(&expr);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| render(&expr))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

fn in_list_fixture() -> oxide_clause::BoolExpr {
    oxide_clause::builder::in_list(col("b"), vec![1, 2, 3])
}
