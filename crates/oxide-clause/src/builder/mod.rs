//! Combinators for building clause trees.
//!
//! Each function is a pure constructor. Problems such as an empty conjunction
//! or an invalid function name are reported when the tree is serialized. The
//! one exception is [`literal`], which panics on values that have no SQL
//! representation; use [`try_literal`] to handle that case yourself.
//!
//! # Example
//!
//! ```rust
//! use oxide_clause::builder::{and, eq_l, gt_l, in_list};
//! use oxide_clause::dialect::GenericDialect;
//! use oxide_clause::{col, to_sql};
//!
//! let filter = and([
//!     eq_l(col("active"), true),
//!     gt_l(col("age"), 18),
//!     in_list(col("status"), vec!["new", "open"]),
//! ]);
//!
//! assert_eq!(
//!     to_sql(&filter, &GenericDialect).unwrap(),
//!     r#"("active"=TRUE AND "age">18 AND "status" IN ('new','open'))"#
//! );
//! ```

use std::any::{type_name, Any};
use std::sync::Arc;

use crate::ast::{
    dynamic_in_values, Arithmetic, BinaryExpr, ColumnValue, Comparison, Conjunction, FuncCall,
    IfExpr, InList, InSubquery, InValues, Literal, Negation, OrderBy, Subquery, Tuple,
};
use crate::clause::{BoolExpr, Expr, IntoBoolExpr, IntoExpr};
use crate::error::Result;
use crate::schema::{NonAliasColumn, Statement};
use crate::value::ToSqlValue;

/// Returns an escaped literal.
///
/// # Panics
///
/// Panics if the value has no SQL representation (a NaN or infinite float).
#[must_use]
pub fn literal<T: ToSqlValue>(value: T) -> Literal {
    match Literal::try_new(value) {
        Ok(literal) => literal,
        Err(err) => panic!("{err}"),
    }
}

/// Returns an escaped literal, or an error for values with no SQL representation.
///
/// # Errors
///
/// Returns [`Error::InvalidLiteral`](crate::Error::InvalidLiteral) for NaN
/// and infinite floats.
pub fn try_literal<T: ToSqlValue>(value: T) -> Result<Literal> {
    Literal::try_new(value)
}

fn bool_exprs<I>(expressions: I) -> Vec<BoolExpr>
where
    I: IntoIterator,
    I::Item: IntoBoolExpr,
{
    expressions
        .into_iter()
        .map(IntoBoolExpr::into_bool_expr)
        .collect()
}

fn exprs<I>(expressions: I) -> Vec<Expr>
where
    I: IntoIterator,
    I::Item: IntoExpr,
{
    expressions.into_iter().map(IntoExpr::into_expr).collect()
}

/// Returns a representation of `c[0] AND ... AND c[n-1]`.
#[must_use]
pub fn and<I>(expressions: I) -> BoolExpr
where
    I: IntoIterator,
    I::Item: IntoBoolExpr,
{
    BoolExpr::new(Conjunction::new(bool_exprs(expressions), " AND "))
}

/// Returns a representation of `c[0] OR ... OR c[n-1]`.
#[must_use]
pub fn or<I>(expressions: I) -> BoolExpr
where
    I: IntoIterator,
    I::Item: IntoBoolExpr,
{
    BoolExpr::new(Conjunction::new(bool_exprs(expressions), " OR "))
}

/// Returns a representation of `NOT (expr)`.
#[must_use]
pub fn not(expr: impl IntoBoolExpr) -> BoolExpr {
    BoolExpr::new(Negation::new(expr.into_bool_expr()))
}

fn comparison(lhs: impl IntoExpr, rhs: Expr, operator: &'static str) -> BoolExpr {
    BoolExpr::new(Comparison::new(lhs.into_expr(), rhs, operator))
}

fn is_null_literal(expr: &Expr) -> bool {
    expr.literal_value().is_some_and(|v| v.is_null())
}

/// Returns a representation of `lhs LIKE rhs`.
#[must_use]
pub fn like(lhs: impl IntoExpr, rhs: impl IntoExpr) -> BoolExpr {
    comparison(lhs, rhs.into_expr(), " LIKE ")
}

/// Returns a representation of `lhs LIKE 'pattern'`.
///
/// The pattern is used as given; see [`escape_for_like`] for matching
/// literal `_` and `%`.
#[must_use]
pub fn like_l(lhs: impl IntoExpr, pattern: &str) -> BoolExpr {
    like(lhs, literal(pattern))
}

/// Escapes the `LIKE` wildcards `_` and `%`.
#[must_use]
pub fn escape_for_like(s: &str) -> String {
    s.replace('_', "\\_").replace('%', "\\%")
}

/// Returns a representation of `c[0] + ... + c[n-1]`.
#[must_use]
pub fn add<I>(expressions: I) -> Expr
where
    I: IntoIterator,
    I::Item: IntoExpr,
{
    Expr::new(Arithmetic::new(exprs(expressions), " + "))
}

/// Returns a representation of `c[0] - ... - c[n-1]`.
#[must_use]
pub fn sub<I>(expressions: I) -> Expr
where
    I: IntoIterator,
    I::Item: IntoExpr,
{
    Expr::new(Arithmetic::new(exprs(expressions), " - "))
}

/// Returns a representation of `c[0] * ... * c[n-1]`.
#[must_use]
pub fn mul<I>(expressions: I) -> Expr
where
    I: IntoIterator,
    I::Item: IntoExpr,
{
    Expr::new(Arithmetic::new(exprs(expressions), " * "))
}

/// Returns a representation of `c[0] / ... / c[n-1]`.
#[must_use]
pub fn div<I>(expressions: I) -> Expr
where
    I: IntoIterator,
    I::Item: IntoExpr,
{
    Expr::new(Arithmetic::new(exprs(expressions), " / "))
}

/// Returns a representation of `lhs=rhs`, or `lhs IS NULL` when `rhs` is a
/// NULL literal.
#[must_use]
pub fn eq(lhs: impl IntoExpr, rhs: impl IntoExpr) -> BoolExpr {
    let rhs = rhs.into_expr();
    let operator = if is_null_literal(&rhs) { " IS " } else { "=" };
    comparison(lhs, rhs, operator)
}

/// Returns a representation of `lhs=value`.
#[must_use]
pub fn eq_l(lhs: impl IntoExpr, value: impl ToSqlValue) -> BoolExpr {
    eq(lhs, literal(value))
}

/// Returns a representation of `lhs!=rhs`, or `lhs IS NOT NULL` when `rhs`
/// is a NULL literal.
#[must_use]
pub fn neq(lhs: impl IntoExpr, rhs: impl IntoExpr) -> BoolExpr {
    let rhs = rhs.into_expr();
    let operator = if is_null_literal(&rhs) {
        " IS NOT "
    } else {
        "!="
    };
    comparison(lhs, rhs, operator)
}

/// Returns a representation of `lhs!=value`.
#[must_use]
pub fn neq_l(lhs: impl IntoExpr, value: impl ToSqlValue) -> BoolExpr {
    neq(lhs, literal(value))
}

/// Returns a representation of `lhs<rhs`.
#[must_use]
pub fn lt(lhs: impl IntoExpr, rhs: impl IntoExpr) -> BoolExpr {
    comparison(lhs, rhs.into_expr(), "<")
}

/// Returns a representation of `lhs<value`.
#[must_use]
pub fn lt_l(lhs: impl IntoExpr, value: impl ToSqlValue) -> BoolExpr {
    lt(lhs, literal(value))
}

/// Returns a representation of `lhs<=rhs`.
#[must_use]
pub fn lte(lhs: impl IntoExpr, rhs: impl IntoExpr) -> BoolExpr {
    comparison(lhs, rhs.into_expr(), "<=")
}

/// Returns a representation of `lhs<=value`.
#[must_use]
pub fn lte_l(lhs: impl IntoExpr, value: impl ToSqlValue) -> BoolExpr {
    lte(lhs, literal(value))
}

/// Returns a representation of `lhs>rhs`.
#[must_use]
pub fn gt(lhs: impl IntoExpr, rhs: impl IntoExpr) -> BoolExpr {
    comparison(lhs, rhs.into_expr(), ">")
}

/// Returns a representation of `lhs>value`.
#[must_use]
pub fn gt_l(lhs: impl IntoExpr, value: impl ToSqlValue) -> BoolExpr {
    gt(lhs, literal(value))
}

/// Returns a representation of `lhs>=rhs`.
#[must_use]
pub fn gte(lhs: impl IntoExpr, rhs: impl IntoExpr) -> BoolExpr {
    comparison(lhs, rhs.into_expr(), ">=")
}

/// Returns a representation of `lhs>=value`.
#[must_use]
pub fn gte_l(lhs: impl IntoExpr, value: impl ToSqlValue) -> BoolExpr {
    gte(lhs, literal(value))
}

fn binary(lhs: impl IntoExpr, rhs: impl IntoExpr, operator: &'static str) -> Expr {
    Expr::new(BinaryExpr::new(lhs.into_expr(), rhs.into_expr(), operator))
}

/// Returns a representation of `lhs | rhs`.
#[must_use]
pub fn bit_or(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Expr {
    binary(lhs, rhs, " | ")
}

/// Returns a representation of `lhs & rhs`.
#[must_use]
pub fn bit_and(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Expr {
    binary(lhs, rhs, " & ")
}

/// Returns a representation of `lhs ^ rhs`.
#[must_use]
pub fn bit_xor(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Expr {
    binary(lhs, rhs, " ^ ")
}

/// Returns a representation of `lhs + rhs`.
#[must_use]
pub fn plus(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Expr {
    binary(lhs, rhs, " + ")
}

/// Returns a representation of `lhs - rhs`.
#[must_use]
pub fn minus(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Expr {
    binary(lhs, rhs, " - ")
}

/// Returns a representation of `lhs IN (v[0],...,v[n-1])`.
///
/// An empty or absent list renders as `FALSE`. An element with no SQL
/// representation is reported when the predicate is serialized.
#[must_use]
pub fn in_list(lhs: impl IntoExpr, values: impl InValues) -> BoolExpr {
    BoolExpr::new(InList::new(lhs.into_expr(), values.into_in_values()))
}

/// Like [`in_list`], for a value list whose type is only known at runtime.
///
/// `values` must be a `Vec<T>` or `Option<Vec<T>>` of an
/// [`InListElement`](crate::ast::InListElement) type. Any other type yields
/// a predicate that fails with
/// [`Error::UnsupportedValueList`](crate::Error::UnsupportedValueList) when
/// serialized.
#[must_use]
pub fn in_any<T: Any>(lhs: impl IntoExpr, values: &T) -> BoolExpr {
    let values = dynamic_in_values(values, type_name::<T>());
    BoolExpr::new(InList::new(lhs.into_expr(), values))
}

/// Returns a representation of `lhs IN (subquery)`.
#[must_use]
pub fn in_subquery(lhs: impl IntoExpr, rhs: Subquery) -> BoolExpr {
    BoolExpr::new(InSubquery::new(lhs.into_expr(), rhs))
}

/// Returns a representation of `IF(condition,when_true,when_false)`.
#[must_use]
pub fn if_expr(
    condition: impl IntoBoolExpr,
    when_true: impl IntoExpr,
    when_false: impl IntoExpr,
) -> Expr {
    Expr::new(IfExpr::new(
        condition.into_bool_expr(),
        when_true.into_expr(),
        when_false.into_expr(),
    ))
}

/// Returns a representation of `(e[0],...,e[n-1])`.
///
/// A tuple without elements fails when serialized.
#[must_use]
pub fn tuple<I>(expressions: I) -> Expr
where
    I: IntoIterator,
    I::Item: IntoExpr,
{
    Expr::new(Tuple::new(exprs(expressions)))
}

/// Returns a representation of the call `name(args[0],...,args[n-1])`.
#[must_use]
pub fn sql_func<I>(name: impl Into<String>, args: I) -> Expr
where
    I: IntoIterator,
    I::Item: IntoExpr,
{
    Expr::new(FuncCall::new(name.into(), exprs(args)))
}

/// Returns a representation of `VALUES(column)`.
#[must_use]
pub fn column_value<C: NonAliasColumn + 'static>(column: C) -> Expr {
    Expr::new(ColumnValue::new(Arc::new(column)))
}

/// Wraps a statement as a parenthesized subquery.
#[must_use]
pub fn subquery<S: Statement + 'static>(stmt: S) -> Subquery {
    Subquery::new(Arc::new(stmt))
}

/// Returns an ascending `ORDER BY` term.
#[must_use]
pub fn asc(expr: impl IntoExpr) -> OrderBy {
    OrderBy::new(expr.into_expr(), true)
}

/// Returns a descending `ORDER BY` term.
#[must_use]
pub fn desc(expr: impl IntoExpr) -> OrderBy {
    OrderBy::new(expr.into_expr(), false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::to_sql;
    use crate::dialect::GenericDialect;
    use crate::error::Error;
    use crate::schema::col;
    use crate::value::SqlValue;

    fn render(clause: &impl crate::clause::Clause) -> String {
        to_sql(clause, &GenericDialect).unwrap()
    }

    #[test]
    fn test_conjunction_parenthesization() {
        assert_eq!(render(&and([eq_l(col("a"), 1)])), "\"a\"=1");
        assert_eq!(
            render(&or([eq_l(col("a"), 1), eq_l(col("b"), 2)])),
            "(\"a\"=1 OR \"b\"=2)"
        );
    }

    #[test]
    fn test_null_comparisons() {
        assert_eq!(render(&eq_l(col("a"), None::<i32>)), "\"a\" IS NULL");
        assert_eq!(
            render(&neq(col("a"), literal(SqlValue::Null))),
            "\"a\" IS NOT NULL"
        );
        assert_eq!(render(&eq_l(col("a"), Some(3))), "\"a\"=3");
        assert_eq!(render(&neq_l(col("a"), 3)), "\"a\"!=3");
    }

    #[test]
    fn test_null_on_the_left_is_not_special() {
        assert_eq!(render(&eq(literal(SqlValue::Null), col("a"))), "NULL=\"a\"");
    }

    #[test]
    fn test_ordering_comparisons() {
        assert_eq!(render(&lt_l(col("a"), 1)), "\"a\"<1");
        assert_eq!(render(&lte_l(col("a"), 1)), "\"a\"<=1");
        assert_eq!(render(&gt_l(col("a"), 1)), "\"a\">1");
        assert_eq!(render(&gte(col("a"), col("b"))), "\"a\">=\"b\"");
    }

    #[test]
    fn test_escape_for_like() {
        assert_eq!(escape_for_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_for_like("plain"), "plain");
    }

    #[test]
    fn test_like_l() {
        assert_eq!(
            render(&like_l(col("name"), &format!("{}%", escape_for_like("a_b")))),
            "\"name\" LIKE 'a\\_b%'"
        );
    }

    #[test]
    fn test_try_literal() {
        assert!(try_literal(1.5).is_ok());
        assert!(matches!(
            try_literal(f64::NAN),
            Err(Error::InvalidLiteral { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "invalid literal value")]
    fn test_literal_panics_on_invalid_value() {
        let _ = literal(f64::INFINITY);
    }

    #[test]
    fn test_bitwise_and_binary_arithmetic() {
        assert_eq!(render(&bit_or(col("f"), literal(4))), "\"f\" | 4");
        assert_eq!(render(&bit_and(col("f"), literal(4))), "\"f\" & 4");
        assert_eq!(render(&bit_xor(col("f"), literal(4))), "\"f\" ^ 4");
        assert_eq!(render(&plus(col("a"), literal(1))), "\"a\" + 1");
        assert_eq!(render(&minus(col("a"), literal(1))), "\"a\" - 1");
    }

    #[test]
    fn test_order_by() {
        assert_eq!(render(&asc(col("id"))), "\"id\" ASC");
        assert_eq!(render(&desc(col("id"))), "\"id\" DESC");
        assert!(asc(col("id")).is_ascending());
    }

    #[test]
    fn test_fluent_helpers() {
        let expr = eq_l(col("a"), 1).and(eq_l(col("b"), 2)).negate();
        assert_eq!(render(&expr), "NOT ((\"a\"=1 AND \"b\"=2))");

        let expr = eq_l(col("a"), 1).or(not(eq_l(col("b"), 2)));
        assert_eq!(render(&expr), "(\"a\"=1 OR NOT (\"b\"=2))");
    }
}
