//! The serialization contract shared by every node.
//!
//! Every node implements [`Clause`]. Nodes that denote a scalar value also
//! implement [`Expression`], and boolean-valued nodes implement
//! [`BoolExpression`]. Both refinements are sealed; only the node types of
//! this crate can claim them.
//!
//! Trees are built from shared handles ([`Expr`] and [`BoolExpr`]), so a
//! subtree can be reused in several places and a finished tree can be
//! serialized any number of times, from any number of threads.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::value::SqlValue;

/// A node that can be rendered as SQL text.
pub trait Clause: fmt::Debug + Send + Sync {
    /// Writes the SQL for this node into `out`.
    ///
    /// On error, `out` may hold a partial rendering and must be discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if this node or any descendant cannot be rendered.
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<()>;
}

impl<C: Clause + ?Sized> Clause for Box<C> {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<()> {
        (**self).serialize_sql(dialect, out)
    }
}

impl<C: Clause + ?Sized> Clause for Arc<C> {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<()> {
        (**self).serialize_sql(dialect, out)
    }
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A clause that denotes a scalar SQL value.
pub trait Expression: Clause + sealed::Sealed {
    /// Returns the value when this expression is a literal.
    fn literal_value(&self) -> Option<&SqlValue> {
        None
    }
}

/// An expression that denotes a boolean SQL value.
pub trait BoolExpression: Expression {}

/// A shared handle to any expression.
#[derive(Debug, Clone)]
pub struct Expr(Arc<dyn Expression>);

impl Expr {
    /// Wraps an expression node.
    #[must_use]
    pub fn new<E: Expression + 'static>(expr: E) -> Self {
        Self(Arc::new(expr))
    }

    /// Returns the value when the wrapped expression is a literal.
    #[must_use]
    pub fn literal_value(&self) -> Option<&SqlValue> {
        self.0.literal_value()
    }
}

impl Clause for Expr {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<()> {
        self.0.serialize_sql(dialect, out)
    }
}

/// A shared handle to a boolean expression.
///
/// A `BoolExpr` is also an [`Expression`], so it can be used wherever a
/// scalar value is expected.
#[derive(Debug, Clone)]
pub struct BoolExpr(Arc<dyn BoolExpression>);

impl BoolExpr {
    /// Wraps a boolean expression node.
    #[must_use]
    pub fn new<E: BoolExpression + 'static>(expr: E) -> Self {
        Self(Arc::new(expr))
    }

    /// Returns `self AND other`.
    #[must_use]
    pub fn and(self, other: impl IntoBoolExpr) -> Self {
        crate::builder::and([self, other.into_bool_expr()])
    }

    /// Returns `self OR other`.
    #[must_use]
    pub fn or(self, other: impl IntoBoolExpr) -> Self {
        crate::builder::or([self, other.into_bool_expr()])
    }

    /// Returns `NOT (self)`.
    #[must_use]
    pub fn negate(self) -> Self {
        crate::builder::not(self)
    }
}

impl Clause for BoolExpr {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<()> {
        self.0.serialize_sql(dialect, out)
    }
}

impl sealed::Sealed for BoolExpr {}
impl Expression for BoolExpr {}

/// Conversion into an [`Expr`] handle.
pub trait IntoExpr {
    /// Converts `self` into a shared expression handle.
    fn into_expr(self) -> Expr;
}

impl<E: Expression + 'static> IntoExpr for E {
    fn into_expr(self) -> Expr {
        Expr::new(self)
    }
}

impl IntoExpr for Expr {
    fn into_expr(self) -> Expr {
        self
    }
}

/// Conversion into a [`BoolExpr`] handle.
pub trait IntoBoolExpr {
    /// Converts `self` into a shared boolean expression handle.
    fn into_bool_expr(self) -> BoolExpr;
}

impl<E: BoolExpression + 'static> IntoBoolExpr for E {
    fn into_bool_expr(self) -> BoolExpr {
        BoolExpr::new(self)
    }
}

impl IntoBoolExpr for BoolExpr {
    fn into_bool_expr(self) -> BoolExpr {
        self
    }
}

/// Writes `clauses` in order, with `separator` between consecutive elements.
///
/// Partial output is left in `out` on failure.
///
/// # Errors
///
/// Returns [`Error::EmptyClauses`] if `clauses` is empty, or the first error
/// returned by an element.
pub fn serialize_clauses<C: Clause>(
    clauses: &[C],
    separator: &str,
    dialect: &dyn Dialect,
    out: &mut String,
) -> Result<()> {
    let Some((first, rest)) = clauses.split_first() else {
        return Err(Error::EmptyClauses { sql: out.clone() });
    };

    first.serialize_sql(dialect, out)?;
    for clause in rest {
        out.push_str(separator);
        clause.serialize_sql(dialect, out)?;
    }

    Ok(())
}

/// Renders a complete clause tree to SQL text.
///
/// # Errors
///
/// Returns the first error raised while walking the tree.
pub fn to_sql<C: Clause + ?Sized>(clause: &C, dialect: &dyn Dialect) -> Result<String> {
    let mut out = String::new();
    match clause.serialize_sql(dialect, &mut out) {
        Ok(()) => {
            trace!(dialect = dialect.name(), sql = %out, "serialized clause");
            Ok(out)
        }
        Err(err) => {
            debug!(dialect = dialect.name(), error = %err, "clause serialization failed");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::literal;
    use crate::dialect::GenericDialect;

    #[test]
    fn test_serialize_clauses_joins_in_order() {
        let clauses = vec![literal(1), literal(2), literal(3)];
        let mut out = String::new();
        serialize_clauses(&clauses, " | ", &GenericDialect, &mut out).unwrap();
        assert_eq!(out, "1 | 2 | 3");
    }

    #[test]
    fn test_serialize_clauses_empty_reports_generated_sql() {
        let clauses: Vec<Expr> = vec![];
        let mut out = String::from("SELECT ");
        let err = serialize_clauses(&clauses, ",", &GenericDialect, &mut out).unwrap_err();
        assert_eq!(
            err,
            Error::EmptyClauses {
                sql: String::from("SELECT ")
            }
        );
    }

    #[test]
    fn test_boxed_clauses() {
        let clauses: Vec<Box<dyn Clause>> = vec![Box::new(literal("a")), Box::new(literal(2))];
        let mut out = String::new();
        serialize_clauses(&clauses, ",", &GenericDialect, &mut out).unwrap();
        assert_eq!(out, "'a',2");
    }

    #[test]
    fn test_expr_exposes_literal_value() {
        let expr = literal(None::<i64>).into_expr();
        assert_eq!(expr.literal_value(), Some(&SqlValue::Null));
    }

    #[test]
    fn test_handles_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Expr>();
        assert_send_sync::<BoolExpr>();
    }
}
