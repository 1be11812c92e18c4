//! Operator expressions: conjunctions, arithmetic, binary operators and NOT.

use crate::clause::{
    sealed, serialize_clauses, BoolExpr, BoolExpression, Clause, Expr, Expression,
};
use crate::dialect::Dialect;
use crate::error::{Error, Result};

/// Writes the joined list, grouped in parentheses only when there is more
/// than one operand.
fn serialize_grouped<C: Clause>(
    clauses: &[C],
    separator: &str,
    dialect: &dyn Dialect,
    out: &mut String,
) -> Result<()> {
    let grouped = clauses.len() > 1;
    if grouped {
        out.push('(');
    }

    serialize_clauses(clauses, separator, dialect, out)?;

    if grouped {
        out.push(')');
    }
    Ok(())
}

/// An n-ary `AND` / `OR`.
#[derive(Debug, Clone)]
pub struct Conjunction {
    expressions: Vec<BoolExpr>,
    conjunction: &'static str,
}

impl Conjunction {
    pub(crate) fn new(expressions: Vec<BoolExpr>, conjunction: &'static str) -> Self {
        Self {
            expressions,
            conjunction,
        }
    }
}

impl Clause for Conjunction {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<()> {
        if self.expressions.is_empty() {
            return Err(Error::EmptyConjunction { sql: out.clone() });
        }
        serialize_grouped(&self.expressions, self.conjunction, dialect, out)
    }
}

impl sealed::Sealed for Conjunction {}
impl Expression for Conjunction {}
impl BoolExpression for Conjunction {}

/// An n-ary `+`, `-`, `*` or `/`.
#[derive(Debug, Clone)]
pub struct Arithmetic {
    expressions: Vec<Expr>,
    operator: &'static str,
}

impl Arithmetic {
    pub(crate) fn new(expressions: Vec<Expr>, operator: &'static str) -> Self {
        Self {
            expressions,
            operator,
        }
    }
}

impl Clause for Arithmetic {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<()> {
        if self.expressions.is_empty() {
            return Err(Error::EmptyArithmetic { sql: out.clone() });
        }
        serialize_grouped(&self.expressions, self.operator, dialect, out)
    }
}

impl sealed::Sealed for Arithmetic {}
impl Expression for Arithmetic {}

/// `lhs <operator> rhs`, with the operator written verbatim.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    lhs: Expr,
    rhs: Expr,
    operator: &'static str,
}

impl BinaryExpr {
    pub(crate) fn new(lhs: Expr, rhs: Expr, operator: &'static str) -> Self {
        Self { lhs, rhs, operator }
    }
}

impl Clause for BinaryExpr {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<()> {
        self.lhs.serialize_sql(dialect, out)?;
        out.push_str(self.operator);
        self.rhs.serialize_sql(dialect, out)
    }
}

impl sealed::Sealed for BinaryExpr {}
impl Expression for BinaryExpr {}

/// A binary expression that evaluates to a boolean, such as `a<b` or `a LIKE b`.
#[derive(Debug, Clone)]
pub struct Comparison {
    inner: BinaryExpr,
}

impl Comparison {
    pub(crate) fn new(lhs: Expr, rhs: Expr, operator: &'static str) -> Self {
        Self {
            inner: BinaryExpr::new(lhs, rhs, operator),
        }
    }
}

impl Clause for Comparison {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<()> {
        self.inner.serialize_sql(dialect, out)
    }
}

impl sealed::Sealed for Comparison {}
impl Expression for Comparison {}
impl BoolExpression for Comparison {}

/// `NOT (nested)`.
#[derive(Debug, Clone)]
pub struct Negation {
    nested: BoolExpr,
}

impl Negation {
    pub(crate) fn new(nested: BoolExpr) -> Self {
        Self { nested }
    }
}

impl Clause for Negation {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<()> {
        out.push_str("NOT (");
        self.nested.serialize_sql(dialect, out)?;
        out.push(')');
        Ok(())
    }
}

impl sealed::Sealed for Negation {}
impl Expression for Negation {}
impl BoolExpression for Negation {}
