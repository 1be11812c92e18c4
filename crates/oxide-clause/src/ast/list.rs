//! Comma separated clause lists and tuples.

use crate::clause::{sealed, serialize_clauses, Clause, Expr, Expression};
use crate::dialect::Dialect;
use crate::error::{Error, Result};

/// A comma separated list of clauses, optionally enclosed in parentheses.
#[derive(Debug, Clone)]
pub struct ListClause<C = Expr> {
    clauses: Vec<C>,
    include_parentheses: bool,
}

impl<C: Clause> ListClause<C> {
    /// Creates a list.
    #[must_use]
    pub fn new(clauses: Vec<C>, include_parentheses: bool) -> Self {
        Self {
            clauses,
            include_parentheses,
        }
    }

    /// Returns the number of clauses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Returns whether the list has no clauses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl<C: Clause> Clause for ListClause<C> {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<()> {
        if self.include_parentheses {
            out.push('(');
        }

        serialize_clauses(&self.clauses, ",", dialect, out)?;

        if self.include_parentheses {
            out.push(')');
        }
        Ok(())
    }
}

/// A parenthesized value tuple such as `(a,b)`.
#[derive(Debug, Clone)]
pub struct Tuple {
    elements: ListClause,
}

impl Tuple {
    pub(crate) fn new(elements: Vec<Expr>) -> Self {
        Self {
            elements: ListClause::new(elements, true),
        }
    }
}

impl Clause for Tuple {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<()> {
        if self.elements.is_empty() {
            return Err(Error::EmptyTuple { sql: out.clone() });
        }
        self.elements.serialize_sql(dialect, out)
    }
}

impl sealed::Sealed for Tuple {}
impl Expression for Tuple {}
