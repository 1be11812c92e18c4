//! `ORDER BY` terms.

use crate::clause::{Clause, Expr};
use crate::dialect::Dialect;
use crate::error::Result;

/// An expression decorated with a sort direction.
#[derive(Debug, Clone)]
pub struct OrderBy {
    expression: Expr,
    ascending: bool,
}

impl OrderBy {
    pub(crate) fn new(expression: Expr, ascending: bool) -> Self {
        Self {
            expression,
            ascending,
        }
    }

    /// Returns whether the sort is ascending.
    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        self.ascending
    }
}

impl Clause for OrderBy {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<()> {
        self.expression.serialize_sql(dialect, out)?;
        out.push_str(if self.ascending { " ASC" } else { " DESC" });
        Ok(())
    }
}
