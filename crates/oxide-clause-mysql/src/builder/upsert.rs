//! MySQL `ON DUPLICATE KEY UPDATE` clause.

use oxide_clause::ast::ListClause;
use oxide_clause::builder::{column_value, eq};
use oxide_clause::{BoolExpr, Clause, Column, Dialect, Result};

/// An `ON DUPLICATE KEY UPDATE` tail that copies the inserted value of each
/// column, e.g. ``ON DUPLICATE KEY UPDATE `name`=VALUES(`name`)``.
#[derive(Debug, Clone)]
pub struct OnDuplicateKeyUpdate {
    assignments: ListClause<BoolExpr>,
}

impl OnDuplicateKeyUpdate {
    /// Returns the number of updated columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns whether no column is updated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl Clause for OnDuplicateKeyUpdate {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<()> {
        out.push_str("ON DUPLICATE KEY UPDATE ");
        self.assignments.serialize_sql(dialect, out)
    }
}

/// Builds an `ON DUPLICATE KEY UPDATE` clause assigning each column its
/// `VALUES(column)`.
///
/// Rendering fails with [`Error::EmptyClauses`](oxide_clause::Error::EmptyClauses)
/// when `columns` is empty.
#[must_use]
pub fn on_duplicate_key_update(columns: impl IntoIterator<Item = Column>) -> OnDuplicateKeyUpdate {
    let assignments = columns
        .into_iter()
        .map(|column| eq(column.clone(), column_value(column)))
        .collect();
    OnDuplicateKeyUpdate {
        assignments: ListClause::new(assignments, false),
    }
}
