//! Nodes that delegate to statements and columns.

use std::sync::Arc;

use crate::clause::{sealed, Clause, Expression};
use crate::dialect::Dialect;
use crate::error::Result;
use crate::schema::{NonAliasColumn, Statement};

/// A parenthesized subquery.
#[derive(Debug, Clone)]
pub struct Subquery {
    stmt: Arc<dyn Statement>,
}

impl Subquery {
    pub(crate) fn new(stmt: Arc<dyn Statement>) -> Self {
        Self { stmt }
    }
}

impl Clause for Subquery {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<()> {
        let subquery = self.stmt.to_sql(dialect)?;
        out.push('(');
        out.push_str(&subquery);
        out.push(')');
        Ok(())
    }
}

impl sealed::Sealed for Subquery {}
impl Expression for Subquery {}

/// `VALUES(column)`, the proposed value of a column in an upsert.
#[derive(Debug, Clone)]
pub struct ColumnValue {
    column: Arc<dyn NonAliasColumn>,
}

impl ColumnValue {
    pub(crate) fn new(column: Arc<dyn NonAliasColumn>) -> Self {
        Self { column }
    }
}

impl Clause for ColumnValue {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<()> {
        out.push_str("VALUES(");
        self.column.serialize_sql_for_column_list(true, dialect, out)?;
        out.push(')');
        Ok(())
    }
}

impl sealed::Sealed for ColumnValue {}
impl Expression for ColumnValue {}
