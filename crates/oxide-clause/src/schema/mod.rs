//! Column references and the statement interface used by subqueries.
//!
//! Full statement builders live outside this crate. They only need to
//! implement [`Statement`] to be embedded with
//! [`subquery`](crate::builder::subquery), and column types only need
//! [`NonAliasColumn`] to be used with
//! [`column_value`](crate::builder::column_value).

use std::fmt;

use crate::clause::{sealed, Clause, Expression};
use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::grammar;

/// A complete statement that can render itself.
pub trait Statement: fmt::Debug + Send + Sync {
    /// Renders the whole statement for `dialect`.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement cannot be rendered.
    fn to_sql(&self, dialect: &dyn Dialect) -> Result<String>;
}

/// A column that is not an alias, and so can appear in column lists.
pub trait NonAliasColumn: fmt::Debug + Send + Sync {
    /// Writes the column identifier, optionally qualified by its table.
    ///
    /// # Errors
    ///
    /// Returns an error if an identifier is invalid.
    fn serialize_sql_for_column_list(
        &self,
        include_table_name: bool,
        dialect: &dyn Dialect,
        out: &mut String,
    ) -> Result<()>;
}

/// Creates a column reference.
#[must_use]
pub fn col(name: &str) -> Column {
    Column {
        table: None,
        name: String::from(name),
    }
}

/// A column reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Optional table qualifier.
    pub table: Option<String>,
    /// Column name.
    pub name: String,
}

impl Column {
    /// Creates a qualified column reference.
    #[must_use]
    pub fn qualified(table: &str, name: &str) -> Self {
        Self {
            table: Some(String::from(table)),
            name: String::from(name),
        }
    }
}

fn write_identifier(name: &str, dialect: &dyn Dialect, out: &mut String) -> Result<()> {
    if !grammar::is_identifier(name) {
        return Err(Error::InvalidIdentifier {
            name: String::from(name),
            sql: out.clone(),
        });
    }
    out.push_str(&dialect.quote_identifier(name));
    Ok(())
}

impl NonAliasColumn for Column {
    fn serialize_sql_for_column_list(
        &self,
        include_table_name: bool,
        dialect: &dyn Dialect,
        out: &mut String,
    ) -> Result<()> {
        if let (true, Some(table)) = (include_table_name, &self.table) {
            write_identifier(table, dialect, out)?;
            out.push('.');
        }
        write_identifier(&self.name, dialect, out)
    }
}

impl Clause for Column {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<()> {
        self.serialize_sql_for_column_list(true, dialect, out)
    }
}

impl sealed::Sealed for Column {}
impl Expression for Column {}
