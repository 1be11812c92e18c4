#![allow(dead_code)]

use oxide_clause::{to_sql, Clause, Dialect, Error, GenericDialect, Result, Statement};

pub fn render(clause: &impl Clause) -> String {
    to_sql(clause, &GenericDialect)
        .unwrap_or_else(|e| panic!("Failed to render: {clause:?}\nError: {e}"))
}

pub fn render_err(clause: &impl Clause) -> Error {
    to_sql(clause, &GenericDialect)
        .expect_err(&format!("Expected serialization error for: {clause:?}"))
}

/// A statement with fixed text, standing in for a real statement builder.
#[derive(Debug)]
pub struct RawStatement(pub &'static str);

impl Statement for RawStatement {
    fn to_sql(&self, _dialect: &dyn Dialect) -> Result<String> {
        Ok(String::from(self.0))
    }
}

/// A statement whose renderer always fails.
#[derive(Debug)]
pub struct FailingStatement;

impl Statement for FailingStatement {
    fn to_sql(&self, dialect: &dyn Dialect) -> Result<String> {
        Err(Error::Statement(format!(
            "no FROM clause for {} dialect",
            dialect.name()
        )))
    }
}
