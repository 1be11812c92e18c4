//! Literal values.

use crate::clause::{sealed, Clause, Expression};
use crate::dialect::Dialect;
use crate::error::Result;
use crate::value::{SqlValue, ToSqlValue};

/// A value rendered as an escaped literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    value: SqlValue,
}

impl Literal {
    /// Converts and validates `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLiteral`](crate::Error::InvalidLiteral) if the
    /// value has no SQL representation.
    pub fn try_new<T: ToSqlValue>(value: T) -> Result<Self> {
        let value = value.to_sql_value();
        value.validate()?;
        Ok(Self { value })
    }

    pub(crate) const fn from_validated(value: SqlValue) -> Self {
        Self { value }
    }

    /// Returns the wrapped value.
    #[must_use]
    pub const fn value(&self) -> &SqlValue {
        &self.value
    }
}

impl Clause for Literal {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<()> {
        dialect.encode_value(&self.value, out);
        Ok(())
    }
}

impl sealed::Sealed for Literal {}

impl Expression for Literal {
    fn literal_value(&self) -> Option<&SqlValue> {
        Some(&self.value)
    }
}
