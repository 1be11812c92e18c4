//! SQL literal values.
//!
//! Values are converted from Rust types up front and encoded later by a
//! [`Dialect`](crate::dialect::Dialect), so the same tree can be rendered for
//! different databases.

use std::fmt;

use crate::error::{Error, Result};
use crate::grammar;

/// A SQL value that can be rendered as a literal.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed integer value.
    Int(i64),
    /// Unsigned integer value.
    UInt(u64),
    /// Float value.
    Float(f64),
    /// Integer kept in its textual form.
    Numeric(Numeric),
    /// Decimal number kept in its textual form.
    Fractional(Fractional),
    /// Text value.
    Text(String),
    /// Binary blob value.
    Blob(Vec<u8>),
    /// Date and time without a time zone.
    #[cfg(feature = "chrono")]
    Timestamp(chrono::NaiveDateTime),
}

impl SqlValue {
    /// Returns whether this is SQL NULL.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Checks that the value has a SQL representation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLiteral`] for NaN and infinite floats.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Float(f) if !f.is_finite() => Err(Error::invalid_literal(format!(
                "float {f} has no SQL representation"
            ))),
            _ => Ok(()),
        }
    }
}

/// An integer kept in its textual form, for values wider than `i64`/`u64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Numeric(String);

impl Numeric {
    /// Creates a numeric value from an optionally signed run of digits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLiteral`] if `text` is not an integer.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if grammar::is_numeric(&text) {
            Ok(Self(text))
        } else {
            Err(Error::invalid_literal(format!("{text:?} is not numeric")))
        }
    }

    /// Returns the textual form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A decimal number kept in its textual form, so no precision is lost.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fractional(String);

impl Fractional {
    /// Creates a fractional value such as `12.50`, `-.5` or `6.02e23`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLiteral`] if `text` is not a decimal number.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if grammar::is_fractional(&text) {
            Ok(Self(text))
        } else {
            Err(Error::invalid_literal(format!("{text:?} is not fractional")))
        }
    }

    /// Returns the textual form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fractional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trait for types that can be converted to SQL values.
pub trait ToSqlValue {
    /// Converts the value to a `SqlValue`.
    fn to_sql_value(self) -> SqlValue;
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(self) -> SqlValue {
        self
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Bool(self)
    }
}

macro_rules! impl_to_sql_value_int {
    ($variant:ident, $wide:ty: $($ty:ty),+) => {
        $(
            impl ToSqlValue for $ty {
                fn to_sql_value(self) -> SqlValue {
                    SqlValue::$variant(<$wide>::from(self))
                }
            }
        )+
    };
}

impl_to_sql_value_int!(Int, i64: i8, i16, i32, i64);
impl_to_sql_value_int!(UInt, u64: u8, u16, u32, u64);

impl ToSqlValue for isize {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(self as i64)
    }
}

impl ToSqlValue for usize {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::UInt(self as u64)
    }
}

impl ToSqlValue for f64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(self)
    }
}

impl ToSqlValue for f32 {
    fn to_sql_value(self) -> SqlValue {
        // Widen through the shortest decimal form so 0.1_f32 stays 0.1.
        let value = self.to_string().parse().unwrap_or_else(|_| f64::from(self));
        SqlValue::Float(value)
    }
}

impl ToSqlValue for String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self)
    }
}

impl ToSqlValue for &String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self.clone())
    }
}

impl ToSqlValue for &str {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(String::from(self))
    }
}

impl ToSqlValue for Vec<u8> {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Blob(self)
    }
}

impl ToSqlValue for &[u8] {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Blob(self.to_vec())
    }
}

impl ToSqlValue for Numeric {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Numeric(self)
    }
}

impl ToSqlValue for Fractional {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Fractional(self)
    }
}

#[cfg(feature = "chrono")]
impl ToSqlValue for chrono::NaiveDateTime {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Timestamp(self)
    }
}

#[cfg(feature = "chrono")]
impl ToSqlValue for chrono::DateTime<chrono::Utc> {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Timestamp(self.naive_utc())
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> SqlValue {
        match self {
            Some(v) => v.to_sql_value(),
            None => SqlValue::Null,
        }
    }
}
