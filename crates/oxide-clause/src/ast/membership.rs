//! `IN` predicates over literal lists and subqueries.
//!
//! Literal lists accept a closed set of element types (see
//! [`InListElement`]). Conversion happens when the predicate is built, but a
//! failure is not reported there: the predicate keeps the error and returns
//! it from [`Clause::serialize_sql`]. This keeps combinator chains fluent.

use std::any::Any;

use tracing::debug;

use crate::ast::{ListClause, Literal, Subquery};
use crate::clause::{sealed, BoolExpression, Clause, Expr, Expression, IntoExpr};
use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::value::{Fractional, Numeric, SqlValue, ToSqlValue};

mod element {
    pub trait Sealed {}
}

/// A type that may appear in an `IN` value list.
pub trait InListElement: ToSqlValue + element::Sealed {}

macro_rules! in_list_elements {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl element::Sealed for $ty {}
            impl InListElement for $ty {}
        )+
    };
}

in_list_elements!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64,
    String, &str, Vec<u8>, &[u8], Numeric, Fractional, SqlValue,
);

#[cfg(feature = "chrono")]
in_list_elements!(chrono::NaiveDateTime, chrono::DateTime<chrono::Utc>);

/// A collection that can be used as the right-hand side of `IN`.
///
/// `None` stands for an absent list and, like an empty one, renders the
/// predicate as `FALSE`.
pub trait InValues {
    /// Converts the collection into validated values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLiteral`] if an element has no SQL
    /// representation.
    fn into_in_values(self) -> Result<Option<Vec<SqlValue>>>;
}

fn convert<T: InListElement>(values: impl IntoIterator<Item = T>) -> Result<Option<Vec<SqlValue>>> {
    values
        .into_iter()
        .map(|v| {
            let value = v.to_sql_value();
            value.validate().map(|()| value)
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

impl<T: InListElement> InValues for Vec<T> {
    fn into_in_values(self) -> Result<Option<Vec<SqlValue>>> {
        convert(self)
    }
}

impl<T: InListElement, const N: usize> InValues for [T; N] {
    fn into_in_values(self) -> Result<Option<Vec<SqlValue>>> {
        convert(self)
    }
}

impl<T: InListElement + Clone> InValues for &[T] {
    fn into_in_values(self) -> Result<Option<Vec<SqlValue>>> {
        convert(self.iter().cloned())
    }
}

impl<T: InListElement + Clone> InValues for &Vec<T> {
    fn into_in_values(self) -> Result<Option<Vec<SqlValue>>> {
        convert(self.iter().cloned())
    }
}

impl<V: InValues> InValues for Option<V> {
    fn into_in_values(self) -> Result<Option<Vec<SqlValue>>> {
        match self {
            Some(values) => values.into_in_values(),
            None => Ok(None),
        }
    }
}

macro_rules! downcast_values {
    ($values:expr; $($ty:ty),+ $(,)?) => {
        $(
            if let Some(list) = $values.downcast_ref::<Vec<$ty>>() {
                return list.into_in_values();
            }
            if let Some(list) = $values.downcast_ref::<Option<Vec<$ty>>>() {
                return list.as_ref().map_or(Ok(None), |list| list.into_in_values());
            }
        )+
    };
}

/// Converts a dynamically typed value list.
///
/// Accepts `Vec<T>` and `Option<Vec<T>>` for every [`InListElement`] type.
pub(crate) fn dynamic_in_values(
    values: &dyn Any,
    type_name: &'static str,
) -> Result<Option<Vec<SqlValue>>> {
    downcast_values!(values;
        i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64,
        String, &'static str, Vec<u8>, &'static [u8], Numeric, Fractional, SqlValue,
    );
    #[cfg(feature = "chrono")]
    downcast_values!(values; chrono::NaiveDateTime, chrono::DateTime<chrono::Utc>);

    Err(Error::UnsupportedValueList { type_name })
}

/// `lhs IN (v0,v1,...)` over literal values.
#[derive(Debug, Clone)]
pub struct InList {
    lhs: Expr,
    rhs: Option<ListClause>,
    err: Option<Error>,
}

impl InList {
    pub(crate) fn new(lhs: Expr, values: Result<Option<Vec<SqlValue>>>) -> Self {
        match values {
            Ok(values) => {
                let rhs = values.filter(|v| !v.is_empty()).map(|v| {
                    let clauses = v
                        .into_iter()
                        .map(|value| Literal::from_validated(value).into_expr())
                        .collect();
                    ListClause::new(clauses, true)
                });
                Self { lhs, rhs, err: None }
            }
            Err(err) => {
                debug!(error = %err, "deferring IN expression error until serialization");
                Self {
                    lhs,
                    rhs: None,
                    err: Some(err),
                }
            }
        }
    }
}

impl Clause for InList {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<()> {
        if let Some(err) = &self.err {
            return Err(Error::InvalidInExpression(Box::new(err.clone())));
        }

        // The lhs is rendered even when the list is empty so that its errors surface.
        let mut with_lhs = out.clone();
        self.lhs.serialize_sql(dialect, &mut with_lhs)?;

        let Some(rhs) = &self.rhs else {
            out.push_str("FALSE");
            return Ok(());
        };

        *out = with_lhs;
        out.push_str(" IN ");
        rhs.serialize_sql(dialect, out)
    }
}

impl sealed::Sealed for InList {}
impl Expression for InList {}
impl BoolExpression for InList {}

/// `lhs IN (subquery)`.
#[derive(Debug, Clone)]
pub struct InSubquery {
    lhs: Expr,
    rhs: Subquery,
}

impl InSubquery {
    pub(crate) fn new(lhs: Expr, rhs: Subquery) -> Self {
        Self { lhs, rhs }
    }
}

impl Clause for InSubquery {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<()> {
        self.lhs.serialize_sql(dialect, out)?;
        out.push_str(" IN ");
        self.rhs.serialize_sql(dialect, out)
    }
}

impl sealed::Sealed for InSubquery {}
impl Expression for InSubquery {}
impl BoolExpression for InSubquery {}
