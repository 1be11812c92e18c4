//! # oxide-clause
//!
//! Composable SQL expressions rendered to dialect-correct text.
//!
//! This crate provides:
//! - A clause tree of scalar and boolean expressions
//! - Combinators that assemble the tree with the right types
//! - Serialization that quotes identifiers and encodes literals per [`Dialect`]
//!
//! Boolean combinators only accept boolean expressions, so `and` over an
//! arithmetic expression does not compile. Problems that can only be found at
//! runtime (an empty conjunction, an invalid function name) are reported by
//! [`to_sql`] together with the SQL generated before the failure.
//!
//! ## Example
//!
//! ```rust
//! use oxide_clause::builder::{and, desc, eq_l, in_list, sql_func};
//! use oxide_clause::dialect::GenericDialect;
//! use oxide_clause::{col, to_sql, Column};
//!
//! let filter = and([
//!     eq_l(Column::qualified("users", "deleted_at"), None::<i64>),
//!     in_list(col("role"), Vec::<String>::new()),
//! ]);
//! assert_eq!(
//!     to_sql(&filter, &GenericDialect).unwrap(),
//!     r#"("users"."deleted_at" IS NULL AND FALSE)"#
//! );
//!
//! let order = desc(sql_func("LOWER", [col("name")]));
//! assert_eq!(
//!     to_sql(&order, &GenericDialect).unwrap(),
//!     r#"LOWER("name") DESC"#
//! );
//! ```

pub mod ast;
pub mod builder;
mod clause;
pub mod dialect;
pub mod error;
mod grammar;
pub mod schema;
pub mod value;

pub use clause::{
    serialize_clauses, to_sql, BoolExpr, BoolExpression, Clause, Expr, Expression, IntoBoolExpr,
    IntoExpr,
};
pub use dialect::{Dialect, GenericDialect};
pub use error::{Error, Result};
pub use schema::{col, Column, NonAliasColumn, Statement};
pub use value::{Fractional, Numeric, SqlValue, ToSqlValue};
