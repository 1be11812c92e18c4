//! # oxide-clause-mysql
//!
//! MySQL-specific extensions for `oxide-clause`.
//!
//! # How MySQL differs from other dialects
//!
//! - **Identifier quoting**: MySQL quotes identifiers with backticks
//!   (`` ` ``) unless the [`ANSI_QUOTES`] SQL mode is enabled. See
//!   [Schema object names].
//! - **[String literals]**: backslash is an escape character inside
//!   quoted strings (unless [`NO_BACKSLASH_ESCAPES`] is enabled), so
//!   [`MySqlDialect`] escapes `\`, quotes and control characters with
//!   backslash sequences.
//! - **[`IF()`]**: the conditional function rendered by
//!   [`if_expr`](oxide_clause::builder::if_expr) is native to MySQL.
//! - **[INSERT ... ON DUPLICATE KEY UPDATE]**: MySQL's upsert form. The
//!   [`VALUES()`] function refers to the value that would have been
//!   inserted; [`on_duplicate_key_update`] builds the assignment list.
//!
//! [`ANSI_QUOTES`]: https://dev.mysql.com/doc/refman/8.0/en/sql-mode.html#sqlmode_ansi_quotes
//! [Schema object names]: https://dev.mysql.com/doc/refman/8.0/en/identifiers.html
//! [String literals]: https://dev.mysql.com/doc/refman/8.0/en/string-literals.html
//! [`NO_BACKSLASH_ESCAPES`]: https://dev.mysql.com/doc/refman/8.0/en/sql-mode.html#sqlmode_no_backslash_escapes
//! [`IF()`]: https://dev.mysql.com/doc/refman/8.0/en/flow-control-functions.html#function_if
//! [INSERT ... ON DUPLICATE KEY UPDATE]: https://dev.mysql.com/doc/refman/8.0/en/insert-on-duplicate.html
//! [`VALUES()`]: https://dev.mysql.com/doc/refman/8.0/en/miscellaneous-functions.html#function_values
//!
//! ## Example
//!
//! ```rust
//! use oxide_clause::builder::{eq_l, if_expr, literal};
//! use oxide_clause::{col, to_sql};
//! use oxide_clause_mysql::{on_duplicate_key_update, MySqlDialect};
//!
//! let status = if_expr(eq_l(col("note"), "it's"), literal(1), literal(0));
//! assert_eq!(
//!     to_sql(&status, &MySqlDialect).unwrap(),
//!     r"IF(`note`='it\'s',1,0)"
//! );
//!
//! let upsert = on_duplicate_key_update([col("name")]);
//! assert_eq!(
//!     to_sql(&upsert, &MySqlDialect).unwrap(),
//!     "ON DUPLICATE KEY UPDATE `name`=VALUES(`name`)"
//! );
//! ```

pub mod builder;
mod dialect;

pub use builder::{on_duplicate_key_update, OnDuplicateKeyUpdate};
pub use dialect::MySqlDialect;
