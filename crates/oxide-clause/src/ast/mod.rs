//! Clause tree node types.
//!
//! Nodes are built with the combinators in [`crate::builder`].

mod function;
mod list;
mod literal;
mod membership;
mod operator;
mod order;
mod subquery;

pub use function::{FuncCall, IfExpr};
pub use list::{ListClause, Tuple};
pub use literal::Literal;
pub(crate) use membership::dynamic_in_values;
pub use membership::{InList, InListElement, InSubquery, InValues};
pub use operator::{Arithmetic, BinaryExpr, Comparison, Conjunction, Negation};
pub use order::OrderBy;
pub use subquery::{ColumnValue, Subquery};
