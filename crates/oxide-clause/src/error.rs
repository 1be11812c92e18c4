//! Error types for clause construction and serialization.

/// Errors that can occur while building or serializing clauses.
///
/// Serialization errors carry the SQL generated before the failure. That text
/// is only for diagnostics and must never be executed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A value could not be converted into a literal.
    #[error("invalid literal value: {reason}")]
    InvalidLiteral {
        /// Why the value was rejected.
        reason: String,
    },

    /// An IN list was built from a value type outside the supported set.
    #[error("unsupported value list type in IN clause: {type_name}")]
    UnsupportedValueList {
        /// Rust type name of the rejected value.
        type_name: &'static str,
    },

    /// An IN expression captured an error when it was constructed.
    #[error("invalid IN expression: {0}")]
    InvalidInExpression(Box<Error>),

    /// A clause list was empty.
    #[error("empty clauses. Generated sql: {sql}")]
    EmptyClauses {
        /// SQL generated so far.
        sql: String,
    },

    /// An AND/OR conjunction had no operands.
    #[error("empty conjunction. Generated sql: {sql}")]
    EmptyConjunction {
        /// SQL generated so far.
        sql: String,
    },

    /// An arithmetic expression had no operands.
    #[error("empty arithmetic expression. Generated sql: {sql}")]
    EmptyArithmetic {
        /// SQL generated so far.
        sql: String,
    },

    /// A tuple had no elements.
    #[error("tuples must include at least one element. Generated sql: {sql}")]
    EmptyTuple {
        /// SQL generated so far.
        sql: String,
    },

    /// A function name is not a valid SQL identifier.
    #[error("invalid function name: {name}. Generated sql: {sql}")]
    InvalidFunctionName {
        /// The rejected name.
        name: String,
        /// SQL generated so far.
        sql: String,
    },

    /// A table or column name is not a valid SQL identifier.
    #[error("invalid identifier: {name}. Generated sql: {sql}")]
    InvalidIdentifier {
        /// The rejected name.
        name: String,
        /// SQL generated so far.
        sql: String,
    },

    /// A statement renderer failed.
    #[error("statement error: {0}")]
    Statement(String),
}

impl Error {
    /// Creates an [`Error::InvalidLiteral`].
    #[must_use]
    pub fn invalid_literal(reason: impl Into<String>) -> Self {
        Self::InvalidLiteral {
            reason: reason.into(),
        }
    }
}

/// Result type for clause operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_generated_sql() {
        let err = Error::EmptyTuple {
            sql: String::from("SELECT "),
        };
        assert_eq!(
            err.to_string(),
            "tuples must include at least one element. Generated sql: SELECT "
        );
    }

    #[test]
    fn test_in_expression_wraps_inner() {
        let err = Error::InvalidInExpression(Box::new(Error::UnsupportedValueList {
            type_name: "bool",
        }));
        assert_eq!(
            err.to_string(),
            "invalid IN expression: unsupported value list type in IN clause: bool"
        );
    }
}
