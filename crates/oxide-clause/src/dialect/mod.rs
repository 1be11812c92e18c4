//! SQL Dialect support.
//!
//! Different databases quote identifiers and encode literals differently.
//! Clauses never inspect the dialect themselves; they forward it down the
//! tree so that literals and identifiers are rendered by these methods.

mod generic;

pub use generic::GenericDialect;

use crate::value::SqlValue;

/// Trait for SQL dialect-specific behavior.
pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character (e.g., `"` for standard SQL, `` ` `` for MySQL).
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Returns the replacement for a single quote inside a string literal.
    fn string_escape(&self) -> &'static str {
        "''"
    }

    /// Quotes an identifier.
    fn quote_identifier(&self, name: &str) -> String {
        let quote = self.identifier_quote();
        format!("{quote}{name}{quote}")
    }

    /// Writes a quoted string literal.
    fn encode_string(&self, s: &str, out: &mut String) {
        out.push('\'');
        out.push_str(&s.replace('\'', self.string_escape()));
        out.push('\'');
    }

    /// Writes a binary literal.
    fn encode_blob(&self, bytes: &[u8], out: &mut String) {
        out.push_str("X'");
        for byte in bytes {
            out.push_str(&format!("{byte:02X}"));
        }
        out.push('\'');
    }

    /// Writes a value as a literal.
    fn encode_value(&self, value: &SqlValue, out: &mut String) {
        match value {
            SqlValue::Null => out.push_str("NULL"),
            SqlValue::Bool(b) => out.push_str(if *b { "TRUE" } else { "FALSE" }),
            SqlValue::Int(n) => out.push_str(&n.to_string()),
            SqlValue::UInt(n) => out.push_str(&n.to_string()),
            SqlValue::Float(f) => out.push_str(&f.to_string()),
            SqlValue::Numeric(n) => out.push_str(n.as_str()),
            SqlValue::Fractional(f) => out.push_str(f.as_str()),
            SqlValue::Text(s) => self.encode_string(s, out),
            SqlValue::Blob(b) => self.encode_blob(b, out),
            #[cfg(feature = "chrono")]
            SqlValue::Timestamp(ts) => {
                self.encode_string(&ts.format("%Y-%m-%d %H:%M:%S%.6f").to_string(), out);
            }
        }
    }
}
