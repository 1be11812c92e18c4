//! Lexical checks shared by identifiers and numeric literals.

use std::sync::LazyLock;

use regex::Regex;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("invalid identifier regex"));

static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("invalid numeric regex"));

static FRACTIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?$")
        .expect("invalid fractional regex")
});

/// Returns whether `name` is a plain SQL identifier.
pub(crate) fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// Returns whether `text` is an optionally signed integer.
pub(crate) fn is_numeric(text: &str) -> bool {
    NUMERIC.is_match(text)
}

/// Returns whether `text` is a decimal number with optional fraction and exponent.
pub(crate) fn is_fractional(text: &str) -> bool {
    FRACTIONAL.is_match(text)
}
