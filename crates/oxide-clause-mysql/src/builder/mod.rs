//! MySQL-specific clause builders.

mod upsert;

pub use upsert::{on_duplicate_key_update, OnDuplicateKeyUpdate};
