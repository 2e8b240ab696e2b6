//! Canonical name keys.
//!
//! Every store operation that resolves a name goes through [`name_key`]
//! so that case and surrounding whitespace never split one logical
//! entry into two.

use crate::error::{Error, Result};

/// Canonical lookup key for a display name: trimmed, Unicode lowercase.
///
/// Deterministic and idempotent; the display name itself is stored
/// separately and keeps its original casing.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Returns the trimmed value, or an error naming the blank field.
pub(crate) fn non_blank<'a>(value: &'a str, field: &'static str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::BlankField { field });
    }
    Ok(trimmed)
}
