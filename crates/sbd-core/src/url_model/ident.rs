//! Identifier character-class gate.

use crate::error::SnapshotError;

/// True if `s` is non-empty and made only of letters, digits, `-`, `_`.
/// This is the whole whitelist; anything else never reaches the wire.
pub fn is_valid_identifier(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Charset gate used by the fetcher before templating the endpoint.
pub fn validate_identifier(s: &str) -> Result<(), SnapshotError> {
    if is_valid_identifier(s) {
        Ok(())
    } else {
        Err(SnapshotError::InvalidIdentifier(s.to_string()))
    }
}
