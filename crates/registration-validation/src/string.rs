//! String validation functions

/// Presence check for free-text and select values.
///
/// Only the empty string counts as absent; whitespace is a value.
pub fn is_present(s: &str) -> bool {
    !s.is_empty()
}

/// Validates minimum length in UTF-16 code units, the unit browsers use for
/// `value.length`
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if s.encode_utf16().count() >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

/// Equality validator
pub fn equals(value: &str, expected: &str) -> bool {
    value == expected
}
