//! Lowercase hexadecimal checks.
//!
//! Both checks only ever answer yes or no; malformed or non-text input is a
//! plain `false`.

use serde_json::Value;

/// True if `value` is non-empty and made only of `[0-9a-f]`.
#[must_use]
pub fn is_lowercase_hex_string(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Check an untyped value; anything other than a string is `false`.
#[must_use]
pub fn is_lowercase_hex_value(value: &Value) -> bool {
    value.as_str().is_some_and(is_lowercase_hex_string)
}

///
/// TESTS
///
