//! Shape checks for responses coming back from score calls.

use serde_json::Value;

/// True if `result` is an object whose `"error"` entry is present and truthy.
///
/// Truthiness: `null`, `false`, numeric zero and empty strings, arrays or
/// objects are all falsy. Anything that is not an object is `false`.
#[must_use]
pub fn check_error_response(result: &Value) -> bool {
    result
        .as_object()
        .and_then(|map| map.get("error"))
        .is_some_and(is_truthy)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

///
/// TESTS
///
