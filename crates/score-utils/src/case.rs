//! Helpers for converting snake_case method and parameter names into the
//! camelCase form used on the JSON-RPC side.

/// Convert `snake_case` to `camelCase`.
///
/// The first segment is kept verbatim. Every later segment gets its first
/// character upper-cased and the remainder left untouched, so `get_HTTP_url`
/// becomes `getHTTPUrl`. Empty segments from repeated underscores vanish.
#[must_use]
pub fn to_camel_case(snake: &str) -> String {
    let mut segments = snake.split('_');
    let mut out = String::with_capacity(snake.len());

    if let Some(head) = segments.next() {
        out.push_str(head);
    }

    for segment in segments {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    out
}

///
/// TESTS
///
