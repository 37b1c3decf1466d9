//! Predicate functions used by the request-body validation pipeline.
//!
//! Every predicate is pure and total: any JSON value (including `Null`,
//! which stands for an absent field) maps to a plain boolean.

use serde_json::Value;

/// Permissive email shape check: one or more non-whitespace characters,
/// `@`, one or more non-whitespace characters, `.`, one or more
/// non-whitespace characters. Deliberately not RFC-5322; the looser shape
/// matches what the registration form accepts.
pub fn is_email(value: &Value) -> bool {
    value.as_str().map(email_shape).unwrap_or(false)
}

/// A field is present unless it is absent/null or the empty string.
/// Numeric zero and boolean false both count as present.
pub fn is_required(value: &Value) -> bool {
    !(value.is_null() || value.as_str() == Some(""))
}

/// True iff the value is a string of at least `length` characters.
/// Non-string input is rejected outright, even when its rendered form
/// would be long enough.
pub fn min_length(value: &Value, length: usize) -> bool {
    value
        .as_str()
        .map(|s| s.chars().count() >= length)
        .unwrap_or(false)
}

fn email_shape(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let chars: Vec<char> = s.chars().collect();
    let len = chars.len();
    // Earliest '@' with at least one character before it leaves the most
    // room for the dot, so later '@'s never need checking.
    for i in 1..len {
        if chars[i] == '@' {
            // Dot needs one character between it and the '@' and one after.
            return ((i + 2)..len.saturating_sub(1)).any(|j| chars[j] == '.');
        }
    }
    false
}
