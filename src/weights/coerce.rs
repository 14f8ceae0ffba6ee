//! Number-like input coercion
//!
//! Tool callers send weights as JSON numbers, numeric strings, or nothing at
//! all. These are coerced the way a JavaScript form layer would (`Number(x)`),
//! so "135", 135 and " 135 " all mean the same weight and garbage becomes NaN,
//! which the conversion functions then treat as missing.

use serde_json::Value;

/// Coerce a JSON value to a number
///
/// - `null` -> 0
/// - `true` / `false` -> 1 / 0
/// - strings are trimmed; empty -> 0; otherwise parsed or NaN
/// - `[]` -> 0, `[x]` -> x coerced as text, longer arrays and objects -> NaN
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_number(s),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [single] => match single {
                // Arrays stringify their elements: [null] is "" and [true] is "true"
                Value::Null => 0.0,
                Value::Bool(_) | Value::Object(_) => f64::NAN,
                other => to_number(other),
            },
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

/// Parse numeric text, returning NaN for anything that is not a number
pub fn parse_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix)
                .map(|n| n as f64)
                .unwrap_or(f64::NAN);
        }
    }

    // Rust accepts "inf" and "nan" spellings that are not numbers to a user
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
