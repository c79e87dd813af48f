//! Scalar callbacks: checkbox, number, and the unfiltered escape hatch.

use serde_json::{json, Value};

use crate::dimension::extract_number;

/// Normalize a checkbox value.
///
/// Truthy only for boolean `true` or the exact string `"on"`; anything
/// else, including a missing value, is `false`.
pub fn sanitize_checkbox(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s == "on",
        _ => false,
    }
}

/// Normalize a numeric value.
///
/// Numbers and numeric strings pass through unchanged. Anything else is
/// coerced to an integer by truncating its extracted magnitude toward
/// zero, with `0` when nothing numeric is present.
pub fn sanitize_number(value: &Value) -> Value {
    match value {
        Value::Number(_) => value.clone(),
        Value::String(s) => {
            let text = s.trim();
            if let Ok(int) = text.parse::<i64>() {
                return json!(int);
            }
            match text.parse::<f64>() {
                Ok(float) if float.is_finite() => json!(float),
                _ => json!(truncate_magnitude(text)),
            }
        }
        _ => json!(0),
    }
}

fn truncate_magnitude(text: &str) -> i64 {
    extract_number(text)
        .parse::<f64>()
        .map(|float| float.trunc() as i64)
        .unwrap_or(0)
}

/// Escape hatch for fields that must not be sanitized.
pub fn unfiltered(value: &Value) -> Value {
    value.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_truthy_cases() {
        assert!(sanitize_checkbox(&json!(true)));
        assert!(sanitize_checkbox(&json!("on")));
    }

    #[test]
    fn checkbox_is_case_sensitive() {
        assert!(!sanitize_checkbox(&json!("On")));
        assert!(!sanitize_checkbox(&json!("ON")));
    }

    #[test]
    fn checkbox_falsy_cases() {
        assert!(!sanitize_checkbox(&json!(false)));
        assert!(!sanitize_checkbox(&Value::Null));
        assert!(!sanitize_checkbox(&json!(1)));
        assert!(!sanitize_checkbox(&json!("yes")));
    }

    #[test]
    fn number_passes_numbers_through() {
        assert_eq!(sanitize_number(&json!(42)), json!(42));
        assert_eq!(sanitize_number(&json!(3.14)), json!(3.14));
    }

    #[test]
    fn number_converts_numeric_strings() {
        assert_eq!(sanitize_number(&json!("42")), json!(42));
        assert_eq!(sanitize_number(&json!("3.14")), json!(3.14));
        assert_eq!(sanitize_number(&json!("-7")), json!(-7));
    }

    #[test]
    fn number_truncates_leading_magnitude() {
        assert_eq!(sanitize_number(&json!("12px")), json!(12));
        assert_eq!(sanitize_number(&json!("3.9em")), json!(3));
    }

    #[test]
    fn number_defaults_to_zero() {
        assert_eq!(sanitize_number(&json!("abc")), json!(0));
        assert_eq!(sanitize_number(&Value::Null), json!(0));
        assert_eq!(sanitize_number(&json!(true)), json!(0));
    }

    #[test]
    fn unfiltered_returns_input_unchanged() {
        let value = json!({"raw": "<b>anything</b>"});
        assert_eq!(unfiltered(&value), value);
    }
}
