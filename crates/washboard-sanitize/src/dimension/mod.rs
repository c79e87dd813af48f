//! CSS dimension sanitization.
//!
//! A dimension is a numeric magnitude plus an optional unit suffix
//! (`10px`, `2.5em`, `50%`). Magnitude and unit are recovered separately
//! and reassembled, so stray characters are dropped along the way.

mod parse;


pub use parse::extract_number;

use parse::detect_unit;

/// Sanitize a CSS dimension string.
///
/// `"round"` is shorthand for `"50%"`, `"auto"` passes through, and
/// `calc()` expressions are returned verbatim since unit detection does
/// not apply to them. A value with no digits sanitizes to the empty
/// string; a bare number keeps its magnitude with no unit.
pub fn sanitize_css_dimension(value: &str) -> String {
    let trimmed = value.trim();

    if trimmed == "round" {
        return "50%".to_string();
    }
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed == "auto" {
        return trimmed.to_string();
    }
    if !trimmed.chars().any(|c| c.is_ascii_digit()) {
        return String::new();
    }
    if trimmed.contains("calc(") {
        return value.to_string();
    }

    let magnitude = extract_number(trimmed);
    format!("{magnitude}{}", detect_unit(trimmed))
}
