//! Magnitude extraction and unit detection internals.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for a float magnitude: optional sign, digits, optional fraction.
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[+-]?\d+(?:\.\d+)?").unwrap());

/// Unit tokens in scan order. Detection keeps the last contained entry,
/// so a token later in the list overrides any earlier token it happens
/// to contain (`vmin` wins over the `in` inside it). The order is part
/// of the sanitizer's contract; do not reorder.
const UNITS: [&str; 15] = [
    "rem", "em", "ex", "%", "px", "cm", "mm", "in", "pt", "pc", "ch", "vh", "vw", "vmin", "vmax",
];

/// Extract the float magnitude from a string.
///
/// Returns the first run matching an optional sign, digits, and an
/// optional fractional part; empty string when the input has none.
pub fn extract_number(value: &str) -> String {
    NUMBER_RE
        .find(value)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Detect which unit suffix is present in `value`, by containment.
///
/// Returns the empty string when no unit token is found.
pub(crate) fn detect_unit(value: &str) -> &'static str {
    let mut found = "";
    for unit in UNITS {
        if value.contains(unit) {
            found = unit;
        }
    }
    found
}
