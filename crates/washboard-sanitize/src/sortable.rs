//! Opaque encoding for sortable field values.

use serde_json::Value;

/// Encode a sortable value into its stored string form.
///
/// Strings already holding valid JSON text pass through untouched, so
/// encoding an encoded value is a no-op; anything else is JSON-encoded.
pub fn sanitize_sortable(value: &Value) -> Value {
    if let Value::String(text) = value {
        if serde_json::from_str::<Value>(text).is_ok() {
            return value.clone();
        }
    }
    Value::String(serde_json::to_string(value).unwrap_or_default())
}
