//! The operation registry.
//!
//! Settings declare their sanitizer by name; [`sanitize`] resolves the
//! name against the closed [`Sanitizer`] set and runs the callback. A
//! name outside the set is a wiring error, not a data error: it is
//! logged and yields null.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use washboard_common::Result;

use crate::color::{self, ColorParser};
use crate::dimension;
use crate::pages::{self, PageLookup};
use crate::scalar;
use crate::sortable;

/// Every sanitization callback the registry exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sanitizer {
    Checkbox,
    Number,
    DropdownPages,
    CssDimension,
    Sortable,
    Rgba,
    Color,
    Unfiltered,
}

/// Collaborators the callbacks depend on.
pub struct SanitizeContext<'a> {
    pub pages: &'a dyn PageLookup,
    pub colors: &'a dyn ColorParser,
}

impl Sanitizer {
    /// Resolve an operation name to its callback.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "checkbox" => Some(Self::Checkbox),
            "number" => Some(Self::Number),
            "dropdown-pages" => Some(Self::DropdownPages),
            "css_dimension" => Some(Self::CssDimension),
            "sortable" => Some(Self::Sortable),
            "rgba" => Some(Self::Rgba),
            "color" => Some(Self::Color),
            "unfiltered" => Some(Self::Unfiltered),
            _ => None,
        }
    }

    /// The operation name settings use to select this callback.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Checkbox => "checkbox",
            Self::Number => "number",
            Self::DropdownPages => "dropdown-pages",
            Self::CssDimension => "css_dimension",
            Self::Sortable => "sortable",
            Self::Rgba => "rgba",
            Self::Color => "color",
            Self::Unfiltered => "unfiltered",
        }
    }

    /// All registered callbacks.
    pub fn all() -> [Sanitizer; 8] {
        [
            Self::Checkbox,
            Self::Number,
            Self::DropdownPages,
            Self::CssDimension,
            Self::Sortable,
            Self::Rgba,
            Self::Color,
            Self::Unfiltered,
        ]
    }

    /// Run this callback on a raw value.
    ///
    /// `default` is the setting's fallback, consulted only by
    /// `dropdown-pages`.
    pub fn apply(&self, value: &Value, default: &Value, ctx: &SanitizeContext) -> Result<Value> {
        match self {
            Self::Checkbox => Ok(Value::Bool(scalar::sanitize_checkbox(value))),
            Self::Number => Ok(scalar::sanitize_number(value)),
            Self::DropdownPages => pages::sanitize_dropdown_pages(value, default, ctx.pages),
            Self::CssDimension => Ok(Value::String(dimension::sanitize_css_dimension(&text_of(
                value,
            )))),
            Self::Sortable => Ok(sortable::sanitize_sortable(value)),
            Self::Rgba => color::sanitize_rgba(&text_of(value), ctx.colors).map(Value::String),
            Self::Color => color::sanitize_color(&text_of(value), ctx.colors).map(Value::String),
            Self::Unfiltered => Ok(scalar::unfiltered(value)),
        }
    }
}

/// Sanitize `value` with the callback registered under `name`.
///
/// Unknown names log a warning and yield null; callers must treat that
/// as an integration error rather than a sanitized value.
pub fn sanitize(
    name: &str,
    value: &Value,
    default: &Value,
    ctx: &SanitizeContext,
) -> Result<Value> {
    match Sanitizer::from_name(name) {
        Some(sanitizer) => sanitizer.apply(value, default, ctx),
        None => {
            tracing::warn!("no sanitizer registered for operation '{name}'");
            Ok(Value::Null)
        }
    }
}

/// String-typed callbacks read numbers as their decimal rendering and
/// everything non-textual as empty.
fn text_of(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Number(n) => Cow::Owned(n.to_string()),
        _ => Cow::Borrowed(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::color::CssColorParser;
    use crate::pages::{StaticPageIndex, STATUS_PUBLISH};

    fn ctx(pages: &StaticPageIndex) -> SanitizeContext<'_> {
        SanitizeContext {
            pages,
            colors: &CssColorParser,
        }
    }

    #[test]
    fn names_round_trip() {
        for sanitizer in Sanitizer::all() {
            assert_eq!(Sanitizer::from_name(sanitizer.name()), Some(sanitizer));
        }
        assert_eq!(Sanitizer::from_name("dropdown_pages"), None);
    }

    #[test]
    fn unknown_operation_yields_null() {
        let pages = StaticPageIndex::default();
        let clean = sanitize("select", &json!("x"), &json!(""), &ctx(&pages)).unwrap();
        assert_eq!(clean, Value::Null);
    }

    #[test]
    fn dispatch_routes_to_each_callback() {
        let mut pages = StaticPageIndex::default();
        pages.insert(5, STATUS_PUBLISH);
        let ctx = ctx(&pages);

        assert_eq!(
            sanitize("checkbox", &json!("on"), &json!(false), &ctx).unwrap(),
            json!(true)
        );
        assert_eq!(
            sanitize("number", &json!("42"), &json!(0), &ctx).unwrap(),
            json!(42)
        );
        assert_eq!(
            sanitize("dropdown-pages", &json!(5), &json!(99), &ctx).unwrap(),
            json!(5)
        );
        assert_eq!(
            sanitize("css_dimension", &json!("10px"), &json!(""), &ctx).unwrap(),
            json!("10px")
        );
        assert_eq!(
            sanitize("sortable", &json!(["a", "b"]), &json!(""), &ctx).unwrap(),
            json!(r#"["a","b"]"#)
        );
        assert_eq!(
            sanitize("rgba", &json!("#ff0000"), &json!(""), &ctx).unwrap(),
            json!("rgba(255,0,0,1)")
        );
        assert_eq!(
            sanitize("color", &json!("#FF0000"), &json!(""), &ctx).unwrap(),
            json!("#ff0000")
        );
        assert_eq!(
            sanitize("unfiltered", &json!("<raw>"), &json!(""), &ctx).unwrap(),
            json!("<raw>")
        );
    }

    #[test]
    fn numeric_values_reach_string_callbacks_as_text() {
        let pages = StaticPageIndex::default();
        let clean = sanitize("css_dimension", &json!(10), &json!(""), &ctx(&pages)).unwrap();
        assert_eq!(clean, json!("10"));
    }
}
