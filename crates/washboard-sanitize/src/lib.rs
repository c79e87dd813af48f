//! Sanitization callbacks for CMS customizer settings.
//!
//! Each callback takes the raw field value the host framework hands over
//! and returns a cleaned value. Callbacks are pure and independent; the
//! only shared machinery is the operation registry in [`dispatch`].
//! External state (the page store, the color engine) sits behind the
//! [`PageLookup`] and [`ColorParser`] capability traits so hosts can wire
//! in their own collaborators.
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use washboard_sanitize::{sanitize, CssColorParser, SanitizeContext, StaticPageIndex};
//!
//! let pages = StaticPageIndex::default();
//! let ctx = SanitizeContext {
//!     pages: &pages,
//!     colors: &CssColorParser,
//! };
//! let clean = sanitize("checkbox", &json!("on"), &json!(false), &ctx).unwrap();
//! assert_eq!(clean, json!(true));
//! ```

pub mod color;
pub mod dimension;
pub mod dispatch;
pub mod pages;
pub mod scalar;
pub mod sortable;

// Re-export the registry surface and the capability traits
pub use color::{validate_color, ColorMode, ColorParser, CssColorParser, ParsedColor};
pub use dimension::{extract_number, sanitize_css_dimension};
pub use dispatch::{sanitize, SanitizeContext, Sanitizer};
pub use pages::{PageLookup, StaticPageIndex, STATUS_PUBLISH};
