//! Page-backed setting sanitization.
//!
//! `dropdown-pages` fields store a page id. The id is only kept while the
//! page exists and is publicly visible; everything else falls back to the
//! setting's default. Visibility comes from a [`PageLookup`] collaborator
//! so hosts can wire in their own page store.

use std::collections::HashMap;

use serde_json::Value;

use washboard_common::Result;

use crate::dimension::extract_number;

/// Status marking a page as publicly visible.
pub const STATUS_PUBLISH: &str = "publish";

/// Queries the status of a page by id.
pub trait PageLookup {
    /// Status of the page, or `None` when no such page exists.
    fn status_of(&self, id: u64) -> Result<Option<String>>;
}

/// In-memory page index for hosts and tests.
#[derive(Debug, Default, Clone)]
pub struct StaticPageIndex {
    statuses: HashMap<u64, String>,
}

impl StaticPageIndex {
    pub fn insert(&mut self, id: u64, status: impl Into<String>) {
        self.statuses.insert(id, status.into());
    }
}

impl PageLookup for StaticPageIndex {
    fn status_of(&self, id: u64) -> Result<Option<String>> {
        Ok(self.statuses.get(&id).cloned())
    }
}

/// Keep a page id only while the page is published.
///
/// The raw value is coerced to a non-negative id first; an unpublished or
/// missing page yields the fallback value unchanged. Lookup errors
/// propagate untouched.
pub fn sanitize_dropdown_pages(
    value: &Value,
    fallback: &Value,
    pages: &dyn PageLookup,
) -> Result<Value> {
    let id = page_id(value);
    match pages.status_of(id)? {
        Some(status) if status == STATUS_PUBLISH => Ok(Value::from(id)),
        _ => Ok(fallback.clone()),
    }
}

fn page_id(value: &Value) -> u64 {
    match value {
        Value::Number(n) => {
            if let Some(id) = n.as_u64() {
                id
            } else if let Some(int) = n.as_i64() {
                int.unsigned_abs()
            } else {
                n.as_f64().map(|f| f.abs().trunc() as u64).unwrap_or(0)
            }
        }
        Value::String(s) => extract_number(s)
            .parse::<f64>()
            .map(|f| f.abs().trunc() as u64)
            .unwrap_or(0),
        _ => 0,
    }
}
