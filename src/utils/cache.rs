//! Session-scoped caching for fetched manifests.
//!
//! Backed by sessionStorage so a reload within the same tab skips the
//! network round-trip, while a fresh tab always refetches.

use super::dom::session_storage;

/// Read a cached string value, if present.
pub fn get(key: &str) -> Option<String> {
    session_storage()?.get_item(key).ok()?
}

/// Store a string value. Silently ignores quota or availability errors;
/// the cache is an optimization, never a source of truth.
pub fn set(key: &str, value: &str) {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(key, value);
    }
}
