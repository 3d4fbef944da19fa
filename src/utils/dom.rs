//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error
//! handling. Every accessor degrades to `None`/no-op outside a browser.

use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// Set the document title (shown in the tab bar).
pub fn set_document_title(title: &str) {
    if let Some(window) = window()
        && let Some(document) = window.document()
    {
        document.set_title(title);
    }
}

/// Show a blocking alert dialog.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

/// Check if the device is mobile or tablet based on screen width.
///
/// Uses a breakpoint of 768px (common tablet/desktop threshold).
pub fn is_mobile_or_tablet() -> bool {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .is_some_and(|width| width < 768.0)
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current location pathname (e.g. `/talks/thien-dinh.html`).
pub fn current_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Push a new pathname onto the browser history.
///
/// Keeps the address bar shareable without reloading the page; the
/// popstate listener handles the reverse direction.
pub fn push_pathname(path: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
    }
}
