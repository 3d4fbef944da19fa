//! Network fetching utilities.
//!
//! Async fetch functions over the browser Fetch API, with optional
//! sessionStorage caching for manifest data.

use std::fmt;

use js_sys::Uint8Array;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::utils::cache;

// =============================================================================
// Errors
// =============================================================================

/// Errors that can occur during network fetch operations.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (offline, CORS, etc.)
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    HttpError(u16),
    /// Failed to read response body
    ResponseReadFailed,
    /// Invalid response content
    InvalidContent,
    /// JSON parsing error
    JsonParseError(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::JsonParseError(msg) => write!(f, "JSON parse error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Fetch text content from a URL.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let resp = fetch_response(url).await?;

    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    text.as_string().ok_or(FetchError::InvalidContent)
}

/// Fetch binary content from a URL.
///
/// Used for document formats that need client-side conversion (DOCX).
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, FetchError> {
    let resp = fetch_response(url).await?;

    let buffer = JsFuture::from(
        resp.array_buffer()
            .map_err(|_| FetchError::ResponseReadFailed)?,
    )
    .await
    .map_err(|_| FetchError::ResponseReadFailed)?;

    Ok(Uint8Array::new(&buffer).to_vec())
}

/// Fetch a JSON value with sessionStorage caching.
///
/// Tries the session cache first. On a miss, fetches from the network
/// and stores the raw text for the remainder of the browser session.
pub async fn fetch_json_cached(url: &str, cache_key: &str) -> Result<serde_json::Value, FetchError> {
    if let Some(cached) = cache::get(cache_key)
        && let Ok(value) = serde_json::from_str(&cached)
    {
        return Ok(value);
    }

    let text = fetch_text(url).await?;
    let value = serde_json::from_str(&text)
        .map_err(|e| FetchError::JsonParseError(e.to_string()))?;

    // Caching is best-effort; a quota failure never fails the fetch.
    cache::set(cache_key, &text);

    Ok(value)
}

/// Perform a GET request and return the raw `Response`.
async fn fetch_response(url: &str) -> Result<Response, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let result = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            FetchError::NetworkError(e.as_string().unwrap_or_else(|| "Unknown error".to_string()))
        })?;

    let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

    if !resp.ok() {
        return Err(FetchError::HttpError(resp.status()));
    }

    Ok(resp)
}
