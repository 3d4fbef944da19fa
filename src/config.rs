//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Document title shown before any selection is made.
pub const APP_TITLE: &str = "Document Library";

// =============================================================================
// Manifest Sources
// =============================================================================

/// Site-root-relative address of the documents manifest.
pub const DOCS_MANIFEST_URL: &str = "/docs_manifest.json";

/// Site-root-relative address of the media manifest, merged over the
/// documents manifest at load time (last write wins on shared keys).
pub const MEDIA_MANIFEST_URL: &str = "/docs_media_manifest.json";

/// Session cache configuration.
pub mod cache {
    /// sessionStorage key for the documents manifest.
    pub const DOCS_MANIFEST_KEY: &str = "docs_manifest_cache";
    /// sessionStorage key for the media manifest.
    pub const MEDIA_MANIFEST_KEY: &str = "media_manifest_cache";
}

// =============================================================================
// Unlock Gate
// =============================================================================

/// Password for protected sections. Client-side only; this gates rendering
/// of protected folders and is not a security boundary of any kind.
pub const GATE_PASSWORD: &str = "kundalini";

// =============================================================================
// Viewer Configuration
// =============================================================================

/// Design width the pre-rendered HTML documents were authored at; the
/// viewer scales them uniformly down to the container.
pub const HTML_DESIGN_WIDTH_PX: f64 = 960.0;

/// Query parameters appended to YouTube embeds.
pub const YOUTUBE_EMBED_PARAMS: &str = "rel=0&showinfo=0&controls=1";

/// SoundCloud embedded player endpoint.
pub const SOUNDCLOUD_PLAYER_URL: &str = "https://w.soundcloud.com/player/";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
