//! Media kind classification for the content viewer.
//!
//! An address is classified once and the viewer dispatches on the result.
//! Host patterns win over everything, then data-URI MIME types, then the
//! filename extension.

use std::sync::LazyLock;

use regex::Regex;

/// OOXML word-processing MIME type (the `.docx` container).
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
/// Legacy Word MIME type.
pub const DOC_MIME: &str = "application/msword";
pub const PDF_MIME: &str = "application/pdf";

static YOUTUBE_HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)youtu\.be|youtube\.com").expect("static pattern"));
static SOUNDCLOUD_HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)soundcloud\.com").expect("static pattern"));
static DATA_URI_MIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^data:([^;,]+)[;,]").expect("static pattern"));

/// What the content viewer should do with an address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Pdf,
    Docx,
    Doc,
    Html,
    /// `video_id` is `None` when the address looks like YouTube but no
    /// identifier could be extracted; the viewer surfaces an error state
    /// instead of a broken embed.
    YouTube { video_id: Option<String> },
    SoundCloud,
    /// Fallback: embedded unmodified.
    Generic,
}

/// Extract a YouTube video identifier from any of the three link forms:
/// watch query parameter, short link, or embed path.
fn youtube_video_id(address: &str) -> Option<String> {
    let address = address.trim();

    if let Some(rest) = address.split("youtu.be/").nth(1) {
        let id = rest.split(['?', '&']).next().unwrap_or("");
        return (!id.is_empty()).then(|| id.to_string());
    }
    if let Some(rest) = address.split("youtube.com/embed/").nth(1) {
        let id = rest.split(['?', '&', '/']).next().unwrap_or("");
        return (!id.is_empty()).then(|| id.to_string());
    }
    if address.contains("youtube.com/watch") {
        let query = address.split('?').nth(1)?;
        return query
            .split('&')
            .find_map(|pair| pair.strip_prefix("v="))
            .filter(|id| !id.is_empty())
            .map(str::to_string);
    }
    None
}

fn kind_from_mime(mime: &str) -> MediaKind {
    match mime {
        PDF_MIME => MediaKind::Pdf,
        DOCX_MIME => MediaKind::Docx,
        DOC_MIME => MediaKind::Doc,
        _ => MediaKind::Generic,
    }
}

fn kind_from_extension(address: &str) -> MediaKind {
    match address.rsplit('.').next().map(str::to_lowercase).as_deref() {
        Some("pdf") => MediaKind::Pdf,
        Some("docx") => MediaKind::Docx,
        Some("doc") => MediaKind::Doc,
        Some("html") => MediaKind::Html,
        _ => MediaKind::Generic,
    }
}

/// Classify an address for rendering dispatch.
pub fn classify(address: &str) -> MediaKind {
    if YOUTUBE_HOST.is_match(address) {
        return MediaKind::YouTube { video_id: youtube_video_id(address) };
    }
    if SOUNDCLOUD_HOST.is_match(address) {
        return MediaKind::SoundCloud;
    }
    if let Some(captures) = DATA_URI_MIME.captures(address) {
        return kind_from_mime(&captures[1]);
    }
    kind_from_extension(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_short_link() {
        assert_eq!(
            classify("https://youtu.be/dQw4w9WgXcQ"),
            MediaKind::YouTube { video_id: Some("dQw4w9WgXcQ".into()) }
        );
    }

    #[test]
    fn youtube_watch_and_embed_forms() {
        assert_eq!(
            classify("https://www.youtube.com/watch?v=abc123&t=42"),
            MediaKind::YouTube { video_id: Some("abc123".into()) }
        );
        assert_eq!(
            classify("https://www.youtube.com/embed/xyz789?rel=0"),
            MediaKind::YouTube { video_id: Some("xyz789".into()) }
        );
    }

    #[test]
    fn unextractable_youtube_id_is_an_error_state() {
        assert_eq!(
            classify("https://www.youtube.com/playlist?list=PL123"),
            MediaKind::YouTube { video_id: None }
        );
    }

    #[test]
    fn soundcloud_host() {
        assert_eq!(classify("https://soundcloud.com/user/track"), MediaKind::SoundCloud);
    }

    #[test]
    fn host_matching_ignores_case() {
        assert_eq!(classify("https://SoundCloud.com/user/track"), MediaKind::SoundCloud);
        assert!(matches!(
            classify("https://YOUTUBE.com/watch?v=abc123"),
            MediaKind::YouTube { .. }
        ));
    }

    #[test]
    fn data_uri_mime_types() {
        assert_eq!(classify("data:application/pdf;base64,AAAA"), MediaKind::Pdf);
        assert_eq!(classify(&format!("data:{DOCX_MIME};base64,AAAA")), MediaKind::Docx);
        assert_eq!(classify("data:application/msword;base64,AAAA"), MediaKind::Doc);
        assert_eq!(classify("data:image/png;base64,AAAA"), MediaKind::Generic);
    }

    #[test]
    fn extension_dispatch_is_case_insensitive() {
        assert_eq!(classify("report.DOCX"), MediaKind::Docx);
        assert_eq!(classify("docs_raw/a/b/report.pdf"), MediaKind::Pdf);
        assert_eq!(classify("legacy.doc"), MediaKind::Doc);
        assert_eq!(classify("docs_html/page.html"), MediaKind::Html);
        assert_eq!(classify("notes.txt"), MediaKind::Generic);
        assert_eq!(classify("no-extension"), MediaKind::Generic);
    }
}
