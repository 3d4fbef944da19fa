//! Browser path <-> manifest leaf resolution.
//!
//! Forward direction: the path in the address bar is normalized down to a
//! slug and matched against the tree, so a shared or bookmarked address
//! restores the same selection on load. Reverse direction: a selection is
//! turned back into the path that is pushed to the address bar.

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::manifest::{DualView, ManifestNode};
use crate::slug::slugify;

/// Extensions recognized as document suffixes in browser addresses.
pub const DOC_EXTENSIONS: &[&str] = &["pdf", "docx", "doc", "html"];

/// Marker suffix requesting the original-file view.
pub const RAW_VIEW_SUFFIX: &str = "-raw";

/// Internal prefix markers a build step may leave inside an address.
static PATH_PREFIX_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)docs_html/|docs_raw/").expect("static pattern"));

/// Which of a dual-view leaf's addresses was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Rendered,
    Original,
}

/// A resolved browser address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    /// Display name of the matched leaf.
    pub title: String,
    /// Address of the requested view.
    pub address: String,
    pub view: ViewKind,
}

fn strip_doc_extension(path: &str) -> &str {
    let lower = path.to_ascii_lowercase();
    for ext in DOC_EXTENSIONS {
        if lower.ends_with(&format!(".{ext}")) {
            return &path[..path.len() - ext.len() - 1];
        }
    }
    path
}

/// Depth-first search for the first dual-view leaf whose slug matches,
/// compared case-insensitively. Children are visited in tree order, so a
/// slug collision resolves to whichever leaf the generator emitted first.
fn find_by_slug<'a>(node: &'a ManifestNode, target: &str) -> Option<(&'a str, &'a DualView)> {
    for (name, child) in node.children() {
        if let ManifestNode::DualView(dual) = child
            && dual.slug.to_lowercase() == target
        {
            return Some((name, dual));
        }
        if let Some(found) = find_by_slug(child, target) {
            return Some(found);
        }
    }
    None
}

/// Resolve the current browser path to a manifest leaf.
///
/// Returns `None` when nothing matches; the caller falls back to the table
/// of contents rather than treating that as an error.
pub fn resolve_from_address(root: &ManifestNode, browser_path: &str) -> Option<Resolved> {
    let path = browser_path.trim_start_matches('/').trim_end_matches('/');
    let path = strip_doc_extension(path);

    let decoded = percent_decode_str(path).decode_utf8_lossy();
    let cleaned = PATH_PREFIX_MARKERS.replace_all(&decoded, "").to_lowercase();

    let (slug, view) = match cleaned.strip_suffix(RAW_VIEW_SUFFIX) {
        Some(rest) => (rest, ViewKind::Original),
        None => (cleaned.as_str(), ViewKind::Rendered),
    };
    // The extension can reappear once the raw marker is gone
    // ("/report.pdf-raw" carries both).
    let slug = strip_doc_extension(slug);
    if slug.is_empty() {
        return None;
    }

    let (title, dual) = find_by_slug(root, slug)?;
    let address = match view {
        ViewKind::Rendered => dual.rendered.clone(),
        ViewKind::Original => dual.original.clone(),
    };
    Some(Resolved { title: title.to_string(), address, view })
}

/// Compose the shareable browser path for a selection.
///
/// The slug falls back to `slugify(title)` when the manifest entry carries
/// none. The document extension is taken from the selected address, and an
/// original-view selection gets the raw-view marker so the round trip
/// restores the same view.
pub fn resolve_to_address(title: &str, address: &str, slug: Option<&str>, view: ViewKind) -> String {
    let slug = match slug {
        Some(slug) if !slug.is_empty() => slug.to_string(),
        _ => slugify(title),
    };

    let lower = address.to_ascii_lowercase();
    let extension = DOC_EXTENSIONS
        .iter()
        .find(|ext| lower.ends_with(&format!(".{ext}")))
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();
    let marker = match view {
        ViewKind::Rendered => "",
        ViewKind::Original => RAW_VIEW_SUFFIX,
    };

    format!("/{slug}{extension}{marker}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_tree() -> ManifestNode {
        ManifestNode::from_value(&json!({
            "Talks": {
                "Thiền định": {
                    "html_url": "docs_html/Talks/Thiền định.html",
                    "raw_url": "docs_raw/Talks/Thiền định.pdf",
                    "friendly_url": "talks/thien-dinh"
                },
                "Deep": {
                    "Báo cáo": {
                        "html_url": "docs_html/Talks/Deep/Báo cáo.html",
                        "raw_url": "docs_raw/Talks/Deep/Báo cáo.docx",
                        "friendly_url": "talks/deep/bao-cao"
                    }
                }
            },
            "Music": "https://soundcloud.com/user/track"
        }))
    }

    #[test]
    fn resolves_rendered_view() {
        let tree = sample_tree();
        let hit = resolve_from_address(&tree, "/talks/thien-dinh.html").unwrap();
        assert_eq!(hit.title, "Thiền định");
        assert_eq!(hit.address, "docs_html/Talks/Thiền định.html");
        assert_eq!(hit.view, ViewKind::Rendered);
    }

    #[test]
    fn resolves_raw_view_marker() {
        let tree = sample_tree();
        let hit = resolve_from_address(&tree, "/talks/thien-dinh.pdf-raw").unwrap();
        assert_eq!(hit.address, "docs_raw/Talks/Thiền định.pdf");
        assert_eq!(hit.view, ViewKind::Original);
    }

    #[test]
    fn tolerates_percent_encoding_case_and_trailing_slashes() {
        let tree = sample_tree();
        let hit = resolve_from_address(&tree, "/Talks/Thien-Dinh/").unwrap();
        assert_eq!(hit.title, "Thiền định");

        let hit = resolve_from_address(&tree, "/talks%2Fdeep%2Fbao-cao").unwrap();
        assert_eq!(hit.title, "Báo cáo");
    }

    #[test]
    fn strips_internal_prefix_markers() {
        let tree = sample_tree();
        let hit = resolve_from_address(&tree, "/docs_html/talks/thien-dinh").unwrap();
        assert_eq!(hit.title, "Thiền định");

        // Marker stripping is case-insensitive, like the rest of the match.
        let hit = resolve_from_address(&tree, "/DOCS_RAW/talks/thien-dinh").unwrap();
        assert_eq!(hit.title, "Thiền định");
    }

    #[test]
    fn unknown_address_is_not_found() {
        let tree = sample_tree();
        assert_eq!(resolve_from_address(&tree, "/nope"), None);
        assert_eq!(resolve_from_address(&tree, "/"), None);
        assert_eq!(resolve_from_address(&tree, ""), None);
    }

    #[test]
    fn composes_addresses_for_both_views() {
        assert_eq!(
            resolve_to_address(
                "Thiền định",
                "docs_html/Talks/Thiền định.html",
                Some("talks/thien-dinh"),
                ViewKind::Rendered,
            ),
            "/talks/thien-dinh.html"
        );
        assert_eq!(
            resolve_to_address(
                "Thiền định",
                "docs_raw/Talks/Thiền định.pdf",
                Some("talks/thien-dinh"),
                ViewKind::Original,
            ),
            "/talks/thien-dinh.pdf-raw"
        );
        // No slug in the manifest: derived from the title.
        assert_eq!(
            resolve_to_address("Bài giảng", "docs_raw/Bài giảng.doc", None, ViewKind::Original),
            "/bai-giang.doc-raw"
        );
    }

    #[test]
    fn raw_marker_follows_the_requested_view_not_the_prefix() {
        // Custom generator prefixes carry no "docs_raw/" substring; the
        // marker still lands on the original view.
        assert_eq!(
            resolve_to_address("Report", "originals/a/Report.pdf", Some("a/report"), ViewKind::Original),
            "/a/report.pdf-raw"
        );
        assert_eq!(
            resolve_to_address("Report", "rendered/a/Report.html", Some("a/report"), ViewKind::Rendered),
            "/a/report.html"
        );
    }

    #[test]
    fn round_trips_recover_the_same_leaf() {
        let tree = sample_tree();
        for (title, address, slug, view) in [
            (
                "Thiền định",
                "docs_html/Talks/Thiền định.html",
                "talks/thien-dinh",
                ViewKind::Rendered,
            ),
            (
                "Thiền định",
                "docs_raw/Talks/Thiền định.pdf",
                "talks/thien-dinh",
                ViewKind::Original,
            ),
            (
                "Báo cáo",
                "docs_html/Talks/Deep/Báo cáo.html",
                "talks/deep/bao-cao",
                ViewKind::Rendered,
            ),
            (
                "Báo cáo",
                "docs_raw/Talks/Deep/Báo cáo.docx",
                "talks/deep/bao-cao",
                ViewKind::Original,
            ),
        ] {
            let path = resolve_to_address(title, address, Some(slug), view);
            let hit = resolve_from_address(&tree, &path)
                .unwrap_or_else(|| panic!("no match for {path}"));
            assert_eq!(hit.title, title);
            assert_eq!(hit.address, address);
            assert_eq!(hit.view, view);
        }
    }
}
