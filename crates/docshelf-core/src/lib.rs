//! Domain logic shared by the docshelf browser app and the manifest
//! generator CLI.
//!
//! Everything in this crate is pure and runs natively:
//! - [`slugify`] - display name to ASCII URL segment
//! - [`ManifestNode`] - the tagged manifest tree, decoded once from JSON
//! - [`resolve_from_address`], [`resolve_to_address`] - browser path <-> leaf
//! - [`classify`] - media kind dispatch for the content viewer
//! - [`docx_to_html`] - minimal client-side DOCX conversion

pub mod docx;
pub mod manifest;
pub mod media;
pub mod resolve;
pub mod slug;

pub use docx::{DocxError, docx_to_html};
pub use manifest::{DualView, ManifestNode, merge_manifests};
pub use media::{MediaKind, classify};
pub use resolve::{Resolved, ViewKind, resolve_from_address, resolve_to_address};
pub use slug::slugify;
