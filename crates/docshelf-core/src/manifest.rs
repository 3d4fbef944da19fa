//! The manifest tree model.
//!
//! The generator emits a nested JSON object; the browser fetches it (plus a
//! media manifest in the same shape) and decodes the whole thing once into
//! an explicit tagged tree. All later shape questions - "is this a folder,
//! a leaf, a gated section?" - are answered here instead of by ad hoc
//! checks scattered through rendering and resolution.

use serde_json::Value;

/// Wire field for a dual-view leaf's browser-renderable address.
pub const HTML_URL_KEY: &str = "html_url";
/// Wire field for a dual-view leaf's original-file address.
pub const RAW_URL_KEY: &str = "raw_url";
/// Wire field for a dual-view leaf's slug.
pub const FRIENDLY_URL_KEY: &str = "friendly_url";
/// Wire field marking a folder as gated.
pub const PROTECTED_KEY: &str = "protected";

/// A dual-view leaf: the same document in two representations.
///
/// `rendered` and `original` always point at the same underlying file,
/// one converted for inline display and one in its source format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DualView {
    pub rendered: String,
    pub original: String,
    pub slug: String,
}

/// A node in the decoded manifest tree.
///
/// Sibling order is display order; it is preserved from the JSON document
/// (the generator writes entries in filesystem enumeration order).
#[derive(Clone, Debug, PartialEq)]
pub enum ManifestNode {
    /// Mapping from display name to child node.
    Folder { children: Vec<(String, ManifestNode)> },
    /// A single renderable address (direct media links, mostly).
    SingleView(String),
    /// Rendered + original address pair with a slug.
    DualView(DualView),
    /// A folder whose contents are withheld from rendering until the
    /// client-side unlock flag is set. The children stay in memory; this
    /// is an access hint, not an enforced boundary.
    ProtectedFolder { children: Vec<(String, ManifestNode)> },
}

impl ManifestNode {
    /// An empty root folder.
    pub fn empty() -> Self {
        ManifestNode::Folder { children: Vec::new() }
    }

    /// Decode a manifest JSON value into the tagged tree.
    ///
    /// Shape rules, decided once here:
    /// - string value -> [`ManifestNode::SingleView`]
    /// - object with `html_url`/`raw_url` -> [`ManifestNode::DualView`]
    /// - object with `"protected": true` -> [`ManifestNode::ProtectedFolder`]
    /// - any other object -> [`ManifestNode::Folder`]
    ///
    /// Decoding is total over JSON: values of any other type become empty
    /// folders rather than failing the whole manifest.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(addr) => ManifestNode::SingleView(addr.clone()),
            Value::Object(map) => {
                let html = map.get(HTML_URL_KEY).and_then(Value::as_str);
                let raw = map.get(RAW_URL_KEY).and_then(Value::as_str);
                if html.is_some() || raw.is_some() {
                    let rendered = html.or(raw).unwrap_or_default().to_string();
                    let original = raw.or(html).unwrap_or_default().to_string();
                    let slug = map
                        .get(FRIENDLY_URL_KEY)
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string();
                    return ManifestNode::DualView(DualView { rendered, original, slug });
                }

                let protected = map
                    .get(PROTECTED_KEY)
                    .and_then(Value::as_bool)
                    .unwrap_or(false);
                let children = map
                    .iter()
                    .filter(|(key, _)| key.as_str() != PROTECTED_KEY)
                    .map(|(key, child)| (key.clone(), ManifestNode::from_value(child)))
                    .collect();
                if protected {
                    ManifestNode::ProtectedFolder { children }
                } else {
                    ManifestNode::Folder { children }
                }
            }
            _ => ManifestNode::empty(),
        }
    }

    /// Children of a folder node, empty for leaves.
    pub fn children(&self) -> &[(String, ManifestNode)] {
        match self {
            ManifestNode::Folder { children } | ManifestNode::ProtectedFolder { children } => {
                children
            }
            _ => &[],
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, ManifestNode::ProtectedFolder { .. })
    }

    /// The address selected by a default click: the rendered view for
    /// dual-view leaves, the only address for single-view leaves.
    pub fn primary_address(&self) -> Option<&str> {
        match self {
            ManifestNode::SingleView(addr) => Some(addr),
            ManifestNode::DualView(dual) => Some(&dual.rendered),
            _ => None,
        }
    }
}

/// Merge the documents manifest with the media manifest.
///
/// Shallow merge over the top-level keys; a key present in both resolves
/// last-write-wins in favor of `overlay`. Collisions between the two
/// manifests are not an error (deliberate decision, see DESIGN.md).
pub fn merge_manifests(base: Value, overlay: Value) -> Value {
    let Value::Object(mut merged) = base else {
        // A non-object manifest carries no entries.
        return overlay;
    };
    if let Value::Object(overlay) = overlay {
        for (key, value) in overlay {
            merged.insert(key, value);
        }
    }
    Value::Object(merged)
}
