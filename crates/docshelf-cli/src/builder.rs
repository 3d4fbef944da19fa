//! Directory walk producing the documents manifest.
//!
//! The source directory holds original files; a converted `.html` twin of
//! each file is expected under the rendered prefix with the same relative
//! path. The walk emits one dual-view entry per file, keyed by the filename
//! without extension, in the filesystem's native enumeration order - the
//! viewer treats sibling order as display order.
//!
//! Any I/O failure aborts the whole build. The manifest is written in one
//! piece at deploy time; there is no such thing as a partially valid one.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};
use thiserror::Error;

use docshelf_core::slugify;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// URL prefixes the generated addresses are placed under.
#[derive(Clone, Debug)]
pub struct BuildOptions {
    /// Site-root-relative folder of converted-for-display files.
    pub rendered_prefix: String,
    /// Site-root-relative folder of original files.
    pub raw_prefix: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            rendered_prefix: "docs_html".to_string(),
            raw_prefix: "docs_raw".to_string(),
        }
    }
}

/// Walk `root` and build the nested manifest object.
///
/// Entries whose name starts with `.` are skipped entirely, including
/// hidden directories and everything below them.
pub fn build_manifest(root: &Path, options: &BuildOptions) -> Result<Value, BuildError> {
    build_directory(root, &[], options)
}

fn read_dir_entries(dir: &Path) -> Result<Vec<fs::DirEntry>, BuildError> {
    let entries = fs::read_dir(dir).map_err(|source| BuildError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    entries
        .map(|entry| {
            entry.map_err(|source| BuildError::Io { path: dir.to_path_buf(), source })
        })
        .collect()
}

fn build_directory(
    dir: &Path,
    parents: &[String],
    options: &BuildOptions,
) -> Result<Value, BuildError> {
    let mut manifest = Map::new();

    for entry in read_dir_entries(dir)? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let file_type = entry.file_type().map_err(|source| BuildError::Io {
            path: entry.path(),
            source,
        })?;

        if file_type.is_dir() {
            let mut child_parents = parents.to_vec();
            child_parents.push(name.clone());
            let subtree = build_directory(&entry.path(), &child_parents, options)?;
            manifest.insert(name, subtree);
        } else if file_type.is_file() {
            let (display_name, leaf) = file_leaf(&name, parents, options);
            manifest.insert(display_name, leaf);
        }
        // Symlinks and other entry types are not part of the library.
    }

    Ok(Value::Object(manifest))
}

/// Build the dual-view leaf for one file.
///
/// Both addresses share the relative path; they differ only in the URL
/// prefix and (for the rendered view) the extension swapped to `.html`.
fn file_leaf(file_name: &str, parents: &[String], options: &BuildOptions) -> (String, Value) {
    let stem = match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    };

    let dir_part = parents.join("/");
    let relative = if dir_part.is_empty() {
        file_name.to_string()
    } else {
        format!("{dir_part}/{file_name}")
    };
    let rendered_relative = if dir_part.is_empty() {
        format!("{stem}.html")
    } else {
        format!("{dir_part}/{stem}.html")
    };

    let friendly_file = slugify(stem);
    let friendly = parents
        .iter()
        .map(|segment| slugify(segment))
        .chain(std::iter::once(friendly_file))
        .collect::<Vec<_>>()
        .join("/");

    let leaf = json!({
        "html_url": format!("{}/{rendered_relative}", options.rendered_prefix),
        "raw_url": format!("{}/{relative}", options.raw_prefix),
        "friendly_url": friendly,
    });
    (stem.to_string(), leaf)
}

/// Count dual-view leaves in a built manifest (for the CLI summary line).
pub fn leaf_count(manifest: &Value) -> usize {
    match manifest {
        Value::Object(map) => {
            if map.contains_key("html_url") || map.contains_key("raw_url") {
                1
            } else {
                map.values().map(leaf_count).sum()
            }
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn emits_dual_view_leaves_with_matching_paths() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("Talks/Thiền định.pdf"));

        let manifest = build_manifest(dir.path(), &BuildOptions::default()).unwrap();
        let leaf = &manifest["Talks"]["Thiền định"];
        assert_eq!(leaf["html_url"], "docs_html/Talks/Thiền định.html");
        assert_eq!(leaf["raw_url"], "docs_raw/Talks/Thiền định.pdf");
        assert_eq!(leaf["friendly_url"], "talks/thien-dinh");
    }

    #[test]
    fn rendered_and_original_differ_only_in_prefix_and_extension() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("a/b/Report.docx"));

        let manifest = build_manifest(dir.path(), &BuildOptions::default()).unwrap();
        let leaf = &manifest["a"]["b"]["Report"];
        let html = leaf["html_url"].as_str().unwrap();
        let raw = leaf["raw_url"].as_str().unwrap();
        assert_eq!(html.strip_prefix("docs_html/").unwrap().strip_suffix(".html").unwrap(),
                   raw.strip_prefix("docs_raw/").unwrap().strip_suffix(".docx").unwrap());
    }

    #[test]
    fn hidden_entries_are_excluded_recursively() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join(".secret/inside.pdf"));
        touch(&dir.path().join(".hidden.pdf"));
        touch(&dir.path().join("visible.pdf"));

        let manifest = build_manifest(dir.path(), &BuildOptions::default()).unwrap();
        let map = manifest.as_object().unwrap();
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("visible"));
    }

    #[test]
    fn file_without_extension_keeps_its_name() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("README"));

        let manifest = build_manifest(dir.path(), &BuildOptions::default()).unwrap();
        let leaf = &manifest["README"];
        assert_eq!(leaf["html_url"], "docs_html/README.html");
        assert_eq!(leaf["raw_url"], "docs_raw/README");
    }

    #[test]
    fn unreadable_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = build_manifest(&missing, &BuildOptions::default()).unwrap_err();
        assert!(matches!(err, BuildError::Io { .. }));
    }

    #[test]
    fn custom_prefixes_are_honored() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("doc.pdf"));

        let options = BuildOptions {
            rendered_prefix: "rendered".into(),
            raw_prefix: "originals".into(),
        };
        let manifest = build_manifest(dir.path(), &options).unwrap();
        assert_eq!(manifest["doc"]["html_url"], "rendered/doc.html");
        assert_eq!(manifest["doc"]["raw_url"], "originals/doc.pdf");
    }

    #[test]
    fn counts_leaves_across_nesting() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("a.pdf"));
        touch(&dir.path().join("x/b.pdf"));
        touch(&dir.path().join("x/y/c.pdf"));

        let manifest = build_manifest(dir.path(), &BuildOptions::default()).unwrap();
        assert_eq!(leaf_count(&manifest), 3);
    }
}
