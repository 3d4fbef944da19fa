//! Persisted session state: expanded folders and the unlock flag.
//!
//! Both survive page reloads via localStorage. The storage backend is
//! abstracted behind [`SettingsStore`] so the logic stays testable off
//! the browser.

use std::collections::HashSet;

/// Keys under which session state is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey {
    /// JSON array of folder paths currently expanded in the sidebar.
    OpenFolders,
    /// `"true"` once the protected sections have been unlocked.
    Unlocked,
}

impl StorageKey {
    pub fn name(self) -> &'static str {
        match self {
            Self::OpenFolders => "sidebarOpenFolders",
            Self::Unlocked => "isAuthenticated",
        }
    }
}

/// A string key-value store. Implemented over localStorage in the
/// browser and over a HashMap in tests.
pub trait SettingsStore {
    fn read(&self, key: StorageKey) -> Option<String>;
    fn write(&self, key: StorageKey, value: &str);
}

/// Load the set of expanded folder paths.
///
/// A missing or malformed entry yields the empty set; stale state never
/// blocks startup.
pub fn load_open_folders(store: &impl SettingsStore) -> HashSet<String> {
    let Some(raw) = store.read(StorageKey::OpenFolders) else {
        return HashSet::new();
    };
    serde_json::from_str::<Vec<String>>(&raw)
        .map(|paths| paths.into_iter().collect())
        .unwrap_or_default()
}

/// Persist the set of expanded folder paths as a JSON array.
pub fn save_open_folders(store: &impl SettingsStore, open: &HashSet<String>) {
    let mut paths: Vec<&str> = open.iter().map(String::as_str).collect();
    paths.sort_unstable();
    if let Ok(json) = serde_json::to_string(&paths) {
        store.write(StorageKey::OpenFolders, &json);
    }
}

/// Whether protected sections have been unlocked this browser profile.
pub fn load_unlocked(store: &impl SettingsStore) -> bool {
    store
        .read(StorageKey::Unlocked)
        .is_some_and(|v| v == "true")
}

/// Record a successful unlock.
pub fn save_unlocked(store: &impl SettingsStore) {
    store.write(StorageKey::Unlocked, "true");
}

// =============================================================================
// Browser Storage Backend
// =============================================================================

/// localStorage-backed store. All operations are no-ops when storage is
/// unavailable (private browsing, disabled cookies).
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSettings;

impl SettingsStore for LocalSettings {
    fn read(&self, key: StorageKey) -> Option<String> {
        crate::utils::dom::local_storage()?.get_item(key.name()).ok()?
    }

    fn write(&self, key: StorageKey, value: &str) {
        if let Some(storage) = crate::utils::dom::local_storage() {
            let _ = storage.set_item(key.name(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        entries: RefCell<HashMap<&'static str, String>>,
    }

    impl SettingsStore for MemoryStore {
        fn read(&self, key: StorageKey) -> Option<String> {
            self.entries.borrow().get(key.name()).cloned()
        }

        fn write(&self, key: StorageKey, value: &str) {
            self.entries.borrow_mut().insert(key.name(), value.to_string());
        }
    }

    #[test]
    fn open_folders_round_trip() {
        let store = MemoryStore::default();
        let open: HashSet<String> =
            ["talks".to_string(), "talks/retreats".to_string()].into();

        save_open_folders(&store, &open);
        assert_eq!(load_open_folders(&store), open);
    }

    #[test]
    fn open_folders_default_to_empty() {
        let store = MemoryStore::default();
        assert!(load_open_folders(&store).is_empty());
    }

    #[test]
    fn malformed_open_folders_are_discarded() {
        let store = MemoryStore::default();
        store.write(StorageKey::OpenFolders, "{not json");
        assert!(load_open_folders(&store).is_empty());

        store.write(StorageKey::OpenFolders, "{\"a\": 1}");
        assert!(load_open_folders(&store).is_empty());
    }

    #[test]
    fn unlocked_flag_persists() {
        let store = MemoryStore::default();
        assert!(!load_unlocked(&store));

        save_unlocked(&store);
        assert!(load_unlocked(&store));
    }

    #[test]
    fn unlocked_requires_exact_value() {
        let store = MemoryStore::default();
        store.write(StorageKey::Unlocked, "yes");
        assert!(!load_unlocked(&store));
    }

    #[test]
    fn storage_keys_match_persisted_names() {
        assert_eq!(StorageKey::OpenFolders.name(), "sidebarOpenFolders");
        assert_eq!(StorageKey::Unlocked.name(), "isAuthenticated");
    }
}
