//! Saved-event bookmarks.
//!
//! The store is created with [`BookmarkStore::load`], which reads the
//! persisted set before returning, so a store is always initialised when a
//! caller can see it. Every mutation writes the full set back as a JSON
//! array under [`BOOKMARKS_KEY`]. Persistence is best-effort: read and write
//! failures are logged and the in-memory set stays authoritative.

mod lock;
mod storage;

pub use lock::DataDirLock;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::constants::BOOKMARKS_KEY;

pub struct BookmarkStore {
    storage: Arc<dyn KeyValueStorage>,
    ids: BTreeSet<String>,
}

impl BookmarkStore {
    /// Read the persisted set. Missing, unreadable or malformed data all
    /// start the session with no bookmarks.
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        let ids = match storage.get(BOOKMARKS_KEY) {
            Ok(Some(raw)) => decode(&raw).unwrap_or_else(|| {
                tracing::warn!("Ignoring malformed bookmark data");
                BTreeSet::new()
            }),
            Ok(None) => BTreeSet::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read bookmarks, starting empty");
                BTreeSet::new()
            }
        };

        tracing::debug!(count = ids.len(), "Loaded bookmarks");
        BookmarkStore { storage, ids }
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Flip membership of `id` and persist. Returns whether `id` is now saved.
    pub fn toggle(&mut self, id: &str) -> bool {
        let saved = if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };
        self.persist();
        saved
    }

    /// Saved ids in ascending order.
    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether any of `ids` is saved.
    pub fn contains_any<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> bool {
        ids.into_iter().any(|id| self.ids.contains(id))
    }

    fn persist(&self) {
        let payload = encode(&self.ids);
        if let Err(e) = self.storage.set(BOOKMARKS_KEY, &payload) {
            tracing::warn!(error = %e, "Could not persist bookmarks");
        }
    }
}

impl std::fmt::Debug for BookmarkStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookmarkStore").field("ids", &self.ids).finish()
    }
}

/// Encode a bookmark set as a JSON array of strings.
pub fn encode(ids: &BTreeSet<String>) -> String {
    serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a JSON array of strings. Returns `None` for anything else.
pub fn decode(raw: &str) -> Option<BTreeSet<String>> {
    serde_json::from_str::<Vec<String>>(raw)
        .ok()
        .map(|ids| ids.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get(&self, _key: &str) -> io::Result<Option<String>> {
            Err(io::Error::other("storage disabled"))
        }

        fn set(&self, _key: &str, _value: &str) -> io::Result<()> {
            Err(io::Error::other("quota exceeded"))
        }
    }

    fn memory_store() -> (Arc<MemoryStorage>, BookmarkStore) {
        let storage = Arc::new(MemoryStorage::new());
        let store = BookmarkStore::load(storage.clone());
        (storage, store)
    }

    #[test]
    fn test_toggle_parity() {
        let (_, mut store) = memory_store();
        for n in 1..=6 {
            store.toggle("a");
            assert_eq!(store.is_saved("a"), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn test_toggle_returns_new_state() {
        let (_, mut store) = memory_store();
        assert!(store.toggle("a"));
        assert!(!store.toggle("a"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_contains_any() {
        let (_, mut store) = memory_store();
        assert!(!store.contains_any(["a", "b"]));

        store.toggle("b");
        assert!(store.contains_any(["a", "b"]));
        assert!(!store.contains_any(["a", "c"]));
        assert!(!store.contains_any(std::iter::empty()));
    }

    #[test]
    fn test_toggle_persists_full_set() {
        let (storage, mut store) = memory_store();
        store.toggle("b");
        store.toggle("a");

        let raw = storage.get(BOOKMARKS_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"["a","b"]"#);

        let reloaded = BookmarkStore::load(storage);
        assert!(reloaded.is_saved("a"));
        assert!(reloaded.is_saved("b"));
        assert_eq!(reloaded.len(), 2);
    }

    #[test]
    fn test_encoding_round_trips_membership() {
        let ids: BTreeSet<String> = ["z", "a", "m"].iter().map(|s| s.to_string()).collect();
        assert_eq!(decode(&encode(&ids)), Some(ids));
    }

    #[test]
    fn test_decode_ignores_order_and_duplicates() {
        let ids = decode(r#"["b","a","b"]"#).unwrap();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("a"));
    }

    #[test]
    fn test_malformed_payload_loads_empty() {
        for raw in ["not json", r#"{"a":true}"#, "[1,2,3]", ""] {
            let storage = Arc::new(MemoryStorage::with_entry(BOOKMARKS_KEY, raw));
            let store = BookmarkStore::load(storage);
            assert!(store.is_empty(), "payload {raw:?} should load empty");
        }
    }

    #[test]
    fn test_storage_failures_are_swallowed() {
        let mut store = BookmarkStore::load(Arc::new(BrokenStorage));
        assert!(store.is_empty());

        assert!(store.toggle("a"));
        assert!(store.is_saved("a"));
        assert_eq!(store.ids(), vec!["a".to_string()]);
    }

    #[test]
    fn test_file_backed_store_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::new(dir.path()));

        let mut store = BookmarkStore::load(storage.clone());
        store.toggle("workshop-cv-clinic");
        drop(store);

        let store = BookmarkStore::load(storage);
        assert!(store.is_saved("workshop-cv-clinic"));
    }
}
