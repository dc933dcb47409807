use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Context, Result};
use campus_core::bookmarks::{FileStorage, KeyValueStorage};
use campus_core::config::CampusConfig;
use campus_core::{BookmarkStore, Catalog};

/// Shared application state
///
/// The catalog is immutable; the bookmark store is the only mutable piece
/// and every handler goes through the mutex to change it.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    bookmarks: Arc<Mutex<BookmarkStore>>,
}

impl AppState {
    /// Load the catalog and the persisted bookmarks before serving.
    pub fn new(config: &CampusConfig) -> Result<Self> {
        let catalog = Catalog::builtin().context("Failed to load built-in catalog")?;
        let storage = FileStorage::new(config.data_path());
        tracing::info!(data_dir = %storage.dir().display(), "Using bookmark storage");

        Ok(Self::with_storage(catalog, Arc::new(storage)))
    }

    pub fn with_storage(catalog: Catalog, storage: Arc<dyn KeyValueStorage>) -> Self {
        AppState {
            catalog: Arc::new(catalog),
            bookmarks: Arc::new(Mutex::new(BookmarkStore::load(storage))),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn bookmarks(&self) -> Result<MutexGuard<'_, BookmarkStore>> {
        self.bookmarks
            .lock()
            .map_err(|_| anyhow::anyhow!("Bookmark store lock poisoned"))
    }
}
