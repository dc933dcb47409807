pub mod bookmarks;
pub mod events;
pub mod export;
pub mod pages;
pub mod services;

use std::sync::Arc;

use anyhow::{Context, Result};
use campus_core::bookmarks::{DataDirLock, FileStorage};
use campus_core::config::CampusConfig;
use campus_core::{BookmarkStore, CampusError, Catalog};

pub fn catalog() -> Result<Catalog> {
    Catalog::builtin().context("Failed to load built-in catalog")
}

/// Bookmarks from the configured data directory.
pub fn open_bookmarks() -> Result<BookmarkStore> {
    let config = CampusConfig::load()?;
    let storage = FileStorage::new(config.data_path());
    Ok(BookmarkStore::load(Arc::new(storage)))
}

/// Bookmarks opened for modification. Fails while a campus-server owns the
/// data directory, since it would overwrite the change.
pub fn lock_bookmarks() -> Result<(DataDirLock, BookmarkStore)> {
    let config = CampusConfig::load()?;
    let data_dir = config.data_path();
    let lock = DataDirLock::acquire(&data_dir).map_err(|e| match e {
        CampusError::DataDirLocked { .. } => {
            anyhow::anyhow!("{e}\nToggle bookmarks through campus-server while it is running")
        }
        other => other.into(),
    })?;
    let storage = FileStorage::new(data_dir);
    Ok((lock, BookmarkStore::load(Arc::new(storage))))
}
