//! Exclusive ownership of a bookmark data directory.
//!
//! A running server keeps the whole set in memory and writes it back on each
//! toggle, so any other writer to the same directory would be overwritten.
//! The owner holds an OS file lock on `<data_dir>/.lock` for its lifetime.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{CampusError, CampusResult};

const LOCK_FILE: &str = ".lock";

/// Held lock on a data directory; released on drop.
#[derive(Debug)]
pub struct DataDirLock {
    path: PathBuf,
    _file: File,
}

impl DataDirLock {
    /// Lock `data_dir`, creating it if needed. Fails with
    /// [`CampusError::DataDirLocked`] when another owner holds it.
    pub fn acquire(data_dir: &Path) -> CampusResult<Self> {
        fs::create_dir_all(data_dir)?;
        let path = data_dir.join(LOCK_FILE);

        let mut file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(&path)?;

        if file.try_lock_exclusive().is_err() {
            let holder = fs::read_to_string(&path).unwrap_or_default();
            return Err(CampusError::DataDirLocked {
                dir: data_dir.to_path_buf(),
                holder: holder.trim().to_string(),
            });
        }

        file.set_len(0)?;
        write!(file, "{}", std::process::id())?;
        tracing::debug!(path = %path.display(), "Locked data directory");

        Ok(DataDirLock { path, _file: file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
