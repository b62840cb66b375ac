//! Steam grid directory as a cover store.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, trace};

use crate::domain::entities::ItemId;
use crate::domain::errors::{LibraryError, StoreError};
use crate::domain::ports::CoverStorePort;
use crate::domain::services::{cover_file_name, parse_cover_file_name};

/// Cover files stored as `<item>p.<ext>` in one flat directory.
pub struct CoverDirectory {
    dir: PathBuf,
}

impl CoverDirectory {
    /// Creates a store rooted at `dir`. Nothing is touched on disk.
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Creates the directory and its parents if missing.
    ///
    /// # Errors
    /// Returns [`LibraryError::CoverDirectory`] if creation fails.
    pub async fn ensure_exists(&self) -> Result<(), LibraryError> {
        if !fs::try_exists(&self.dir).await.unwrap_or(false) {
            debug!(path = %self.dir.display(), "Creating cover directory");
        }
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| LibraryError::CoverDirectory {
                path: self.dir.clone(),
                source,
            })
    }
}

#[async_trait]
impl CoverStorePort for CoverDirectory {
    async fn save(&self, item_id: ItemId, url: &str, bytes: &[u8]) -> Result<PathBuf, StoreError> {
        let path = self.dir.join(cover_file_name(item_id, url));
        let write_error = |source| StoreError::Write {
            path: path.clone(),
            source,
        };

        let mut file = fs::File::create(&path).await.map_err(write_error)?;
        file.write_all(bytes).await.map_err(write_error)?;
        file.flush().await.map_err(write_error)?;

        trace!(item_id = %item_id, path = %path.display(), size = bytes.len(), "Wrote cover");
        Ok(path)
    }

    async fn existing_covers(&self) -> Result<BTreeSet<ItemId>, StoreError> {
        let list_error = |source| StoreError::List {
            path: self.dir.clone(),
            source,
        };

        let mut entries = fs::read_dir(&self.dir).await.map_err(list_error)?;
        let mut covers = BTreeSet::new();

        while let Some(entry) = entries.next_entry().await.map_err(list_error)? {
            if let Some(item_id) = entry.file_name().to_str().and_then(parse_cover_file_name) {
                covers.insert(item_id);
            }
        }

        debug!(path = %self.dir.display(), count = covers.len(), "Listed existing covers");
        Ok(covers)
    }
}
