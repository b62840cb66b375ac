//! Cover persistence port definition.

use std::collections::BTreeSet;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::entities::ItemId;
use crate::domain::errors::StoreError;

/// Port for the directory holding cover files.
#[async_trait]
pub trait CoverStorePort: Send + Sync {
    /// Writes an accepted cover, naming it after the item and the source
    /// URL's extension. Returns the written path.
    async fn save(&self, item_id: ItemId, url: &str, bytes: &[u8]) -> Result<PathBuf, StoreError>;

    /// Lists the items that already have a cover.
    async fn existing_covers(&self) -> Result<BTreeSet<ItemId>, StoreError>;
}
