//! Owned items without a local cover.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::info;

use crate::domain::entities::ItemId;
use crate::domain::errors::LibraryError;
use crate::domain::ports::{CoverStorePort, OwnedItemsPort};

/// Compares the owned library with the cover directory.
pub struct FindMissingCoversUseCase {
    owned_port: Arc<dyn OwnedItemsPort>,
    store_port: Arc<dyn CoverStorePort>,
}

impl FindMissingCoversUseCase {
    /// Creates new use case.
    #[must_use]
    pub fn new(owned_port: Arc<dyn OwnedItemsPort>, store_port: Arc<dyn CoverStorePort>) -> Self {
        Self {
            owned_port,
            store_port,
        }
    }

    /// Returns owned items that have no cover file yet.
    ///
    /// # Errors
    /// Returns error if the owned library cannot be fetched or the cover
    /// directory cannot be listed.
    pub async fn execute(&self) -> Result<BTreeSet<ItemId>, LibraryError> {
        let library = self.owned_port.owned_items().await?;
        info!(
            owned = library.items.len(),
            reported = library.reported_count,
            "Fetched owned library"
        );

        let local = self.store_port.existing_covers().await?;
        info!(local = local.len(), "Found local covers");

        let missing: BTreeSet<ItemId> = library.items.difference(&local).copied().collect();
        info!(missing = missing.len(), "Covers missing locally");

        Ok(missing)
    }
}
