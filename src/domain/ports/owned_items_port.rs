//! Owned library port definition.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::domain::entities::ItemId;
use crate::domain::errors::LibraryError;

/// Items owned by the account, as reported by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnedLibrary {
    /// Owned item ids.
    pub items: BTreeSet<ItemId>,
    /// Count reported by the API, which may include hidden packages.
    pub reported_count: u32,
}

/// Port for listing the items an account owns.
#[async_trait]
pub trait OwnedItemsPort: Send + Sync {
    /// Fetches the owned library. Failures are not retried.
    async fn owned_items(&self) -> Result<OwnedLibrary, LibraryError>;
}
