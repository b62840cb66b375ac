//! Cover lookup port definition.

use async_trait::async_trait;

use crate::domain::entities::{Candidate, ItemId};
use crate::domain::errors::QueryError;

/// Port for the cover-lookup API.
#[async_trait]
pub trait CoverLookupPort: Send + Sync {
    /// Performs one lookup request for an item.
    ///
    /// Returns the candidates of a successful payload in API order. Any
    /// transport failure, non-2xx status, or `success: false` payload is an
    /// error; retrying is left to the caller.
    async fn lookup(&self, item_id: ItemId) -> Result<Vec<Candidate>, QueryError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::{HashMap, VecDeque};
    use std::time::Duration;
    use tokio::sync::RwLock;

    /// Scripted lookup responses, consumed one per call.
    ///
    /// Items without remaining script entries answer `success: false`.
    pub struct MockCoverLookup {
        scripts: RwLock<HashMap<ItemId, VecDeque<Result<Vec<Candidate>, QueryError>>>>,
        calls: RwLock<HashMap<ItemId, u32>>,
        delays: HashMap<ItemId, Duration>,
    }

    impl MockCoverLookup {
        /// Creates a mock with no scripted items.
        pub fn new() -> Self {
            Self {
                scripts: RwLock::new(HashMap::new()),
                calls: RwLock::new(HashMap::new()),
                delays: HashMap::new(),
            }
        }

        /// Makes every request for an item take `delay` before answering.
        pub fn with_delay(mut self, item_id: ItemId, delay: Duration) -> Self {
            self.delays.insert(item_id, delay);
            self
        }

        /// Appends responses for an item.
        pub fn with_responses(
            self,
            item_id: ItemId,
            responses: impl IntoIterator<Item = Result<Vec<Candidate>, QueryError>>,
        ) -> Self {
            self.scripts
                .try_write()
                .expect("mock not shared yet")
                .entry(item_id)
                .or_default()
                .extend(responses);
            self
        }

        /// Returns how many requests were made for an item.
        pub async fn calls(&self, item_id: ItemId) -> u32 {
            self.calls.read().await.get(&item_id).copied().unwrap_or(0)
        }

        /// Returns the total number of requests.
        pub async fn total_calls(&self) -> u32 {
            self.calls.read().await.values().sum()
        }
    }

    impl Default for MockCoverLookup {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl CoverLookupPort for MockCoverLookup {
        async fn lookup(&self, item_id: ItemId) -> Result<Vec<Candidate>, QueryError> {
            *self.calls.write().await.entry(item_id).or_default() += 1;
            if let Some(delay) = self.delays.get(&item_id) {
                tokio::time::sleep(*delay).await;
            }
            self.scripts
                .write()
                .await
                .get_mut(&item_id)
                .and_then(VecDeque::pop_front)
                .unwrap_or_else(|| Err(QueryError::unsuccessful("mock has no response")))
        }
    }
}
