//! Cover URL resolution with retry.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::services::RetryPolicy;
use crate::domain::entities::{CandidateSet, ItemId};
use crate::domain::errors::QueryError;
use crate::domain::ports::CoverLookupPort;

/// Queries ranked cover candidates for one item.
#[derive(Clone)]
pub struct ResolveCoverUseCase {
    lookup_port: Arc<dyn CoverLookupPort>,
    policy: RetryPolicy,
}

impl ResolveCoverUseCase {
    /// Creates new use case.
    #[must_use]
    pub fn new(lookup_port: Arc<dyn CoverLookupPort>, policy: RetryPolicy) -> Self {
        Self {
            lookup_port,
            policy,
        }
    }

    /// Resolves candidates for `item_id`, best score first.
    ///
    /// Transient failures are retried with a fixed delay until the policy's
    /// attempts run out. The first success ends the loop. An empty set is a
    /// success; telling it apart from a failure is the caller's job.
    ///
    /// # Errors
    /// Returns [`QueryError::RetriesExhausted`] when every attempt failed.
    pub async fn execute(&self, item_id: ItemId) -> Result<CandidateSet, QueryError> {
        let max_attempts = self.policy.max_attempts();
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!(item_id = %item_id, attempt, "Querying cover candidates");

            let error = match self.lookup_port.lookup(item_id).await {
                Ok(candidates) => {
                    debug!(
                        item_id = %item_id,
                        count = candidates.len(),
                        "Cover candidates resolved"
                    );
                    return Ok(CandidateSet::ranked(item_id, candidates));
                }
                Err(e) if !e.is_transient() => return Err(e),
                Err(e) => e,
            };

            if !self.policy.has_next(attempt) {
                warn!(
                    item_id = %item_id,
                    attempts = max_attempts,
                    error = %error,
                    "Cover lookup retries exhausted"
                );
                return Err(QueryError::RetriesExhausted {
                    attempts: max_attempts,
                    last: error.to_string(),
                });
            }

            debug!(
                item_id = %item_id,
                attempt,
                error = %error,
                delay_ms = self.policy.delay().as_millis(),
                "Cover lookup failed, retrying"
            );
            self.policy.wait().await;
        }
    }
}
