//! Candidate download with per-candidate retry and fallback.

use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info, warn};

use crate::application::services::RetryPolicy;
use crate::domain::entities::{Candidate, CandidateSet, ItemId};
use crate::domain::errors::DownloadError;
use crate::domain::ports::{CoverStorePort, ImageFetchPort};
use crate::domain::services::{AcceptancePolicy, sniff};

/// Result of working through one candidate.
enum CandidateOutcome {
    Accepted(Bytes),
    Unreachable,
    Invalid,
    Rejected,
}

/// Downloads the first acceptable cover among an item's candidates.
#[derive(Clone)]
pub struct DownloadCoverUseCase {
    fetch_port: Arc<dyn ImageFetchPort>,
    store_port: Arc<dyn CoverStorePort>,
    policy: RetryPolicy,
    acceptance: AcceptancePolicy,
}

impl DownloadCoverUseCase {
    /// Creates new use case.
    #[must_use]
    pub fn new(
        fetch_port: Arc<dyn ImageFetchPort>,
        store_port: Arc<dyn CoverStorePort>,
        policy: RetryPolicy,
        acceptance: AcceptancePolicy,
    ) -> Self {
        Self {
            fetch_port,
            store_port,
            policy,
            acceptance,
        }
    }

    /// Tries candidates in order and saves the first accepted image.
    ///
    /// Each candidate gets a fresh retry budget for transport and status
    /// failures. Images that cannot be sniffed or fail the acceptance policy
    /// move straight on to the next candidate. Earlier candidates are never
    /// revisited.
    ///
    /// # Errors
    /// Returns [`DownloadError::CandidatesExhausted`] if no candidate was
    /// accepted, or [`DownloadError::Store`] if the accepted image could not
    /// be written.
    pub async fn execute(&self, set: &CandidateSet) -> Result<PathBuf, DownloadError> {
        let item_id = set.item_id();

        for candidate in set.candidates() {
            match self.try_candidate(item_id, candidate).await {
                CandidateOutcome::Accepted(bytes) => {
                    let path = self
                        .store_port
                        .save(item_id, &candidate.url, &bytes)
                        .await?;
                    info!(item_id = %item_id, path = %path.display(), "Saved cover");
                    return Ok(path);
                }
                CandidateOutcome::Unreachable
                | CandidateOutcome::Invalid
                | CandidateOutcome::Rejected => {}
            }
        }

        warn!(
            item_id = %item_id,
            candidates = set.len(),
            "No acceptable cover among candidates"
        );
        Err(DownloadError::CandidatesExhausted {
            item_id,
            candidates: set.len(),
        })
    }

    async fn try_candidate(&self, item_id: ItemId, candidate: &Candidate) -> CandidateOutcome {
        let url = candidate.url.as_str();
        let mut attempt = 0;

        let bytes = loop {
            attempt += 1;
            debug!(item_id = %item_id, url, attempt, "Fetching image");

            match self.fetch_port.fetch(url).await {
                Ok(bytes) => break bytes,
                Err(e) if self.policy.has_next(attempt) => {
                    debug!(
                        item_id = %item_id,
                        url,
                        attempt,
                        error = %e,
                        "Image fetch failed, retrying"
                    );
                    self.policy.wait().await;
                }
                Err(e) => {
                    warn!(item_id = %item_id, url, error = %e, "Giving up on candidate");
                    return CandidateOutcome::Unreachable;
                }
            }
        };

        let dimensions = match sniff(&bytes) {
            Ok(dimensions) => dimensions,
            Err(e) => {
                warn!(item_id = %item_id, url, error = %e, "Downloaded file is not a usable image");
                return CandidateOutcome::Invalid;
            }
        };

        if self.acceptance.accepts(dimensions) {
            CandidateOutcome::Accepted(bytes)
        } else {
            info!(
                item_id = %item_id,
                url,
                size = %dimensions,
                policy = ?self.acceptance,
                "Image size rejected"
            );
            CandidateOutcome::Rejected
        }
    }
}
