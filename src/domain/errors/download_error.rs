//! Item-level download errors.

use thiserror::Error;

use super::StoreError;
use crate::domain::entities::ItemId;

/// An item's cover could not be acquired.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum DownloadError {
    #[error("no acceptable cover for {item_id} among {candidates} candidates")]
    CandidatesExhausted { item_id: ItemId, candidates: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}
