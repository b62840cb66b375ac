//! Terminal per-item results of the acquisition pipeline.

use std::path::PathBuf;

use super::ItemId;

/// Final result for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A cover was accepted and written to disk.
    Success {
        /// The item.
        item_id: ItemId,
        /// Where the cover was written.
        path: PathBuf,
    },
    /// The lookup succeeded but returned no candidates.
    NoCandidatesFound {
        /// The item.
        item_id: ItemId,
    },
    /// The lookup kept failing until its retry budget ran out.
    QueryFailed {
        /// The item.
        item_id: ItemId,
    },
    /// Every candidate was exhausted without an accepted image.
    DownloadFailed {
        /// The item.
        item_id: ItemId,
    },
}

impl FetchOutcome {
    /// Returns the item this outcome belongs to.
    #[must_use]
    pub const fn item_id(&self) -> ItemId {
        match self {
            Self::Success { item_id, .. }
            | Self::NoCandidatesFound { item_id }
            | Self::QueryFailed { item_id }
            | Self::DownloadFailed { item_id } => *item_id,
        }
    }
}
