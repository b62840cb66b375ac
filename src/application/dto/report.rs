//! Aggregated result of an acquisition run.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;

use crate::domain::entities::{FetchOutcome, ItemId};

/// Four-way summary of a run, keyed by item id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverReport {
    /// Items whose cover was written, with the written path.
    pub succeeded: BTreeMap<ItemId, PathBuf>,
    /// Items the lookup API had no covers for.
    pub no_candidates: BTreeSet<ItemId>,
    /// Items whose lookup failed after all retries.
    pub query_failed: BTreeSet<ItemId>,
    /// Items where every candidate was exhausted.
    pub download_failed: BTreeSet<ItemId>,
}

impl CoverReport {
    /// Records a terminal outcome.
    pub fn record(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Success { item_id, path } => {
                self.succeeded.insert(item_id, path);
            }
            FetchOutcome::NoCandidatesFound { item_id } => {
                self.no_candidates.insert(item_id);
            }
            FetchOutcome::QueryFailed { item_id } => {
                self.query_failed.insert(item_id);
            }
            FetchOutcome::DownloadFailed { item_id } => {
                self.download_failed.insert(item_id);
            }
        }
    }

    /// Returns the number of recorded items.
    #[must_use]
    pub fn total(&self) -> usize {
        self.succeeded.len()
            + self.no_candidates.len()
            + self.query_failed.len()
            + self.download_failed.len()
    }

    /// Returns the number of items that did not get a cover.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.total() - self.succeeded.len()
    }
}

fn write_ids<'a>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    ids: impl ExactSizeIterator<Item = &'a ItemId>,
) -> fmt::Result {
    write!(f, "{label} ({}):", ids.len())?;
    for id in ids {
        write!(f, " {id}")?;
    }
    writeln!(f)
}

impl fmt::Display for CoverReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ids(f, "Saved", self.succeeded.keys())?;
        write_ids(f, "No cover found", self.no_candidates.iter())?;
        write_ids(f, "Cover lookup failed", self.query_failed.iter())?;
        write_ids(f, "Image download failed", self.download_failed.iter())
    }
}
