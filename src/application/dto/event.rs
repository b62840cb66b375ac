//! Progress events published while a run is in flight.

use std::fmt;

use crate::domain::entities::{FetchOutcome, ItemId};

/// Orchestration stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Querying candidate URLs.
    Resolve,
    /// Downloading and validating images.
    Download,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolve => write!(f, "resolve"),
            Self::Download => write!(f, "download"),
        }
    }
}

/// Message sent as tasks complete, in completion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquireEvent {
    /// A phase is starting with `total` tasks.
    PhaseStarted {
        /// The phase.
        phase: Phase,
        /// Number of tasks in the phase.
        total: usize,
    },
    /// One task finished.
    ItemCompleted {
        /// The phase.
        phase: Phase,
        /// The item.
        item_id: ItemId,
        /// Tasks finished so far in this phase.
        completed: usize,
        /// Number of tasks in the phase.
        total: usize,
        /// Terminal outcome, or `None` if the item moves on to the download phase.
        outcome: Option<FetchOutcome>,
    },
}
