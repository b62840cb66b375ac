//! Two-phase cover acquisition: resolve candidates, then download.

use std::collections::BTreeSet;

use futures_util::{StreamExt, stream};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::{DownloadCoverUseCase, ResolveCoverUseCase};
use crate::application::dto::{AcquireEvent, CoverReport, Phase};
use crate::domain::entities::{CandidateSet, FetchOutcome, ItemId};

/// Default number of in-flight requests per phase.
pub const DEFAULT_CONCURRENCY: usize = 16;

/// Fans resolution and download out over a set of items.
pub struct AcquireCoversUseCase {
    resolver: ResolveCoverUseCase,
    downloader: DownloadCoverUseCase,
    concurrency: usize,
    event_tx: Option<mpsc::UnboundedSender<AcquireEvent>>,
}

impl AcquireCoversUseCase {
    /// Creates new use case with [`DEFAULT_CONCURRENCY`].
    #[must_use]
    pub fn new(resolver: ResolveCoverUseCase, downloader: DownloadCoverUseCase) -> Self {
        Self {
            resolver,
            downloader,
            concurrency: DEFAULT_CONCURRENCY,
            event_tx: None,
        }
    }

    /// Limits how many items are processed at once in each phase.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Publishes progress events on `event_tx`.
    #[must_use]
    pub fn with_events(mut self, event_tx: mpsc::UnboundedSender<AcquireEvent>) -> Self {
        self.event_tx = Some(event_tx);
        self
    }

    /// Runs both phases and returns the aggregated report.
    ///
    /// A failure for one item never stops or delays the others. Duplicate
    /// ids are processed once. Each phase's stage, and the HTTP session it
    /// owns, is dropped as soon as that phase completes.
    pub async fn execute(self, items: impl IntoIterator<Item = ItemId>) -> CoverReport {
        let Self {
            resolver,
            downloader,
            concurrency,
            event_tx,
        } = self;
        let events = EventSink(event_tx);
        let items: BTreeSet<ItemId> = items.into_iter().collect();
        let mut report = CoverReport::default();

        let resolved = resolve_all(resolver, items, concurrency, &events, &mut report).await;
        download_all(downloader, resolved, concurrency, &events, &mut report).await;

        info!(
            saved = report.succeeded.len(),
            no_cover = report.no_candidates.len(),
            query_failed = report.query_failed.len(),
            download_failed = report.download_failed.len(),
            "Cover acquisition finished"
        );
        report
    }
}

struct EventSink(Option<mpsc::UnboundedSender<AcquireEvent>>);

impl EventSink {
    fn emit(&self, event: AcquireEvent) {
        if let Some(tx) = &self.0 {
            let _ = tx.send(event);
        }
    }
}

async fn resolve_all(
    resolver: ResolveCoverUseCase,
    items: BTreeSet<ItemId>,
    concurrency: usize,
    events: &EventSink,
    report: &mut CoverReport,
) -> Vec<CandidateSet> {
    let total = items.len();
    info!(total, concurrency, "Resolving cover URLs");
    events.emit(AcquireEvent::PhaseStarted {
        phase: Phase::Resolve,
        total,
    });

    let resolver = &resolver;
    let mut results = stream::iter(items)
        .map(|item_id| async move { (item_id, resolver.execute(item_id).await) })
        .buffer_unordered(concurrency);

    let mut resolved = Vec::new();
    let mut completed = 0;

    while let Some((item_id, result)) = results.next().await {
        completed += 1;
        let outcome = match result {
            Ok(set) if set.is_empty() => {
                debug!(item_id = %item_id, "No cover candidates");
                Some(FetchOutcome::NoCandidatesFound { item_id })
            }
            Ok(set) => {
                resolved.push(set);
                None
            }
            Err(e) => {
                warn!(item_id = %item_id, error = %e, "Cover lookup failed");
                Some(FetchOutcome::QueryFailed { item_id })
            }
        };

        events.emit(AcquireEvent::ItemCompleted {
            phase: Phase::Resolve,
            item_id,
            completed,
            total,
            outcome: outcome.clone(),
        });
        if let Some(outcome) = outcome {
            report.record(outcome);
        }
    }

    resolved
}

async fn download_all(
    downloader: DownloadCoverUseCase,
    resolved: Vec<CandidateSet>,
    concurrency: usize,
    events: &EventSink,
    report: &mut CoverReport,
) {
    let total = resolved.len();
    info!(total, concurrency, "Downloading covers");
    events.emit(AcquireEvent::PhaseStarted {
        phase: Phase::Download,
        total,
    });

    let downloader = &downloader;
    let mut results = stream::iter(resolved)
        .map(|set| async move {
            let result = downloader.execute(&set).await;
            (set.item_id(), result)
        })
        .buffer_unordered(concurrency);

    let mut completed = 0;

    while let Some((item_id, result)) = results.next().await {
        completed += 1;
        let outcome = match result {
            Ok(path) => FetchOutcome::Success { item_id, path },
            Err(e) => {
                warn!(item_id = %item_id, error = %e, "Cover download failed");
                FetchOutcome::DownloadFailed { item_id }
            }
        };

        events.emit(AcquireEvent::ItemCompleted {
            phase: Phase::Download,
            item_id,
            completed,
            total,
            outcome: Some(outcome.clone()),
        });
        report.record(outcome);
    }
}
