//! Use case implementations.

mod acquire_covers_use_case;
mod download_cover_use_case;
mod find_missing_covers_use_case;
mod resolve_cover_use_case;

pub use acquire_covers_use_case::{AcquireCoversUseCase, DEFAULT_CONCURRENCY};
pub use download_cover_use_case::DownloadCoverUseCase;
pub use find_missing_covers_use_case::FindMissingCoversUseCase;
pub use resolve_cover_use_case::ResolveCoverUseCase;
