//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Retry policy shared by the use cases.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{AcquireEvent, CoverReport, Phase};
pub use services::RetryPolicy;
pub use use_cases::{
    AcquireCoversUseCase, DownloadCoverUseCase, FindMissingCoversUseCase, ResolveCoverUseCase,
};
