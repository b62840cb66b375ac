//! Image download error types.

use thiserror::Error;

/// Failure of a single image download attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum FetchError {
    #[error("network error during image download: {message}")]
    Network { message: String },

    #[error("image download returned HTTP {status}")]
    Status { status: u16 },

    #[error("image download timed out")]
    Timeout,

    #[error("failed to create HTTP client: {message}")]
    Client { message: String },
}

impl FetchError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates status error.
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self::Status { status }
    }
}
