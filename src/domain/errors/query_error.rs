//! Cover lookup error types.

use thiserror::Error;

/// Failure of a single cover lookup request, or of the whole retry loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum QueryError {
    #[error("network error during cover lookup: {message}")]
    Network { message: String },

    #[error("cover lookup returned HTTP {status}")]
    Status { status: u16 },

    #[error("cover lookup reported failure: {message}")]
    Unsuccessful { message: String },

    #[error("failed to decode cover lookup response: {message}")]
    Decode { message: String },

    #[error("cover lookup gave up after {attempts} attempts, last error: {last}")]
    RetriesExhausted { attempts: u32, last: String },

    #[error("failed to create HTTP client: {message}")]
    Client { message: String },
}

impl QueryError {
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

    /// Creates error for a `success: false` payload.
    #[must_use]
    pub fn unsuccessful(message: impl Into<String>) -> Self {
        Self::Unsuccessful {
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Returns whether another attempt may succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Network { .. }
                | Self::Status { .. }
                | Self::Unsuccessful { .. }
                | Self::Decode { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_failures_are_transient() {
        assert!(QueryError::network("reset").is_transient());
        assert!(QueryError::status(500).is_transient());
        assert!(QueryError::unsuccessful("success=false").is_transient());
        assert!(QueryError::decode("eof").is_transient());
    }

    #[test]
    fn test_client_and_exhausted_are_final() {
        let client = QueryError::Client {
            message: "bad header".to_string(),
        };
        let exhausted = QueryError::RetriesExhausted {
            attempts: 3,
            last: "HTTP 500".to_string(),
        };

        assert!(!client.is_transient());
        assert!(!exhausted.is_transient());
    }
}
