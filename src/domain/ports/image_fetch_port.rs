//! Image download port definition.

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::errors::FetchError;

/// Port for downloading raw image bytes.
#[async_trait]
pub trait ImageFetchPort: Send + Sync {
    /// Downloads the body of `url`. Non-2xx responses are errors.
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError>;
}
