//! Plain HTTP image download.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::trace;

use crate::domain::errors::FetchError;
use crate::domain::ports::ImageFetchPort;

/// Fetches image bytes over an unauthenticated session.
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    /// Creates a fetcher whose requests time out after `timeout`.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(crate::USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Client {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ImageFetchPort for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        trace!(url, "GET image");

        let response = self.client.get(url).send().await.map_err(map_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(status.as_u16()));
        }

        response.bytes().await.map_err(map_transport)
    }
}

fn map_transport(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if e.is_builder() {
        FetchError::Client {
            message: e.to_string(),
        }
    } else {
        FetchError::network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::test_server::{Reply, TestServer, closed_addr};

    const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

    #[test]
    fn test_fetcher_creation() {
        assert!(HttpImageFetcher::new(Duration::from_secs(300)).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_url_is_client_error() {
        let fetcher = HttpImageFetcher::new(Duration::from_secs(1)).unwrap();

        let result = fetcher.fetch("not a url").await;

        assert!(matches!(result, Err(FetchError::Client { .. })));
    }

    #[tokio::test]
    async fn test_body_returned_on_success() {
        let server = TestServer::start([("/grid/a.png", Reply::bytes(200, PNG_BYTES))]).await;
        let fetcher = HttpImageFetcher::new(Duration::from_secs(5)).unwrap();

        let bytes = fetcher.fetch(&server.url("/grid/a.png")).await.unwrap();

        assert_eq!(bytes.as_ref(), PNG_BYTES);
    }

    #[tokio::test]
    async fn test_not_found_maps_to_status() {
        let server = TestServer::start(Vec::<(&'static str, Reply)>::new()).await;
        let fetcher = HttpImageFetcher::new(Duration::from_secs(5)).unwrap();

        let result = fetcher.fetch(&server.url("/grid/missing.png")).await;

        assert_eq!(result, Err(FetchError::status(404)));
    }

    #[tokio::test]
    async fn test_server_error_maps_to_status() {
        let server = TestServer::start([("/grid/a.png", Reply::bytes(503, Vec::new()))]).await;
        let fetcher = HttpImageFetcher::new(Duration::from_secs(5)).unwrap();

        let result = fetcher.fetch(&server.url("/grid/a.png")).await;

        assert_eq!(result, Err(FetchError::status(503)));
    }

    #[tokio::test]
    async fn test_connection_refused_maps_to_network() {
        let fetcher = HttpImageFetcher::new(Duration::from_secs(5)).unwrap();

        let result = fetcher
            .fetch(&format!("http://{}/grid/a.png", closed_addr()))
            .await;

        assert!(matches!(result, Err(FetchError::Network { .. })));
    }
}
