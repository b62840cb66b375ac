//! SteamGridDB API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;
use tracing::{debug, warn};

use super::dto::GridsResponse;
use crate::domain::entities::{ApiKey, Candidate, ItemId};
use crate::domain::errors::QueryError;
use crate::domain::ports::CoverLookupPort;

const STEAMGRIDDB_API_BASE: &str = "https://www.steamgriddb.com/api/v2";

/// Cover lookup backed by SteamGridDB's grid endpoint.
///
/// Owns one HTTP session carrying the bearer token for its whole lifetime.
pub struct SteamGridDbClient {
    client: Client,
    base_url: String,
    styles: String,
}

impl SteamGridDbClient {
    /// Creates new client with default base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(
        api_key: &ApiKey,
        styles: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, QueryError> {
        Self::with_base_url(STEAMGRIDDB_API_BASE, api_key, styles, timeout)
    }

    /// Creates client with custom base URL.
    ///
    /// # Errors
    /// Returns error if the key is not a valid header value or HTTP client
    /// creation fails.
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: &ApiKey,
        styles: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, QueryError> {
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key.as_str()))
            .map_err(|_| QueryError::Client {
                message: "API key contains invalid header characters".to_string(),
            })?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, bearer);

        let client = Client::builder()
            .user_agent(crate::USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| QueryError::Client {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            styles: styles.into(),
        })
    }
}

#[async_trait]
impl CoverLookupPort for SteamGridDbClient {
    async fn lookup(&self, item_id: ItemId) -> Result<Vec<Candidate>, QueryError> {
        let url = format!("{}/grids/steam/{}", self.base_url, item_id);

        let mut request = self.client.get(&url);
        if !self.styles.is_empty() {
            request = request.query(&[("styles", self.styles.as_str())]);
        }

        let response = request.send().await.map_err(|e| {
            debug!(item_id = %item_id, error = %e, "Cover lookup request failed");
            if e.is_timeout() {
                QueryError::network("request timed out")
            } else if e.is_connect() {
                QueryError::network("failed to connect to SteamGridDB")
            } else {
                QueryError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::status(status.as_u16()));
        }

        let payload: GridsResponse = response.json().await.map_err(|e| {
            warn!(item_id = %item_id, error = %e, "Failed to parse grids response");
            QueryError::decode(e.to_string())
        })?;

        if !payload.success {
            let message = if payload.errors.is_empty() {
                "success=false".to_string()
            } else {
                payload.errors.join("; ")
            };
            return Err(QueryError::unsuccessful(message));
        }

        Ok(payload
            .data
            .into_iter()
            .map(|grid| Candidate::new(grid.url, grid.score))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::test_server::{Reply, TestServer, closed_addr};

    const KEY: &str = "0123456789abcdeffedcba9876543210";
    const GRIDS_440: &str = "/api/v2/grids/steam/440";

    fn client_for(base_url: &str) -> SteamGridDbClient {
        let key = ApiKey::new(KEY).unwrap();
        SteamGridDbClient::with_base_url(base_url, &key, "alternate", Duration::from_secs(5))
            .unwrap()
    }

    #[test]
    fn test_client_creation() {
        let key = ApiKey::new(KEY).unwrap();
        let client = SteamGridDbClient::new(&key, "alternate", Duration::from_secs(300));
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_header_key_rejected() {
        let key = ApiKey::new("bad\nkey").unwrap();
        let client = SteamGridDbClient::new(&key, "alternate", Duration::from_secs(300));
        assert!(matches!(client, Err(QueryError::Client { .. })));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let key = ApiKey::new("key").unwrap();
        let client = SteamGridDbClient::with_base_url(
            "http://localhost:9/api/v2/",
            &key,
            "",
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(client.base_url, "http://localhost:9/api/v2");
    }

    #[tokio::test]
    async fn test_success_payload_keeps_api_order() {
        let server = TestServer::start([(
            GRIDS_440,
            Reply::json(
                200,
                r#"{"success":true,"data":[
                    {"url":"https://cdn.example/low.jpg","score":1},
                    {"url":"https://cdn.example/high.png","score":9}
                ]}"#,
            ),
        )])
        .await;

        let candidates = client_for(&server.url("/api/v2"))
            .lookup(ItemId::new(440))
            .await
            .unwrap();

        assert_eq!(
            candidates,
            vec![
                Candidate::new("https://cdn.example/low.jpg", 1.0),
                Candidate::new("https://cdn.example/high.png", 9.0),
            ]
        );

        let requests = server.requests().await;
        assert_eq!(requests.len(), 1);
        assert!(requests[0].starts_with("get /api/v2/grids/steam/440?styles=alternate "));
        assert!(requests[0].contains(&format!("authorization: bearer {KEY}")));
    }

    #[tokio::test]
    async fn test_empty_data_is_success() {
        let server =
            TestServer::start([(GRIDS_440, Reply::json(200, r#"{"success":true,"data":[]}"#))])
                .await;

        let candidates = client_for(&server.url("/api/v2"))
            .lookup(ItemId::new(440))
            .await
            .unwrap();

        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_maps_to_status() {
        let server = TestServer::start([(GRIDS_440, Reply::json(500, "{}"))]).await;

        let result = client_for(&server.url("/api/v2"))
            .lookup(ItemId::new(440))
            .await;

        assert_eq!(result, Err(QueryError::status(500)));
    }

    #[tokio::test]
    async fn test_unsuccessful_payload_maps_to_unsuccessful() {
        let server = TestServer::start([(
            GRIDS_440,
            Reply::json(200, r#"{"success":false,"errors":["Game not found"]}"#),
        )])
        .await;

        let result = client_for(&server.url("/api/v2"))
            .lookup(ItemId::new(440))
            .await;

        assert_eq!(result, Err(QueryError::unsuccessful("Game not found")));
    }

    #[tokio::test]
    async fn test_garbage_body_maps_to_decode() {
        let server = TestServer::start([(GRIDS_440, Reply::json(200, "<html>"))]).await;

        let result = client_for(&server.url("/api/v2"))
            .lookup(ItemId::new(440))
            .await;

        assert!(matches!(result, Err(QueryError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_connection_refused_maps_to_network() {
        let base = format!("http://{}/api/v2", closed_addr());

        let result = client_for(&base).lookup(ItemId::new(440)).await;

        assert!(matches!(result, Err(QueryError::Network { .. })));
    }
}
