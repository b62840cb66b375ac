//! Steam Web API client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::dto::OwnedGamesEnvelope;
use crate::domain::entities::{ApiKey, ItemId, SteamId64};
use crate::domain::errors::LibraryError;
use crate::domain::ports::{OwnedItemsPort, OwnedLibrary};

const STEAM_API_BASE: &str = "https://api.steampowered.com";
const OWNED_GAMES_PATH: &str = "/IPlayerService/GetOwnedGames/v0001/";

/// Page where users register a Steam Web API key.
pub const STEAM_API_KEY_PAGE: &str = "https://steamcommunity.com/dev/apikey";

/// Lists the games an account owns.
pub struct SteamWebClient {
    client: Client,
    base_url: String,
    api_key: ApiKey,
    steam_id: SteamId64,
}

impl SteamWebClient {
    /// Creates new client with default base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(api_key: ApiKey, steam_id: SteamId64) -> Result<Self, LibraryError> {
        Self::with_base_url(STEAM_API_BASE, api_key, steam_id)
    }

    /// Creates client with custom base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: ApiKey,
        steam_id: SteamId64,
    ) -> Result<Self, LibraryError> {
        let client = Client::builder()
            .user_agent(crate::USER_AGENT)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| LibraryError::owned_games(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
            steam_id,
        })
    }
}

#[async_trait]
impl OwnedItemsPort for SteamWebClient {
    async fn owned_items(&self) -> Result<OwnedLibrary, LibraryError> {
        let url = format!("{}{}", self.base_url, OWNED_GAMES_PATH);
        let steam_id = self.steam_id.to_string();

        debug!(steam_id = %self.steam_id, key = %self.api_key, "Fetching owned games");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("steamid", steam_id.as_str()),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to connect to Steam Web API");
                LibraryError::owned_games(e.without_url().to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LibraryError::owned_games(format!(
                "Steam Web API returned {status}"
            )));
        }

        let envelope: OwnedGamesEnvelope = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse owned games response");
            LibraryError::owned_games(format!("failed to parse response: {e}"))
        })?;

        let items = envelope
            .response
            .games
            .iter()
            .map(|game| ItemId::new(game.appid))
            .collect();

        Ok(OwnedLibrary {
            items,
            reported_count: envelope.response.game_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::test_server::{Reply, TestServer};

    fn client_for(server: &TestServer) -> SteamWebClient {
        SteamWebClient::with_base_url(
            server.url(""),
            ApiKey::new("0123456789abcdeffedcba9876543210").unwrap(),
            SteamId64::parse("76561197960287930").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = SteamWebClient::new(
            ApiKey::new("key").unwrap(),
            SteamId64::parse("76561197960287930").unwrap(),
        );
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_owned_games_parsed() {
        let server = TestServer::start([(
            OWNED_GAMES_PATH,
            Reply::json(
                200,
                r#"{"response":{"game_count":3,"games":[{"appid":570},{"appid":440}]}}"#,
            ),
        )])
        .await;

        let library = client_for(&server).owned_items().await.unwrap();

        assert_eq!(
            library.items,
            [440, 570]
                .into_iter()
                .map(ItemId::new)
                .collect::<std::collections::BTreeSet<_>>()
        );
        assert_eq!(library.reported_count, 3);

        let requests = server.requests().await;
        assert!(requests[0].contains("steamid=76561197960287930"));
        assert!(requests[0].contains("format=json"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_hard_failure() {
        let server = TestServer::start([(OWNED_GAMES_PATH, Reply::json(403, "{}"))]).await;

        let result = client_for(&server).owned_items().await;

        assert!(matches!(result, Err(LibraryError::OwnedGames { .. })));
        assert_eq!(server.requests().await.len(), 1);
    }
}
