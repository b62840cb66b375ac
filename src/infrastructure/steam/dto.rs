use serde::Deserialize;

/// `GetOwnedGames` response envelope.
#[derive(Debug, Deserialize)]
pub struct OwnedGamesEnvelope {
    /// Response body.
    pub response: OwnedGamesResponse,
}

/// `GetOwnedGames` response body. Private profiles return an empty object.
#[derive(Debug, Default, Deserialize)]
pub struct OwnedGamesResponse {
    /// Number of owned packages.
    #[serde(default)]
    pub game_count: u32,
    /// Owned games.
    #[serde(default)]
    pub games: Vec<OwnedGame>,
}

/// One owned game.
#[derive(Debug, Deserialize)]
pub struct OwnedGame {
    /// Steam app id.
    pub appid: u32,
}
