//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Generic HTTP adapters.
pub mod http;
/// Steam client and Web API adapters.
pub mod steam;
/// SteamGridDB API client.
pub mod steamgriddb;
/// Cover directory on disk.
pub mod storage;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
pub use http::HttpImageFetcher;
pub use steam::{STEAM_API_KEY_PAGE, SteamInstall, SteamWebClient};
pub use steamgriddb::SteamGridDbClient;
pub use storage::CoverDirectory;
