//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::RetryPolicy;
use crate::application::use_cases::DEFAULT_CONCURRENCY;
use crate::domain::entities::{ApiKey, SteamId64};
use crate::domain::errors::LibraryError;
use crate::domain::services::AcceptancePolicy;

use super::args::CliArgs;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration from file and CLI.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Steam account and install settings.
    #[serde(default)]
    pub steam: SteamConfig,

    /// Cover lookup API settings.
    #[serde(default)]
    pub steamgriddb: SteamGridDbConfig,

    /// Retry, concurrency and acceptance settings.
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Open the Steam API key page when the key is missing.
    #[serde(skip)]
    pub open_key_page: bool,

    /// List missing covers without downloading.
    #[serde(skip)]
    pub dry_run: bool,
}

/// Steam configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SteamConfig {
    /// Steam Web API key.
    #[serde(default)]
    pub api_key: Option<String>,

    /// 17-digit Steam id.
    #[serde(default)]
    pub steam_id: Option<String>,

    /// Steam install directory; detected when unset.
    #[serde(default)]
    pub install_path: Option<PathBuf>,

    /// Cover directory; derived from the install path when unset.
    #[serde(default)]
    pub grid_dir: Option<PathBuf>,
}

/// `SteamGridDB` configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SteamGridDbConfig {
    /// Bearer token for the API.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Grid styles to request, comma separated.
    #[serde(default = "default_styles")]
    pub styles: String,
}

impl Default for SteamGridDbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            styles: default_styles(),
        }
    }
}

/// Pipeline tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Items processed at once per phase.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Attempts per cover lookup.
    #[serde(default = "default_query_attempts")]
    pub query_attempts: u32,

    /// Delay between cover lookups in milliseconds.
    #[serde(default = "default_query_delay_ms")]
    pub query_delay_ms: u64,

    /// Attempts per download candidate.
    #[serde(default = "default_download_attempts")]
    pub download_attempts: u32,

    /// Delay between download attempts in milliseconds.
    #[serde(default)]
    pub download_delay_ms: u64,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Which downloaded images are kept.
    #[serde(default)]
    pub acceptance: AcceptancePolicy,
}

impl PipelineConfig {
    /// Retry policy for cover lookups.
    #[must_use]
    pub fn query_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.query_attempts,
            Duration::from_millis(self.query_delay_ms),
        )
    }

    /// Retry policy for each download candidate.
    #[must_use]
    pub fn download_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.download_attempts,
            Duration::from_millis(self.download_delay_ms),
        )
    }

    /// Request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            query_attempts: default_query_attempts(),
            query_delay_ms: default_query_delay_ms(),
            download_attempts: default_download_attempts(),
            download_delay_ms: 0,
            request_timeout_secs: default_request_timeout_secs(),
            acceptance: AcceptancePolicy::default(),
        }
    }
}

fn default_styles() -> String {
    "alternate".to_string()
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

fn default_query_attempts() -> u32 {
    RetryPolicy::QUERY_ATTEMPTS
}

#[allow(clippy::cast_possible_truncation)]
fn default_query_delay_ms() -> u64 {
    RetryPolicy::QUERY_DELAY.as_millis() as u64
}

fn default_download_attempts() -> u32 {
    RetryPolicy::DOWNLOAD_ATTEMPTS
}

fn default_request_timeout_secs() -> u64 {
    300
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(api_key) = args.steam_api_key {
            self.steam.api_key = Some(api_key);
        }
        if let Some(steam_id) = args.steam_id {
            self.steam.steam_id = Some(steam_id);
        }
        if let Some(install_path) = args.steam_path {
            self.steam.install_path = Some(install_path);
        }
        if let Some(grid_dir) = args.grid_dir {
            self.steam.grid_dir = Some(grid_dir);
        }
        if let Some(api_key) = args.sgdb_api_key {
            self.steamgriddb.api_key = Some(api_key);
        }
        if let Some(styles) = args.styles {
            self.steamgriddb.styles = styles;
        }
        if let Some(concurrency) = args.concurrency {
            self.pipeline.concurrency = concurrency;
        }
        if args.accept_any_size {
            self.pipeline.acceptance = AcceptancePolicy::AcceptAll;
        }
        self.open_key_page = args.open_key_page;
        self.dry_run = args.dry_run;
    }

    /// Returns the Steam Web API key.
    ///
    /// # Errors
    /// Returns error if no non-blank key is configured.
    pub fn steam_api_key(&self) -> Result<ApiKey, LibraryError> {
        self.steam
            .api_key
            .as_deref()
            .and_then(ApiKey::new)
            .ok_or(LibraryError::MissingCredential {
                name: "Steam API key (--steam-api-key or STEAM_API_KEY)",
            })
    }

    /// Returns the Steam account id.
    ///
    /// # Errors
    /// Returns error if the id is missing or not 17 digits.
    pub fn steam_id(&self) -> Result<SteamId64, LibraryError> {
        let value = self
            .steam
            .steam_id
            .as_deref()
            .ok_or(LibraryError::MissingCredential {
                name: "Steam id (--steam-id or STEAM_ID64)",
            })?;
        SteamId64::parse(value).ok_or_else(|| LibraryError::InvalidSteamId {
            value: value.to_string(),
        })
    }

    /// Returns the `SteamGridDB` API key.
    ///
    /// # Errors
    /// Returns error if no non-blank key is configured.
    pub fn sgdb_api_key(&self) -> Result<ApiKey, LibraryError> {
        self.steamgriddb
            .api_key
            .as_deref()
            .and_then(ApiKey::new)
            .ok_or(LibraryError::MissingCredential {
                name: "SteamGridDB API key (--sgdb-api-key or SGDB_API_KEY)",
            })
    }
}
