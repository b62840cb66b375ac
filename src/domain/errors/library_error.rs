//! Errors raised while discovering the local library.

use std::path::PathBuf;

use thiserror::Error;

/// Library discovery error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum LibraryError {
    #[error("missing credential: {name}")]
    MissingCredential { name: &'static str },

    #[error("invalid steam id {value:?}: expected 17 digits")]
    InvalidSteamId { value: String },

    #[error("could not find a Steam installation, pass --steam-path")]
    InstallNotFound,

    #[error("Steam install path {} is not a directory", path.display())]
    InvalidInstallPath { path: PathBuf },

    #[error("failed to fetch owned games: {message}")]
    OwnedGames { message: String },

    #[error("failed to prepare cover directory {}: {source}", path.display())]
    CoverDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Store(#[from] super::StoreError),
}

impl LibraryError {
    /// Creates owned games error.
    #[must_use]
    pub fn owned_games(message: impl Into<String>) -> Self {
        Self::OwnedGames {
            message: message.into(),
        }
    }
}
