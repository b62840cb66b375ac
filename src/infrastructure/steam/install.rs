//! Locating the Steam client install and its per-user grid directory.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::debug;

use crate::domain::entities::SteamId64;
use crate::domain::errors::LibraryError;

/// A Steam client installation on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteamInstall {
    root: PathBuf,
}

impl SteamInstall {
    /// Uses `explicit` when given, otherwise checks the platform defaults.
    ///
    /// # Errors
    /// Returns [`LibraryError::InvalidInstallPath`] if `explicit` is not a
    /// directory, or [`LibraryError::InstallNotFound`] if no default exists.
    pub fn locate(explicit: Option<PathBuf>) -> Result<Self, LibraryError> {
        if let Some(path) = explicit {
            return Self::from_root(path);
        }

        default_roots()
            .into_iter()
            .inspect(|path| debug!(path = %path.display(), "Probing Steam install"))
            .find(|path| path.is_dir())
            .map(|root| Self { root })
            .ok_or(LibraryError::InstallNotFound)
    }

    /// Wraps an existing install directory.
    ///
    /// # Errors
    /// Returns [`LibraryError::InvalidInstallPath`] if `root` is not a directory.
    pub fn from_root(root: PathBuf) -> Result<Self, LibraryError> {
        if root.is_dir() {
            Ok(Self { root })
        } else {
            Err(LibraryError::InvalidInstallPath { path: root })
        }
    }

    /// Install root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `userdata/<account id>/config/grid` for the given account.
    #[must_use]
    pub fn grid_dir(&self, steam_id: SteamId64) -> PathBuf {
        self.root
            .join("userdata")
            .join(steam_id.account_id().to_string())
            .join("config")
            .join("grid")
    }
}

fn default_roots() -> Vec<PathBuf> {
    let Some(dirs) = BaseDirs::new() else {
        return Vec::new();
    };
    let home = dirs.home_dir();

    if cfg!(target_os = "windows") {
        let program_files = std::env::var_os("ProgramFiles(x86)")
            .map_or_else(|| PathBuf::from(r"C:\Program Files (x86)"), PathBuf::from);
        registry_root()
            .into_iter()
            .chain([program_files.join("Steam")])
            .collect()
    } else if cfg!(target_os = "macos") {
        vec![home.join("Library/Application Support/Steam")]
    } else {
        vec![
            home.join(".steam/steam"),
            dirs.data_dir().join("Steam"),
            home.join(".var/app/com.valvesoftware.Steam/data/Steam"),
        ]
    }
}

/// `SteamPath` as recorded by the Steam client in the current user's hive.
#[cfg(windows)]
fn registry_root() -> Option<PathBuf> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let key = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey(r"Software\Valve\Steam")
        .ok()?;
    let path: String = key.get_value("SteamPath").ok()?;
    debug!(path = %path, "Steam install path from registry");
    Some(PathBuf::from(path))
}

#[cfg(not(windows))]
fn registry_root() -> Option<PathBuf> {
    None
}
