//! Credential and account value objects.

use std::fmt;

/// Difference between a 64-bit Steam id and its 32-bit account id.
const STEAM_ID64_BASE: u64 = 76_561_197_960_265_728;

/// API key with masking for logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    value: String,
}

impl ApiKey {
    /// Creates a key, rejecting blank input.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return None;
        }
        Some(Self { value })
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns a masked form for display.
    #[must_use]
    pub fn masked(&self) -> String {
        let len = self.value.chars().count();
        if len <= 8 {
            return "*".repeat(len);
        }

        let prefix: String = self.value.chars().take(4).collect();
        let suffix: String = self.value.chars().skip(len - 4).collect();
        format!("{prefix}...{suffix}")
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("value", &self.masked())
            .finish()
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

/// 64-bit Steam account id (the 17-digit form shown on profile pages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SteamId64(u64);

impl SteamId64 {
    /// Parses a 17-digit Steam id.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.len() != 17 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let id = value.parse::<u64>().ok()?;
        if id < STEAM_ID64_BASE {
            return None;
        }
        Some(Self(id))
    }

    /// Returns the 32-bit account id used for `userdata` directories.
    #[must_use]
    pub const fn account_id(self) -> u64 {
        self.0 - STEAM_ID64_BASE
    }
}

impl fmt::Display for SteamId64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
