//! Steam client and Web API adapters.

mod client;
mod dto;
mod install;

pub use client::{STEAM_API_KEY_PAGE, SteamWebClient};
pub use install::SteamInstall;
