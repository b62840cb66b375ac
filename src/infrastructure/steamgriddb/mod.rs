//! SteamGridDB adapter.

mod client;
mod dto;

pub use client::SteamGridDbClient;
