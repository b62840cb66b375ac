//! Gridfill - fills in missing Steam library covers from SteamGridDB.
//!
//! The crate is split the same way the binary runs: the domain layer holds
//! entities, ports and the image sniffer; the application layer resolves
//! and downloads covers through those ports; the infrastructure layer
//! provides the HTTP, filesystem and configuration adapters.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "gridfill";

/// User agent sent with every HTTP request.
pub const USER_AGENT: &str = concat!("gridfill/", env!("CARGO_PKG_VERSION"));
