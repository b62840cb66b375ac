//! Local filesystem adapters.

mod cover_directory;

pub use cover_directory::CoverDirectory;
