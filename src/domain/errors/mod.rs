//! Domain error types.

mod download_error;
mod fetch_error;
mod library_error;
mod query_error;
mod sniff_error;
mod store_error;

pub use download_error::DownloadError;
pub use fetch_error::FetchError;
pub use library_error::LibraryError;
pub use query_error::QueryError;
pub use sniff_error::SniffError;
pub use store_error::StoreError;
