//! Generic HTTP adapters.

mod image_fetcher;
#[cfg(test)]
pub(crate) mod test_server;

pub use image_fetcher::HttpImageFetcher;
