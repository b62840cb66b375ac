mod cover_lookup_port;
mod cover_store_port;
mod image_fetch_port;
mod owned_items_port;

pub use cover_lookup_port::CoverLookupPort;
pub use cover_store_port::CoverStorePort;
pub use image_fetch_port::ImageFetchPort;
pub use owned_items_port::{OwnedItemsPort, OwnedLibrary};
