//! Pure domain services.

mod acceptance;
mod cover_naming;
mod image_sniffer;

pub use acceptance::AcceptancePolicy;
pub use cover_naming::{COVER_SUFFIX, cover_file_name, parse_cover_file_name};
pub use image_sniffer::sniff;
