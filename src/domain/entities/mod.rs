//! Domain entity definitions.

mod candidate;
mod credentials;
mod image;
mod item;
mod outcome;

pub use candidate::{Candidate, CandidateSet};
pub use credentials::{ApiKey, SteamId64};
pub use image::{ImageDimensions, ImageFormat};
pub use item::ItemId;
pub use outcome::FetchOutcome;
