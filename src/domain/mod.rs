//! Domain layer with core entities, pure services and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Header sniffing, acceptance rules and cover naming.
pub mod services;

pub use entities::{Candidate, CandidateSet, FetchOutcome, ImageDimensions, ItemId};
pub use errors::{DownloadError, FetchError, QueryError, SniffError};
pub use ports::{CoverLookupPort, CoverStorePort, ImageFetchPort, OwnedItemsPort};
pub use services::{AcceptancePolicy, sniff};
