//! Data transfer objects for the application layer.

mod event;
mod report;

pub use event::{AcquireEvent, Phase};
pub use report::CoverReport;
