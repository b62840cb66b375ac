//! Image header parsing errors.

use thiserror::Error;

use crate::domain::entities::ImageFormat;

/// The bytes are not a PNG or JPEG whose size can be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum SniffError {
    #[error("unsupported image format")]
    UnsupportedFormat,

    #[error("{format} data ends before the image size")]
    Truncated { format: ImageFormat },

    #[error("malformed {format} data: {reason}")]
    Malformed {
        format: ImageFormat,
        reason: &'static str,
    },
}
