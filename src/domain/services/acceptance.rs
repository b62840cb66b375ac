//! Rules deciding whether a downloaded cover is kept.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ImageDimensions;

/// Dimension check applied to every successfully sniffed image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcceptancePolicy {
    /// Keep the image only if `width % height == 1`.
    ///
    /// Matches no standard aspect ratio. Zero height is rejected.
    #[default]
    WidthModHeightIsOne,
    /// Keep any image whose header could be read.
    AcceptAll,
}

impl AcceptancePolicy {
    /// Returns true if an image of this size should be saved.
    #[must_use]
    pub const fn accepts(self, dimensions: ImageDimensions) -> bool {
        match self {
            Self::WidthModHeightIsOne => {
                matches!(dimensions.width.checked_rem(dimensions.height), Some(1))
            }
            Self::AcceptAll => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(512, 511, true ; "one_pixel_wider")]
    #[test_case(1025, 512, true ; "twice_plus_one")]
    #[test_case(512, 512, false ; "square")]
    #[test_case(600, 900, false ; "portrait")]
    #[test_case(920, 430, false ; "landscape")]
    #[test_case(1, 0, false ; "zero_height")]
    fn test_width_mod_height(width: u32, height: u32, expected: bool) {
        let policy = AcceptancePolicy::WidthModHeightIsOne;
        assert_eq!(policy.accepts(ImageDimensions::new(width, height)), expected);
    }

    #[test]
    fn test_accept_all() {
        assert!(AcceptancePolicy::AcceptAll.accepts(ImageDimensions::new(600, 900)));
        assert!(AcceptancePolicy::AcceptAll.accepts(ImageDimensions::new(0, 0)));
    }

    #[test]
    fn test_default_is_width_mod_height() {
        assert_eq!(
            AcceptancePolicy::default(),
            AcceptancePolicy::WidthModHeightIsOne
        );
    }
}
