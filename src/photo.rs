//! Input records and per-photo warnings.

use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One image to lay out.
///
/// Only the aspect ratio `width / height` takes part in the computation.
/// `key` is carried through to the output untouched so callers can
/// correlate results; use `()` when the input index is enough.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Photo<K = ()> {
    /// Intrinsic width (any unit, only the ratio matters).
    pub width: f64,
    /// Intrinsic height (same unit as `width`).
    pub height: f64,
    /// Caller identity for output correlation.
    pub key: K,
}

impl Photo<()> {
    /// Create an unkeyed photo.
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            key: (),
        }
    }
}

impl<K> Photo<K> {
    /// Create a photo carrying a caller key.
    pub const fn keyed(width: f64, height: f64, key: K) -> Self {
        Self { width, height, key }
    }

    /// Aspect ratio `width / height`, or `None` when it is not a finite
    /// positive number.
    pub fn aspect_ratio(&self) -> Option<f64> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.width) || !valid(self.height) {
            return None;
        }
        let ratio = self.width / self.height;
        valid(ratio).then_some(ratio)
    }
}

/// Aspect ratio used in place of a degenerate one.
pub const FALLBACK_ASPECT_RATIO: f64 = 1.0;

/// Non-fatal anomaly found while laying out.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", tag = "kind"))]
pub enum LayoutWarning {
    /// The photo's aspect ratio was zero, negative or not finite and was
    /// laid out as a square.
    DegenerateAspectRatio {
        /// Input index of the photo.
        index: usize,
        /// Width as supplied.
        width: f64,
        /// Height as supplied.
        height: f64,
    },
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateAspectRatio {
                index,
                width,
                height,
            } => write!(
                f,
                "photo {index} has degenerate dimensions {width}x{height}, laid out as square"
            ),
        }
    }
}

/// Aspect ratios for every photo, substituting squares for degenerate input.
pub(crate) fn aspect_ratios<K>(photos: &[Photo<K>]) -> (Vec<f64>, Vec<LayoutWarning>) {
    let mut ratios = Vec::with_capacity(photos.len());
    let mut warnings = Vec::new();
    for (index, photo) in photos.iter().enumerate() {
        match photo.aspect_ratio() {
            Some(r) => ratios.push(r),
            None => {
                tracing::warn!(
                    index,
                    width = photo.width,
                    height = photo.height,
                    "degenerate photo dimensions, using square aspect ratio"
                );
                warnings.push(LayoutWarning::DegenerateAspectRatio {
                    index,
                    width: photo.width,
                    height: photo.height,
                });
                ratios.push(FALLBACK_ASPECT_RATIO);
            }
        }
    }
    (ratios, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn aspect_ratio_landscape_and_portrait() {
        assert_eq!(Photo::new(1500.0, 1000.0).aspect_ratio(), Some(1.5));
        assert_eq!(Photo::new(500.0, 1000.0).aspect_ratio(), Some(0.5));
    }

    #[test]
    fn aspect_ratio_rejects_degenerate() {
        assert_eq!(Photo::new(100.0, 0.0).aspect_ratio(), None);
        assert_eq!(Photo::new(0.0, 100.0).aspect_ratio(), None);
        assert_eq!(Photo::new(-3.0, -2.0).aspect_ratio(), None);
        assert_eq!(Photo::new(f64::NAN, 2.0).aspect_ratio(), None);
        assert_eq!(Photo::new(f64::INFINITY, 2.0).aspect_ratio(), None);
    }

    #[test]
    fn keyed_photo_keeps_key() {
        let p = Photo::keyed(4.0, 3.0, "sunset");
        assert_eq!(p.key, "sunset");
        assert_eq!(p.aspect_ratio(), Some(4.0 / 3.0));
    }

    #[test]
    fn degenerate_photos_become_square_with_warning() {
        let photos = [
            Photo::new(300.0, 200.0),
            Photo::new(300.0, 0.0),
            Photo::new(200.0, 400.0),
        ];
        let (ratios, warnings) = aspect_ratios(&photos);
        assert_eq!(ratios, [1.5, 1.0, 0.5]);
        assert_eq!(
            warnings,
            [LayoutWarning::DegenerateAspectRatio {
                index: 1,
                width: 300.0,
                height: 0.0
            }]
        );
    }

    #[test]
    fn warning_display() {
        let w = LayoutWarning::DegenerateAspectRatio {
            index: 4,
            width: 10.0,
            height: 0.0,
        };
        assert_eq!(
            w.to_string(),
            "photo 4 has degenerate dimensions 10x0, laid out as square"
        );
    }
}
