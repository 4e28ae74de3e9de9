//! Black/colored pixel classification
//!
//! Partitions an image map into two disjoint, covering subsets: pixels that
//! are exactly black and pixels that carry any color. A "populated" pixel is
//! one whose first three channels are not all zero.

use crate::map::ImageMap;
use rastermap_core::Channels;

/// The two classification subsets of an image map.
///
/// Together `black` and `colored` contain every key of the source map
/// exactly once, with values unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partition {
    /// Pixels whose RGB channels are all exactly 0
    pub black: ImageMap,
    /// Every other pixel
    pub colored: ImageMap,
}

/// Whether a channel tuple is exactly black.
///
/// Only the first three channels are examined; alpha is ignored, so a fully
/// transparent black pixel still classifies as black.
#[inline]
pub fn is_black(channels: &Channels) -> bool {
    channels.rgb() == (0, 0, 0)
}

/// Split an image map into its black and colored subsets.
pub fn partition(image_map: &ImageMap) -> Partition {
    let mut result = Partition::default();
    for (&coord, &channels) in image_map {
        if is_black(&channels) {
            result.black.insert(coord, channels);
        } else {
            result.colored.insert(coord, channels);
        }
    }
    result
}

/// Project only the black pixels of an image map.
pub fn black_pixels(image_map: &ImageMap) -> ImageMap {
    image_map
        .iter()
        .filter(|&(_, channels)| is_black(channels))
        .map(|(&coord, &channels)| (coord, channels))
        .collect()
}

/// Project only the colored (populated) pixels of an image map.
pub fn colored_pixels(image_map: &ImageMap) -> ImageMap {
    image_map
        .iter()
        .filter(|&(_, channels)| !is_black(channels))
        .map(|(&coord, &channels)| (coord, channels))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_black_exact_match() {
        assert!(is_black(&Channels::Rgb(0, 0, 0)));
        assert!(!is_black(&Channels::Rgb(0, 0, 1)));
        assert!(!is_black(&Channels::Rgb(1, 0, 0)));
    }

    #[test]
    fn test_is_black_ignores_alpha() {
        assert!(is_black(&Channels::Rgba(0, 0, 0, 128)));
        assert!(is_black(&Channels::Rgba(0, 0, 0, 0)));
        assert!(!is_black(&Channels::Rgba(0, 1, 0, 0)));
    }

    #[test]
    fn test_projections_match_partition() {
        let mut map = ImageMap::new();
        map.insert((0, 0), Channels::Rgb(0, 0, 0));
        map.insert((1, 0), Channels::Rgb(255, 0, 0));
        map.insert((0, 1), Channels::Rgb(0, 0, 0));

        let split = partition(&map);
        assert_eq!(split.black, black_pixels(&map));
        assert_eq!(split.colored, colored_pixels(&map));
    }
}
