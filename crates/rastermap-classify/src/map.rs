//! Image map construction
//!
//! An [`ImageMap`] maps every coordinate of an image's bounding rectangle to
//! its channel tuple. It is built fresh per operation and consumed within
//! it; nothing caches a map across calls. Walking the full grid is the
//! dominant cost of every downstream operation, so callers should build the
//! map once and hand it to whatever needs it.

use crate::error::ClassifyResult;
use rastermap_core::{Channels, Raster};
use std::collections::BTreeMap;

/// A pixel coordinate, `(x, y)` with `0 <= x < width` and `0 <= y < height`.
pub type Coord = (u32, u32);

/// Full coordinate-to-channels mapping of one image.
///
/// An ordered map keyed by coordinate: semantically the order is irrelevant
/// (the map is compared as a value), but iteration and printing stay
/// deterministic.
pub type ImageMap = BTreeMap<Coord, Channels>;

/// Build the image map covering every coordinate of `image` exactly once.
///
/// The result always holds `width * height` entries. Identical input pixels
/// yield an identical map.
pub fn build_image_map(image: &Raster) -> ClassifyResult<ImageMap> {
    let (width, height) = image.size();
    let mut map = ImageMap::new();
    for x in 0..width {
        for y in 0..height {
            map.insert((x, y), image.get(x, y)?);
        }
    }
    Ok(map)
}
