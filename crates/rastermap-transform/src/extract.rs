//! Populated-area extraction
//!
//! Copies every colored (non-black) pixel of an image map back into the
//! image at its own coordinate.

use crate::error::TransformResult;
use rastermap_classify::{ImageMap, colored_pixels};
use rastermap_core::Raster;

/// Rewrite every populated pixel with its own channel values.
///
/// Black pixels are left exactly as they are; colored pixels are written
/// back with the values the map already holds for them. On an image whose
/// map was built from itself this is an identity pass restricted to the
/// colored subset. A true extraction would replace the black pixels with a
/// sentinel instead (transparent, or a designated background color); this
/// function deliberately reproduces the narrower rewrite-colored-only
/// behavior, and callers wanting a cleared background should combine the
/// colored projection with a fresh target image.
///
/// # Errors
///
/// Propagates [`rastermap_core::Error`] if a map coordinate lies outside
/// the image or its values do not match the image's mode.
pub fn extract_populated(image: &mut Raster, image_map: &ImageMap) -> TransformResult<()> {
    let colored = colored_pixels(image_map);
    for (&(x, y), &channels) in &colored {
        image.set(x, y, channels)?;
    }
    Ok(())
}
