//! Black-to-transparent conversion
//!
//! Produces an RGBA copy of an image whose alpha channel combines two
//! effects: a blurred elliptical vignette multiplied into the existing
//! alpha, and a hard alpha-zero override for every near-black pixel. The
//! override is applied after the multiply, so it always wins.

use crate::error::TransformResult;
use rastermap_core::{Channels, Plane, Raster};

/// Inclusive per-channel upper bound below which a pixel counts as black
/// for transparency masking.
pub const NEAR_BLACK_THRESHOLD: u8 = 5;

/// Blur radius applied to the elliptical mask to soften its edge.
pub const MASK_BLUR_RADIUS: u32 = 2;

/// Whether every color channel of a pixel lies at or below `threshold`.
///
/// Alpha is not consulted.
#[inline]
pub fn is_near_black(channels: &Channels, threshold: u8) -> bool {
    let (r, g, b) = channels.rgb();
    r <= threshold && g <= threshold && b <= threshold
}

/// Convert an image to RGBA with black regions masked to transparency.
///
/// The steps, in order:
///
/// 1. Convert the source to RGBA (an RGB source gains opaque alpha).
/// 2. Render a filled ellipse inscribed in the full image rectangle into a
///    zero-initialized mask plane.
/// 3. Blur the mask with radius [`MASK_BLUR_RADIUS`].
/// 4. Multiply the image's alpha channel by the blurred mask.
/// 5. Force alpha to exactly 0 for every pixel whose original R, G and B
///    all lie at or below [`NEAR_BLACK_THRESHOLD`], overriding whatever the
///    mask multiply produced there. Color channels are never modified.
///
/// The source image is not mutated; the caller receives a fresh RGBA
/// raster.
///
/// # Errors
///
/// Returns [`rastermap_core::Error::UnsupportedMode`] if the source cannot
/// be converted to RGBA.
pub fn to_transparent(image: &Raster) -> TransformResult<Raster> {
    let mut rgba = image.to_rgba()?;
    let (width, height) = rgba.size();

    let mut mask = Plane::new(width, height, 0)?;
    mask.draw_filled_ellipse(0, 0, width, height, 255)?;
    let mask = mask.gaussian_blur(MASK_BLUR_RADIUS);

    let alpha = rgba.alpha_plane()?.multiply(&mask)?;
    rgba.set_alpha(&alpha)?;

    // The near-black override runs against the color channels, which the
    // mask multiply never touched.
    for y in 0..height {
        for x in 0..width {
            let px = rgba.get(x, y)?;
            if is_near_black(&px, NEAR_BLACK_THRESHOLD) {
                let (r, g, b) = px.rgb();
                rgba.set(x, y, Channels::Rgba(r, g, b, 0))?;
            }
        }
    }

    Ok(rgba)
}
