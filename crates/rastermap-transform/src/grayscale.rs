//! Grayscale conversion
//!
//! Converts pixels to their BT.601 luma, either over the whole image or over
//! an axis-aligned window selected by a fraction of the width or height.
//! The conversion runs in place; alpha channels are carried through
//! untouched, never grayscaled.

use crate::error::TransformResult;
use rastermap_core::Raster;
use std::str::FromStr;

/// Axis along which a partial grayscale window is clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Clip columns: grayscale `[0, width / factor)` across all rows
    #[default]
    X,
    /// Clip rows: grayscale `[0, height / factor)` across all columns
    Y,
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            other => Err(format!("invalid axis '{}', expected 'x' or 'y'", other)),
        }
    }
}

/// Convert RGB values to gray using BT.601 luma weights.
///
/// `gray = 0.299 R + 0.587 G + 0.114 B`, truncated toward zero. The weights
/// are exact thousandths, so the computation stays in integer arithmetic and
/// a gray input (R = G = B) maps to itself.
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
}

/// Combine RGB channels with arbitrary per-channel weights.
///
/// The weighted sum is truncated toward zero and clamped to [0, 255].
/// `weighted_channels(r, g, b, 0.299, 0.587, 0.114)` is the grayscale
/// preset; use [`rgb_to_gray`] for that case.
pub fn weighted_channels(r: u8, g: u8, b: u8, rf: f64, gf: f64, bf: f64) -> u8 {
    let combined = rf * r as f64 + gf * g as f64 + bf * b as f64;
    combined.clamp(0.0, 255.0) as u8
}

/// Grayscale an image in place, wholly or over a window.
///
/// With `factor == 0` every pixel is converted. With `factor > 0` only the
/// leading `1 / factor` fraction of the selected axis is converted: columns
/// `[0, width / factor)` for [`Axis::X`], rows `[0, height / factor)` for
/// [`Axis::Y`] (floor division). A factor larger than the dimension yields
/// an empty window and the image is left untouched.
///
/// # Errors
///
/// Propagates [`rastermap_core::Error`] from pixel access; with in-bounds
/// iteration this does not occur.
pub fn grayscale(image: &mut Raster, factor: u32, axis: Axis) -> TransformResult<()> {
    let (width, height) = image.size();
    let (win_w, win_h) = if factor > 0 {
        match axis {
            Axis::X => (width / factor, height),
            Axis::Y => (width, height / factor),
        }
    } else {
        (width, height)
    };

    for x in 0..win_w {
        for y in 0..win_h {
            let px = image.get(x, y)?;
            let (r, g, b) = px.rgb();
            let gray = rgb_to_gray(r, g, b);
            image.set(x, y, px.with_rgb(gray, gray, gray))?;
        }
    }
    Ok(())
}
