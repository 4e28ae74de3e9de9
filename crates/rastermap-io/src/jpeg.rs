//! JPEG image format support

use crate::{IoError, IoResult};
use jpeg_decoder::PixelFormat;
use rastermap_core::{ColorMode, Raster};
use std::io::Read;

/// Read a JPEG image
///
/// Grayscale JPEGs are widened to RGB; CMYK and 16-bit luma streams are
/// rejected.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Raster> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG header info".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let data = match info.pixel_format {
        PixelFormat::RGB24 => pixels,
        PixelFormat::L8 => {
            let mut rgb = Vec::with_capacity(pixels.len() * 3);
            for v in pixels {
                rgb.extend_from_slice(&[v, v, v]);
            }
            rgb
        }
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };

    Raster::from_raw(width, height, ColorMode::Rgb, data).map_err(IoError::Core)
}

/// Default encode quality, same scale as libjpeg (1-100).
const JPEG_QUALITY: u8 = 90;

/// Write a JPEG image
///
/// JPEG carries no alpha channel; RGBA rasters are encoded from their color
/// channels only.
pub fn write_jpeg(image: &Raster, out: &mut Vec<u8>) -> IoResult<()> {
    let (width, height) = image.size();
    if width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err(IoError::EncodeError(format!(
            "image {}x{} exceeds JPEG dimension limit",
            width, height
        )));
    }

    let encoder = jpeg_encoder::Encoder::new(out, JPEG_QUALITY);
    let color_type = match image.mode() {
        ColorMode::Rgb => jpeg_encoder::ColorType::Rgb,
        ColorMode::Rgba => jpeg_encoder::ColorType::Rgba,
    };
    encoder
        .encode(image.data(), width as u16, height as u16, color_type)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;

    Ok(())
}
