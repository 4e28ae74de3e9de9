//! PNG image format support

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder};
use rastermap_core::{ColorMode, Raster};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
///
/// 8-bit grayscale and gray+alpha inputs are widened to RGB / RGBA so the
/// classification layer always sees three color channels. Higher bit depths
/// and indexed PNGs are rejected.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth: {:?}",
            bit_depth
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let w = width as usize;

    let (mode, samples) = match color_type {
        ColorType::Rgb => (ColorMode::Rgb, 3),
        ColorType::Rgba => (ColorMode::Rgba, 4),
        ColorType::Grayscale => (ColorMode::Rgb, 1),
        ColorType::GrayscaleAlpha => (ColorMode::Rgba, 2),
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG images are not supported".to_string(),
            ));
        }
    };

    let mut out = Vec::with_capacity(w * height as usize * mode.channels());
    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..];
        for x in 0..w {
            let px = &row[x * samples..];
            match color_type {
                ColorType::Rgb => out.extend_from_slice(&px[..3]),
                ColorType::Rgba => out.extend_from_slice(&px[..4]),
                ColorType::Grayscale => out.extend_from_slice(&[px[0], px[0], px[0]]),
                ColorType::GrayscaleAlpha => {
                    out.extend_from_slice(&[px[0], px[0], px[0], px[1]])
                }
                ColorType::Indexed => unreachable!(),
            }
        }
    }

    Raster::from_raw(width, height, mode, out).map_err(IoError::Core)
}

/// Write a PNG image
///
/// RGB rasters encode as 8-bit RGB, RGBA rasters as 8-bit RGBA; the encode
/// is lossless.
pub fn write_png<W: Write>(image: &Raster, writer: W) -> IoResult<()> {
    let color_type = match image.mode() {
        ColorMode::Rgb => ColorType::Rgb,
        ColorMode::Rgba => ColorType::Rgba,
    };

    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(image.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
