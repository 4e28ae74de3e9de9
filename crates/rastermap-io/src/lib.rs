//! Rastermap IO - Image decode and encode
//!
//! File-level image I/O for the rastermap pipeline:
//!
//! - **Format detection** ([`format`]): magic-number sniffing for PNG and
//!   JPEG
//! - **Codecs** ([`png`](crate::png), [`jpeg`](crate::jpeg)): 8-bit
//!   RGB/RGBA decode and encode
//! - **Path-level wrappers**: [`read_image`], [`write_image`] and
//!   [`save_named`] (the `"{base}.{extension}"` output convention)

pub mod error;
pub mod format;
pub mod jpeg;
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
pub use jpeg::{read_jpeg, write_jpeg};
pub use png::{read_png, write_png};

use rastermap_core::Raster;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Read an image from a file path, detecting the format from its header.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let format = detect_format(&path)?;
    let reader = BufReader::new(File::open(&path)?);
    match format {
        ImageFormat::Png => read_png(reader),
        ImageFormat::Jpeg => read_jpeg(reader),
    }
}

/// Write an image to an explicit file path in the given format.
pub fn write_image<P: AsRef<Path>>(image: &Raster, path: P, format: ImageFormat) -> IoResult<()> {
    let file = File::create(path)?;
    match format {
        ImageFormat::Png => write_png(image, BufWriter::new(file)),
        ImageFormat::Jpeg => {
            let mut buffer = Vec::new();
            write_jpeg(image, &mut buffer)?;
            let mut writer = BufWriter::new(file);
            writer.write_all(&buffer)?;
            writer.flush()?;
            Ok(())
        }
    }
}

/// Build the conventional output path for a base name and format:
/// `"{base}.{extension}"`.
pub fn output_path(base: &str, format: ImageFormat) -> PathBuf {
    PathBuf::from(format!("{}.{}", base, format.extension()))
}

/// Write an image under the `"{base}.{extension}"` naming convention.
///
/// Returns the path that was written.
pub fn save_named(image: &Raster, base: &str, format: ImageFormat) -> IoResult<PathBuf> {
    let path = output_path(base, format);
    write_image(image, &path, format)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_convention() {
        assert_eq!(output_path("grayscale", ImageFormat::Png), PathBuf::from("grayscale.png"));
        assert_eq!(output_path("out", ImageFormat::Jpeg), PathBuf::from("out.jpg"));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(
            read_image("definitely-not-here.png"),
            Err(IoError::Io(_))
        ));
    }
}
