//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG: FF D8 FF
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];
}

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// PNG format
    #[default]
    Png,
    /// JFIF JPEG format
    Jpeg,
}

impl ImageFormat {
    /// Get the lowercase file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    /// Parse a format name as used on the command line ("png", "jpeg").
    pub fn from_name(name: &str) -> IoResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            other => Err(IoError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path).map_err(IoError::Io)?;
    let mut header = [0u8; 8];
    let bytes_read = file.read(&mut header).map_err(IoError::Io)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect image format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 3 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    if data.len() >= 8 && data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }

    if data.starts_with(magic::JPEG) {
        return Ok(ImageFormat::Jpeg);
    }

    Err(IoError::UnsupportedFormat(
        "unknown image format".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        let data = [
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x00,
        ];
        assert_eq!(detect_format_from_bytes(&data).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_detect_jpeg() {
        let data = [
            0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01,
        ];
        assert_eq!(detect_format_from_bytes(&data).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_detect_unknown() {
        assert!(detect_format_from_bytes(b"UNKNOWN_FORMAT").is_err());
        assert!(detect_format_from_bytes(b"BM").is_err());
    }

    #[test]
    fn test_format_names() {
        assert_eq!(ImageFormat::from_name("PNG").unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_name("jpeg").unwrap(), ImageFormat::Jpeg);
        assert!(ImageFormat::from_name("webp").is_err());
        assert_eq!(ImageFormat::Jpeg.extension(), "jpg");
    }
}
