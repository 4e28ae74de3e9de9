//! Raster - the image container
//!
//! A `Raster` is a width x height grid of 8-bit pixels in one of two color
//! modes: RGB (3 channels) or RGBA (4 channels, alpha last, 0 = fully
//! transparent). Pixel data is stored interleaved in row-major order.
//!
//! A single mode-tagged [`Channels`] tuple covers both modes, so callers
//! never branch on channel count when reading or writing pixels.

use crate::error::{Error, Result};
use std::fmt;

/// Color mode of a raster: how many channels each pixel carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// 3 channels: red, green, blue
    Rgb,
    /// 4 channels: red, green, blue, alpha
    Rgba,
}

impl ColorMode {
    /// Number of bytes per pixel in this mode.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            ColorMode::Rgb => 3,
            ColorMode::Rgba => 4,
        }
    }

    /// Whether pixels in this mode carry an alpha channel.
    #[inline]
    pub fn has_alpha(self) -> bool {
        self == ColorMode::Rgba
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Rgb => write!(f, "RGB"),
            ColorMode::Rgba => write!(f, "RGBA"),
        }
    }
}

/// Channel values of one pixel, tagged with the mode they came from.
///
/// The alpha channel ranges over [0, 255] with 0 fully transparent and
/// 255 fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channels {
    /// Red, green, blue
    Rgb(u8, u8, u8),
    /// Red, green, blue, alpha
    Rgba(u8, u8, u8, u8),
}

impl Channels {
    /// The color mode this tuple belongs to.
    #[inline]
    pub fn mode(self) -> ColorMode {
        match self {
            Channels::Rgb(..) => ColorMode::Rgb,
            Channels::Rgba(..) => ColorMode::Rgba,
        }
    }

    /// The first three channel values, regardless of mode.
    #[inline]
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Channels::Rgb(r, g, b) | Channels::Rgba(r, g, b, _) => (r, g, b),
        }
    }

    /// The alpha value, if this tuple carries one.
    #[inline]
    pub fn alpha(self) -> Option<u8> {
        match self {
            Channels::Rgb(..) => None,
            Channels::Rgba(_, _, _, a) => Some(a),
        }
    }

    /// Rebuild a tuple with the same mode but new color values.
    ///
    /// Alpha, if present, is preserved unchanged.
    #[inline]
    pub fn with_rgb(self, r: u8, g: u8, b: u8) -> Channels {
        match self {
            Channels::Rgb(..) => Channels::Rgb(r, g, b),
            Channels::Rgba(_, _, _, a) => Channels::Rgba(r, g, b, a),
        }
    }
}

impl fmt::Display for Channels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channels::Rgb(r, g, b) => write!(f, "[{}, {}, {}]", r, g, b),
            Channels::Rgba(r, g, b, a) => write!(f, "[{}, {}, {}, {}]", r, g, b, a),
        }
    }
}

/// An in-memory decoded image.
///
/// The raster owns its pixel buffer for the duration of an operation; the
/// classification and transform crates only read it or mutate channel values
/// at existing coordinates, never resize it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    mode: ColorMode,
    data: Vec<u8>,
}

impl Raster {
    /// Create a raster with all channels set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32, mode: ColorMode) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = width as usize * height as usize * mode.channels();
        Ok(Self {
            width,
            height,
            mode,
            data: vec![0; len],
        })
    }

    /// Create a raster from an interleaved channel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions and
    /// [`Error::InvalidParameter`] if the buffer length does not match
    /// `width * height * channels`.
    pub fn from_raw(width: u32, height: u32, mode: ColorMode, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize * mode.channels();
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "buffer length {} does not match {}x{} {} image ({} bytes)",
                data.len(),
                width,
                height,
                mode,
                expected
            )));
        }
        Ok(Self {
            width,
            height,
            mode,
            data,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Image size as `(width, height)`.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Color mode of the pixel data.
    #[inline]
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Borrow the interleaved channel buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Byte offset of the pixel at (x, y), bounds-checked.
    fn offset(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize * self.width as usize + x as usize) * self.mode.channels())
    }

    /// Read the channel tuple at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if (x, y) lies outside the image.
    pub fn get(&self, x: u32, y: u32) -> Result<Channels> {
        let i = self.offset(x, y)?;
        let d = &self.data;
        Ok(match self.mode {
            ColorMode::Rgb => Channels::Rgb(d[i], d[i + 1], d[i + 2]),
            ColorMode::Rgba => Channels::Rgba(d[i], d[i + 1], d[i + 2], d[i + 3]),
        })
    }

    /// Write a channel tuple at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for coordinates outside the image and
    /// [`Error::ModeMismatch`] if the tuple's mode differs from the raster's.
    pub fn set(&mut self, x: u32, y: u32, channels: Channels) -> Result<()> {
        if channels.mode() != self.mode {
            return Err(Error::ModeMismatch(self.mode));
        }
        let i = self.offset(x, y)?;
        match channels {
            Channels::Rgb(r, g, b) => {
                self.data[i] = r;
                self.data[i + 1] = g;
                self.data[i + 2] = b;
            }
            Channels::Rgba(r, g, b, a) => {
                self.data[i] = r;
                self.data[i + 1] = g;
                self.data[i + 2] = b;
                self.data[i + 3] = a;
            }
        }
        Ok(())
    }

    /// Convert to RGBA, adding an opaque alpha channel if none is present.
    ///
    /// An RGBA source is returned unchanged (copied).
    pub fn to_rgba(&self) -> Result<Raster> {
        match self.mode {
            ColorMode::Rgba => Ok(self.clone()),
            ColorMode::Rgb => {
                let mut data = Vec::with_capacity(
                    self.width as usize * self.height as usize * ColorMode::Rgba.channels(),
                );
                for px in self.data.chunks_exact(3) {
                    data.extend_from_slice(px);
                    data.push(255);
                }
                Raster::from_raw(self.width, self.height, ColorMode::Rgba, data)
            }
        }
    }

    /// Extract the alpha channel as a single-channel plane.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedMode`] for images without alpha.
    pub fn alpha_plane(&self) -> Result<crate::plane::Plane> {
        if !self.mode.has_alpha() {
            return Err(Error::UnsupportedMode(format!(
                "{} image has no alpha channel",
                self.mode
            )));
        }
        let mut plane = crate::plane::Plane::new(self.width, self.height, 0)?;
        let step = self.mode.channels();
        for (i, px) in self.data.chunks_exact(step).enumerate() {
            plane.put(i, px[3]);
        }
        Ok(plane)
    }

    /// Replace the alpha channel with the values of a plane.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedMode`] for images without alpha and
    /// [`Error::IncompatibleSizes`] if the plane's dimensions differ.
    pub fn set_alpha(&mut self, plane: &crate::plane::Plane) -> Result<()> {
        if !self.mode.has_alpha() {
            return Err(Error::UnsupportedMode(format!(
                "{} image has no alpha channel",
                self.mode
            )));
        }
        if plane.size() != self.size() {
            let (pw, ph) = plane.size();
            return Err(Error::IncompatibleSizes(self.width, self.height, pw, ph));
        }
        let step = self.mode.channels();
        for (i, px) in self.data.chunks_exact_mut(step).enumerate() {
            px[3] = plane.at(i);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zero_dimension() {
        assert!(Raster::new(0, 10, ColorMode::Rgb).is_err());
        assert!(Raster::new(10, 0, ColorMode::Rgba).is_err());
    }

    #[test]
    fn test_get_set_rgb() {
        let mut img = Raster::new(4, 3, ColorMode::Rgb).unwrap();
        img.set(2, 1, Channels::Rgb(10, 20, 30)).unwrap();
        assert_eq!(img.get(2, 1).unwrap(), Channels::Rgb(10, 20, 30));
        assert_eq!(img.get(0, 0).unwrap(), Channels::Rgb(0, 0, 0));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let img = Raster::new(4, 3, ColorMode::Rgb).unwrap();
        assert!(matches!(
            img.get(4, 0),
            Err(Error::OutOfBounds { x: 4, y: 0, .. })
        ));
        assert!(img.get(0, 3).is_err());
    }

    #[test]
    fn test_set_mode_mismatch() {
        let mut img = Raster::new(2, 2, ColorMode::Rgb).unwrap();
        let err = img.set(0, 0, Channels::Rgba(1, 2, 3, 4)).unwrap_err();
        assert!(matches!(err, Error::ModeMismatch(ColorMode::Rgb)));
    }

    #[test]
    fn test_to_rgba_adds_opaque_alpha() {
        let mut img = Raster::new(2, 2, ColorMode::Rgb).unwrap();
        img.set(1, 0, Channels::Rgb(5, 6, 7)).unwrap();
        let rgba = img.to_rgba().unwrap();
        assert_eq!(rgba.mode(), ColorMode::Rgba);
        assert_eq!(rgba.get(1, 0).unwrap(), Channels::Rgba(5, 6, 7, 255));
        assert_eq!(rgba.get(0, 1).unwrap(), Channels::Rgba(0, 0, 0, 255));
    }

    #[test]
    fn test_alpha_plane_roundtrip() {
        let mut img = Raster::new(3, 2, ColorMode::Rgba).unwrap();
        img.set(0, 0, Channels::Rgba(1, 2, 3, 40)).unwrap();
        img.set(2, 1, Channels::Rgba(4, 5, 6, 200)).unwrap();

        let plane = img.alpha_plane().unwrap();
        assert_eq!(plane.get(0, 0).unwrap(), 40);
        assert_eq!(plane.get(2, 1).unwrap(), 200);

        let mut other = Raster::new(3, 2, ColorMode::Rgba).unwrap();
        other.set_alpha(&plane).unwrap();
        assert_eq!(other.get(0, 0).unwrap().alpha(), Some(40));
    }

    #[test]
    fn test_alpha_plane_requires_rgba() {
        let img = Raster::new(3, 2, ColorMode::Rgb).unwrap();
        assert!(matches!(img.alpha_plane(), Err(Error::UnsupportedMode(_))));
    }

    #[test]
    fn test_channels_accessors() {
        assert_eq!(Channels::Rgba(9, 8, 7, 6).rgb(), (9, 8, 7));
        assert_eq!(Channels::Rgb(1, 2, 3).alpha(), None);
        assert_eq!(
            Channels::Rgba(1, 2, 3, 4).with_rgb(7, 7, 7),
            Channels::Rgba(7, 7, 7, 4)
        );
    }
}
