//! Single-channel planes and mask primitives
//!
//! A [`Plane`] is an 8-bit, width x height channel buffer used for alpha
//! masks: create one filled with a constant, render a filled ellipse into
//! it, soften it with a gaussian blur, and combine it with another plane by
//! pixelwise multiplication.

use crate::error::{Error, Result};

/// An 8-bit single-channel image plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Plane {
    /// Create a plane with every value set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32, fill: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![fill; width as usize * height as usize],
        })
    }

    /// Plane width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Plane height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Plane size as `(width, height)`.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Read the value at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Result<u8> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Write the value at (x, y).
    pub fn set(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        let i = self.index(x, y)?;
        self.data[i] = value;
        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    #[inline]
    pub(crate) fn at(&self, idx: usize) -> u8 {
        self.data[idx]
    }

    #[inline]
    pub(crate) fn put(&mut self, idx: usize, value: u8) {
        self.data[idx] = value;
    }

    /// Render a filled ellipse inscribed in the half-open rectangle
    /// `[x0, x1) x [y0, y1)`.
    ///
    /// The ellipse is the largest one fitting the rectangle (it touches the
    /// midpoints of all four edges, it is not the full rectangle). A pixel is
    /// covered when its center lies inside the ellipse.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for an empty or out-of-range
    /// rectangle.
    pub fn draw_filled_ellipse(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, value: u8) -> Result<()> {
        if x0 >= x1 || y0 >= y1 || x1 > self.width || y1 > self.height {
            return Err(Error::InvalidParameter(format!(
                "ellipse rectangle [{},{})x[{},{}) does not fit {}x{} plane",
                x0, x1, y0, y1, self.width, self.height
            )));
        }
        let rx = (x1 - x0) as f64 / 2.0;
        let ry = (y1 - y0) as f64 / 2.0;
        let cx = x0 as f64 + rx;
        let cy = y0 as f64 + ry;

        for y in y0..y1 {
            // Solve the ellipse equation per row and fill the span.
            let dy = (y as f64 + 0.5 - cy) / ry;
            let rem = 1.0 - dy * dy;
            if rem < 0.0 {
                continue;
            }
            let half_span = rx * rem.sqrt();
            let row = y as usize * self.width as usize;
            for x in x0..x1 {
                let dx = (x as f64 + 0.5 - cx).abs();
                if dx <= half_span {
                    self.data[row + x as usize] = value;
                }
            }
        }
        Ok(())
    }

    /// Blur the plane with a gaussian kernel of the given pixel radius.
    ///
    /// The kernel spans `2 * radius + 1` taps with sigma `radius / 2`
    /// (clamped to a sensible minimum), applied separably with edge values
    /// clamped. A radius of 0 returns an unmodified copy.
    pub fn gaussian_blur(&self, radius: u32) -> Plane {
        if radius == 0 {
            return self.clone();
        }
        let weights = gaussian_weights(radius);
        let r = radius as i64;
        let w = self.width as i64;
        let h = self.height as i64;

        // Horizontal pass
        let mut tmp = vec![0f32; self.data.len()];
        for y in 0..h {
            let row = (y * w) as usize;
            for x in 0..w {
                let mut acc = 0f32;
                for (k, weight) in weights.iter().enumerate() {
                    let sx = (x + k as i64 - r).clamp(0, w - 1);
                    acc += weight * self.data[row + sx as usize] as f32;
                }
                tmp[row + x as usize] = acc;
            }
        }

        // Vertical pass
        let mut out = Plane {
            width: self.width,
            height: self.height,
            data: vec![0; self.data.len()],
        };
        for y in 0..h {
            for x in 0..w {
                let mut acc = 0f32;
                for (k, weight) in weights.iter().enumerate() {
                    let sy = (y + k as i64 - r).clamp(0, h - 1);
                    acc += weight * tmp[(sy * w + x) as usize];
                }
                out.data[(y * w + x) as usize] = acc.round().clamp(0.0, 255.0) as u8;
            }
        }
        out
    }

    /// Multiply two planes pixelwise, treating values as fractions of 255.
    ///
    /// `255 * 255` stays `255`; multiplying by a zero plane clears the
    /// result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSizes`] if the dimensions differ.
    pub fn multiply(&self, other: &Plane) -> Result<Plane> {
        if self.size() != other.size() {
            return Err(Error::IncompatibleSizes(
                self.width,
                self.height,
                other.width,
                other.height,
            ));
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| ((a as u32 * b as u32) / 255) as u8)
            .collect();
        Ok(Plane {
            width: self.width,
            height: self.height,
            data,
        })
    }
}

/// Normalized 1-D gaussian weights for a kernel of `2 * radius + 1` taps.
fn gaussian_weights(radius: u32) -> Vec<f32> {
    let sigma = (radius as f32 / 2.0).max(0.5);
    let denom = 2.0 * sigma * sigma;
    let r = radius as i64;
    let mut weights: Vec<f32> = (-r..=r)
        .map(|i| (-(i * i) as f32 / denom).exp())
        .collect();
    let sum: f32 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}
