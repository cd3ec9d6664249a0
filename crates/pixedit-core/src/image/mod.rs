//! Image - The sample grid
//!
//! An [`Image`] owns a rectangular grid of `i32` samples together with the
//! [`PixelCodec`] that interprets them.
//!
//! # Layout
//!
//! - Samples are stored row-major in a single `Vec<i32>`
//! - Sample `(col, row)` lives at index `row * width + col`
//! - Width and height are always positive
//!
//! # Ownership model
//!
//! An image has exactly one owner. In-place operations take `&mut self`.
//! Operations that change the grid size build a fresh image with
//! [`Image::with_samples`] which the caller then moves into place, so no
//! partially updated grid is ever visible.

mod histogram;
mod scramble;
mod tone;

pub use histogram::{HISTOGRAM_BINS, Histogram};
pub use tone::ToneOptions;

use crate::codec::PixelCodec;
use crate::error::{Error, Result};
use crate::{MAX_BRIGHTNESS, MIN_BRIGHTNESS, color};

/// Rectangular grid of samples with a fixed codec
///
/// # Examples
///
/// ```
/// use pixedit_core::{Image, PixelCodec};
///
/// let image = Image::new(PixelCodec::Grayscale, vec![vec![10, 250], vec![0, 200]]).unwrap();
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.height(), 2);
/// assert_eq!(image.get(1, 0), Some(250));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    codec: PixelCodec,
    samples: Vec<i32>,
}

impl Image {
    /// Build an image from a list of rows.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if there are no rows or the rows are empty
    /// - [`Error::RaggedRow`] if any row differs in length from the first
    /// - [`Error::SampleOutOfRange`] for a grayscale sample outside `[0, 255]`
    /// - [`Error::OpaqueAlphaRequired`] for a packed sample with alpha != 255
    pub fn new(codec: PixelCodec, rows: Vec<Vec<i32>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension {
                width: width as u32,
                height: height as u32,
            });
        }

        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(Error::RaggedRow {
                row,
                expected: width,
                actual: r.len(),
            });
        }

        let samples = rows.into_iter().flatten().collect();
        Self::from_raw(codec, width as u32, height as u32, samples)
    }

    /// Build an image from a row-major sample vector.
    ///
    /// # Errors
    ///
    /// Same as [`Image::new`]; a length mismatch is reported as
    /// [`Error::InvalidDimension`].
    pub fn from_raw(codec: PixelCodec, width: u32, height: u32, samples: Vec<i32>) -> Result<Self> {
        if width == 0 || height == 0 || samples.len() != width as usize * height as usize {
            return Err(Error::InvalidDimension { width, height });
        }

        let image = Self {
            width,
            height,
            codec,
            samples,
        };
        image.validate_samples()?;
        Ok(image)
    }

    /// Build an image with every sample set to `value`.
    pub fn filled(codec: PixelCodec, width: u32, height: u32, value: i32) -> Result<Self> {
        Self::from_raw(codec, width, height, vec![value; width as usize * height as usize])
    }

    /// Build a new image with this image's codec and the given grid.
    ///
    /// Unlike [`Image::from_raw`], sample values are not range checked:
    /// derived grids carry whatever raw values the source held.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the dimensions are zero or do
    /// not match `samples.len()`.
    pub fn with_samples(&self, width: u32, height: u32, samples: Vec<i32>) -> Result<Self> {
        if width == 0 || height == 0 || samples.len() != width as usize * height as usize {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            codec: self.codec,
            samples,
        })
    }

    fn validate_samples(&self) -> Result<()> {
        for (i, &value) in self.samples.iter().enumerate() {
            let col = (i % self.width as usize) as u32;
            let row = (i / self.width as usize) as u32;
            self.check_sample(col, row, value)?;
        }
        Ok(())
    }

    fn check_sample(&self, col: u32, row: u32, value: i32) -> Result<()> {
        match self.codec {
            PixelCodec::Grayscale => {
                if !(MIN_BRIGHTNESS..=MAX_BRIGHTNESS).contains(&value) {
                    return Err(Error::SampleOutOfRange { col, row, value });
                }
            }
            PixelCodec::PackedRgba => {
                if color::alpha(value) != color::OPAQUE {
                    return Err(Error::OpaqueAlphaRequired { col, row, value });
                }
            }
        }
        Ok(())
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the codec used to interpret samples.
    #[inline]
    pub fn codec(&self) -> PixelCodec {
        self.codec
    }

    /// Whether samples are packed color.
    #[inline]
    pub fn is_color(&self) -> bool {
        !self.codec.is_grayscale()
    }

    /// All samples, row-major.
    #[inline]
    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    /// All samples, row-major, mutable.
    #[inline]
    pub(crate) fn samples_mut(&mut self) -> &mut [i32] {
        &mut self.samples
    }

    /// One row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    pub fn row(&self, row: u32) -> &[i32] {
        let start = row as usize * self.width as usize;
        &self.samples[start..start + self.width as usize]
    }

    /// One row of samples, mutable.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    pub(crate) fn row_mut(&mut self, row: u32) -> &mut [i32] {
        let start = row as usize * self.width as usize;
        let w = self.width as usize;
        &mut self.samples[start..start + w]
    }

    /// Copy of the grid as a list of rows.
    pub fn pixels(&self) -> Vec<Vec<i32>> {
        self.samples
            .chunks_exact(self.width as usize)
            .map(<[i32]>::to_vec)
            .collect()
    }

    /// Flattened `0xRRGGBB`-style view for display.
    ///
    /// Packed samples pass through unchanged; a grayscale value `v` becomes
    /// `v * 0x10101` so all three channels equal `v`.
    pub fn pixels_int_rgb(&self) -> Vec<i32> {
        if self.is_color() {
            self.samples.clone()
        } else {
            self.samples.iter().map(|&v| v.wrapping_mul(0x10101)).collect()
        }
    }

    /// Get the sample at (col, row).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get(&self, col: u32, row: u32) -> Option<i32> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.get_unchecked(col, row))
    }

    /// Get the sample at (col, row) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the sample vector.
    #[inline]
    pub fn get_unchecked(&self, col: u32, row: u32) -> i32 {
        self.samples[row as usize * self.width as usize + col as usize]
    }

    /// Set the sample at (col, row).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds,
    /// and the same errors as [`Image::new`] if `val` does not fit the codec.
    pub fn set(&mut self, col: u32, row: u32, val: i32) -> Result<()> {
        if col >= self.width || row >= self.height {
            return Err(Error::IndexOutOfBounds { col, row });
        }
        self.check_sample(col, row, val)?;
        let idx = row as usize * self.width as usize + col as usize;
        self.samples[idx] = val;
        Ok(())
    }

    /// Reverse the order of samples within one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    pub fn reverse_row(&mut self, row: u32) {
        self.row_mut(row).reverse();
    }

    /// Exchange two whole rows.
    ///
    /// # Panics
    ///
    /// Panics if either row is `>= height`.
    pub fn swap_rows(&mut self, a: u32, b: u32) {
        if a == b {
            return;
        }
        let w = self.width as usize;
        let (lo, hi) = (a.min(b) as usize, a.max(b) as usize);
        let (upper, lower) = self.samples.split_at_mut(hi * w);
        upper[lo * w..(lo + 1) * w].swap_with_slice(&mut lower[..w]);
    }
}
