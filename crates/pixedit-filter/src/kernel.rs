//! Convolution kernels
//!
//! A [`Kernel`] is a square matrix of `f64` weights whose side length is
//! odd, so it always has a single center cell.

use crate::{FilterError, FilterResult};

/// A square convolution kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Side length (odd)
    size: u32,
    /// Kernel data (row-major order)
    data: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `size` is even or zero, or
    /// if `data` does not hold exactly `size * size` values.
    pub fn new(size: u32, data: Vec<f64>) -> FilterResult<Self> {
        if size % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "side length must be odd, got {size}"
            )));
        }
        let expected = size as usize * size as usize;
        if data.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "expected {expected} weights for a {size}x{size} kernel, got {}",
                data.len()
            )));
        }
        Ok(Self { size, data })
    }

    /// Create a kernel from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if the matrix is not square or
    /// its side length is even.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> FilterResult<Self> {
        let size = rows.len();
        if let Some(r) = rows.iter().find(|r| r.len() != size) {
            return Err(FilterError::InvalidKernel(format!(
                "kernel is not square: {size} rows but a row of length {}",
                r.len()
            )));
        }
        Self::new(size as u32, rows.into_iter().flatten().collect())
    }

    /// Kernel with 1 at the center and 0 elsewhere.
    pub fn identity(size: u32) -> FilterResult<Self> {
        let mut kernel = Self::new(size, vec![0.0; size as usize * size as usize])?;
        let m = kernel.margin();
        kernel.set(m, m, 1.0);
        Ok(kernel)
    }

    /// Create a box (averaging) kernel.
    ///
    /// All values are `1/(size*size)`.
    pub fn box_blur(size: u32) -> FilterResult<Self> {
        let n = size as usize * size as usize;
        Self::new(size, vec![1.0 / n as f64; n])
    }

    /// 3x3 sharpening kernel.
    pub fn sharpen() -> Self {
        Self {
            size: 3,
            data: vec![0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0],
        }
    }

    /// 3x3 Laplacian edge kernel.
    pub fn edge() -> Self {
        Self {
            size: 3,
            data: vec![-1.0, -1.0, -1.0, -1.0, 8.0, -1.0, -1.0, -1.0, -1.0],
        }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Distance from the center to an edge, `(size - 1) / 2`.
    #[inline]
    pub fn margin(&self) -> u32 {
        (self.size - 1) / 2
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get a value at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.data[(y * self.size + x) as usize])
    }

    /// Set a value at (x, y). Out-of-range coordinates are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        if x < self.size && y < self.size {
            self.data[(y * self.size + x) as usize] = value;
        }
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}
