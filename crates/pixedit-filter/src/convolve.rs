//! Convolution
//!
//! Each interior output sample is `sum(kernel[y][x] * in[row + y - m][col + x - m])`,
//! truncated toward zero and clamped to `[0, 255]`, where `m` is the kernel
//! margin. Cells in the border band are copied unchanged.
//!
//! The band is not symmetric. A cell is border when
//!
//! ```text
//! row <= (size - 3) / 2 || col <= (size - 3) / 2
//!     || row >= height - m || col >= width - m
//! ```
//!
//! so the low edges exclude one cell fewer than the high edges. For a 1x1
//! kernel the low test is `<= -1` and never matches.

use crate::{FilterResult, Kernel};
use pixedit_core::{Image, clamp_brightness};

/// Whether `(col, row)` lies in the unfiltered border band.
pub fn is_border(col: u32, row: u32, width: u32, height: u32, kernel_size: u32) -> bool {
    let low = (kernel_size as i64 - 3) / 2;
    let m = (kernel_size as i64 - 1) / 2;
    let (col, row) = (col as i64, row as i64);
    row <= low || col <= low || row >= height as i64 - m || col >= width as i64 - m
}

/// Convolve an image with a kernel.
///
/// Operates on raw sample values. Returns a new image of the same size
/// and codec.
pub fn apply_filter(image: &Image, kernel: &Kernel) -> FilterResult<Image> {
    let w = image.width();
    let h = image.height();
    let size = kernel.size();
    let m = kernel.margin();

    let mut out = Vec::with_capacity(image.samples().len());
    let mut filtered = 0usize;
    for row in 0..h {
        for col in 0..w {
            if is_border(col, row, w, h, size) {
                out.push(image.get_unchecked(col, row));
                continue;
            }

            let mut val = 0.0;
            for y in 0..size {
                for x in 0..size {
                    let weight = kernel.data()[(y * size + x) as usize];
                    val += weight * image.get_unchecked(col + x - m, row + y - m) as f64;
                }
            }
            out.push(clamp_brightness(val as i32));
            filtered += 1;
        }
    }

    tracing::debug!(size, filtered, width = w, height = h, "apply_filter");
    Ok(image.with_samples(w, h, out)?)
}
