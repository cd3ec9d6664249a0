//! Resampling by a factor of two
//!
//! | Function | Output size | Sample rule |
//! |---|---|---|
//! | [`halve`] | `w/2 x h/2` | truncated mean of each 2x2 block |
//! | [`double_size`] | `(2w-1) x (2h-1)` | originals on even cells, truncated pair means between |
//!
//! Averages use raw sample arithmetic, not decoded channels.

use crate::{TransformError, TransformResult};
use pixedit_core::Image;

/// Scale an image by one half in each dimension.
///
/// A trailing odd row or column is dropped.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if the image is narrower
/// or shorter than 2, since the result would be empty.
pub fn halve(image: &Image) -> TransformResult<Image> {
    let new_w = image.width() / 2;
    let new_h = image.height() / 2;
    if new_w == 0 || new_h == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "cannot halve a {}x{} image",
            image.width(),
            image.height()
        )));
    }

    let mut out = Vec::with_capacity(new_w as usize * new_h as usize);
    for row in 0..new_h {
        for col in 0..new_w {
            let (x, y) = (2 * col, 2 * row);
            let sum = image.get_unchecked(x, y) as i64
                + image.get_unchecked(x, y + 1) as i64
                + image.get_unchecked(x + 1, y) as i64
                + image.get_unchecked(x + 1, y + 1) as i64;
            out.push((sum / 4) as i32);
        }
    }

    tracing::debug!(
        from = ?(image.width(), image.height()),
        to = ?(new_w, new_h),
        "halve"
    );
    Ok(image.with_samples(new_w, new_h, out)?)
}

/// Scale an image by two in each dimension on an overlapping grid.
///
/// Every even row and column of the output is shared with the source:
///
/// - even row, even column: `in[r/2][c/2]`
/// - even row, odd column: mean of the horizontal neighbours
/// - odd row, even column: mean of the vertical neighbours
/// - odd row, odd column: mean of `in[(r-1)/2][(c-1)/2]` and `in[(r+1)/2][(c+1)/2]`
pub fn double_size(image: &Image) -> TransformResult<Image> {
    let new_w = image.width() * 2 - 1;
    let new_h = image.height() * 2 - 1;

    let mean = |a: i32, b: i32| ((a as i64 + b as i64) / 2) as i32;

    let mut out = Vec::with_capacity(new_w as usize * new_h as usize);
    for r in 0..new_h {
        for c in 0..new_w {
            let val = match (r % 2, c % 2) {
                (0, 0) => image.get_unchecked(c / 2, r / 2),
                (0, _) => mean(
                    image.get_unchecked((c - 1) / 2, r / 2),
                    image.get_unchecked((c + 1) / 2, r / 2),
                ),
                (_, 0) => mean(
                    image.get_unchecked(c / 2, (r - 1) / 2),
                    image.get_unchecked(c / 2, (r + 1) / 2),
                ),
                _ => mean(
                    image.get_unchecked((c - 1) / 2, (r - 1) / 2),
                    image.get_unchecked((c + 1) / 2, (r + 1) / 2),
                ),
            };
            out.push(val);
        }
    }

    tracing::debug!(
        from = ?(image.width(), image.height()),
        to = ?(new_w, new_h),
        "double_size"
    );
    Ok(image.with_samples(new_w, new_h, out)?)
}
