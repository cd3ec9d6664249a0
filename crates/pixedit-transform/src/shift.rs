//! Wrap-around shifts
//!
//! Moves the whole image by one cell. Whatever is pushed off one edge
//! reappears on the opposite edge, so the grid size never changes.

use crate::{TransformError, TransformResult};
use pixedit_core::Image;

/// Direction of a one-cell shift
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    /// Toward column 0 / row 0 (left or up), step `-1`
    Backward,
    /// Away from column 0 / row 0 (right or down), step `+1`
    Forward,
}

impl ShiftDirection {
    /// Parse a signed step.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidParameters`] unless `step` is `-1` or `1`.
    pub fn from_step(step: i32) -> TransformResult<Self> {
        match step {
            -1 => Ok(Self::Backward),
            1 => Ok(Self::Forward),
            _ => Err(TransformError::InvalidParameters(format!(
                "shift step must be -1 or 1, got {step}"
            ))),
        }
    }

    /// Signed step for this direction.
    pub fn step(self) -> i32 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

/// Shift every row one column, wrapping at the edges.
///
/// `Forward`: `out[row][c] = in[row][c - 1]` and `out[row][0] = in[row][w - 1]`.
/// `Backward`: `out[row][c] = in[row][c + 1]` and `out[row][w - 1] = in[row][0]`.
pub fn shift_horizontally(image: &Image, direction: ShiftDirection) -> TransformResult<Image> {
    let mut out = image.samples().to_vec();
    for row in out.chunks_exact_mut(image.width() as usize) {
        match direction {
            ShiftDirection::Forward => row.rotate_right(1),
            ShiftDirection::Backward => row.rotate_left(1),
        }
    }

    tracing::debug!(step = direction.step(), "shift_horizontally");
    Ok(image.with_samples(image.width(), image.height(), out)?)
}

/// Shift every column one row, wrapping at the edges.
///
/// `Forward` moves content down (row 0 receives the last row); `Backward`
/// moves it up (the last row receives row 0).
pub fn shift_vertically(image: &Image, direction: ShiftDirection) -> TransformResult<Image> {
    let w = image.width() as usize;
    let mut out = image.samples().to_vec();
    match direction {
        ShiftDirection::Forward => out.rotate_right(w),
        ShiftDirection::Backward => out.rotate_left(w),
    }

    tracing::debug!(step = direction.step(), "shift_vertically");
    Ok(image.with_samples(image.width(), image.height(), out)?)
}
