//! pixedit-transform - Geometric transformations for pixedit
//!
//! This crate provides geometric operations including:
//!
//! - Horizontal and vertical flips (in place)
//! - 90 degree clockwise rotation and orthogonal rotation
//! - One-cell wrap-around shifts in either axis
//! - Halving and doubling resampling
//!
//! Operations that change the grid return a new [`Image`]; callers that
//! hold an image slot swap the result in.
//!
//! [`Image`]: pixedit_core::Image

mod error;
pub mod rotate;
pub mod scale;
pub mod shift;

pub use error::{TransformError, TransformResult};
pub use rotate::{flip_horizontally, flip_vertically, rotate, rotate_orth};
pub use scale::{double_size, halve};
pub use shift::{ShiftDirection, shift_horizontally, shift_vertically};
