//! pixedit-filter - Convolution filtering
//!
//! This crate provides:
//!
//! - [`Kernel`] - square, odd-sized weight matrices with common presets
//!   (identity, box blur, sharpen, edge)
//! - [`apply_filter`] - convolution with an unfiltered border band

pub mod convolve;
mod error;
pub mod kernel;

pub use convolve::{apply_filter, is_border};
pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;
