//! pixedit - In-memory raster editing engine
//!
//! # Overview
//!
//! pixedit owns a rectangular grid of samples and applies tone,
//! geometric, resampling, filtering and scrambling operations to it:
//!
//! - Tone: lighten, darken, negative, contrast
//! - Geometry: flips, 90 degree rotation, wrap-around shifts
//! - Resampling: halve, double
//! - Convolution filtering with square odd-sized kernels
//! - Reversible seeded scrambling
//! - Brightness histogram
//!
//! Loading, saving and displaying images are left to the caller.
//!
//! # Example
//!
//! ```
//! use pixedit::{Image, ImageEdit, PixelCodec};
//!
//! let mut image = Image::new(PixelCodec::Grayscale, vec![vec![1, 2], vec![3, 4]]).unwrap();
//! image.rotate().unwrap();
//! assert_eq!(image.pixels(), vec![vec![3, 1], vec![4, 2]]);
//! ```

mod edit;
mod error;

// Re-export core types (primary data structures used everywhere)
pub use pixedit_core::*;

pub use edit::ImageEdit;
pub use error::{EditError, EditResult};

// Re-export domain crates as modules to avoid name conflicts
pub use pixedit_filter as filter;
pub use pixedit_transform as transform;
