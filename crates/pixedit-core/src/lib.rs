//! pixedit Core - Image buffer and pixel codec
//!
//! This crate provides the fundamental data structures and the in-place
//! operations of the pixedit engine:
//!
//! - [`Image`] - The rectangular sample grid (single owner, mutable)
//! - [`PixelCodec`] - Interpretation of a sample as grayscale or packed color
//! - [`Histogram`] - 256-bin brightness histogram
//! - [`ScrambleRng`] - The generator behind the reversible scrambling transform
//!
//! Geometric operations live in `pixedit-transform`, convolution in
//! `pixedit-filter`.

pub mod codec;
pub mod error;
pub mod image;
pub mod rng;

pub use codec::PixelCodec;
pub use error::{Error, Result};
pub use image::{Histogram, Image, ToneOptions};
pub use rng::ScrambleRng;

/// Largest brightness value a channel or grayscale sample may hold.
pub const MAX_BRIGHTNESS: i32 = 255;

/// Smallest brightness value a channel or grayscale sample may hold.
pub const MIN_BRIGHTNESS: i32 = 0;

/// Clamp a value into `[MIN_BRIGHTNESS, MAX_BRIGHTNESS]`.
#[inline]
pub fn clamp_brightness(val: i32) -> i32 {
    val.clamp(MIN_BRIGHTNESS, MAX_BRIGHTNESS)
}

/// Channel helpers for packed color samples.
///
/// # Pixel format
///
/// Packed samples are stored as `0xAARRGGBB` in an `i32` (alpha in the
/// most significant byte, blue in the least). An opaque packed sample is
/// therefore negative when read as a signed integer.
pub mod color {
    /// Shift amounts for extracting color channels
    pub const ALPHA_SHIFT: u32 = 24;
    pub const RED_SHIFT: u32 = 16;
    pub const GREEN_SHIFT: u32 = 8;
    pub const BLUE_SHIFT: u32 = 0;

    /// Alpha value of every sample produced by the packed codec.
    pub const OPAQUE: u8 = 255;

    #[inline]
    fn channel(sample: i32, shift: u32) -> u8 {
        ((sample as u32 >> shift) & 0xff) as u8
    }

    /// Extract red component from a packed sample.
    #[inline]
    pub fn red(sample: i32) -> u8 {
        channel(sample, RED_SHIFT)
    }

    /// Extract green component from a packed sample.
    #[inline]
    pub fn green(sample: i32) -> u8 {
        channel(sample, GREEN_SHIFT)
    }

    /// Extract blue component from a packed sample.
    #[inline]
    pub fn blue(sample: i32) -> u8 {
        channel(sample, BLUE_SHIFT)
    }

    /// Extract alpha component from a packed sample.
    #[inline]
    pub fn alpha(sample: i32) -> u8 {
        channel(sample, ALPHA_SHIFT)
    }

    /// Compose an opaque packed sample (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> i32 {
        (((OPAQUE as u32) << ALPHA_SHIFT)
            | ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)) as i32
    }

    /// Extract RGB values from a packed sample.
    #[inline]
    pub fn extract_rgb(sample: i32) -> (u8, u8, u8) {
        (red(sample), green(sample), blue(sample))
    }

}
