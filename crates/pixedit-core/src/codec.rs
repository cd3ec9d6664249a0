//! Pixel codec
//!
//! A [`PixelCodec`] decides how a stored sample maps to red/green/blue
//! channels. It is chosen when an [`Image`](crate::Image) is built and
//! never changes afterwards.
//!
//! | Variant | Sample meaning | Channels |
//! |---|---|---|
//! | `Grayscale` | brightness in `[0, 255]` | `r = g = b = sample` |
//! | `PackedRgba` | `0xAARRGGBB` | bytes of the sample, alpha always 255 |

use crate::{clamp_brightness, color};
use std::fmt;

/// Sample interpretation for an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelCodec {
    /// One brightness value per sample
    #[default]
    Grayscale,
    /// Packed 8-bit channels with an opaque alpha byte
    PackedRgba,
}

impl PixelCodec {
    /// Whether this codec can represent color.
    ///
    /// Only the packed representation is color capable; a grayscale codec
    /// always reports `false`.
    pub fn is_color_capable(self) -> bool {
        matches!(self, PixelCodec::PackedRgba)
    }

    /// Whether samples are plain brightness values.
    pub fn is_grayscale(self) -> bool {
        matches!(self, PixelCodec::Grayscale)
    }

    /// Split a sample into its red, green and blue channels.
    ///
    /// A grayscale sample is returned unchanged in all three channels.
    pub fn decode_channels(self, sample: i32) -> (i32, i32, i32) {
        match self {
            PixelCodec::Grayscale => (sample, sample, sample),
            PixelCodec::PackedRgba => {
                let (r, g, b) = color::extract_rgb(sample);
                (r as i32, g as i32, b as i32)
            }
        }
    }

    /// Alpha channel of a sample (always 255 for grayscale).
    pub fn alpha(self, sample: i32) -> u8 {
        match self {
            PixelCodec::Grayscale => color::OPAQUE,
            PixelCodec::PackedRgba => color::alpha(sample),
        }
    }

    /// Pack three channels into a sample.
    ///
    /// Each channel is clamped to `[0, 255]` first. The grayscale codec
    /// keeps the clamped red channel; the packed codec forces alpha to 255.
    pub fn encode_channels(self, r: i32, g: i32, b: i32) -> i32 {
        let (r, g, b) = (clamp_brightness(r), clamp_brightness(g), clamp_brightness(b));
        match self {
            PixelCodec::Grayscale => r,
            PixelCodec::PackedRgba => color::compose_rgb(r as u8, g as u8, b as u8),
        }
    }

    /// Channel-wise truncated average of two samples.
    pub fn average_pixels(self, a: i32, b: i32) -> i32 {
        let (ra, ga, ba) = self.decode_channels(a);
        let (rb, gb, bb) = self.decode_channels(b);
        self.encode_channels((ra + rb) / 2, (ga + gb) / 2, (ba + bb) / 2)
    }
}

impl fmt::Display for PixelCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelCodec::Grayscale => f.write_str("grayscale"),
            PixelCodec::PackedRgba => f.write_str("packed-rgba"),
        }
    }
}
