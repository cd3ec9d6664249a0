//! Rotation and flip operations
//!
//! - Flips mirror the image in place; the middle column (or row) of an odd
//!   dimension stays where it is.
//! - [`rotate`] turns the image 90 degrees clockwise, swapping width and
//!   height.

use crate::TransformResult;
use pixedit_core::Image;

/// Mirror every row left-right, in place.
pub fn flip_horizontally(image: &mut Image) {
    tracing::trace!(width = image.width(), "flip_horizontally");
    for row in 0..image.height() {
        image.reverse_row(row);
    }
}

/// Mirror the image top-bottom, in place.
pub fn flip_vertically(image: &mut Image) {
    tracing::trace!(height = image.height(), "flip_vertically");
    let h = image.height();
    for top in 0..h / 2 {
        image.swap_rows(top, h - 1 - top);
    }
}

/// Rotate an image 90 degrees clockwise.
///
/// The output is `height` wide and `width` tall, with
/// `out[r][c] = in[out_width - 1 - c][r]`.
///
/// # Arguments
/// * `image` - Input image
///
/// # Returns
/// The rotated image, same codec
pub fn rotate(image: &Image) -> TransformResult<Image> {
    let w = image.width();
    let h = image.height();
    let (new_w, new_h) = (h, w);

    let mut out = Vec::with_capacity(image.samples().len());
    for r in 0..new_h {
        for c in 0..new_w {
            out.push(image.get_unchecked(r, new_w - 1 - c));
        }
    }

    tracing::debug!(from = ?(w, h), to = ?(new_w, new_h), "rotate");
    Ok(image.with_samples(new_w, new_h, out)?)
}

/// Rotate an image by 90-degree clockwise increments
///
/// # Arguments
/// * `image` - Input image
/// * `quads` - Number of quarter turns; only `quads % 4` matters
pub fn rotate_orth(image: &Image, quads: u32) -> TransformResult<Image> {
    let mut out = image.clone();
    for _ in 0..quads % 4 {
        out = rotate(&out)?;
    }
    Ok(out)
}
