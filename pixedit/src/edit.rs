//! Method-style editing on an image slot
//!
//! [`ImageEdit`] exposes every operation as a `&mut self` method. Size
//! changing operations compute a new image and then move it into `self`,
//! so a failed call leaves the image exactly as it was.

use crate::EditResult;
use pixedit_core::{Histogram, Image};
use pixedit_filter::Kernel;
use pixedit_transform::ShiftDirection;

/// The full operation set, applied in place
pub trait ImageEdit {
    /// Raise every sample by 3, saturating at 255.
    fn lighten(&mut self);
    /// Lower every sample by 3, saturating at 0.
    fn darken(&mut self);
    /// Replace every sample with `255 - sample`.
    fn negative(&mut self);
    /// Pull samples 3 toward the mean, without clamping.
    fn reduce_contrast(&mut self);
    /// Push samples 3 away from the mean, then clamp.
    fn enhance_contrast(&mut self);
    /// Mirror left-right.
    fn flip_horizontally(&mut self);
    /// Mirror top-bottom.
    fn flip_vertically(&mut self);
    /// Rotate 90 degrees clockwise.
    fn rotate(&mut self) -> EditResult<()>;
    /// Wrap-around shift by one column; `step` is `-1` (left) or `1` (right).
    fn shift_horizontally(&mut self, step: i32) -> EditResult<()>;
    /// Wrap-around shift by one row; `step` is `-1` (up) or `1` (down).
    fn shift_vertically(&mut self, step: i32) -> EditResult<()>;
    /// Halve both dimensions.
    fn halve(&mut self) -> EditResult<()>;
    /// Grow to `(2w-1) x (2h-1)`.
    fn double_size(&mut self) -> EditResult<()>;
    /// Convolve with `kernel`.
    fn apply_filter(&mut self, kernel: &Kernel) -> EditResult<()>;
    /// Scramble, or unscramble, with `seed`.
    fn encrypt_decrypt(&mut self, seed: i32);
    /// Brightness histogram of a grayscale image.
    fn calculate_histogram(&self) -> EditResult<Histogram>;
}

impl ImageEdit for Image {
    fn lighten(&mut self) {
        Image::lighten(self);
    }

    fn darken(&mut self) {
        Image::darken(self);
    }

    fn negative(&mut self) {
        Image::negative(self);
    }

    fn reduce_contrast(&mut self) {
        Image::reduce_contrast(self);
    }

    fn enhance_contrast(&mut self) {
        Image::enhance_contrast(self);
    }

    fn flip_horizontally(&mut self) {
        pixedit_transform::flip_horizontally(self);
    }

    fn flip_vertically(&mut self) {
        pixedit_transform::flip_vertically(self);
    }

    fn rotate(&mut self) -> EditResult<()> {
        *self = pixedit_transform::rotate(self)?;
        Ok(())
    }

    fn shift_horizontally(&mut self, step: i32) -> EditResult<()> {
        let direction = ShiftDirection::from_step(step)?;
        *self = pixedit_transform::shift_horizontally(self, direction)?;
        Ok(())
    }

    fn shift_vertically(&mut self, step: i32) -> EditResult<()> {
        let direction = ShiftDirection::from_step(step)?;
        *self = pixedit_transform::shift_vertically(self, direction)?;
        Ok(())
    }

    fn halve(&mut self) -> EditResult<()> {
        *self = pixedit_transform::halve(self)?;
        Ok(())
    }

    fn double_size(&mut self) -> EditResult<()> {
        *self = pixedit_transform::double_size(self)?;
        Ok(())
    }

    fn apply_filter(&mut self, kernel: &Kernel) -> EditResult<()> {
        *self = pixedit_filter::apply_filter(self, kernel)?;
        Ok(())
    }

    fn encrypt_decrypt(&mut self, seed: i32) {
        Image::encrypt_decrypt(self, seed);
    }

    fn calculate_histogram(&self) -> EditResult<Histogram> {
        Ok(Image::calculate_histogram(self)?)
    }
}
