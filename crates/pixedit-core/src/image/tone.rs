//! Photometric operations
//!
//! Tone adjustments applied in place to every sample:
//!
//! - Lighten / darken by a fixed step (`lighten`, `darken`)
//! - Negative (`negative`)
//! - Contrast around the mean (`reduce_contrast`, `enhance_contrast`)
//!
//! All of these work on raw sample values and ignore the codec, so on a
//! packed color image the packed integer is treated as one brightness
//! scalar.
//!
//! `reduce_contrast` does not clamp its result while `enhance_contrast`
//! does. Both behaviors are kept as they are.

use super::Image;
use crate::{MAX_BRIGHTNESS, clamp_brightness};

/// Step used by the tone operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneOptions {
    /// Amount added or subtracted per operation
    pub step: i32,
}

impl Default for ToneOptions {
    fn default() -> Self {
        Self { step: 3 }
    }
}

impl ToneOptions {
    /// Options with a custom step.
    pub fn with_step(step: i32) -> Self {
        Self { step }
    }
}

impl Image {
    /// Raise every sample by the default step, saturating at 255.
    pub fn lighten(&mut self) {
        self.lighten_with(ToneOptions::default());
    }

    /// Raise every sample by `opts.step`, clamping to `[0, 255]`.
    pub fn lighten_with(&mut self, opts: ToneOptions) {
        tracing::trace!(step = opts.step, "lighten");
        for s in self.samples_mut() {
            *s = clamp_brightness(s.saturating_add(opts.step));
        }
    }

    /// Lower every sample by the default step, saturating at 0.
    pub fn darken(&mut self) {
        self.darken_with(ToneOptions::default());
    }

    /// Lower every sample by `opts.step`, clamping to `[0, 255]`.
    pub fn darken_with(&mut self, opts: ToneOptions) {
        tracing::trace!(step = opts.step, "darken");
        for s in self.samples_mut() {
            *s = clamp_brightness(s.saturating_sub(opts.step));
        }
    }

    /// Replace every sample with `255 - sample`.
    ///
    /// Applying it twice restores the original exactly.
    pub fn negative(&mut self) {
        tracing::trace!("negative");
        for s in self.samples_mut() {
            *s = MAX_BRIGHTNESS.wrapping_sub(*s);
        }
    }

    /// Floor of the mean sample value.
    pub fn mean_sample(&self) -> i32 {
        let sum: i64 = self.samples().iter().map(|&s| s as i64).sum();
        sum.div_euclid(self.samples().len() as i64) as i32
    }

    /// Pull every sample one step toward the mean.
    ///
    /// The mean is computed once before any sample changes. Results are
    /// not clamped.
    pub fn reduce_contrast(&mut self) {
        self.reduce_contrast_with(ToneOptions::default());
    }

    /// Pull every sample `opts.step` toward the mean, without clamping.
    pub fn reduce_contrast_with(&mut self, opts: ToneOptions) {
        let mean = self.mean_sample();
        let grayscale = self.codec().is_grayscale();
        let mut escaped = 0usize;
        for s in self.samples_mut() {
            if *s > mean {
                *s = s.wrapping_sub(opts.step);
            } else if *s < mean {
                *s = s.wrapping_add(opts.step);
            }
            if grayscale && clamp_brightness(*s) != *s {
                escaped += 1;
            }
        }
        if escaped > 0 {
            tracing::warn!(mean, escaped, "reduce_contrast left samples outside [0, 255]");
        } else {
            tracing::trace!(mean, step = opts.step, "reduce_contrast");
        }
    }

    /// Push every sample one step away from the mean, then clamp to `[0, 255]`.
    pub fn enhance_contrast(&mut self) {
        self.enhance_contrast_with(ToneOptions::default());
    }

    /// Push every sample `opts.step` away from the mean, then clamp.
    pub fn enhance_contrast_with(&mut self, opts: ToneOptions) {
        let mean = self.mean_sample();
        tracing::trace!(mean, step = opts.step, "enhance_contrast");
        for s in self.samples_mut() {
            if *s > mean {
                *s = s.wrapping_add(opts.step);
            } else if *s < mean {
                *s = s.wrapping_sub(opts.step);
            }
            *s = clamp_brightness(*s);
        }
    }
}
