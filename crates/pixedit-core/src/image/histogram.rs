//! Histogram generation for grayscale images

use super::Image;
use crate::error::{Error, Result};

/// Number of bins in a brightness histogram
pub const HISTOGRAM_BINS: usize = 256;

/// Count of samples per brightness value
///
/// `counts()[v]` is the number of samples equal to `v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u32; HISTOGRAM_BINS],
}

impl Histogram {
    /// Bin counts, indexed by brightness.
    pub fn counts(&self) -> &[u32; HISTOGRAM_BINS] {
        &self.counts
    }

    /// Consume the histogram, returning the raw bins.
    pub fn into_counts(self) -> [u32; HISTOGRAM_BINS] {
        self.counts
    }

    /// Total number of samples counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Mean brightness, or `None` for an empty histogram.
    pub fn mean(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let weighted: u64 = self
            .counts
            .iter()
            .enumerate()
            .map(|(v, &c)| v as u64 * c as u64)
            .sum();
        Some(weighted as f64 / total as f64)
    }

    /// Most frequent brightness (lowest value wins ties).
    pub fn mode(&self) -> Option<u8> {
        let (value, &count) = self
            .counts
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, c)| *c)?;
        (count > 0).then_some(value as u8)
    }
}

impl Image {
    /// Count how many samples hold each brightness value.
    ///
    /// # Errors
    ///
    /// - [`Error::NotGrayscale`] for a packed color image
    /// - [`Error::SampleOutOfRange`] if any sample lies outside `[0, 255]`
    ///   (possible after `reduce_contrast`); nothing is counted in that case
    pub fn calculate_histogram(&self) -> Result<Histogram> {
        if !self.codec().is_grayscale() {
            return Err(Error::NotGrayscale);
        }

        let mut counts = [0u32; HISTOGRAM_BINS];
        for row in 0..self.height() {
            for (col, &value) in self.row(row).iter().enumerate() {
                let bin = usize::try_from(value)
                    .ok()
                    .filter(|&b| b < HISTOGRAM_BINS)
                    .ok_or(Error::SampleOutOfRange {
                        col: col as u32,
                        row,
                        value,
                    })?;
                counts[bin] += 1;
            }
        }
        Ok(Histogram { counts })
    }
}
