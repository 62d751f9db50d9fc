use std::{num::NonZeroUsize, ops::Range};

use serde::Serialize;

use crate::{Result, descriptive};

/// A frequency distribution of a single column.
///
/// The observed range `[min, max]` is divided into equal-width bins. Each
/// value is counted in exactly one bin; the last bin also includes `max`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// The bins, in ascending order of range.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: usize,
}

impl Histogram {
    /// Creates a histogram with `num_bins` equal-width bins.
    ///
    /// A constant sample is binned over the unit range starting at its value.
    /// Fails with [`crate::StatsError::EmptyInput`] on an empty sample.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::num::NonZeroUsize;
    /// # use datalens_stats::histogram::Histogram;
    /// let values = [1.0, 2.0, 2.5, 3.0, 9.0];
    /// let histogram = Histogram::new(&values, NonZeroUsize::new(4).unwrap()).unwrap();
    /// assert_eq!(histogram.bins.len(), 4);
    /// assert_eq!(histogram.counts().collect::<Vec<_>>(), vec![3, 1, 0, 1]);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    pub fn new(sample: &[f64], num_bins: NonZeroUsize) -> Result<Self> {
        let num_bins = num_bins.get();
        let min = descriptive::min(sample)?;
        let max = descriptive::max(sample)?;

        let mut range = max - min;
        if range <= 0.0 {
            range = 1.0;
        }
        let bin_width = range / num_bins as f64;

        let mut bins = (0..num_bins)
            .map(|bin_idx| {
                // Recompute bin boundaries to avoid floating-point accumulation errors
                let start = min + (bin_idx as f64) * range / num_bins as f64;
                let mut end = min + ((bin_idx + 1) as f64) * range / num_bins as f64;
                if bin_idx == num_bins - 1 {
                    end = end.max(max).next_up();
                }
                HistogramBin {
                    range: start..end,
                    count: 0,
                }
            })
            .collect::<Vec<_>>();

        for &val in sample {
            let position = ((val - min) / bin_width).floor() as usize;
            let mut idx = position.min(num_bins - 1);
            // boundary values can round into the neighbouring bin
            if idx > 0 && val < bins[idx].range.start {
                idx -= 1;
            } else if idx + 1 < num_bins && val >= bins[idx].range.end {
                idx += 1;
            }
            bins[idx].count += 1;
        }

        Ok(Self { bins })
    }

    /// Total number of counted values.
    #[must_use]
    pub fn total(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Bin counts in order.
    pub fn counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.bins.iter().map(|bin| bin.count)
    }

    /// Largest bin count, or 0 for a histogram without bins.
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.counts().max().unwrap_or(0)
    }
}
