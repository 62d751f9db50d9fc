//! Linear-interpolation quantiles.
//!
//! Quantiles use the R-7 method: for probability `p`, the position
//! `idx = p · (N - 1)` is located in the sorted sample and the value is
//! interpolated between the two neighbouring ranks.

use serde::Serialize;

use crate::{Result, StatsError, descriptive};

/// First quartile, median and third quartile of a sample.
///
/// # Examples
///
/// ```
/// use datalens_stats::percentiles::Quartiles;
///
/// let quartiles = Quartiles::new(&[4.0, 1.0, 3.0, 2.0]).unwrap();
/// assert_eq!(quartiles.q1, 1.75);
/// assert_eq!(quartiles.median, 2.5);
/// assert_eq!(quartiles.q3, 3.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quartiles {
    /// The 25th percentile.
    pub q1: f64,
    /// The 50th percentile.
    pub median: f64,
    /// The 75th percentile.
    pub q3: f64,
}

impl Quartiles {
    /// Computes quartiles from unsorted values.
    pub fn new(sample: &[f64]) -> Result<Self> {
        Self::from_sorted(&descriptive::sorted_copy(sample))
    }

    /// Computes quartiles from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `sorted_values` is not sorted in ascending order.
    pub fn from_sorted(sorted_values: &[f64]) -> Result<Self> {
        Ok(Self {
            q1: quantile_sorted(sorted_values, 0.25)?,
            median: quantile_sorted(sorted_values, 0.5)?,
            q3: quantile_sorted(sorted_values, 0.75)?,
        })
    }

    /// Interquartile range, `q3 - q1`.
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Computes the `p`-quantile of an unsorted sample.
///
/// # Examples
///
/// ```
/// use datalens_stats::percentiles::quantile;
///
/// let values = [5.0, 1.0, 4.0, 2.0, 3.0];
/// assert_eq!(quantile(&values, 0.5).unwrap(), 3.0);
/// assert_eq!(quantile(&values, 0.125).unwrap(), 1.5);
/// assert!(quantile(&values, 1.5).is_err());
/// ```
pub fn quantile(sample: &[f64], p: f64) -> Result<f64> {
    quantile_sorted(&descriptive::sorted_copy(sample), p)
}

/// Computes the `p`-quantile of a pre-sorted sample.
///
/// Fails with [`StatsError::InvalidProbability`] when `p` is outside `[0, 1]`
/// and with [`StatsError::EmptyInput`] when the sample is empty.
///
/// # Panics
///
/// Panics in debug mode if `sorted_values` is not sorted in ascending order.
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
pub fn quantile_sorted(sorted_values: &[f64], p: f64) -> Result<f64> {
    debug_assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    if !(0.0..=1.0).contains(&p) {
        return Err(StatsError::InvalidProbability { p });
    }
    if sorted_values.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let idx = p * (sorted_values.len() - 1) as f64;
    let lo = idx.floor();
    let lo_value = sorted_values[lo as usize];
    let hi_value = sorted_values[idx.ceil() as usize];
    let value = lo_value + (idx - lo) * (hi_value - lo_value);
    // keep rounding from leaving the bracketing ranks
    Ok(value.clamp(lo_value, hi_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_r7_quartiles() {
        let quartiles = Quartiles::new(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(quartiles.q1, 1.75);
        assert_eq!(quartiles.median, 2.5);
        assert_eq!(quartiles.q3, 3.25);
        assert_eq!(quartiles.iqr(), 1.5);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(quantile(&[3.0, 1.0, 2.0], 0.5).unwrap(), 2.0);
        assert_eq!(quantile(&[4.0, 1.0, 3.0, 2.0], 0.5).unwrap(), 2.5);
    }

    #[test]
    fn test_extremes() {
        let values = [9.0, -3.0, 4.0, 0.5];
        assert_eq!(quantile(&values, 0.0).unwrap(), -3.0);
        assert_eq!(quantile(&values, 1.0).unwrap(), 9.0);
    }

    #[test]
    fn test_single_value() {
        for p in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(quantile(&[42.0], p).unwrap(), 42.0);
        }
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(quantile(&[], 0.5), Err(StatsError::EmptyInput));
        assert_eq!(
            quantile(&[1.0], -0.1),
            Err(StatsError::InvalidProbability { p: -0.1 })
        );
        assert!(matches!(
            quantile(&[1.0], f64::NAN),
            Err(StatsError::InvalidProbability { .. })
        ));
    }
}
