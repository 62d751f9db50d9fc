//! Shared reducers over numeric samples.
//!
//! A sample is any `&[f64]` in caller order. Every reducer that divides by the
//! sample length or needs an ordering fails with [`StatsError::EmptyInput`] on
//! an empty sample. Variance and standard deviation are population measures
//! (divide by `N`).

use crate::{Result, StatsError};

/// Computes the arithmetic mean.
///
/// # Examples
///
/// ```
/// # use datalens_stats::descriptive::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
/// assert!(mean(&[]).is_err());
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn mean(sample: &[f64]) -> Result<f64> {
    if sample.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    Ok(sample.iter().sum::<f64>() / sample.len() as f64)
}

/// Computes the population variance, `Σ(x - mean)² / N`.
///
/// # Examples
///
/// ```
/// # use datalens_stats::descriptive::variance;
/// let sample = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(variance(&sample).unwrap(), 4.0);
/// ```
pub fn variance(sample: &[f64]) -> Result<f64> {
    let mean = mean(sample)?;
    Ok(variance_around(sample, mean))
}

/// Population variance of a non-empty sample around a precomputed mean.
#[expect(clippy::cast_precision_loss)]
pub(crate) fn variance_around(sample: &[f64], mean: f64) -> f64 {
    debug_assert!(!sample.is_empty(), "sample must not be empty");
    let sum_sq = sample.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    sum_sq / sample.len() as f64
}

/// Computes the population standard deviation.
pub fn std_dev(sample: &[f64]) -> Result<f64> {
    variance(sample).map(f64::sqrt)
}

/// Returns an ascending copy of the sample. The input is left untouched.
#[must_use]
pub fn sorted_copy(sample: &[f64]) -> Vec<f64> {
    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Returns the smallest value.
pub fn min(sample: &[f64]) -> Result<f64> {
    sample
        .iter()
        .copied()
        .reduce(f64::min)
        .ok_or(StatsError::EmptyInput)
}

/// Returns the largest value.
pub fn max(sample: &[f64]) -> Result<f64> {
    sample
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(StatsError::EmptyInput)
}

/// Returns the most frequent value.
///
/// Ties are broken by taking the smallest value, so a sample of unique values
/// has its minimum as mode.
///
/// # Examples
///
/// ```
/// # use datalens_stats::descriptive::mode;
/// assert_eq!(mode(&[3.0, 1.0, 3.0, 1.0, 2.0]).unwrap(), 1.0);
/// assert_eq!(mode(&[3.0, 2.0, 1.0]).unwrap(), 1.0);
/// ```
pub fn mode(sample: &[f64]) -> Result<f64> {
    mode_sorted(&sorted_copy(sample))
}

/// Returns the most frequent value of a pre-sorted sample.
///
/// # Panics
///
/// Panics in debug mode if `sorted_values` is not sorted in ascending order.
#[allow(clippy::float_cmp, reason = "runs are formed from exactly equal values")]
pub fn mode_sorted(sorted_values: &[f64]) -> Result<f64> {
    debug_assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    let mut best: Option<(f64, usize)> = None;
    for run in sorted_values.chunk_by(|a, b| a == b) {
        // strict comparison keeps the earliest (smallest) value on ties
        if best.is_none_or(|(_, count)| run.len() > count) {
            best = Some((run[0], run.len()));
        }
    }
    best.map(|(value, _)| value).ok_or(StatsError::EmptyInput)
}

/// Computes the adjusted Fisher-Pearson skewness,
/// `N / ((N - 1)(N - 2)) · Σ((x - mean) / s)³`, where `s` is the
/// Bessel-corrected standard deviation.
///
/// Returns `None` when the sample has fewer than three values or no spread.
///
/// # Examples
///
/// ```
/// # use datalens_stats::descriptive::skewness;
/// assert_eq!(skewness(&[1.0, 2.0, 3.0]), Some(0.0));
/// assert!(skewness(&[1.0, 2.0, 10.0]).unwrap() > 0.0);
/// assert_eq!(skewness(&[1.0, 2.0]), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn skewness(sample: &[f64]) -> Option<f64> {
    if sample.len() < 3 || !has_spread(sample) {
        return None;
    }
    let n = sample.len() as f64;
    let mean = mean(sample).ok()?;
    // skewness is scale-free, so deviations are normalized before cubing
    let scale = deviation_scale(sample, mean);
    if scale == 0.0 {
        return None;
    }
    let (sum_sq, sum_cube) = sample.iter().fold((0.0, 0.0), |(sq, cube), v| {
        let d = (v - mean) / scale;
        (sq + d * d, cube + d * d * d)
    });
    if sum_sq == 0.0 {
        return None;
    }
    let s = (sum_sq / (n - 1.0)).sqrt();
    Some(n * sum_cube / ((n - 1.0) * (n - 2.0) * s.powi(3)))
}

/// Largest absolute deviation of the sample from `center`, or 0 when empty.
///
/// Sums of squared or multiplied deviations divided by this scale stay within
/// `[0, N]`, so they neither overflow nor underflow for any finite sample.
pub(crate) fn deviation_scale(sample: &[f64], center: f64) -> f64 {
    sample
        .iter()
        .map(|v| (v - center).abs())
        .fold(0.0, f64::max)
}

/// Returns `true` if the sample contains at least two distinct values.
///
/// Deviations from a rounded mean can be non-zero even for a constant
/// sample, so constancy is decided on the raw values.
#[allow(clippy::float_cmp, reason = "constancy is an exact property")]
#[must_use]
pub fn has_spread(sample: &[f64]) -> bool {
    sample
        .split_first()
        .is_some_and(|(first, rest)| rest.iter().any(|v| v != first))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_population_variance() {
        let sample = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&sample).unwrap(), 5.0);
        assert_eq!(variance(&sample).unwrap(), 4.0);
        assert_eq!(std_dev(&sample).unwrap(), 2.0);
    }

    #[test]
    fn test_empty_sample() {
        assert_eq!(mean(&[]), Err(StatsError::EmptyInput));
        assert_eq!(variance(&[]), Err(StatsError::EmptyInput));
        assert_eq!(std_dev(&[]), Err(StatsError::EmptyInput));
        assert_eq!(min(&[]), Err(StatsError::EmptyInput));
        assert_eq!(max(&[]), Err(StatsError::EmptyInput));
        assert_eq!(mode(&[]), Err(StatsError::EmptyInput));
        assert!(sorted_copy(&[]).is_empty());
    }

    #[test]
    fn test_sorted_copy_leaves_input() {
        let sample = [3.0, -1.0, 2.0];
        let sorted = sorted_copy(&sample);
        assert_eq!(sorted, vec![-1.0, 2.0, 3.0]);
        assert_eq!(sample, [3.0, -1.0, 2.0]);
    }

    #[test]
    fn test_min_max() {
        let sample = [4.0, -2.5, 7.0, 0.0];
        assert_eq!(min(&sample).unwrap(), -2.5);
        assert_eq!(max(&sample).unwrap(), 7.0);
    }

    #[test]
    fn test_mode_tie_break() {
        assert_eq!(mode(&[1.0, 2.0, 3.0]).unwrap(), 1.0);
        assert_eq!(mode(&[5.0, 5.0, 2.0, 2.0, 9.0]).unwrap(), 2.0);
        assert_eq!(mode(&[1.0, 4.0, 4.0, 4.0, 2.0, 2.0]).unwrap(), 4.0);
        assert_eq!(mode(&[7.5]).unwrap(), 7.5);
    }

    #[test]
    fn test_skewness() {
        // symmetric
        assert_close(skewness(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 0.0);
        // mean 3, deviations -2, -1, 0, 3
        let s = skewness(&[1.0, 2.0, 3.0, 6.0]).unwrap();
        assert_close(s, 1.190_340_128_278_994_5);
        assert!(skewness(&[10.0, 2.0, 1.0, 1.0]).unwrap() > 0.0);
        assert!(skewness(&[-10.0, 2.0, 1.0, 1.0]).unwrap() < 0.0);
    }

    #[test]
    fn test_skewness_undefined() {
        assert_eq!(skewness(&[]), None);
        assert_eq!(skewness(&[1.0, 5.0]), None);
        assert_eq!(skewness(&[0.1, 0.1, 0.1, 0.1]), None);
    }

    #[test]
    fn test_skewness_extreme_magnitudes() {
        let reference = skewness(&[1.0, 2.0, 3.0, 6.0]).unwrap();
        assert_close(skewness(&[1e120, 2e120, 3e120, 6e120]).unwrap(), reference);
        assert_close(skewness(&[1e-120, 2e-120, 3e-120, 6e-120]).unwrap(), reference);
    }

    #[test]
    fn test_deviation_scale() {
        assert_eq!(deviation_scale(&[], 0.0), 0.0);
        assert_eq!(deviation_scale(&[1.0, 4.0, 2.0], 2.0), 2.0);
        assert_eq!(deviation_scale(&[-3e200, 1e200], 0.0), 3e200);
    }

    #[test]
    fn test_has_spread() {
        assert!(!has_spread(&[]));
        assert!(!has_spread(&[3.0]));
        assert!(!has_spread(&[0.1, 0.1, 0.1]));
        assert!(has_spread(&[0.1, 0.1, 0.2]));
    }
}
