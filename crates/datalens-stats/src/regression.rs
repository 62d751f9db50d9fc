//! Simple linear regression.
//!
//! Fits `y = slope · x + intercept` by ordinary least squares and reports the
//! coefficient of determination together with two endpoints spanning the
//! observed x-range, ready to be drawn over a scatter plot.

use serde::Serialize;

use crate::{DegenerateReason, Result, StatsError, descriptive, table::Table};

/// A fitted least-squares line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit {
    /// Slope `m` of the line.
    pub slope: f64,
    /// Intercept `b` of the line.
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluates the line at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// A point of the fitted line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Result of regressing one sample on another.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionResult {
    /// Slope of the fitted line.
    pub slope: f64,
    /// Intercept of the fitted line.
    pub intercept: f64,
    /// Coefficient of determination, `1 - SS_res / SS_tot`.
    ///
    /// `None` when every y value is identical (`SS_tot == 0`).
    pub r_squared: Option<f64>,
    /// Line endpoints at the smallest and largest observed x.
    pub line_points: [Point; 2],
}

impl RegressionResult {
    /// The fitted line as a [`LinearFit`].
    #[must_use]
    pub fn fit(&self) -> LinearFit {
        LinearFit {
            slope: self.slope,
            intercept: self.intercept,
        }
    }
}

/// Fits a least-squares line to paired samples.
///
/// `slope = Σ(x - x̄)(y - ȳ) / Σ(x - x̄)²` and `intercept = ȳ - slope · x̄`.
///
/// Fails with [`StatsError::DimensionMismatch`] on unequal lengths,
/// [`StatsError::EmptyInput`] on empty samples, and
/// [`StatsError::DegenerateInput`] for a single point or when every x value is
/// identical.
///
/// # Examples
///
/// ```
/// use datalens_stats::regression::least_squares_fit;
///
/// let fit = least_squares_fit(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
/// assert_eq!(fit.slope, 2.0);
/// assert_eq!(fit.intercept, 1.0);
/// assert_eq!(fit.predict(10.0), 21.0);
/// ```
pub fn least_squares_fit(xs: &[f64], ys: &[f64]) -> Result<LinearFit> {
    if xs.len() != ys.len() {
        return Err(StatsError::DimensionMismatch {
            expected: xs.len(),
            actual: ys.len(),
        });
    }
    if xs.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    if xs.len() < 2 {
        return Err(StatsError::DegenerateInput {
            reason: DegenerateReason::TooFewPoints,
        });
    }
    if !descriptive::has_spread(xs) {
        return Err(StatsError::DegenerateInput {
            reason: DegenerateReason::ZeroSpread,
        });
    }

    let mean_x = descriptive::mean(xs)?;
    let mean_y = descriptive::mean(ys)?;
    let scale_x = descriptive::deviation_scale(xs, mean_x);
    if scale_x == 0.0 {
        return Err(StatsError::DegenerateInput {
            reason: DegenerateReason::ZeroSpread,
        });
    }
    let scale_y = nonzero_scale(descriptive::deviation_scale(ys, mean_y));

    // sums over normalized deviations stay within [0, N] at any magnitude
    let (sum_xy, sum_xx) = xs
        .iter()
        .zip(ys)
        .fold((0.0, 0.0), |(xy, xx), (&x, &y)| {
            let dx = (x - mean_x) / scale_x;
            let dy = (y - mean_y) / scale_y;
            (xy + dx * dy, xx + dx * dx)
        });
    if sum_xx == 0.0 {
        return Err(StatsError::DegenerateInput {
            reason: DegenerateReason::ZeroSpread,
        });
    }

    let slope = (sum_xy / sum_xx) * (scale_y / scale_x);
    Ok(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

/// Scale for normalizing y deviations; 1 for a constant sample.
fn nonzero_scale(scale: f64) -> f64 {
    if scale > 0.0 { scale } else { 1.0 }
}

/// Regresses `ys` on `xs`.
///
/// Errors are those of [`least_squares_fit`]. When every y value is identical
/// the fit succeeds (a horizontal line) but `r_squared` is `None`.
///
/// # Examples
///
/// ```
/// use datalens_stats::regression::regress;
///
/// let result = regress(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 10.0]).unwrap();
/// assert_eq!(result.slope, 2.0);
/// assert_eq!(result.r_squared, Some(1.0));
/// assert_eq!(result.line_points[0].x, 1.0);
/// assert_eq!(result.line_points[1].y, 10.0);
/// ```
pub fn regress(xs: &[f64], ys: &[f64]) -> Result<RegressionResult> {
    let fit = least_squares_fit(xs, ys)?;
    let mean_y = descriptive::mean(ys)?;
    let scale_y = nonzero_scale(descriptive::deviation_scale(ys, mean_y));

    let (ss_res, ss_tot) = xs
        .iter()
        .zip(ys)
        .fold((0.0, 0.0), |(res, tot), (&x, &y)| {
            let residual = (y - fit.predict(x)) / scale_y;
            let deviation = (y - mean_y) / scale_y;
            (res + residual * residual, tot + deviation * deviation)
        });
    let r_squared = if !descriptive::has_spread(ys) || ss_tot == 0.0 {
        None
    } else {
        Some(1.0 - ss_res / ss_tot)
    };

    let x_min = descriptive::min(xs)?;
    let x_max = descriptive::max(xs)?;

    Ok(RegressionResult {
        slope: fit.slope,
        intercept: fit.intercept,
        r_squared,
        line_points: [
            Point {
                x: x_min,
                y: fit.predict(x_min),
            },
            Point {
                x: x_max,
                y: fit.predict(x_max),
            },
        ],
    })
}

/// Regresses column `y` on column `x` of a table.
///
/// Both names are resolved before any computation; fails with
/// [`StatsError::UnknownColumn`] if either is missing and with
/// [`StatsError::EmptyInput`] if the table has no rows.
pub fn regress_columns(table: &Table, x: &str, y: &str) -> Result<RegressionResult> {
    if table.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let indices = table.resolve(&[x, y])?;
    regress(&table.project(indices[0]), &table.project(indices[1]))
}
