//! Statistical analysis engine for the DataLens project.
//!
//! This crate turns tabular numeric data into a small, fixed set of results:
//!
//! - **Column summaries**: count, mean, median, mode, dispersion, quartiles and skewness
//! - **Correlation matrices**: pairwise Pearson coefficients across selected columns
//! - **Linear regression**: least-squares line, coefficient of determination and plot endpoints
//! - **Histograms**: equal-width frequency distributions for a single column
//!
//! Every entry point is a pure function of its input. Nothing is cached and no
//! state is shared between calls, so results can be computed concurrently
//! without synchronization.
//!
//! # Modules
//!
//! - [`descriptive`]: Shared reducers (mean, population variance, mode, skewness, ...)
//! - [`percentiles`]: Linear-interpolation (R-7) quantiles and quartiles
//! - [`table`]: Column-named tables with fixed-shape rows
//! - [`summary`]: Per-column descriptive summaries
//! - [`correlation`]: Pearson correlation and correlation matrices
//! - [`regression`]: Simple linear regression
//! - [`histogram`]: Equal-width histograms
//!
//! # Undefined results
//!
//! Pearson correlation and R² have no statistical basis when the relevant
//! sample is constant. Those results are `Option<f64>` and are `None` in that
//! case; the engine never substitutes 0 or 1.
//!
//! # Examples
//!
//! ## Summarizing a column
//!
//! ```
//! use datalens_stats::summary::summarize;
//!
//! let summary = summarize(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], "score").unwrap();
//! assert_eq!(summary.mean, 5.0);
//! assert_eq!(summary.variance, 4.0);
//! assert_eq!(summary.std_dev, 2.0);
//! ```
//!
//! ## Building a correlation matrix
//!
//! ```
//! use datalens_stats::{correlation::correlation_matrix, table::Table};
//!
//! let mut table = Table::new(["x", "y"]).unwrap();
//! table.push_row(vec![1.0, 2.0]).unwrap();
//! table.push_row(vec![2.0, 4.0]).unwrap();
//! table.push_row(vec![3.0, 7.0]).unwrap();
//!
//! let matrix = correlation_matrix(&table, &["x", "y"]).unwrap();
//! assert_eq!(matrix.get(0, 0), Some(1.0));
//! assert_eq!(matrix.get(0, 1), matrix.get(1, 0));
//! ```
//!
//! ## Fitting a regression line
//!
//! ```
//! use datalens_stats::regression::regress;
//!
//! let result = regress(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 10.0]).unwrap();
//! assert_eq!(result.slope, 2.0);
//! assert_eq!(result.intercept, 0.0);
//! assert_eq!(result.r_squared, Some(1.0));
//! ```

use std::fmt;

pub mod correlation;
pub mod descriptive;
pub mod histogram;
pub mod percentiles;
pub mod regression;
pub mod summary;
pub mod table;

/// Result type used throughout the engine.
pub type Result<T, E = StatsError> = std::result::Result<T, E>;

/// Errors produced by the statistics engine.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// An operation that requires data points received none.
    #[display("input contains no data points")]
    EmptyInput,
    /// Two samples expected to be paired element-wise have different lengths.
    #[display("expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    /// A requested column is not part of the table.
    #[display("unknown column `{column}`")]
    UnknownColumn { column: String },
    /// A record does not supply a value for one of the table's columns.
    #[display("row {row} has no value for column `{column}`")]
    MissingField { column: String, row: usize },
    /// A column name appears more than once in a table header.
    #[display("duplicate column `{column}`")]
    DuplicateColumn { column: String },
    /// A value is NaN or infinite.
    #[display("row {row} has a non-finite value in column `{column}`")]
    NonFiniteValue { column: String, row: usize },
    /// The fit is mathematically undefined for the given input.
    #[display("degenerate input: {reason}")]
    DegenerateInput { reason: DegenerateReason },
    /// A quantile was requested outside `[0, 1]`.
    #[display("probability {p} is outside [0, 1]")]
    InvalidProbability { p: f64 },
}

/// Why a least-squares fit cannot be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateReason {
    /// Fewer than two points were supplied.
    TooFewPoints,
    /// Every x value is identical.
    ZeroSpread,
}

impl fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            DegenerateReason::TooFewPoints => "at least two points are required",
            DegenerateReason::ZeroSpread => "all x values are identical",
        };
        fmt::Display::fmt(msg, f)
    }
}
