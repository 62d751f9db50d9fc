//! Per-column descriptive summaries.

use serde::Serialize;

use crate::{Result, StatsError, descriptive, percentiles::Quartiles, table::Table};

/// Descriptive measures of a single column.
///
/// Produced fresh on every call by [`summarize`]; the record has no identity
/// beyond its values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSummary {
    /// Label of the summarized column. Not used in any computation.
    pub column: String,
    /// Number of values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median (R-7 quantile at 0.5).
    pub median: f64,
    /// Most frequent value; the smallest one on ties.
    pub mode: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Population variance.
    pub variance: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// First quartile (R-7 quantile at 0.25).
    pub q1: f64,
    /// Third quartile (R-7 quantile at 0.75).
    pub q3: f64,
    /// Adjusted Fisher-Pearson skewness.
    ///
    /// Exactly `0.0` when `count < 3` or the column is constant. In those
    /// cases the value does not mean "no skew", it means there is no basis to
    /// measure it.
    pub skewness: f64,
}

impl ColumnSummary {
    /// Summarizes a sample. Equivalent to [`summarize`].
    pub fn new<S>(sample: &[f64], column: S) -> Result<Self>
    where
        S: Into<String>,
    {
        if sample.is_empty() {
            return Err(StatsError::EmptyInput);
        }

        let sorted = descriptive::sorted_copy(sample);
        let quartiles = Quartiles::from_sorted(&sorted)?;
        let mean = descriptive::mean(sample)?;
        let variance = descriptive::variance_around(sample, mean);
        let skewness = if sample.len() < 3 {
            0.0
        } else {
            descriptive::skewness(sample).unwrap_or(0.0)
        };

        Ok(Self {
            column: column.into(),
            count: sample.len(),
            mean,
            median: quartiles.median,
            mode: descriptive::mode_sorted(&sorted)?,
            std_dev: variance.sqrt(),
            variance,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            q1: quartiles.q1,
            q3: quartiles.q3,
            skewness,
        })
    }

    /// Interquartile range, `q3 - q1`.
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Computes the descriptive summary of one sample.
///
/// `column` is copied into the result as a label.
/// Fails with [`StatsError::EmptyInput`] on an empty sample.
///
/// # Examples
///
/// ```
/// use datalens_stats::summary::summarize;
///
/// let summary = summarize(&[1.0, 2.0, 3.0, 4.0], "x").unwrap();
/// assert_eq!(summary.count, 4);
/// assert_eq!(summary.q1, 1.75);
/// assert_eq!(summary.median, 2.5);
/// assert_eq!(summary.q3, 3.25);
/// assert_eq!(summary.mode, 1.0);
/// ```
pub fn summarize<S>(sample: &[f64], column: S) -> Result<ColumnSummary>
where
    S: Into<String>,
{
    ColumnSummary::new(sample, column)
}

/// Summarizes each selected column of a table, in the given order.
///
/// Fails as a whole on the first unknown column or when the table has no rows.
pub fn summarize_table<S>(table: &Table, columns: &[S]) -> Result<Vec<ColumnSummary>>
where
    S: AsRef<str>,
{
    if table.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let indices = table.resolve(columns)?;
    indices
        .into_iter()
        .map(|idx| summarize(&table.project(idx), table.columns()[idx].as_str()))
        .collect()
}
