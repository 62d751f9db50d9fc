//! Pearson correlation and correlation matrices.
//!
//! Correlation is undefined when either sample is constant. Such entries are
//! `None` rather than a number, so "no statistical basis" cannot be mistaken
//! for "no relationship".

use serde::Serialize;

use crate::{Result, StatsError, descriptive, table::Table};

/// Computes the Pearson product-moment correlation of two paired samples.
///
/// Returns `Ok(None)` when either sample has no spread (which includes
/// samples of length 1). The coefficient is clamped into `[-1, 1]`.
///
/// Fails with [`StatsError::DimensionMismatch`] on unequal lengths and with
/// [`StatsError::EmptyInput`] on empty samples.
///
/// # Examples
///
/// ```
/// use datalens_stats::correlation::pearson_correlation;
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(pearson_correlation(&x, &[8.0, 6.0, 4.0, 2.0]).unwrap(), Some(-1.0));
/// assert_eq!(pearson_correlation(&x, &[5.0, 5.0, 5.0, 5.0]).unwrap(), None);
/// assert!(pearson_correlation(&x, &[1.0]).is_err());
/// ```
pub fn pearson_correlation(a: &[f64], b: &[f64]) -> Result<Option<f64>> {
    if a.len() != b.len() {
        return Err(StatsError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    let mean_a = descriptive::mean(a)?;
    let mean_b = descriptive::mean(b)?;
    if !descriptive::has_spread(a) || !descriptive::has_spread(b) {
        return Ok(None);
    }

    let scale_a = descriptive::deviation_scale(a, mean_a);
    let scale_b = descriptive::deviation_scale(b, mean_b);
    if scale_a == 0.0 || scale_b == 0.0 {
        return Ok(None);
    }

    // r is scale-free; normalized deviations keep every sum within [0, N]
    let (sum_ab, sum_aa, sum_bb) = a
        .iter()
        .zip(b)
        .fold((0.0, 0.0, 0.0), |(ab, aa, bb), (&x, &y)| {
            let dx = (x - mean_a) / scale_a;
            let dy = (y - mean_b) / scale_b;
            (ab + dx * dy, aa + dx * dx, bb + dy * dy)
        });
    if sum_aa == 0.0 || sum_bb == 0.0 {
        return Ok(None);
    }

    // sqrt(s * s) == s exactly, so a sample correlated with itself gives 1.0
    let r = sum_ab / (sum_aa * sum_bb).sqrt();
    Ok(Some(r.clamp(-1.0, 1.0)))
}

/// Square grid of pairwise correlations over an ordered list of columns.
///
/// `values[i][j]` is the correlation between `columns[i]` and `columns[j]`.
/// The grid is symmetric and its diagonal is `1.0` for every column with
/// non-zero spread.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    columns: Vec<String>,
    values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Column names labelling both axes.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns (and rows) of the grid.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the matrix has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Correlation between `columns[i]` and `columns[j]`; `None` if undefined.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of range.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values[i][j]
    }

    /// Correlation between two columns by name.
    ///
    /// The outer `Option` is `None` if either name is not an axis label.
    #[must_use]
    pub fn get_by_name(&self, a: &str, b: &str) -> Option<Option<f64>> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        Some(self.values[i][j])
    }

    /// Rows of the grid, in column order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.values
    }

    /// Iterates over `(row_label, col_label, value)` for every cell.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, Option<f64>)> + '_ {
        self.values.iter().enumerate().flat_map(move |(i, row)| {
            row.iter().enumerate().map(move |(j, value)| {
                (self.columns[i].as_str(), self.columns[j].as_str(), *value)
            })
        })
    }
}

/// Computes the full N×N correlation matrix of the selected columns.
///
/// Every ordered pair is computed, including the diagonal. Fails with
/// [`StatsError::EmptyInput`] if the table has no rows or no columns are
/// requested and with [`StatsError::UnknownColumn`] if a name is not part of
/// the table.
///
/// # Examples
///
/// ```
/// use datalens_stats::{correlation::correlation_matrix, table::Table};
///
/// let mut table = Table::new(["a", "b", "c"]).unwrap();
/// table.push_row(vec![1.0, 3.0, 7.0]).unwrap();
/// table.push_row(vec![2.0, 2.0, 7.0]).unwrap();
/// table.push_row(vec![3.0, 1.0, 7.0]).unwrap();
///
/// let matrix = correlation_matrix(&table, &["a", "b", "c"]).unwrap();
/// assert_eq!(matrix.get(0, 1), Some(-1.0));
/// assert_eq!(matrix.get(2, 2), None); // constant column
/// ```
pub fn correlation_matrix<S>(table: &Table, columns: &[S]) -> Result<CorrelationMatrix>
where
    S: AsRef<str>,
{
    if table.is_empty() || columns.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let indices = table.resolve(columns)?;
    let samples = indices
        .iter()
        .map(|&idx| table.project(idx))
        .collect::<Vec<_>>();

    let values = samples
        .iter()
        .map(|a| {
            samples
                .iter()
                .map(|b| pearson_correlation(a, b))
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorrelationMatrix {
        columns: indices
            .iter()
            .map(|&idx| table.columns()[idx].clone())
            .collect(),
        values,
    })
}
