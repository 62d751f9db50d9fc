//! Column-named tables with fixed-shape rows.
//!
//! Callers hand the engine rows of named numeric fields. [`Table`] stores
//! them as a header plus rows of `f64` in header order, so an analysis
//! resolves its column names to indices once (see [`Table::resolve`]) and
//! then reads cells by position.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use datalens_stats::table::Table;
//!
//! let records = vec![
//!     BTreeMap::from([("sqft".to_owned(), 1400.0), ("price".to_owned(), 245_000.0)]),
//!     BTreeMap::from([("sqft".to_owned(), 1800.0), ("price".to_owned(), 312_000.0)]),
//! ];
//! let table = Table::from_records(["sqft", "price"], &records).unwrap();
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.column("price").unwrap(), vec![245_000.0, 312_000.0]);
//! ```

use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

use crate::{Result, StatsError};

/// A row of named numeric fields as supplied by the caller.
pub trait Record {
    /// Returns the value stored under `column`, if any.
    fn value(&self, column: &str) -> Option<f64>;
}

impl Record for BTreeMap<String, f64> {
    fn value(&self, column: &str) -> Option<f64> {
        self.get(column).copied()
    }
}

impl<S> Record for HashMap<String, f64, S>
where
    S: BuildHasher,
{
    fn value(&self, column: &str) -> Option<f64> {
        self.get(column).copied()
    }
}

impl<R> Record for &R
where
    R: Record + ?Sized,
{
    fn value(&self, column: &str) -> Option<f64> {
        (**self).value(column)
    }
}

/// An ordered sequence of rows sharing one header.
///
/// Every row holds exactly one finite value per header column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl Table {
    /// Creates an empty table with the given header.
    ///
    /// Fails with [`StatsError::DuplicateColumn`] if a name repeats.
    pub fn new<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut header: Vec<String> = Vec::new();
        for column in columns {
            let column = column.into();
            if header.contains(&column) {
                return Err(StatsError::DuplicateColumn { column });
            }
            header.push(column);
        }
        Ok(Self {
            columns: header,
            rows: vec![],
        })
    }

    /// Builds a table from named records, projecting `columns` in the given order.
    ///
    /// Fails with [`StatsError::MissingField`] if a record lacks one of the
    /// columns and with [`StatsError::NonFiniteValue`] on NaN or infinite values.
    /// Fields not listed in `columns` are ignored.
    pub fn from_records<I, S, R>(columns: I, records: &[R]) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: Record,
    {
        let mut table = Self::new(columns)?;
        table.rows.reserve(records.len());
        for (row_idx, record) in records.iter().enumerate() {
            let row = table
                .columns
                .iter()
                .map(|column| {
                    record
                        .value(column)
                        .ok_or_else(|| StatsError::MissingField {
                            column: column.clone(),
                            row: row_idx,
                        })
                })
                .collect::<Result<Vec<_>>>()?;
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Appends a row whose values follow the header order.
    ///
    /// Fails with [`StatsError::DimensionMismatch`] if the row width differs
    /// from the header and with [`StatsError::NonFiniteValue`] on NaN or
    /// infinite values. The table is unchanged on failure.
    pub fn push_row(&mut self, values: Vec<f64>) -> Result<()> {
        if values.len() != self.columns.len() {
            return Err(StatsError::DimensionMismatch {
                expected: self.columns.len(),
                actual: values.len(),
            });
        }
        if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
            return Err(StatsError::NonFiniteValue {
                column: self.columns[idx].clone(),
                row: self.rows.len(),
            });
        }
        self.rows.push(values);
        Ok(())
    }

    /// Column names in header order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in insertion order; each row follows the header order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the header index of `name`.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Resolves column names to header indices, preserving the given order.
    ///
    /// Fails with [`StatsError::UnknownColumn`] on the first name that is not
    /// part of the header.
    pub fn resolve<S>(&self, names: &[S]) -> Result<Vec<usize>>
    where
        S: AsRef<str>,
    {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.index_of(name)
                    .ok_or_else(|| StatsError::UnknownColumn {
                        column: name.to_owned(),
                    })
            })
            .collect()
    }

    /// Projects the column at header index `index` across all rows.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid header index.
    #[must_use]
    pub fn project(&self, index: usize) -> Vec<f64> {
        assert!(
            index < self.columns.len(),
            "column index {index} out of range for {} columns",
            self.columns.len()
        );
        self.rows.iter().map(|row| row[index]).collect()
    }

    /// Projects the named column across all rows.
    pub fn column(&self, name: &str) -> Result<Vec<f64>> {
        let index = self
            .index_of(name)
            .ok_or_else(|| StatsError::UnknownColumn {
                column: name.to_owned(),
            })?;
        Ok(self.project(index))
    }
}
