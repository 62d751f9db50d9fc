//! Dataset files and the built-in dataset catalog
//!
//! A dataset is a named table serialized as JSON:
//!
//! ```json
//! {
//!   "id": "housing",
//!   "name": "Housing Prices",
//!   "description": "Residential property data",
//!   "columns": ["sqft", "price"],
//!   "data": [
//!     { "sqft": 1400, "price": 245000 },
//!     { "sqft": 1800, "price": 312000 }
//!   ]
//! }
//! ```
//!
//! `columns` fixes the column order used by every analysis; each record in
//! `data` must supply a number for every listed column.

use std::{collections::BTreeMap, path::Path};

use anyhow::Context;
use datalens_stats::table::Table;
use serde::{Deserialize, Serialize};

use crate::util;

const BUILTIN_DATASETS: &str = include_str!("../../data/datasets.json");

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Dataset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub columns: Vec<String>,
    pub data: Vec<BTreeMap<String, f64>>,
}

impl Dataset {
    /// Convert the records into a fixed-shape table following `columns`
    pub fn to_table(&self) -> anyhow::Result<Table> {
        Table::from_records(self.columns.iter().cloned(), &self.data)
            .with_context(|| format!("Invalid data in dataset `{}`", self.id))
    }

    /// Check that every requested column is part of this dataset
    pub fn check_columns<S>(&self, columns: &[S]) -> anyhow::Result<()>
    where
        S: AsRef<str>,
    {
        for column in columns {
            let column = column.as_ref();
            if !self.columns.iter().any(|c| c == column) {
                anyhow::bail!(
                    "Column `{column}` not found in dataset `{}` (available: {})",
                    self.id,
                    self.columns.join(", ")
                );
            }
        }
        Ok(())
    }
}

/// Parse the datasets bundled with the binary
pub fn builtin_datasets() -> anyhow::Result<Vec<Dataset>> {
    serde_json::from_str(BUILTIN_DATASETS).context("Failed to parse built-in datasets")
}

/// Resolve a dataset argument
///
/// A built-in dataset id takes precedence; anything else is treated as a
/// path to a dataset JSON file.
pub fn load_dataset(source: &str) -> anyhow::Result<Dataset> {
    if let Some(dataset) = builtin_datasets()?.into_iter().find(|d| d.id == source) {
        tracing::debug!(id = %dataset.id, rows = dataset.data.len(), "using built-in dataset");
        return Ok(dataset);
    }

    let path = Path::new(source);
    if !path.exists() {
        let ids = builtin_datasets()?
            .into_iter()
            .map(|d| d.id)
            .collect::<Vec<_>>();
        anyhow::bail!(
            "Dataset `{source}` is neither a built-in dataset ({}) nor an existing file",
            ids.join(", ")
        );
    }

    tracing::info!(path = %path.display(), "loading dataset file");
    let dataset: Dataset = util::read_json_file("dataset", path)?;
    tracing::info!(id = %dataset.id, rows = dataset.data.len(), "dataset loaded");
    Ok(dataset)
}
