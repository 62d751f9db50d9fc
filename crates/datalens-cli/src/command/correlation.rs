use clap::Args;
use datalens_stats::correlation::{self, CorrelationMatrix};

use crate::view::{TextTable, format_optional};

use super::{DatasetArg, OutputArg};

/// Coefficients stronger than this (in absolute value) are highlighted
const STRONG_CORRELATION: f64 = 0.7;

#[derive(Debug, Clone, Args)]
pub(super) struct CorrelationArg {
    #[command(flatten)]
    pub(super) dataset: DatasetArg,

    /// Columns to correlate, comma separated (default: all columns)
    #[arg(long, value_delimiter = ',')]
    pub(super) columns: Vec<String>,

    #[command(flatten)]
    pub(super) output: OutputArg,
}

pub(super) fn run(arg: &CorrelationArg) -> anyhow::Result<()> {
    let dataset = arg.dataset.load()?;
    let columns = if arg.columns.is_empty() {
        dataset.columns.clone()
    } else {
        arg.columns.clone()
    };
    dataset.check_columns(&columns)?;

    let table = dataset.to_table()?;
    let matrix = correlation::correlation_matrix(&table, &columns)?;

    if let Some(target) = arg.output.json_target() {
        return target.write(&matrix);
    }

    println!("Correlation Matrix: {}", dataset.name);
    println!();
    print!("{}", render_matrix(&matrix));
    println!();
    println!("  * |r| > {STRONG_CORRELATION}");
    Ok(())
}

fn render_matrix(matrix: &CorrelationMatrix) -> String {
    let mut text = TextTable::new("", matrix.columns());
    for (label, row) in matrix.columns().iter().zip(matrix.rows()) {
        let cells = row.iter().map(|&value| format_cell(value)).collect();
        text.push_row(label, cells);
    }
    text.render()
}

fn format_cell(value: Option<f64>) -> String {
    let marker = match value {
        Some(r) if r.abs() > STRONG_CORRELATION => "*",
        _ => " ",
    };
    format!("{}{marker}", format_optional(value, 3))
}
