use std::num::NonZeroUsize;

use anyhow::Context as _;
use clap::Args;
use datalens_stats::{
    histogram::Histogram,
    summary::{self, ColumnSummary},
};
use serde::Serialize;

use crate::view::{TextTable, bar, format_number};

use super::{DatasetArg, OutputArg};

const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Args)]
pub(super) struct DistributionArg {
    #[command(flatten)]
    pub(super) dataset: DatasetArg,

    /// Column to describe (default: first column)
    #[arg(long)]
    pub(super) column: Option<String>,

    /// Number of histogram bins
    #[arg(long, default_value = "12")]
    pub(super) bins: NonZeroUsize,

    #[command(flatten)]
    pub(super) output: OutputArg,
}

#[derive(Debug, Serialize)]
struct DistributionReport {
    summary: ColumnSummary,
    histogram: Histogram,
}

pub(super) fn run(arg: &DistributionArg) -> anyhow::Result<()> {
    let dataset = arg.dataset.load()?;
    let column = match &arg.column {
        Some(column) => column.clone(),
        None => dataset
            .columns
            .first()
            .cloned()
            .context("Dataset has no columns")?,
    };
    dataset.check_columns(&[&column])?;

    let table = dataset.to_table()?;
    let values = table.column(&column)?;
    let summary = summary::summarize(&values, &column)?;
    let histogram = Histogram::new(&values, arg.bins)?;
    tracing::debug!(%column, bins = histogram.bins.len(), "histogram computed");

    if let Some(target) = arg.output.json_target() {
        return target.write(&DistributionReport { summary, histogram });
    }

    println!("Distribution: {} / {column}", dataset.name);
    println!();
    let mut text = TextTable::new("Statistic", ["Value"]);
    for (label, value) in [
        ("Min", summary.min),
        ("Q1", summary.q1),
        ("Median", summary.median),
        ("Q3", summary.q3),
        ("Max", summary.max),
        ("IQR", summary.iqr()),
        ("Mean", summary.mean),
        ("Std Dev", summary.std_dev),
        ("Skewness", summary.skewness),
    ] {
        text.push_row(label, vec![format_number(value)]);
    }
    print!("{}", text.render());

    println!();
    println!("  {}", box_plot(&summary));
    println!();
    print!("{}", render_histogram(&histogram));
    Ok(())
}

fn box_plot(summary: &ColumnSummary) -> String {
    format!(
        "{} |---[ {} | {} | {} ]---| {}",
        format_number(summary.min),
        format_number(summary.q1),
        format_number(summary.median),
        format_number(summary.q3),
        format_number(summary.max),
    )
}

fn render_histogram(histogram: &Histogram) -> String {
    let max_count = histogram.max_count();
    let rows = histogram
        .bins
        .iter()
        .map(|bin| {
            let label = format!(
                "[{}, {})",
                format_number(bin.range.start),
                format_number(bin.range.end)
            );
            (label, bin.count)
        })
        .collect::<Vec<_>>();
    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let count_width = max_count.to_string().len();

    rows.into_iter()
        .map(|(label, count)| {
            format!(
                "  {label:<label_width$}  {count:>count_width$}  {}\n",
                bar(count, max_count, BAR_WIDTH)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;
    use crate::command::{CommandArgs, Mode};

    #[test]
    fn test_default_bins() {
        let args = CommandArgs::try_parse_from(["datalens", "distribution", "iris"]).unwrap();
        let Mode::Distribution(arg) = args.mode else {
            panic!("expected distribution mode");
        };
        assert_eq!(arg.bins.get(), 12);
        assert_eq!(arg.column, None);
    }

    #[test]
    fn test_zero_bins_rejected() {
        let result =
            CommandArgs::try_parse_from(["datalens", "distribution", "iris", "--bins", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_box_plot() {
        let summary = summary::summarize(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], "v").unwrap();
        assert_eq!(
            box_plot(&summary),
            "2.0000 |---[ 4.0000 | 4.5000 | 5.5000 ]---| 9.0000"
        );
    }

    #[test]
    fn test_render_histogram() {
        let histogram = Histogram::new(&[1.0, 1.5, 2.0, 4.0], NonZeroUsize::new(3).unwrap()).unwrap();
        let rendered = render_histogram(&histogram);
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("  [1.0000, 2.0000)  2  "));
        assert!(lines[0].ends_with(&"█".repeat(BAR_WIDTH)));
        assert!(lines[1].ends_with(&"█".repeat(BAR_WIDTH / 2)));
    }
}
