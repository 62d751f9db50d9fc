use clap::Args;
use datalens_stats::summary;

use crate::view::{TextTable, format_number};

use super::{DatasetArg, OutputArg};

#[derive(Debug, Clone, Args)]
pub(super) struct StatsArg {
    #[command(flatten)]
    pub(super) dataset: DatasetArg,

    /// Columns to summarize, comma separated (default: all columns)
    #[arg(long, value_delimiter = ',')]
    pub(super) columns: Vec<String>,

    #[command(flatten)]
    pub(super) output: OutputArg,
}

pub(super) fn run(arg: &StatsArg) -> anyhow::Result<()> {
    let dataset = arg.dataset.load()?;
    let columns = if arg.columns.is_empty() {
        dataset.columns.clone()
    } else {
        arg.columns.clone()
    };
    dataset.check_columns(&columns)?;

    let table = dataset.to_table()?;
    let summaries = summary::summarize_table(&table, &columns)?;
    tracing::debug!(columns = summaries.len(), rows = table.len(), "summaries computed");

    if let Some(target) = arg.output.json_target() {
        return target.write(&summaries);
    }

    let mut text = TextTable::new(
        "Column",
        [
            "Count", "Mean", "Median", "Mode", "Std Dev", "Variance", "Min", "Max", "Q1", "Q3",
            "Skewness",
        ],
    );
    for s in &summaries {
        text.push_row(
            &s.column,
            vec![
                s.count.to_string(),
                format_number(s.mean),
                format_number(s.median),
                format_number(s.mode),
                format_number(s.std_dev),
                format_number(s.variance),
                format_number(s.min),
                format_number(s.max),
                format_number(s.q1),
                format_number(s.q3),
                format_number(s.skewness),
            ],
        );
    }

    println!("Descriptive Statistics: {}", dataset.name);
    println!();
    print!("{}", text.render());
    if table.len() < 3 {
        println!();
        println!("  Skewness needs at least 3 rows and is reported as 0.");
    }
    Ok(())
}
