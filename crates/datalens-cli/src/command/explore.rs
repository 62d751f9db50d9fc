use clap::Args;

use crate::view::TextTable;

use super::DatasetArg;

#[derive(Debug, Clone, Args)]
pub(super) struct ExploreArg {
    #[command(flatten)]
    pub(super) dataset: DatasetArg,

    /// Maximum number of rows to print
    #[arg(long)]
    pub(super) limit: Option<usize>,
}

pub(super) fn run(arg: &ExploreArg) -> anyhow::Result<()> {
    let dataset = arg.dataset.load()?;
    let table = dataset.to_table()?;
    let limit = arg.limit.unwrap_or(table.len()).min(table.len());

    println!("{} ({})", dataset.name, dataset.id);
    if !dataset.description.is_empty() {
        println!("{}", dataset.description);
    }
    println!(
        "{} rows x {} columns\n",
        table.len(),
        table.columns().len()
    );

    let mut text = TextTable::new("#", table.columns());
    for (idx, row) in table.rows().iter().take(limit).enumerate() {
        text.push_row(
            (idx + 1).to_string(),
            row.iter().map(f64::to_string).collect(),
        );
    }
    print!("{}", text.render());
    if limit < table.len() {
        println!("  ... {} more rows", table.len() - limit);
    }
    Ok(())
}
