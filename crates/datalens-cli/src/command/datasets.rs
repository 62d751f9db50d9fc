use crate::{model::dataset, view::TextTable};

pub(super) fn run() -> anyhow::Result<()> {
    let datasets = dataset::builtin_datasets()?;

    let mut table = TextTable::new("Id", ["Name", "Rows", "Columns"]);
    for dataset in &datasets {
        table.push_row(
            &dataset.id,
            vec![
                dataset.name.clone(),
                dataset.data.len().to_string(),
                dataset.columns.join(", "),
            ],
        );
    }

    println!("Built-in Datasets");
    println!("=================\n");
    print!("{}", table.render());
    println!();
    for dataset in &datasets {
        println!("  {}: {}", dataset.id, dataset.description);
    }
    Ok(())
}
