use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{model::dataset::Dataset, util::JsonTarget};

mod correlation;
mod datasets;
mod distribution;
mod explore;
mod regression;
mod stats;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What analysis to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// List built-in datasets
    Datasets,
    /// Print the rows of a dataset
    Explore(#[clap(flatten)] explore::ExploreArg),
    /// Descriptive statistics per column
    Stats(#[clap(flatten)] stats::StatsArg),
    /// Pairwise Pearson correlation matrix
    Correlation(#[clap(flatten)] correlation::CorrelationArg),
    /// Simple linear regression between two columns
    Regression(#[clap(flatten)] regression::RegressionArg),
    /// Distribution summary and histogram of one column
    Distribution(#[clap(flatten)] distribution::DistributionArg),
}

/// Dataset selection shared by every analysis command
#[derive(Debug, Clone, Args)]
struct DatasetArg {
    /// Built-in dataset id (iris, housing, sales) or path to a dataset JSON file
    dataset: String,
}

impl DatasetArg {
    fn load(&self) -> anyhow::Result<Dataset> {
        crate::model::dataset::load_dataset(&self.dataset)
    }
}

/// JSON output options shared by every analysis command
#[derive(Debug, Clone, Args)]
struct OutputArg {
    /// Print the result as JSON instead of a text table
    #[arg(long)]
    json: bool,

    /// Write the JSON result to this file (implies --json)
    #[arg(long)]
    output: Option<PathBuf>,
}

impl OutputArg {
    /// JSON destination, or `None` for text output
    fn json_target(&self) -> Option<JsonTarget> {
        (self.json || self.output.is_some())
            .then(|| JsonTarget::from_output_path(self.output.clone()))
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    tracing::debug!(mode = ?args.mode, "dispatching command");
    match args.mode {
        Mode::Datasets => datasets::run()?,
        Mode::Explore(arg) => explore::run(&arg)?,
        Mode::Stats(arg) => stats::run(&arg)?,
        Mode::Correlation(arg) => correlation::run(&arg)?,
        Mode::Regression(arg) => regression::run(&arg)?,
        Mode::Distribution(arg) => distribution::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_regression_defaults() {
        let args = CommandArgs::try_parse_from(["datalens", "regression", "housing"]).unwrap();
        let Mode::Regression(arg) = args.mode else {
            panic!("expected regression mode");
        };
        assert_eq!(arg.dataset.dataset, "housing");
        assert_eq!(arg.x, None);
        assert_eq!(arg.y, None);
        assert_eq!(arg.output.json_target(), None);
    }

    #[test]
    fn test_output_implies_json() {
        let args = CommandArgs::try_parse_from([
            "datalens",
            "stats",
            "iris",
            "--columns",
            "sepalLength,petalWidth",
            "--output",
            "out.json",
        ])
        .unwrap();
        let Mode::Stats(arg) = args.mode else {
            panic!("expected stats mode");
        };
        assert_eq!(arg.columns, vec!["sepalLength", "petalWidth"]);
        assert_eq!(
            arg.output.json_target(),
            Some(JsonTarget::File(PathBuf::from("out.json")))
        );
    }
}
