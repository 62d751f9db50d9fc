use std::fmt;

use anyhow::Context as _;
use clap::Args;
use datalens_stats::regression::{self, RegressionResult};
use serde::Serialize;

use crate::view::format_optional;

use super::{DatasetArg, OutputArg};

#[derive(Debug, Clone, Args)]
pub(super) struct RegressionArg {
    #[command(flatten)]
    pub(super) dataset: DatasetArg,

    /// Independent variable (default: first column)
    #[arg(long)]
    pub(super) x: Option<String>,

    /// Dependent variable (default: last column)
    #[arg(long)]
    pub(super) y: Option<String>,

    #[command(flatten)]
    pub(super) output: OutputArg,
}

/// Qualitative reading of R²
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FitStrength {
    Strong,
    Moderate,
    Weak,
}

impl FitStrength {
    fn from_r_squared(r_squared: f64) -> Self {
        if r_squared > 0.8 {
            Self::Strong
        } else if r_squared > 0.5 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }
}

impl fmt::Display for FitStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegressionReport<'a> {
    x: &'a str,
    y: &'a str,
    #[serde(flatten)]
    result: &'a RegressionResult,
}

pub(super) fn run(arg: &RegressionArg) -> anyhow::Result<()> {
    let dataset = arg.dataset.load()?;
    let x = match &arg.x {
        Some(x) => x.clone(),
        None => dataset
            .columns
            .first()
            .cloned()
            .context("Dataset has no columns")?,
    };
    let y = match &arg.y {
        Some(y) => y.clone(),
        None => dataset
            .columns
            .last()
            .cloned()
            .context("Dataset has no columns")?,
    };
    dataset.check_columns(&[&x, &y])?;

    let table = dataset.to_table()?;
    let result = regression::regress_columns(&table, &x, &y)
        .with_context(|| format!("Failed to regress `{y}` on `{x}`"))?;
    tracing::debug!(%x, %y, slope = result.slope, intercept = result.intercept, "line fitted");

    if let Some(target) = arg.output.json_target() {
        return target.write(&RegressionReport {
            x: &x,
            y: &y,
            result: &result,
        });
    }

    println!("Linear Regression: {} ({y} ~ {x})", dataset.name);
    println!();
    println!("  Slope:      {:.4}", result.slope);
    println!("  Intercept:  {:.4}", result.intercept);
    match result.r_squared {
        Some(r_squared) => println!(
            "  R²:         {r_squared:.4} ({} fit, {:.1}% of variance explained)",
            FitStrength::from_r_squared(r_squared),
            r_squared * 100.0
        ),
        None => println!("  R²:         {}", format_optional(None, 4)),
    }
    println!();
    println!("  Equation:   {}", equation(&result));
    let [start, end] = result.line_points;
    println!(
        "  Line:       ({:.4}, {:.4}) -> ({:.4}, {:.4})",
        start.x, start.y, end.x, end.y
    );
    Ok(())
}

fn equation(result: &RegressionResult) -> String {
    let sign = if result.intercept >= 0.0 { '+' } else { '-' };
    format!(
        "y = {:.2}x {sign} {:.2}",
        result.slope,
        result.intercept.abs()
    )
}
