use std::path::Path;

use anyhow::Context;
use clap::Parser;
use oxitanic_charts::style::PlotStyle;
use oxitanic_dataset::table::PassengerTable;
use oxitanic_report::{BoxedReport, all_reports};

/// Renders the Titanic exploratory figures and summary reports into
/// the current directory.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {}

pub fn run() -> anyhow::Result<()> {
    let _args = CommandArgs::parse();

    let mut table =
        PassengerTable::load_reference().context("Failed to load the reference dataset")?;
    table.derive_family_size();
    let style = PlotStyle::default();

    let reports = all_reports();
    for report in &reports {
        eprintln!("generating {} ...", report.file_name());
        report
            .generate(&table, &style, Path::new("."))
            .with_context(|| format!("Failed to generate {}", report.file_name()))?;
    }

    let (figures, summaries) = confirmation_lines(&reports);
    println!("{figures}");
    println!("{summaries}");
    Ok(())
}

/// The two result lines, figures first, in generation order.
fn confirmation_lines(reports: &[BoxedReport]) -> (String, String) {
    let (figures, summaries): (Vec<_>, Vec<_>) = reports
        .iter()
        .map(|report| report.file_name())
        .partition(|name| name.ends_with(".png"));
    (
        format!("Visualizations saved as PNGs: {}", figures.join(", ")),
        format!("Summaries saved as: {}", summaries.join(", ")),
    )
}
