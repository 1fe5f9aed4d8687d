//! Report generation for the Titanic analysis pipeline
//!
//! The pipeline's nine artifacts (seven PNG figures and two text
//! summaries) are produced by generators implementing [`Report`];
//! [`all_reports`] returns them in the order the pipeline runs them.
//! Every generator reads the shared table, writes exactly one file
//! into the output directory, and leaves the table untouched:
//!
//! - [`figures`]: table-to-renderer preparation for the PNG artifacts
//! - [`pivot`]: survival grouping helpers shared by the count and
//!   stacked-bar figures
//! - [`summary`]: the describe-plus-t-test text builder
//! - [`outliers`]: the IQR fence report builder
//!
//! The text builders are pure `String` functions, so those artifacts
//! are byte-identical across runs on the same table.

use std::{fmt, fs, path::Path};

use anyhow::Context;
use oxitanic_charts::style::PlotStyle;
use oxitanic_dataset::{column::NumericColumn, table::PassengerTable};

pub mod figures;
pub mod outliers;
pub mod pivot;
pub mod summary;

/// The numeric columns the distribution-centric artifacts report on.
pub const REPORT_COLUMNS: [NumericColumn; 3] = [
    NumericColumn::Age,
    NumericColumn::Fare,
    NumericColumn::FamilySize,
];

/// One artifact generator of the pipeline.
pub trait Report: fmt::Debug {
    /// The artifact's file name within the output directory.
    #[must_use]
    fn file_name(&self) -> &'static str;

    /// Computes the artifact from `table` and writes it under `dir`.
    fn generate(
        &self,
        table: &PassengerTable,
        style: &PlotStyle,
        dir: &Path,
    ) -> anyhow::Result<()>;
}

pub type BoxedReport = Box<dyn Report>;

/// Every generator in pipeline order: the seven figures first, then
/// the two text summaries.
#[must_use]
pub fn all_reports() -> Vec<BoxedReport> {
    vec![
        // figures
        Box::new(MissingValuesHeatmap),
        Box::new(Histograms),
        Box::new(BoxPlots),
        Box::new(CorrelationHeatmap),
        Box::new(SurvivalBarPlots),
        Box::new(StackedBarPlot),
        Box::new(Pairplot),
        // text summaries
        Box::new(StatisticalSummary),
        Box::new(OutlierSummary),
    ]
}

/// Presence/absence matrix of every table cell.
///
/// Sparse columns such as `deck` show up as near-solid bands of the
/// absent color.
#[derive(Debug, Clone)]
pub struct MissingValuesHeatmap;

impl Report for MissingValuesHeatmap {
    fn file_name(&self) -> &'static str {
        "missing_values_heatmap.png"
    }
    fn generate(
        &self,
        table: &PassengerTable,
        style: &PlotStyle,
        dir: &Path,
    ) -> anyhow::Result<()> {
        let path = dir.join(self.file_name());
        figures::missing_values_heatmap(table, style, &path)
            .with_context(|| format!("Failed to render {}", path.display()))
    }
}

/// Distribution histograms with density overlays for the numeric
/// report columns.
#[derive(Debug, Clone)]
pub struct Histograms;

impl Report for Histograms {
    fn file_name(&self) -> &'static str {
        "histograms.png"
    }
    fn generate(
        &self,
        table: &PassengerTable,
        style: &PlotStyle,
        dir: &Path,
    ) -> anyhow::Result<()> {
        let path = dir.join(self.file_name());
        figures::histograms(table, style, &path)
            .with_context(|| format!("Failed to render {}", path.display()))
    }
}

/// Per-class box plots exposing each numeric column's outliers.
#[derive(Debug, Clone)]
pub struct BoxPlots;

impl Report for BoxPlots {
    fn file_name(&self) -> &'static str {
        "box_plots.png"
    }
    fn generate(
        &self,
        table: &PassengerTable,
        style: &PlotStyle,
        dir: &Path,
    ) -> anyhow::Result<()> {
        let path = dir.join(self.file_name());
        figures::box_plots(table, style, &path)
            .with_context(|| format!("Failed to render {}", path.display()))
    }
}

/// Lower-triangle Pearson correlation heatmap of the numeric columns.
#[derive(Debug, Clone)]
pub struct CorrelationHeatmap;

impl Report for CorrelationHeatmap {
    fn file_name(&self) -> &'static str {
        "correlation_heatmap.png"
    }
    fn generate(
        &self,
        table: &PassengerTable,
        style: &PlotStyle,
        dir: &Path,
    ) -> anyhow::Result<()> {
        let path = dir.join(self.file_name());
        figures::correlation_heatmap(table, style, &path)
            .with_context(|| format!("Failed to render {}", path.display()))
    }
}

/// Survival counts split by sex, passenger class, and embarkation
/// town.
#[derive(Debug, Clone)]
pub struct SurvivalBarPlots;

impl Report for SurvivalBarPlots {
    fn file_name(&self) -> &'static str {
        "survival_bar_plots.png"
    }
    fn generate(
        &self,
        table: &PassengerTable,
        style: &PlotStyle,
        dir: &Path,
    ) -> anyhow::Result<()> {
        let path = dir.join(self.file_name());
        figures::survival_bar_plots(table, style, &path)
            .with_context(|| format!("Failed to render {}", path.display()))
    }
}

/// Stacked survival-rate percentages per class and sex.
#[derive(Debug, Clone)]
pub struct StackedBarPlot;

impl Report for StackedBarPlot {
    fn file_name(&self) -> &'static str {
        "stacked_bar_plot.png"
    }
    fn generate(
        &self,
        table: &PassengerTable,
        style: &PlotStyle,
        dir: &Path,
    ) -> anyhow::Result<()> {
        let path = dir.join(self.file_name());
        figures::stacked_bar_plot(table, style, &path)
            .with_context(|| format!("Failed to render {}", path.display()))
    }
}

/// Pairwise scatter/density grid over the numeric columns, colored by
/// survival.
#[derive(Debug, Clone)]
pub struct Pairplot;

impl Report for Pairplot {
    fn file_name(&self) -> &'static str {
        "pairplot.png"
    }
    fn generate(
        &self,
        table: &PassengerTable,
        style: &PlotStyle,
        dir: &Path,
    ) -> anyhow::Result<()> {
        let path = dir.join(self.file_name());
        figures::pairplot(table, style, &path)
            .with_context(|| format!("Failed to render {}", path.display()))
    }
}

/// Describe table plus Welch's t-test on age by survival.
#[derive(Debug, Clone)]
pub struct StatisticalSummary;

impl Report for StatisticalSummary {
    fn file_name(&self) -> &'static str {
        "statistical_summary.txt"
    }
    fn generate(
        &self,
        table: &PassengerTable,
        _style: &PlotStyle,
        dir: &Path,
    ) -> anyhow::Result<()> {
        let path = dir.join(self.file_name());
        let text = summary::statistical_summary(table)?;
        fs::write(&path, text).with_context(|| format!("Failed to write {}", path.display()))
    }
}

/// IQR fences and outlier counts for the numeric report columns.
#[derive(Debug, Clone)]
pub struct OutlierSummary;

impl Report for OutlierSummary {
    fn file_name(&self) -> &'static str {
        "outlier_summary.txt"
    }
    fn generate(
        &self,
        table: &PassengerTable,
        _style: &PlotStyle,
        dir: &Path,
    ) -> anyhow::Result<()> {
        let path = dir.join(self.file_name());
        let text = outliers::outlier_summary(table)?;
        fs::write(&path, text).with_context(|| format!("Failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_run_in_pipeline_order() {
        let names = all_reports()
            .iter()
            .map(|report| report.file_name())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "missing_values_heatmap.png",
                "histograms.png",
                "box_plots.png",
                "correlation_heatmap.png",
                "survival_bar_plots.png",
                "stacked_bar_plot.png",
                "pairplot.png",
                "statistical_summary.txt",
                "outlier_summary.txt",
            ]
        );
    }

    #[test]
    fn test_all_reports_generate_their_files() {
        let mut table = PassengerTable::load_reference().unwrap();
        table.derive_family_size();
        let style = PlotStyle::default();
        let dir = tempfile::tempdir().unwrap();
        for report in all_reports() {
            report.generate(&table, &style, dir.path()).unwrap();
            assert!(dir.path().join(report.file_name()).exists());
        }
    }
}
