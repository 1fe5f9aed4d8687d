//! Data preparation for the seven figure artifacts.
//!
//! Each function slices the table into the plain labels and values its
//! renderer in `oxitanic_charts` expects, then draws one PNG at the
//! given path. All category and column orders are fixed here, not in
//! the renderers.

use std::path::Path;

use oxitanic_charts::{
    box_plot::{self, BoxGroup, BoxPanel},
    correlation,
    count_plot::{self, CountPanel},
    histogram::{self, HistogramPanel},
    missing_map,
    pair_grid::{self, PairGroup},
    stacked_bar,
    style::PlotStyle,
};
use oxitanic_dataset::{
    column::{Column, NumericColumn},
    record::Sex,
    table::PassengerTable,
};
use oxitanic_stats::correlation::correlation_matrix;

use crate::{REPORT_COLUMNS, pivot};

/// The columns of the correlation heatmap, in matrix order.
const CORRELATION_COLUMNS: [NumericColumn; 5] = [
    NumericColumn::Age,
    NumericColumn::Fare,
    NumericColumn::SibSp,
    NumericColumn::Parch,
    NumericColumn::FamilySize,
];

/// The variables of the pair grid. Survival comes last so the grid's
/// final row and column show the grouping key against the rest.
const PAIR_COLUMNS: [NumericColumn; 4] = [
    NumericColumn::Age,
    NumericColumn::Fare,
    NumericColumn::FamilySize,
    NumericColumn::Survived,
];

/// Draws the presence/absence matrix of every table cell.
pub fn missing_values_heatmap(
    table: &PassengerTable,
    style: &PlotStyle,
    path: &Path,
) -> anyhow::Result<()> {
    let names = Column::ALL
        .iter()
        .map(|column| column.name().to_owned())
        .collect::<Vec<_>>();
    missing_map::render(path, style, &names, &table.missing_matrix())
}

/// Draws one histogram panel with a density overlay per report column.
pub fn histograms(table: &PassengerTable, style: &PlotStyle, path: &Path) -> anyhow::Result<()> {
    let panels = REPORT_COLUMNS.map(|column| HistogramPanel {
        title: format!("Distribution of {}", column.title()),
        axis_label: column.title(),
        values: table.numeric_present(column),
    });
    histogram::render(path, style, &panels)
}

/// Draws quartile boxes per passenger class for each report column.
pub fn box_plots(table: &PassengerTable, style: &PlotStyle, path: &Path) -> anyhow::Result<()> {
    let panels = REPORT_COLUMNS.map(|column| {
        let values = table.numeric(column);
        let groups = (1..=3u8)
            .map(|class| BoxGroup {
                label: class.to_string(),
                values: table
                    .records()
                    .iter()
                    .zip(&values)
                    .filter(|(record, _)| record.pclass == Some(class))
                    .filter_map(|(_, value)| *value)
                    .collect(),
            })
            .collect();
        BoxPanel {
            title: format!("{} by Passenger Class", column.title()),
            x_label: "Passenger Class".to_owned(),
            y_label: column.title(),
            groups,
        }
    });
    box_plot::render(path, style, &panels)
}

/// Draws the masked lower-triangle correlation matrix.
pub fn correlation_heatmap(
    table: &PassengerTable,
    style: &PlotStyle,
    path: &Path,
) -> anyhow::Result<()> {
    let columns = CORRELATION_COLUMNS.map(|column| table.numeric(column));
    let matrix = correlation_matrix(&columns);
    let labels = CORRELATION_COLUMNS.map(|column| column.name().to_owned());
    correlation::render(path, style, &labels, &matrix)
}

/// Draws the three survival count panels: by sex, class, and town.
pub fn survival_bar_plots(
    table: &PassengerTable,
    style: &PlotStyle,
    path: &Path,
) -> anyhow::Result<()> {
    let records = table.records();
    let panels = [
        CountPanel {
            title: "Survival by Sex".to_owned(),
            x_label: "Sex".to_owned(),
            categories: pivot::survival_counts(records, &["male", "female"], |record| {
                record.sex.map(Sex::as_str)
            }),
        },
        CountPanel {
            title: "Survival by Passenger Class".to_owned(),
            x_label: "Passenger Class".to_owned(),
            categories: pivot::survival_counts(records, &["1", "2", "3"], |record| {
                match record.pclass {
                    Some(1) => Some("1"),
                    Some(2) => Some("2"),
                    Some(3) => Some("3"),
                    _ => None,
                }
            }),
        },
        CountPanel {
            title: "Survival by Embarkation Town".to_owned(),
            x_label: "Embarkation Town".to_owned(),
            categories: pivot::survival_counts(
                records,
                &["Southampton", "Cherbourg", "Queenstown"],
                |record| record.embark_town.as_deref(),
            ),
        },
    ];
    count_plot::render(path, style, &panels)
}

/// Draws the stacked survival-rate bars for each class and sex.
pub fn stacked_bar_plot(
    table: &PassengerTable,
    style: &PlotStyle,
    path: &Path,
) -> anyhow::Result<()> {
    let groups = pivot::survival_rates_by_class_and_sex(table.records());
    let labels = [Sex::Female, Sex::Male].map(|sex| sex.as_str().to_owned());
    stacked_bar::render(path, style, &groups, &labels)
}

/// Draws the pairwise grid over the numeric columns, split by survival.
pub fn pairplot(table: &PassengerTable, style: &PlotStyle, path: &Path) -> anyhow::Result<()> {
    let variables = PAIR_COLUMNS.map(|column| column.name().to_owned());
    let groups = pair_groups(table);
    pair_grid::render(path, style, &variables, &groups)
}

/// Splits the complete pair-grid rows into the two survival groups.
///
/// A row joins its group only when all four variables are present, so
/// every panel of the grid plots the same row set.
fn pair_groups(table: &PassengerTable) -> [PairGroup; 2] {
    let columns = PAIR_COLUMNS.map(|column| table.numeric(column));
    let mut groups = ["0", "1"].map(|label| PairGroup {
        label: label.to_owned(),
        columns: vec![Vec::new(); PAIR_COLUMNS.len()],
    });
    for (index, record) in table.records().iter().enumerate() {
        let Some(survived) = record.survived else {
            continue;
        };
        let values = columns
            .iter()
            .map(|column| column[index])
            .collect::<Option<Vec<_>>>();
        let Some(values) = values else {
            continue;
        };
        let group = &mut groups[usize::from(survived)];
        for (variable, value) in values.into_iter().enumerate() {
            group.columns[variable].push(value);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "survived,pclass,sex,age,sibsp,parch,fare,embarked,class,who,\
                          adult_male,deck,embark_town,alive,alone";

    fn reference_table() -> PassengerTable {
        let mut table = PassengerTable::load_reference().unwrap();
        table.derive_family_size();
        table
    }

    #[test]
    fn test_missing_values_heatmap_renders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_values_heatmap.png");
        missing_values_heatmap(&reference_table(), &PlotStyle::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_histograms_render() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("histograms.png");
        histograms(&reference_table(), &PlotStyle::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_box_plots_render() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("box_plots.png");
        box_plots(&reference_table(), &PlotStyle::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_correlation_heatmap_renders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("correlation_heatmap.png");
        correlation_heatmap(&reference_table(), &PlotStyle::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_survival_bar_plots_render() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("survival_bar_plots.png");
        survival_bar_plots(&reference_table(), &PlotStyle::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_stacked_bar_plot_renders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stacked_bar_plot.png");
        stacked_bar_plot(&reference_table(), &PlotStyle::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_stacked_bar_plot_with_an_empty_class() {
        // no second-class passengers at all
        let text = format!(
            "{HEADER}\n\
             1,1,female,38.0,0,0,71.2833,C,First,woman,False,,Cherbourg,yes,True\n\
             0,3,male,22.0,1,0,7.25,S,Third,man,True,,Southampton,no,False\n"
        );
        let mut table = PassengerTable::from_csv(&text).unwrap();
        table.derive_family_size();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stacked_bar_plot.png");
        stacked_bar_plot(&table, &PlotStyle::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_pairplot_renders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairplot.png");
        pairplot(&reference_table(), &PlotStyle::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_pair_groups_drop_incomplete_rows() {
        let groups = pair_groups(&reference_table());
        // fare, family_size, and survived are complete, so only the 177
        // absent ages shrink the grid
        let total: usize = groups.iter().map(|group| group.columns[0].len()).sum();
        assert_eq!(total, 714);
        for group in &groups {
            assert!(group.columns.iter().all(|column| column.len() == group.columns[0].len()));
        }
        assert_eq!(groups[0].label, "0");
        assert_eq!(groups[1].label, "1");
        // the survival column is constant within each group
        assert!(groups[0].columns[3].iter().all(|&v| v == 0.0));
        assert!(groups[1].columns[3].iter().all(|&v| v == 1.0));
    }
}
