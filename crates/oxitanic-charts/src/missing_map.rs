//! Missing-value heatmap renderer

use std::path::Path;

use anyhow::ensure;
use plotters::{prelude::*, style::FontTransform};

use crate::{axis, style::PlotStyle};

/// Renders the presence/absence matrix as a heatmap.
///
/// `missing[row][column]` is `true` where the cell is absent. Present
/// cells share one background fill and absent cells are drawn over it in
/// the contrasting color, so the figure cost scales with the number of
/// gaps rather than the full matrix. Column names run along the bottom
/// axis; the row axis is unlabeled.
#[expect(clippy::cast_precision_loss)]
pub fn render(
    path: &Path,
    style: &PlotStyle,
    column_names: &[String],
    missing: &[Vec<bool>],
) -> anyhow::Result<()> {
    ensure!(!missing.is_empty(), "missing-value matrix has no rows");
    ensure!(
        !column_names.is_empty(),
        "missing-value matrix has no columns"
    );

    let rows = missing.len() as f64;
    let columns = column_names.len() as f64;
    let root = BitMapBackend::new(path, style.missing_map_size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Missing Values in Titanic Dataset",
            ("sans-serif", style.title_font),
        )
        .margin(10)
        .x_label_area_size(120)
        .y_label_area_size(30)
        .build_cartesian_2d(axis::category_range(column_names.len()), 0f64..rows)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(column_names.len())
        .y_labels(0)
        .x_label_formatter(&|position| axis::category_label(*position, column_names))
        .x_label_style(
            ("sans-serif", style.tick_font)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .draw()?;

    chart.draw_series(std::iter::once(Rectangle::new(
        [(-0.5, 0.0), (columns - 0.5, rows)],
        style.present_cell.filled(),
    )))?;

    let absent_cell = style.absent_cell;
    let cells = missing.iter().enumerate().flat_map(|(row, flags)| {
        let top = rows - row as f64;
        flags
            .iter()
            .enumerate()
            .filter(|&(_, &absent)| absent)
            .map(move |(column, _)| {
                Rectangle::new(
                    [
                        (column as f64 - 0.5, top - 1.0),
                        (column as f64 + 0.5, top),
                    ],
                    absent_cell.filled(),
                )
            })
    });
    chart.draw_series(cells)?;

    root.present()?;
    Ok(())
}
