//! Pairwise relationship grid renderer
//!
//! A square grid with one panel per variable pair, colored by survival
//! group. Axis ranges are shared per variable so a column of panels
//! lines up, and only the outer edge of the grid carries labels.

use std::path::Path;

use anyhow::ensure;
use oxitanic_stats::kde::gaussian_kde;
use plotters::prelude::*;

use crate::{
    axis,
    legend::{self, LegendEntry},
    style::PlotStyle,
};

/// One hue group of the pair grid.
#[derive(Debug, Clone)]
pub struct PairGroup {
    /// Legend label for the group.
    pub label: String,
    /// Values per variable, aligned across the group's rows:
    /// `columns[v][i]` is row `i`'s value for variable `v`.
    pub columns: Vec<Vec<f64>>,
}

const LEGEND_WIDTH: i32 = 140;

/// Renders the scatter/density grid for `variables` across `groups`.
///
/// Diagonal panels draw one density curve per group; off-diagonal
/// panels draw alpha-blended scatter points. A group whose values are
/// constant in some variable contributes no density curve there.
#[expect(clippy::cast_possible_wrap)]
pub fn render(
    path: &Path,
    style: &PlotStyle,
    variables: &[String],
    groups: &[PairGroup],
) -> anyhow::Result<()> {
    ensure!(!variables.is_empty(), "pair grid has no variables");
    for group in groups {
        ensure!(
            group.columns.len() == variables.len(),
            "pair group {:?} has {} columns, expected {}",
            group.label,
            group.columns.len(),
            variables.len()
        );
    }

    let root = BitMapBackend::new(path, style.pair_plot_size).into_drawing_area();
    root.fill(&WHITE)?;
    let titled = root.titled(
        "Pairplot of Numerical Features by Survival",
        ("sans-serif", style.suptitle_font),
    )?;
    let (width, _) = style.pair_plot_size;
    let (grid, legend_area) = titled.split_horizontally(width as i32 - LEGEND_WIDTH);

    let count = variables.len();
    let mut ranges = Vec::with_capacity(count);
    for (variable, label) in variables.iter().enumerate() {
        let mut low = f64::INFINITY;
        let mut high = f64::NEG_INFINITY;
        for group in groups {
            for &value in &group.columns[variable] {
                low = low.min(value);
                high = high.max(value);
            }
        }
        ensure!(low.is_finite(), "pair variable {label:?} has no data");
        ranges.push(axis::padded_range(low, high));
    }

    let panels = grid.split_evenly((count, count));
    for (panel_index, area) in panels.iter().enumerate() {
        let row = panel_index / count;
        let column = panel_index % count;

        if row == column {
            let curves = groups
                .iter()
                .enumerate()
                .filter_map(|(index, group)| {
                    gaussian_kde(&group.columns[row], style.kde_grid)
                        .map(|curve| (index, curve))
                })
                .collect::<Vec<_>>();
            let peak = curves
                .iter()
                .map(|(_, curve)| curve.peak())
                .fold(0.0, f64::max);

            let mut chart = ChartBuilder::on(area)
                .margin(6)
                .x_label_area_size(36)
                .y_label_area_size(46)
                .build_cartesian_2d(ranges[column].clone(), 0f64..(peak * 1.1).max(1.0))?;
            configure_panel_mesh(&mut chart, style, variables, row, column, count, true)?;
            for (index, curve) in curves {
                chart.draw_series(LineSeries::new(
                    curve.points.iter().copied(),
                    style.group_colors[index % style.group_colors.len()].stroke_width(2),
                ))?;
            }
        } else {
            let mut chart = ChartBuilder::on(area)
                .margin(6)
                .x_label_area_size(36)
                .y_label_area_size(46)
                .build_cartesian_2d(ranges[column].clone(), ranges[row].clone())?;
            configure_panel_mesh(&mut chart, style, variables, row, column, count, false)?;
            for (index, group) in groups.iter().enumerate() {
                let color = style.group_colors[index % style.group_colors.len()].mix(0.6);
                chart.draw_series(
                    group.columns[column]
                        .iter()
                        .zip(&group.columns[row])
                        .map(|(&x, &y)| Circle::new((x, y), 2, color.filled())),
                )?;
            }
        }
    }

    let entries = groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            LegendEntry::new(
                style.group_colors[index % style.group_colors.len()],
                group.label.clone(),
            )
        })
        .collect::<Vec<_>>();
    legend::draw_legend(&legend_area, (10, 40), "survived", &entries, style.tick_font)?;

    root.present()?;
    Ok(())
}

type PanelChart<'a, 'b> = ChartContext<
    'a,
    BitMapBackend<'b>,
    Cartesian2d<plotters::coord::types::RangedCoordf64, plotters::coord::types::RangedCoordf64>,
>;

/// Applies the shared mesh styling for one grid panel.
///
/// Tick labels appear only on the bottom row and left column; the
/// diagonal hides its density scale because it is not shared with the
/// rest of the row.
fn configure_panel_mesh(
    chart: &mut PanelChart<'_, '_>,
    style: &PlotStyle,
    variables: &[String],
    row: usize,
    column: usize,
    count: usize,
    diagonal: bool,
) -> anyhow::Result<()> {
    let mut mesh = chart.configure_mesh();
    mesh.light_line_style(style.grid_line)
        .bold_line_style(style.grid_line)
        .label_style(("sans-serif", style.tick_font))
        .axis_desc_style(("sans-serif", style.label_font));
    if row + 1 == count {
        mesh.x_desc(variables[column].as_str());
        mesh.x_labels(4);
    } else {
        mesh.x_labels(0);
    }
    if column == 0 {
        mesh.y_desc(variables[row].as_str());
        mesh.y_labels(if diagonal { 0 } else { 4 });
    } else {
        mesh.y_labels(0);
    }
    mesh.draw()?;
    Ok(())
}
