//! Survival count-plot renderer

use std::path::Path;

use anyhow::ensure;
use plotters::prelude::*;

use crate::{
    axis,
    legend::{self, LegendEntry},
    style::PlotStyle,
};

/// One count-plot panel: per-category survival tallies plus texts.
#[derive(Debug, Clone)]
pub struct CountPanel {
    /// Panel caption.
    pub title: String,
    /// Horizontal axis description.
    pub x_label: String,
    /// Categories in display order.
    pub categories: Vec<CategoryCounts>,
}

/// Tallies for one category, split by survival outcome.
#[derive(Debug, Clone)]
pub struct CategoryCounts {
    /// Category tick label.
    pub label: String,
    /// Rows with the survival flag unset.
    pub not_survived: usize,
    /// Rows with the survival flag set.
    pub survived: usize,
}

const BAR_WIDTH: f64 = 0.4;

/// Renders one grouped count panel per entry, side by side.
///
/// Each category gets two touching bars, not-survived on the left, with
/// a shared hue legend in every panel.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]
pub fn render(path: &Path, style: &PlotStyle, panels: &[CountPanel]) -> anyhow::Result<()> {
    ensure!(!panels.is_empty(), "count-plot figure has no panels");

    let root = BitMapBackend::new(path, style.survival_bars_size).into_drawing_area();
    root.fill(&WHITE)?;
    let areas = root.split_evenly((1, panels.len()));
    let panel_width = (style.survival_bars_size.0 / panels.len() as u32) as i32;

    for (panel, area) in panels.iter().zip(&areas) {
        ensure!(
            !panel.categories.is_empty(),
            "count panel {:?} has no categories",
            panel.title
        );
        let y_max = panel
            .categories
            .iter()
            .map(|category| category.not_survived.max(category.survived))
            .max()
            .unwrap_or(0) as f64;

        let labels = panel
            .categories
            .iter()
            .map(|category| category.label.clone())
            .collect::<Vec<_>>();
        let mut chart = ChartBuilder::on(area)
            .caption(&panel.title, ("sans-serif", style.title_font))
            .margin(10)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(
                axis::category_range(panel.categories.len()),
                0f64..(y_max * 1.1).max(1.0),
            )?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(panel.categories.len())
            .x_label_formatter(&|position| axis::category_label(*position, &labels))
            .x_desc(&panel.x_label)
            .y_desc("Count")
            .axis_desc_style(("sans-serif", style.label_font))
            .label_style(("sans-serif", style.tick_font))
            .light_line_style(style.grid_line)
            .bold_line_style(style.grid_line)
            .draw()?;

        chart.draw_series(panel.categories.iter().enumerate().map(|(index, category)| {
            let center = index as f64;
            Rectangle::new(
                [(center - BAR_WIDTH, 0.0), (center, category.not_survived as f64)],
                style.group_colors[0].filled(),
            )
        }))?;
        chart.draw_series(panel.categories.iter().enumerate().map(|(index, category)| {
            let center = index as f64;
            Rectangle::new(
                [(center, 0.0), (center + BAR_WIDTH, category.survived as f64)],
                style.group_colors[1].filled(),
            )
        }))?;

        legend::draw_legend(
            area,
            (panel_width - 120, 50),
            "survived",
            &[
                LegendEntry::new(style.group_colors[0], "0"),
                LegendEntry::new(style.group_colors[1], "1"),
            ],
            style.tick_font,
        )?;
    }

    root.present()?;
    Ok(())
}
