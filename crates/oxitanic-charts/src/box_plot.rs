//! Grouped box-plot renderer
//!
//! Boxes are drawn from precomputed five-number geometry: the box spans
//! Q1 to Q3 with a median line, whiskers reach the most extreme
//! observation within 1.5 IQR of the box, and anything beyond is drawn
//! as an individual flier point.

use std::path::Path;

use anyhow::ensure;
use oxitanic_stats::boxstats::BoxStats;
use plotters::prelude::*;

use crate::{axis, style::PlotStyle};

/// One box-plot panel: a set of category groups plus display texts.
#[derive(Debug, Clone)]
pub struct BoxPanel {
    /// Panel caption.
    pub title: String,
    /// Horizontal axis description.
    pub x_label: String,
    /// Vertical axis description.
    pub y_label: String,
    /// Category groups in display order.
    pub groups: Vec<BoxGroup>,
}

/// One category's observations within a panel.
#[derive(Debug, Clone)]
pub struct BoxGroup {
    /// Category tick label.
    pub label: String,
    /// Present values of the group, any order.
    pub values: Vec<f64>,
}

const BOX_HALF_WIDTH: f64 = 0.3;
const CAP_HALF_WIDTH: f64 = 0.15;

/// Renders one box-plot panel per entry, side by side.
///
/// A group with no observations draws no glyph but keeps its axis slot.
#[expect(clippy::cast_precision_loss)]
pub fn render(path: &Path, style: &PlotStyle, panels: &[BoxPanel]) -> anyhow::Result<()> {
    ensure!(!panels.is_empty(), "box-plot figure has no panels");

    let root = BitMapBackend::new(path, style.box_plots_size).into_drawing_area();
    root.fill(&WHITE)?;
    let areas = root.split_evenly((1, panels.len()));

    for (panel, area) in panels.iter().zip(&areas) {
        let stats = panel
            .groups
            .iter()
            .map(|group| BoxStats::new(group.values.iter().copied()))
            .collect::<Vec<_>>();

        let mut low = f64::INFINITY;
        let mut high = f64::NEG_INFINITY;
        for stat in stats.iter().flatten() {
            low = low.min(stat.whisker_low);
            high = high.max(stat.whisker_high);
            for &flier in &stat.fliers {
                low = low.min(flier);
                high = high.max(flier);
            }
        }
        if !low.is_finite() || !high.is_finite() {
            continue;
        }

        let labels = panel
            .groups
            .iter()
            .map(|group| group.label.clone())
            .collect::<Vec<_>>();
        let mut chart = ChartBuilder::on(area)
            .caption(&panel.title, ("sans-serif", style.title_font))
            .margin(10)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(
                axis::category_range(panel.groups.len()),
                axis::padded_range(low, high),
            )?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(panel.groups.len())
            .x_label_formatter(&|position| axis::category_label(*position, &labels))
            .x_desc(&panel.x_label)
            .y_desc(&panel.y_label)
            .axis_desc_style(("sans-serif", style.label_font))
            .label_style(("sans-serif", style.tick_font))
            .light_line_style(style.grid_line)
            .bold_line_style(style.grid_line)
            .draw()?;

        let mut boxes = Vec::new();
        let mut outlines = Vec::new();
        let mut lines = Vec::new();
        let mut fliers = Vec::new();
        for (index, stat) in stats.iter().enumerate() {
            let Some(stat) = stat else {
                continue;
            };
            let center = index as f64;
            let box_corners = [
                (center - BOX_HALF_WIDTH, stat.q1),
                (center + BOX_HALF_WIDTH, stat.q3),
            ];
            boxes.push(Rectangle::new(
                box_corners,
                style.class_colors[index % style.class_colors.len()].filled(),
            ));
            outlines.push(Rectangle::new(box_corners, BLACK.stroke_width(1)));
            lines.push(PathElement::new(
                vec![
                    (center - BOX_HALF_WIDTH, stat.median),
                    (center + BOX_HALF_WIDTH, stat.median),
                ],
                BLACK.stroke_width(2),
            ));
            lines.push(PathElement::new(
                vec![(center, stat.q3), (center, stat.whisker_high)],
                BLACK.stroke_width(1),
            ));
            lines.push(PathElement::new(
                vec![(center, stat.q1), (center, stat.whisker_low)],
                BLACK.stroke_width(1),
            ));
            lines.push(PathElement::new(
                vec![
                    (center - CAP_HALF_WIDTH, stat.whisker_high),
                    (center + CAP_HALF_WIDTH, stat.whisker_high),
                ],
                BLACK.stroke_width(1),
            ));
            lines.push(PathElement::new(
                vec![
                    (center - CAP_HALF_WIDTH, stat.whisker_low),
                    (center + CAP_HALF_WIDTH, stat.whisker_low),
                ],
                BLACK.stroke_width(1),
            ));
            for &flier in &stat.fliers {
                fliers.push(Circle::new((center, flier), 3, BLACK.stroke_width(1)));
            }
        }
        chart.draw_series(boxes)?;
        chart.draw_series(outlines)?;
        chart.draw_series(lines)?;
        chart.draw_series(fliers)?;
    }

    root.present()?;
    Ok(())
}
