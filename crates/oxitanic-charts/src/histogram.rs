//! Distribution histogram renderer

use std::path::Path;

use anyhow::ensure;
use oxitanic_stats::{histogram::Histogram, kde::gaussian_kde};
use plotters::prelude::*;

use crate::{axis, style::PlotStyle};

/// One histogram panel: a value sample plus its display texts.
#[derive(Debug, Clone)]
pub struct HistogramPanel {
    /// Panel caption.
    pub title: String,
    /// Horizontal axis description.
    pub axis_label: String,
    /// Present values of the column.
    pub values: Vec<f64>,
}

/// Renders one histogram panel per entry, side by side.
///
/// Each panel bins its values into equal-width bars and overlays the
/// Gaussian density curve scaled to the count axis (density times sample
/// size times bin width). Samples too small for a density estimate get
/// bars only.
#[expect(clippy::cast_precision_loss)]
pub fn render(path: &Path, style: &PlotStyle, panels: &[HistogramPanel]) -> anyhow::Result<()> {
    ensure!(!panels.is_empty(), "histogram figure has no panels");

    let root = BitMapBackend::new(path, style.histograms_size).into_drawing_area();
    root.fill(&WHITE)?;
    let areas = root.split_evenly((1, panels.len()));

    for (panel, area) in panels.iter().zip(&areas) {
        ensure!(
            !panel.values.is_empty(),
            "histogram panel {:?} has no data",
            panel.title
        );
        let Some(hist) = Histogram::new(&panel.values, style.histogram_bins) else {
            continue;
        };
        let sample_size = panel.values.len() as f64;
        let curve = gaussian_kde(&panel.values, style.kde_grid);

        let mut y_max = hist.max_count() as f64;
        if let Some(curve) = &curve {
            y_max = y_max.max(curve.peak() * sample_size * hist.bin_width());
        }

        let (x_min, _) = hist.bin_edges(0);
        let (_, x_max) = hist.bin_edges(hist.counts().len() - 1);
        let mut chart = ChartBuilder::on(area)
            .caption(&panel.title, ("sans-serif", style.title_font))
            .margin(10)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(axis::padded_range(x_min, x_max), 0f64..y_max * 1.1)?;

        chart
            .configure_mesh()
            .x_desc(&panel.axis_label)
            .y_desc("Count")
            .axis_desc_style(("sans-serif", style.label_font))
            .label_style(("sans-serif", style.tick_font))
            .light_line_style(style.grid_line)
            .bold_line_style(style.grid_line)
            .draw()?;

        chart.draw_series(hist.counts().iter().enumerate().map(|(index, &count)| {
            let (left, right) = hist.bin_edges(index);
            Rectangle::new(
                [(left, 0.0), (right, count as f64)],
                style.bar_fill.mix(0.75).filled(),
            )
        }))?;
        chart.draw_series(hist.counts().iter().enumerate().map(|(index, &count)| {
            let (left, right) = hist.bin_edges(index);
            Rectangle::new([(left, 0.0), (right, count as f64)], WHITE.stroke_width(1))
        }))?;

        if let Some(curve) = curve {
            let scale = sample_size * hist.bin_width();
            chart.draw_series(LineSeries::new(
                curve
                    .points
                    .iter()
                    .map(|&(x, density)| (x, density * scale)),
                style.density_line.stroke_width(2),
            ))?;
        }
    }

    root.present()?;
    Ok(())
}
