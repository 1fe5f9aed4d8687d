//! Masked correlation heatmap renderer
//!
//! Only the lower triangle of the matrix is rendered; the diagonal and
//! upper triangle stay masked. Each visible cell is annotated with its
//! coefficient to two decimal places, or with "nan" on a neutral cell
//! when the coefficient is undefined. A vertical color-scale strip sits
//! to the right of the matrix.

use std::path::Path;

use anyhow::ensure;
use plotters::{
    prelude::*,
    style::{
        FontTransform,
        text_anchor::{HPos, Pos, VPos},
    },
};

use crate::{axis, style::PlotStyle};

const STRIP_WIDTH: i32 = 110;
const STRIP_STEPS: i32 = 120;

/// Renders the masked correlation heatmap for `labels` and `matrix`.
///
/// `matrix[i][j]` is the coefficient between variables `i` and `j`;
/// `None` marks an undefined coefficient.
#[expect(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
pub fn render(
    path: &Path,
    style: &PlotStyle,
    labels: &[String],
    matrix: &[Vec<Option<f64>>],
) -> anyhow::Result<()> {
    ensure!(!labels.is_empty(), "correlation heatmap has no variables");
    ensure!(
        labels.len() == matrix.len(),
        "correlation matrix must be square over its labels"
    );

    let (width, height) = style.correlation_size;
    let root = BitMapBackend::new(path, style.correlation_size).into_drawing_area();
    root.fill(&WHITE)?;
    let (main, strip) = root.split_horizontally(width as i32 - STRIP_WIDTH);

    let count = labels.len();
    let top = count as f64 - 1.0;
    let reversed = labels.iter().rev().cloned().collect::<Vec<_>>();
    let mut chart = ChartBuilder::on(&main)
        .caption(
            "Correlation Heatmap of Numerical Features",
            ("sans-serif", style.title_font),
        )
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(100)
        .build_cartesian_2d(axis::category_range(count), axis::category_range(count))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(count)
        .y_labels(count)
        .x_label_formatter(&|position| axis::category_label(*position, labels))
        .y_label_formatter(&|position| axis::category_label(*position, &reversed))
        .label_style(("sans-serif", style.tick_font))
        .draw()?;

    let mut cells = Vec::new();
    let mut annotations = Vec::new();
    for (i, row) in matrix.iter().enumerate() {
        for (j, &value) in row.iter().take(i).enumerate() {
            let fill = value.map_or(style.undefined_cell, |r| style.diverging_color(r));
            let text = value.map_or_else(|| "nan".to_owned(), |r| format!("{r:.2}"));
            let x = j as f64;
            let y = top - i as f64;
            cells.push(Rectangle::new(
                [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
                fill.filled(),
            ));
            let annotation_style = ("sans-serif", style.annotation_font)
                .into_font()
                .color(&style.annotation_color(fill))
                .pos(Pos::new(HPos::Center, VPos::Center));
            annotations.push(Text::new(text, (x, y), annotation_style));
        }
    }
    chart.draw_series(cells)?;
    chart.draw_series(annotations)?;

    draw_scale_strip(&strip, style, height as i32)?;

    root.present()?;
    Ok(())
}

#[expect(clippy::cast_possible_truncation)]
fn draw_scale_strip(
    strip: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    style: &PlotStyle,
    height: i32,
) -> anyhow::Result<()> {
    let bar_top = 90;
    let bar_span = height - 2 * bar_top;
    for step in 0..STRIP_STEPS {
        let value = 1.0 - 2.0 * (f64::from(step) + 0.5) / f64::from(STRIP_STEPS);
        let y0 = bar_top + bar_span * step / STRIP_STEPS;
        let y1 = bar_top + bar_span * (step + 1) / STRIP_STEPS;
        strip.draw(&Rectangle::new(
            [(18, y0), (42, y1 + 1)],
            style.diverging_color(value).filled(),
        ))?;
    }
    strip.draw(&Rectangle::new(
        [(18, bar_top), (42, bar_top + bar_span)],
        BLACK.stroke_width(1),
    ))?;

    let tick_style = ("sans-serif", style.tick_font)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    for tick in [1.0f64, 0.5, 0.0, -0.5, -1.0] {
        let y = bar_top + ((1.0 - tick) / 2.0 * f64::from(bar_span)) as i32;
        strip.draw(&Text::new(format!("{tick:.1}"), (50, y), tick_style.clone()))?;
    }

    let desc_style = ("sans-serif", style.label_font)
        .into_font()
        .transform(FontTransform::Rotate270)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    strip.draw(&Text::new(
        "Correlation Coefficient",
        (STRIP_WIDTH - 14, height / 2),
        desc_style,
    ))?;
    Ok(())
}
