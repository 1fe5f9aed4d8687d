//! Stacked survival-rate renderer
//!
//! One bar per passenger class, one segment per sex stacked in fixed
//! order. Segment heights are independent percentages, so a stack's
//! total is not bounded by 100.

use std::path::Path;

use anyhow::ensure;
use plotters::{prelude::*, style::text_anchor::{HPos, Pos, VPos}};

use crate::{
    axis,
    legend::{self, LegendEntry},
    style::PlotStyle,
};

/// One bar of the stacked figure.
#[derive(Debug, Clone)]
pub struct StackedGroup {
    /// Category tick label.
    pub label: String,
    /// Segment percentages in stacking order, bottom first. `None`
    /// marks a group with no members, which draws nothing.
    pub rates: [Option<f64>; 2],
}

const BAR_HALF_WIDTH: f64 = 0.35;

/// Renders the stacked percentage bars for `groups`.
///
/// Every present segment is annotated with its value at the segment's
/// vertical midpoint; zero-height segments keep their place in the
/// stack but receive no annotation.
#[expect(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
pub fn render(
    path: &Path,
    style: &PlotStyle,
    groups: &[StackedGroup],
    segment_labels: &[String; 2],
) -> anyhow::Result<()> {
    ensure!(!groups.is_empty(), "stacked figure has no groups");

    let root = BitMapBackend::new(path, style.stacked_bar_size).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = groups
        .iter()
        .map(|group| group.rates.iter().flatten().sum::<f64>())
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0);

    let labels = groups
        .iter()
        .map(|group| group.label.clone())
        .collect::<Vec<_>>();
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Survival Rate (%) by Passenger Class and Sex",
            ("sans-serif", style.title_font),
        )
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(axis::category_range(groups.len()), 0f64..y_max * 1.12)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(groups.len())
        .x_label_formatter(&|position| axis::category_label(*position, &labels))
        .x_desc("Passenger Class")
        .y_desc("Survival Rate (%)")
        .axis_desc_style(("sans-serif", style.label_font))
        .label_style(("sans-serif", style.tick_font))
        .light_line_style(style.grid_line)
        .bold_line_style(style.grid_line)
        .draw()?;

    let mut segments = Vec::new();
    let mut annotations = Vec::new();
    let annotation_style = ("sans-serif", style.annotation_font)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    for (index, group) in groups.iter().enumerate() {
        let center = index as f64;
        let mut base = 0.0;
        for (segment, rate) in group.rates.iter().enumerate() {
            let Some(rate) = *rate else {
                continue;
            };
            segments.push(Rectangle::new(
                [
                    (center - BAR_HALF_WIDTH, base),
                    (center + BAR_HALF_WIDTH, base + rate),
                ],
                style.stacked_colors[segment].filled(),
            ));
            if rate > 0.0 {
                annotations.push(Text::new(
                    format!("{rate:.1}%"),
                    (center, base + rate / 2.0),
                    annotation_style.clone(),
                ));
            }
            base += rate;
        }
    }
    chart.draw_series(segments)?;
    chart.draw_series(annotations)?;

    let (width, _) = style.stacked_bar_size;
    legend::draw_legend(
        &root,
        (width as i32 - 150, 70),
        "Sex",
        &[
            LegendEntry::new(style.stacked_colors[0], segment_labels[0].clone()),
            LegendEntry::new(style.stacked_colors[1], segment_labels[1].clone()),
        ],
        style.tick_font,
    )?;

    root.present()?;
    Ok(())
}
