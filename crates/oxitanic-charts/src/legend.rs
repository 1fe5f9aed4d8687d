//! Hand-drawn legend boxes
//!
//! `plotters` series labels cannot carry a legend title, so the legends
//! that need one (the survival hue and sex legends) are drawn directly on
//! the canvas in pixel coordinates.

use plotters::{coord::Shift, prelude::*};

/// One swatch-and-label legend row.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    /// Swatch fill color.
    pub color: RGBColor,
    /// Entry text.
    pub label: String,
}

impl LegendEntry {
    /// Builds an entry from a swatch color and a label.
    pub fn new(color: RGBColor, label: impl Into<String>) -> Self {
        Self {
            color,
            label: label.into(),
        }
    }
}

/// Draws a titled legend box with its top-left corner at `anchor`.
///
/// The box sizes itself to the title and entry texts. An empty title
/// skips the title row.
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn draw_legend(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    anchor: (i32, i32),
    title: &str,
    entries: &[LegendEntry],
    font: i32,
) -> anyhow::Result<()> {
    const PAD: i32 = 8;
    const SWATCH: i32 = 14;
    const GAP: i32 = 6;

    let text_style = ("sans-serif", font).into_font().color(&BLACK);
    let row_height = font.max(SWATCH) + GAP;

    let mut content_width = 0;
    let mut title_height = 0;
    if !title.is_empty() {
        let (width, height) = area.estimate_text_size(title, &text_style)?;
        content_width = width as i32;
        title_height = height as i32 + GAP;
    }
    for entry in entries {
        let (width, _) = area.estimate_text_size(&entry.label, &text_style)?;
        content_width = content_width.max(SWATCH + GAP + width as i32);
    }

    let (x, y) = anchor;
    let width = content_width + 2 * PAD;
    let height = title_height + entries.len() as i32 * row_height - GAP + 2 * PAD;
    area.draw(&Rectangle::new(
        [(x, y), (x + width, y + height)],
        WHITE.mix(0.85).filled(),
    ))?;
    area.draw(&Rectangle::new(
        [(x, y), (x + width, y + height)],
        BLACK.stroke_width(1),
    ))?;

    if !title.is_empty() {
        area.draw(&Text::new(
            title.to_owned(),
            (x + PAD, y + PAD),
            text_style.clone(),
        ))?;
    }
    for (index, entry) in entries.iter().enumerate() {
        let row_y = y + PAD + title_height + index as i32 * row_height;
        area.draw(&Rectangle::new(
            [(x + PAD, row_y), (x + PAD + SWATCH, row_y + SWATCH)],
            entry.color.filled(),
        ))?;
        area.draw(&Text::new(
            entry.label.clone(),
            (x + PAD + SWATCH + GAP, row_y),
            text_style.clone(),
        ))?;
    }
    Ok(())
}
