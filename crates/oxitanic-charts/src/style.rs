//! Global chart style defaults
//!
//! Every cosmetic constant used by the renderers lives in one
//! [`PlotStyle`] value: canvas geometry per figure, font sizes, and the
//! full color palette. The driver constructs it once and shares it with
//! every generator, so the figures stay visually consistent without any
//! process-global state.

use plotters::style::RGBColor;

/// The shared cosmetic configuration for all figures.
#[derive(Debug, Clone)]
pub struct PlotStyle {
    /// Canvas size of the missing-value heatmap, in pixels.
    pub missing_map_size: (u32, u32),
    /// Canvas size of the three-panel histogram figure.
    pub histograms_size: (u32, u32),
    /// Canvas size of the three-panel box-plot figure.
    pub box_plots_size: (u32, u32),
    /// Canvas size of the correlation heatmap.
    pub correlation_size: (u32, u32),
    /// Canvas size of the three-panel survival count figure.
    pub survival_bars_size: (u32, u32),
    /// Canvas size of the stacked survival-rate figure.
    pub stacked_bar_size: (u32, u32),
    /// Canvas size of the pairwise relationship grid.
    pub pair_plot_size: (u32, u32),
    /// Panel title size in pixels.
    pub title_font: i32,
    /// Figure-level title size in pixels.
    pub suptitle_font: i32,
    /// Axis description size in pixels.
    pub label_font: i32,
    /// Tick label size in pixels.
    pub tick_font: i32,
    /// In-chart annotation size in pixels.
    pub annotation_font: i32,
    /// Histogram bar fill (sky blue).
    pub bar_fill: RGBColor,
    /// Density overlay stroke (steel blue).
    pub density_line: RGBColor,
    /// Hue colors for the two survival outcomes, not-survived first.
    pub group_colors: [RGBColor; 2],
    /// Box fills for the three passenger classes.
    pub class_colors: [RGBColor; 3],
    /// Stacked segment fills, female first.
    pub stacked_colors: [RGBColor; 2],
    /// Missing-map cell color for present values.
    pub present_cell: RGBColor,
    /// Missing-map cell color for absent values.
    pub absent_cell: RGBColor,
    /// Cold end of the correlation color scale.
    pub diverging_low: RGBColor,
    /// Hot end of the correlation color scale.
    pub diverging_high: RGBColor,
    /// Cell color for an undefined correlation coefficient.
    pub undefined_cell: RGBColor,
    /// Light mesh line color.
    pub grid_line: RGBColor,
    /// Number of equal-width histogram bins per panel.
    pub histogram_bins: usize,
    /// Number of evaluation points per density curve.
    pub kde_grid: usize,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            missing_map_size: (1000, 700),
            histograms_size: (1800, 500),
            box_plots_size: (1800, 550),
            correlation_size: (900, 780),
            survival_bars_size: (1800, 550),
            stacked_bar_size: (1000, 650),
            pair_plot_size: (1200, 1200),
            title_font: 24,
            suptitle_font: 28,
            label_font: 18,
            tick_font: 14,
            annotation_font: 15,
            bar_fill: RGBColor(135, 206, 235),
            density_line: RGBColor(70, 130, 180),
            group_colors: [RGBColor(102, 194, 165), RGBColor(252, 141, 98)],
            class_colors: [
                RGBColor(72, 120, 208),
                RGBColor(238, 133, 74),
                RGBColor(106, 204, 100),
            ],
            stacked_colors: [RGBColor(255, 153, 153), RGBColor(102, 179, 255)],
            present_cell: RGBColor(68, 1, 84),
            absent_cell: RGBColor(253, 231, 37),
            diverging_low: RGBColor(59, 76, 192),
            diverging_high: RGBColor(180, 4, 38),
            undefined_cell: RGBColor(211, 211, 211),
            grid_line: RGBColor(229, 229, 229),
            histogram_bins: 20,
            kde_grid: 200,
        }
    }
}

impl PlotStyle {
    /// Maps a correlation coefficient onto the diverging color scale.
    ///
    /// Negative values blend from white toward the cold end, positive
    /// values toward the hot end; the input is clamped to [-1, 1].
    #[must_use]
    pub fn diverging_color(&self, coefficient: f64) -> RGBColor {
        let t = coefficient.clamp(-1.0, 1.0);
        let white = RGBColor(255, 255, 255);
        if t < 0.0 {
            blend(white, self.diverging_low, -t)
        } else {
            blend(white, self.diverging_high, t)
        }
    }

    /// Picks a readable annotation color for text drawn on `cell`.
    #[must_use]
    pub fn annotation_color(&self, cell: RGBColor) -> RGBColor {
        let luminance =
            0.299 * f64::from(cell.0) + 0.587 * f64::from(cell.1) + 0.114 * f64::from(cell.2);
        if luminance < 140.0 {
            RGBColor(255, 255, 255)
        } else {
            RGBColor(0, 0, 0)
        }
    }
}

fn blend(from: RGBColor, to: RGBColor, t: f64) -> RGBColor {
    RGBColor(
        lerp_channel(from.0, to.0, t),
        lerp_channel(from.1, to.1, t),
        lerp_channel(from.2, to.2, t),
    )
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let value = f64::from(from) + (f64::from(to) - f64::from(from)) * t;
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diverging_scale_endpoints() {
        let style = PlotStyle::default();
        assert_eq!(style.diverging_color(0.0), RGBColor(255, 255, 255));
        assert_eq!(style.diverging_color(1.0), style.diverging_high);
        assert_eq!(style.diverging_color(-1.0), style.diverging_low);
        // out-of-range coefficients clamp instead of overshooting
        assert_eq!(style.diverging_color(3.0), style.diverging_high);
    }

    #[test]
    fn test_diverging_scale_midpoint_blend() {
        let style = PlotStyle::default();
        let half = style.diverging_color(0.5);
        assert!(half.0 > style.diverging_high.0 && half.0 < 255);
        assert!(half.2 > style.diverging_high.2);
    }

    #[test]
    fn test_annotation_color_tracks_luminance() {
        let style = PlotStyle::default();
        assert_eq!(
            style.annotation_color(style.diverging_low),
            RGBColor(255, 255, 255)
        );
        assert_eq!(
            style.annotation_color(RGBColor(255, 255, 255)),
            RGBColor(0, 0, 0)
        );
        assert_eq!(
            style.annotation_color(style.undefined_cell),
            RGBColor(0, 0, 0)
        );
    }
}
