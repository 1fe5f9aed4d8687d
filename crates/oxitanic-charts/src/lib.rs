//! Chart rendering for the Titanic analysis pipeline
//!
//! Every renderer draws one PNG artifact with [`plotters`] and shares
//! the palette and sizing defaults in [`style::PlotStyle`]:
//!
//! - [`missing_map`]: presence/absence matrix of the dataset
//! - [`histogram`]: histogram panels with density overlays
//! - [`box_plot`]: quartile boxes with whiskers and fliers
//! - [`correlation`]: lower-triangle correlation heatmap with a color scale
//! - [`count_plot`]: side-by-side survival count bars per category
//! - [`stacked_bar`]: stacked survival-rate bars with percentage labels
//! - [`pair_grid`]: pairwise scatter/density grid split by survival
//!
//! Renderers take plain data (labels, values, matrices) so callers
//! decide what is plotted; nothing here reads the dataset itself.

pub mod axis;
pub mod box_plot;
pub mod correlation;
pub mod count_plot;
pub mod histogram;
pub mod legend;
pub mod missing_map;
pub mod pair_grid;
pub mod stacked_bar;
pub mod style;
