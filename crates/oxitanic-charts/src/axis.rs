//! Axis helpers for category and padded numeric ranges
//!
//! Category axes are plain `f64` axes with one category per integer
//! position; bars and cells are centered on the integers and the tick
//! formatter resolves each integer back to its label.

use std::ops::Range;

/// The axis range for `count` categories centered on 0, 1, ...
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn category_range(count: usize) -> Range<f64> {
    -0.5..count as f64 - 0.5
}

/// Resolves an axis position to its category label.
///
/// Positions that do not sit on an integer category produce an empty
/// label, so stray fractional ticks render as nothing.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn category_label(position: f64, labels: &[String]) -> String {
    let nearest = position.round();
    if (position - nearest).abs() > 0.01 || nearest < 0.0 {
        return String::new();
    }
    labels.get(nearest as usize).cloned().unwrap_or_default()
}

/// A numeric range padded five percent beyond the data extremes.
///
/// Degenerate spans widen to one unit so the axis always has extent.
#[must_use]
pub fn padded_range(min: f64, max: f64) -> Range<f64> {
    let span = max - min;
    if span <= 0.0 {
        return min - 0.5..max + 0.5;
    }
    let pad = span * 0.05;
    min - pad..max + pad
}
