//! Equal-width histogram binning
//!
//! Bins span the closed range from the smallest to the largest observation.
//! Every bin is half-open on the right except the last, which also accepts
//! the range maximum, so no observation is dropped.
//!
//! # Examples
//!
//! ```
//! use oxitanic_stats::histogram::Histogram;
//!
//! let values = [0.0, 1.0, 2.0, 3.0, 4.0];
//! let hist = Histogram::new(&values, 2).unwrap();
//! assert_eq!(hist.counts(), &[2, 3]);
//! assert_eq!(hist.bin_edges(1), (2.0, 4.0));
//! ```

/// Counts of observations falling into equal-width bins.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    min: f64,
    bin_width: f64,
    counts: Vec<usize>,
}

impl Histogram {
    /// Bins `values` into `bins` equal-width intervals over their range.
    ///
    /// Returns `None` for empty input or a zero bin count. When every
    /// value is identical the single occupied bin is given unit width so
    /// it still renders with visible extent.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    #[must_use]
    pub fn new(values: &[f64], bins: usize) -> Option<Self> {
        if values.is_empty() || bins == 0 {
            return None;
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let span = max - min;
        let bin_width = if span > 0.0 { span / bins as f64 } else { 1.0 };

        let mut counts = vec![0; bins];
        for &value in values {
            let index = (((value - min) / bin_width) as usize).min(bins - 1);
            counts[index] += 1;
        }
        Some(Self {
            min,
            bin_width,
            counts,
        })
    }

    /// The width shared by every bin.
    #[must_use]
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// The per-bin observation counts, lowest bin first.
    #[must_use]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// The `(left, right)` edges of the bin at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn bin_edges(&self, index: usize) -> (f64, f64) {
        assert!(index < self.counts.len(), "bin index out of range");
        let left = self.min + index as f64 * self.bin_width;
        (left, left + self.bin_width)
    }

    /// The largest per-bin count.
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// The total number of binned observations.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}
