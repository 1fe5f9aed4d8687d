use crate::{outlier::iqr_bounds, quantile::quartiles_sorted};

/// The geometry of one box-and-whisker glyph.
///
/// The box spans the first and third quartiles with a line at the median.
/// Whiskers extend to the most extreme observations still within 1.5
/// interquartile ranges of the box; anything beyond the whiskers is kept
/// as an individual flier point.
#[derive(Debug, Clone)]
pub struct BoxStats {
    /// The first quartile (bottom of the box).
    pub q1: f64,
    /// The median line inside the box.
    pub median: f64,
    /// The third quartile (top of the box).
    pub q3: f64,
    /// The lowest observation within the lower fence.
    pub whisker_low: f64,
    /// The highest observation within the upper fence.
    pub whisker_high: f64,
    /// Observations beyond the whiskers, in ascending order.
    pub fliers: Vec<f64>,
}

impl BoxStats {
    /// Computes box-plot statistics from unsorted values.
    ///
    /// # Returns
    ///
    /// * `Some(BoxStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use oxitanic_stats::boxstats::BoxStats;
    /// let values = vec![3.0, 1.0, 2.0, 4.0, 5.0];
    /// let stats = BoxStats::new(values).unwrap();
    /// assert_eq!(stats.median, 3.0);
    /// assert_eq!(stats.whisker_low, 1.0);
    /// assert_eq!(stats.whisker_high, 5.0);
    /// assert!(stats.fliers.is_empty());
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes box-plot statistics from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        let quartiles = quartiles_sorted(sorted_values)?;
        let bounds = iqr_bounds(sorted_values)?;

        let whisker_low = sorted_values
            .iter()
            .copied()
            .find(|&v| v >= bounds.lower)
            .unwrap_or(quartiles.q1);
        let whisker_high = sorted_values
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= bounds.upper)
            .unwrap_or(quartiles.q3);
        let fliers = sorted_values
            .iter()
            .copied()
            .filter(|&v| v < whisker_low || v > whisker_high)
            .collect();

        Some(Self {
            q1: quartiles.q1,
            median: quartiles.median,
            q3: quartiles.q3,
            whisker_low,
            whisker_high,
            fliers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset() {
        assert!(BoxStats::new([]).is_none());
    }

    #[test]
    fn test_whiskers_clamp_to_data_within_fences() {
        let values: Vec<f64> = (1..=9).map(f64::from).chain([100.0]).collect();
        let stats = BoxStats::new(values).unwrap();
        // Q1 = 3.25, Q3 = 7.75, fences at -3.5 and 14.5.
        assert_eq!(stats.q1, 3.25);
        assert_eq!(stats.q3, 7.75);
        assert_eq!(stats.whisker_low, 1.0);
        assert_eq!(stats.whisker_high, 9.0);
        assert_eq!(stats.fliers, vec![100.0]);
    }

    #[test]
    fn test_no_fliers_for_tight_data() {
        let stats = BoxStats::new([10.0, 11.0, 12.0, 13.0]).unwrap();
        assert_eq!(stats.whisker_low, 10.0);
        assert_eq!(stats.whisker_high, 13.0);
        assert!(stats.fliers.is_empty());
    }

    #[test]
    fn test_low_side_flier() {
        let values = [-50.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let stats = BoxStats::new(values).unwrap();
        assert_eq!(stats.whisker_low, 1.0);
        assert_eq!(stats.fliers, vec![-50.0]);
    }

    #[test]
    fn test_single_value_collapses() {
        let stats = BoxStats::new([2.5]).unwrap();
        assert_eq!(stats.q1, 2.5);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.q3, 2.5);
        assert_eq!(stats.whisker_low, 2.5);
        assert_eq!(stats.whisker_high, 2.5);
        assert!(stats.fliers.is_empty());
    }
}
