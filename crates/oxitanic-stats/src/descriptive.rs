use crate::quantile::quartiles_sorted;

/// Descriptive statistics summarizing a dataset.
///
/// This structure contains the eight measures reported by a classic
/// describe-style summary: count, mean, sample standard deviation, the
/// minimum, the three quartiles, and the maximum.
#[derive(Debug, Clone)]
pub struct DescriptiveStats {
    /// The number of values in the dataset.
    pub count: usize,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The sample standard deviation (one delta degree of freedom).
    /// `None` when the dataset has fewer than two values.
    pub std: Option<f64>,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The first quartile (25th percentile).
    pub q1: f64,
    /// The median value of the dataset.
    pub median: f64,
    /// The third quartile (75th percentile).
    pub q3: f64,
    /// The maximum value in the dataset.
    pub max: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// This method will sort the values internally before computing statistics.
    ///
    /// # Arguments
    ///
    /// * `values` - An iterator over `f64` values. The values will be collected and sorted internally.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use oxitanic_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.count, 5);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.q1, 2.0);
    /// assert_eq!(stats.median, 3.0);
    /// assert_eq!(stats.q3, 4.0);
    /// assert_eq!(stats.max, 5.0);
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

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// # Arguments
    ///
    /// * `sorted_values` - Values sorted in ascending order
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let std = (count >= 2).then(|| {
            let ss = sorted_values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
            (ss / (n - 1.0)).sqrt()
        });
        let quartiles = quartiles_sorted(sorted_values)?;

        Some(Self {
            count,
            mean,
            std,
            min,
            q1: quartiles.q1,
            median: quartiles.median,
            q3: quartiles.q3,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "actual={actual}, expected={expected}"
        );
    }

    #[test]
    fn test_empty_dataset() {
        assert!(DescriptiveStats::new([]).is_none());
    }

    #[test]
    fn test_single_value_has_no_std() {
        let stats = DescriptiveStats::new([7.5]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, 7.5);
        assert_eq!(stats.std, None);
        assert_eq!(stats.min, 7.5);
        assert_eq!(stats.max, 7.5);
    }

    #[test]
    fn test_sample_standard_deviation() {
        // Sample variance of 1..=5 is 2.5.
        let stats = DescriptiveStats::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_close(stats.std.unwrap(), 2.5_f64.sqrt(), 1e-12);
    }

    #[test]
    fn test_unsorted_input_is_sorted_internally() {
        let stats = DescriptiveStats::new([9.0, 1.0, 5.0]).unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.median, 5.0);
        assert_eq!(stats.max, 9.0);
    }

    #[test]
    fn test_quartiles_interpolate() {
        let stats = DescriptiveStats::new([1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(stats.q1, 1.75);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.q3, 3.25);
    }
}
