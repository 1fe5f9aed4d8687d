/// The three quartiles of a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    /// The first quartile (25th percentile).
    pub q1: f64,
    /// The median (50th percentile).
    pub median: f64,
    /// The third quartile (75th percentile).
    pub q3: f64,
}

impl Quartiles {
    /// The interquartile range, `q3 - q1`.
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Computes a single quantile from sorted data by linear interpolation.
///
/// Uses the type-7 definition (the default of mainstream dataframe
/// libraries): for `n` sorted values and quantile `q`, the result sits at
/// fractional position `(n - 1) * q` and is interpolated linearly between
/// the two neighboring order statistics.
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
/// * `q` - The quantile to compute, in `0.0..=1.0`
///
/// # Returns
///
/// * `Some(value)` - if the dataset contains at least one value
/// * `None` - if the dataset is empty
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order or `q` is
/// outside `0.0..=1.0`.
///
/// # Examples
///
/// ```
/// use oxitanic_stats::quantile::quantile_sorted;
///
/// let mut values = vec![4.0, 1.0, 3.0, 2.0];
/// values.sort_by(f64::total_cmp);
///
/// assert_eq!(quantile_sorted(&values, 0.25), Some(1.75));
/// assert_eq!(quantile_sorted(&values, 0.5), Some(2.5));
/// assert_eq!(quantile_sorted(&values, 0.75), Some(3.25));
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn quantile_sorted(sorted_values: &[f64], q: f64) -> Option<f64> {
    assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );
    assert!((0.0..=1.0).contains(&q), "quantile must be in 0.0..=1.0");

    if sorted_values.is_empty() {
        return None;
    }

    let h = (sorted_values.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted_values.len() - 1);
    let frac = h - h.floor();
    Some(sorted_values[lo] + frac * (sorted_values[hi] - sorted_values[lo]))
}

/// Computes the first quartile, median, and third quartile of sorted data.
///
/// # Returns
///
/// * `Some(Quartiles)` - if the dataset contains at least one value
/// * `None` - if the dataset is empty
///
/// # Examples
///
/// ```
/// use oxitanic_stats::quantile::quartiles_sorted;
///
/// let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let q = quartiles_sorted(&values).unwrap();
/// assert_eq!(q.q1, 2.0);
/// assert_eq!(q.median, 3.0);
/// assert_eq!(q.q3, 4.0);
/// assert_eq!(q.iqr(), 2.0);
/// ```
#[must_use]
pub fn quartiles_sorted(sorted_values: &[f64]) -> Option<Quartiles> {
    Some(Quartiles {
        q1: quantile_sorted(sorted_values, 0.25)?,
        median: quantile_sorted(sorted_values, 0.5)?,
        q3: quantile_sorted(sorted_values, 0.75)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(quantile_sorted(&[], 0.5), None);
        assert_eq!(quartiles_sorted(&[]), None);
    }

    #[test]
    fn test_single_value() {
        let values = [42.0];
        assert_eq!(quantile_sorted(&values, 0.0), Some(42.0));
        assert_eq!(quantile_sorted(&values, 0.5), Some(42.0));
        assert_eq!(quantile_sorted(&values, 1.0), Some(42.0));
    }

    #[test]
    fn test_endpoints_are_extremes() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile_sorted(&values, 0.0), Some(1.0));
        assert_eq!(quantile_sorted(&values, 1.0), Some(5.0));
    }

    #[test]
    fn test_interpolated_quartiles() {
        // Positions fall between order statistics for n = 4.
        let values = [1.0, 2.0, 3.0, 4.0];
        let q = quartiles_sorted(&values).unwrap();
        assert_eq!(q.q1, 1.75);
        assert_eq!(q.median, 2.5);
        assert_eq!(q.q3, 3.25);
    }

    #[test]
    fn test_odd_length_quartiles_on_data_points() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let q = quartiles_sorted(&values).unwrap();
        assert_eq!(q.q1, 2.0);
        assert_eq!(q.median, 3.0);
        assert_eq!(q.q3, 4.0);
    }

    #[test]
    fn test_repeated_values() {
        let values = [2.0, 2.0, 2.0, 2.0];
        let q = quartiles_sorted(&values).unwrap();
        assert_eq!(q.q1, 2.0);
        assert_eq!(q.iqr(), 0.0);
    }

    #[test]
    #[should_panic(expected = "sorted in ascending order")]
    fn test_unsorted_input_panics() {
        let _ = quantile_sorted(&[3.0, 1.0, 2.0], 0.5);
    }
}
