use crate::quantile::quartiles_sorted;

/// Outlier fences derived from the interquartile range.
///
/// The fences sit 1.5 interquartile ranges beyond the first and third
/// quartiles; values strictly outside them count as outliers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierBounds {
    /// `Q1 - 1.5 * IQR`.
    pub lower: f64,
    /// `Q3 + 1.5 * IQR`.
    pub upper: f64,
}

impl OutlierBounds {
    /// Whether `value` lies strictly outside the fences.
    ///
    /// `NaN` compares outside neither fence and is never an outlier.
    #[must_use]
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Computes IQR outlier fences from sorted data.
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
///
/// # Returns
///
/// * `Some(OutlierBounds)` - if the dataset contains at least one value
/// * `None` - if the dataset is empty
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order.
///
/// # Examples
///
/// ```
/// use oxitanic_stats::outlier::iqr_bounds;
///
/// let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let bounds = iqr_bounds(&values).unwrap();
/// assert_eq!(bounds.lower, -1.0);
/// assert_eq!(bounds.upper, 7.0);
/// ```
#[must_use]
pub fn iqr_bounds(sorted_values: &[f64]) -> Option<OutlierBounds> {
    let quartiles = quartiles_sorted(sorted_values)?;
    let fence = 1.5 * quartiles.iqr();
    Some(OutlierBounds {
        lower: quartiles.q1 - fence,
        upper: quartiles.q3 + fence,
    })
}

/// Counts the values strictly outside the given fences.
///
/// # Examples
///
/// ```
/// use oxitanic_stats::outlier::{count_outliers, iqr_bounds};
///
/// let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let bounds = iqr_bounds(&values).unwrap();
/// assert_eq!(count_outliers([-2.0, 3.0, 8.0], &bounds), 2);
/// ```
#[must_use]
pub fn count_outliers<I>(values: I, bounds: &OutlierBounds) -> usize
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|&v| bounds.is_outlier(v))
        .count()
}
