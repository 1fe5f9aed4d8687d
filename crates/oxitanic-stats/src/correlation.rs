//! Pearson correlation over columns with absent values.
//!
//! Coefficients are computed from pairwise-complete observations: for each
//! pair of columns, only the rows where both values are present enter the
//! computation. A coefficient is undefined (`None`) when fewer than two
//! complete pairs remain or when either side is constant over the complete
//! pairs.

/// Computes the Pearson correlation coefficient of two columns.
///
/// Rows where either value is absent are skipped. The result is clamped to
/// `-1.0..=1.0` to absorb floating-point drift on perfectly linear data.
///
/// # Arguments
///
/// * `x`, `y` - Columns of equal length with absent values as `None`
///
/// # Returns
///
/// * `Some(r)` - the coefficient over the complete pairs
/// * `None` - if fewer than two complete pairs exist, or either side is
///   constant over them
///
/// # Panics
///
/// Panics if the columns differ in length.
///
/// # Examples
///
/// ```
/// use oxitanic_stats::correlation::pearson;
///
/// let x = [Some(1.0), Some(2.0), None, Some(3.0)];
/// let y = [Some(2.0), Some(4.0), Some(9.0), Some(6.0)];
/// let r = pearson(&x, &y).unwrap();
/// assert!((r - 1.0).abs() < 1e-12);
///
/// let constant = [Some(5.0), Some(5.0), Some(5.0), Some(5.0)];
/// assert_eq!(pearson(&x, &constant), None);
/// ```
#[must_use]
pub fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> Option<f64> {
    assert_eq!(x.len(), y.len(), "columns must have equal length");

    let pairs = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .collect::<Vec<_>>();
    if pairs.len() < 2 {
        return None;
    }

    #[expect(clippy::cast_precision_loss)]
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (xi, yi) in &pairs {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some((cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0))
}

/// Computes the full correlation matrix of the given columns.
///
/// The matrix is symmetric; entry `[i][j]` is `pearson(columns[i],
/// columns[j])`. Diagonal entries are `Some(1.0)` except for constant or
/// near-empty columns, where the coefficient is undefined.
///
/// # Panics
///
/// Panics if the columns differ in length.
#[must_use]
pub fn correlation_matrix(columns: &[Vec<Option<f64>>]) -> Vec<Vec<Option<f64>>> {
    let n = columns.len();
    let mut matrix = vec![vec![None; n]; n];
    for i in 0..n {
        for j in i..n {
            let r = pearson(&columns[i], &columns[j]);
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }
    matrix
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
    fn test_perfect_positive_and_negative() {
        let x = [Some(1.0), Some(2.0), Some(3.0)];
        let up = [Some(2.0), Some(4.0), Some(6.0)];
        let down = [Some(6.0), Some(4.0), Some(2.0)];
        assert_close(pearson(&x, &up).unwrap(), 1.0, 1e-12);
        assert_close(pearson(&x, &down).unwrap(), -1.0, 1e-12);
    }

    #[test]
    fn test_uncorrelated_symmetric_data() {
        let x = [Some(-1.0), Some(0.0), Some(1.0)];
        let y = [Some(1.0), Some(0.0), Some(1.0)];
        assert_close(pearson(&x, &y).unwrap(), 0.0, 1e-12);
    }

    #[test]
    fn test_pairwise_deletion() {
        // Only rows 0 and 3 are complete; they line up perfectly.
        let x = [Some(1.0), Some(2.0), None, Some(3.0)];
        let y = [Some(10.0), None, Some(0.0), Some(30.0)];
        assert_close(pearson(&x, &y).unwrap(), 1.0, 1e-12);
    }

    #[test]
    fn test_too_few_pairs_is_undefined() {
        let x = [Some(1.0), None, Some(3.0)];
        let y = [None, Some(2.0), Some(4.0)];
        assert_eq!(pearson(&x, &y), None);
    }

    #[test]
    fn test_constant_column_is_undefined() {
        let x = [Some(1.0), Some(2.0), Some(3.0)];
        let y = [Some(7.0), Some(7.0), Some(7.0)];
        assert_eq!(pearson(&x, &y), None);
        assert_eq!(pearson(&y, &y), None);
    }

    #[test]
    fn test_matrix_is_symmetric_with_unit_diagonal() {
        let columns = vec![
            vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)],
            vec![Some(4.0), Some(3.0), Some(2.0), Some(1.0)],
            vec![Some(1.0), Some(1.0), Some(1.0), Some(1.0)],
        ];
        let matrix = correlation_matrix(&columns);
        assert_close(matrix[0][0].unwrap(), 1.0, 1e-12);
        assert_close(matrix[0][1].unwrap(), -1.0, 1e-12);
        assert_eq!(matrix[0][1], matrix[1][0]);
        // The constant column is undefined everywhere, including its diagonal.
        assert_eq!(matrix[2][2], None);
        assert_eq!(matrix[0][2], None);
    }
}
