//! Gaussian kernel density estimation.
//!
//! Produces the smooth density curves drawn over histograms and on the
//! diagonal of the pairwise grid. The bandwidth follows Scott's rule,
//! `s * n^(-1/5)` with `s` the sample standard deviation, which matches
//! what the mainstream plotting stacks do by default.

/// A kernel density estimate evaluated on a fixed grid.
#[derive(Debug, Clone)]
pub struct KdeCurve {
    /// The kernel bandwidth that produced the curve.
    pub bandwidth: f64,
    /// `(x, density)` pairs, ascending in `x`.
    pub points: Vec<(f64, f64)>,
}

impl KdeCurve {
    /// The maximum density value on the grid.
    #[must_use]
    pub fn peak(&self) -> f64 {
        self.points.iter().map(|(_, d)| *d).fold(0.0, f64::max)
    }
}

/// Estimates the density of `values` with a Gaussian kernel.
///
/// The curve is evaluated on `grid_size` evenly spaced points spanning the
/// data range extended by three bandwidths on each side, so the tails decay
/// visibly to zero.
///
/// # Arguments
///
/// * `values` - The observations; order does not matter
/// * `grid_size` - Number of evaluation points (at least 2)
///
/// # Returns
///
/// * `Some(KdeCurve)` - for at least two values with nonzero spread
/// * `None` - for fewer than two values or zero-variance data, where the
///   bandwidth degenerates
///
/// # Panics
///
/// Panics if `grid_size < 2`.
///
/// # Examples
///
/// ```
/// use oxitanic_stats::kde::gaussian_kde;
///
/// let curve = gaussian_kde(&[1.0, 2.0, 3.0], 200).unwrap();
/// assert_eq!(curve.points.len(), 200);
/// assert!(curve.points.iter().all(|&(_, d)| d >= 0.0));
///
/// assert!(gaussian_kde(&[5.0, 5.0, 5.0], 200).is_none());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn gaussian_kde(values: &[f64], grid_size: usize) -> Option<KdeCurve> {
    assert!(grid_size >= 2, "grid must have at least two points");

    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    if variance == 0.0 {
        return None;
    }
    let bandwidth = variance.sqrt() * n.powf(-0.2);

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let lo = min - 3.0 * bandwidth;
    let hi = max + 3.0 * bandwidth;
    let step = (hi - lo) / (grid_size - 1) as f64;

    let norm = 1.0 / (n * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    let points = (0..grid_size)
        .map(|i| {
            let x = lo + step * i as f64;
            let density = values
                .iter()
                .map(|&v| {
                    let z = (x - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm;
            (x, density)
        })
        .collect();

    Some(KdeCurve { bandwidth, points })
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
    fn test_too_few_values() {
        assert!(gaussian_kde(&[], 100).is_none());
        assert!(gaussian_kde(&[1.0], 100).is_none());
    }

    #[test]
    fn test_scott_bandwidth() {
        // Sample std of [1, 2, 3] is 1, so the bandwidth is 3^(-1/5).
        let curve = gaussian_kde(&[1.0, 2.0, 3.0], 50).unwrap();
        assert_close(curve.bandwidth, 0.802_741_561_760_230_7, 1e-12);
    }

    #[test]
    fn test_density_values_on_known_grid() {
        let curve = gaussian_kde(&[1.0, 2.0, 3.0], 200).unwrap();
        let at = |x: f64| {
            curve
                .points
                .iter()
                .min_by(|(a, _), (b, _)| (a - x).abs().total_cmp(&(b - x).abs()))
                .map(|(_, d)| *d)
                .unwrap()
        };
        // Evaluated off-grid, so compare loosely against the exact kernel sums.
        assert_close(at(2.0), 0.318_156_220_926_401_45, 1e-2);
        assert_close(at(1.0), 0.249_342_510_590_570_14, 1e-2);
        assert!(at(2.0) > at(1.0));
    }

    #[test]
    fn test_integrates_to_one() {
        let curve = gaussian_kde(&[2.0, 4.0, 4.5, 5.0, 7.0, 9.0], 400).unwrap();
        let mut integral = 0.0;
        for pair in curve.points.windows(2) {
            let (x0, d0) = pair[0];
            let (x1, d1) = pair[1];
            integral += (x1 - x0) * (d0 + d1) / 2.0;
        }
        assert_close(integral, 1.0, 0.02);
    }

    #[test]
    fn test_symmetric_data_peaks_at_center() {
        let curve = gaussian_kde(&[-2.0, -1.0, 0.0, 1.0, 2.0], 401).unwrap();
        let peak = curve.peak();
        let center = curve
            .points
            .iter()
            .find(|&&(_, d)| (d - peak).abs() < f64::EPSILON)
            .map(|(x, _)| *x)
            .unwrap();
        assert_close(center, 0.0, 0.05);
    }

    #[test]
    fn test_constant_data_is_degenerate() {
        assert!(gaussian_kde(&[7.0; 10], 100).is_none());
    }
}
