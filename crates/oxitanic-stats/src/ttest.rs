//! Welch's two-sample t-test.
//!
//! The statistic compares two group means without assuming equal variances;
//! degrees of freedom follow the Welch-Satterthwaite approximation. The
//! two-sided p-value comes from the Student-t survival function, computed
//! via the regularized incomplete beta function (continued fraction,
//! Lentz's algorithm) and the Lanczos log-gamma approximation.

/// The outcome of a Welch two-sample t-test.
#[derive(Debug, Clone, Copy)]
pub struct WelchTTest {
    /// The t statistic, signed as `mean_a - mean_b`.
    pub t: f64,
    /// The Welch-Satterthwaite degrees of freedom.
    pub df: f64,
    /// The two-sided p-value in `0.0..=1.0`.
    pub p_value: f64,
}

/// Runs Welch's t-test on two groups of observations.
///
/// # Arguments
///
/// * `group_a`, `group_b` - The two samples; order only affects the sign
///   of `t`
///
/// # Returns
///
/// * `Some(WelchTTest)` - when both groups have at least two values and
///   the pooled standard error is nonzero
/// * `None` - otherwise; the statistic is undefined
///
/// # Examples
///
/// ```
/// use oxitanic_stats::ttest::welch_ttest;
///
/// let a = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let b = [2.0, 4.0, 6.0, 8.0, 10.0];
/// let test = welch_ttest(&a, &b).unwrap();
/// assert!((test.t - -1.897_366_596_101_027_5).abs() < 1e-12);
/// assert!((test.df - 5.882_352_941_176_471).abs() < 1e-12);
/// assert!((test.p_value - 0.107_531_194_9).abs() < 1e-6);
/// ```
#[must_use]
pub fn welch_ttest(group_a: &[f64], group_b: &[f64]) -> Option<WelchTTest> {
    let (n1, mean1, var1) = moments(group_a)?;
    let (n2, mean2, var2) = moments(group_b)?;

    let se1 = var1 / n1;
    let se2 = var2 / n2;
    let pooled = se1 + se2;
    if pooled == 0.0 {
        return None;
    }

    let t = (mean1 - mean2) / pooled.sqrt();
    let df = pooled * pooled / (se1 * se1 / (n1 - 1.0) + se2 * se2 / (n2 - 1.0));
    let p_value = (2.0 * student_t_sf(t.abs(), df)).min(1.0);
    Some(WelchTTest { t, df, p_value })
}

/// Sample count, mean, and variance (one delta degree of freedom).
#[expect(clippy::cast_precision_loss)]
fn moments(values: &[f64]) -> Option<(f64, f64, f64)> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Some((n, mean, var))
}

/// The Student-t survival function `P(T > t)` for `df` degrees of freedom.
///
/// # Panics
///
/// Panics if `df` is not strictly positive.
///
/// # Examples
///
/// ```
/// use oxitanic_stats::ttest::student_t_sf;
///
/// // With one degree of freedom the distribution is Cauchy.
/// assert!((student_t_sf(1.0, 1.0) - 0.25).abs() < 1e-10);
/// assert!((student_t_sf(0.0, 7.0) - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn student_t_sf(t: f64, df: f64) -> f64 {
    assert!(df > 0.0, "degrees of freedom must be positive");

    let x = df / (df + t * t);
    let tail = 0.5 * regularized_incomplete_beta(0.5 * df, 0.5, x);
    if t >= 0.0 { tail } else { 1.0 - tail }
}

const LOG_2PI: f64 = 1.837_877_066_409_345_3;
const LANCZOS_G: f64 = 7.0;
const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_7e-7,
];

/// Natural log of the gamma function, Lanczos approximation.
#[expect(clippy::cast_precision_loss)]
fn ln_gamma(x: f64) -> f64 {
    if x < 0.5 {
        // Reflection onto the right half plane.
        let pi = std::f64::consts::PI;
        return pi.ln() - (pi * x).sin().ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let mut acc = LANCZOS_COEFFICIENTS[0];
    for (index, &coefficient) in LANCZOS_COEFFICIENTS.iter().enumerate().skip(1) {
        acc += coefficient / (x + index as f64);
    }
    let t = x + LANCZOS_G + 0.5;
    0.5 * LOG_2PI + (x + 0.5) * t.ln() - t + acc.ln()
}

/// The regularized incomplete beta function `I_x(a, b)`.
fn regularized_incomplete_beta(a: f64, b: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let ln_front = ln_gamma(a + b) - ln_gamma(a) - ln_gamma(b) + a * x.ln() + b * (1.0 - x).ln();
    let front = ln_front.exp();
    // The continued fraction converges fast only below the crossover point;
    // above it, evaluate the complement.
    if x < (a + 1.0) / (a + b + 2.0) {
        front * beta_continued_fraction(a, b, x) / a
    } else {
        1.0 - front * beta_continued_fraction(b, a, 1.0 - x) / b
    }
}

/// Continued-fraction kernel of the incomplete beta, Lentz's algorithm.
#[expect(clippy::many_single_char_names)]
fn beta_continued_fraction(a: f64, b: f64, x: f64) -> f64 {
    const MAX_ITERATIONS: usize = 200;
    const EPSILON: f64 = 1e-14;
    const TINY: f64 = 1e-300;

    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;

    let mut c = 1.0;
    let mut d = 1.0 - qab * x / qap;
    if d.abs() < TINY {
        d = TINY;
    }
    d = 1.0 / d;
    let mut h = d;

    for m in 1..=MAX_ITERATIONS {
        #[expect(clippy::cast_precision_loss)]
        let m = m as f64;
        let m2 = 2.0 * m;

        let numerator = m * (b - m) * x / ((qam + m2) * (a + m2));
        d = 1.0 + numerator * d;
        if d.abs() < TINY {
            d = TINY;
        }
        c = 1.0 + numerator / c;
        if c.abs() < TINY {
            c = TINY;
        }
        d = 1.0 / d;
        h *= d * c;

        let numerator = -(a + m) * (qab + m) * x / ((a + m2) * (qap + m2));
        d = 1.0 + numerator * d;
        if d.abs() < TINY {
            d = TINY;
        }
        c = 1.0 + numerator / c;
        if c.abs() < TINY {
            c = TINY;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < EPSILON {
            break;
        }
    }
    h
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
    fn test_ln_gamma_known_values() {
        assert_close(ln_gamma(1.0), 0.0, 1e-10);
        assert_close(ln_gamma(2.0), 0.0, 1e-10);
        assert_close(ln_gamma(5.0), 24.0_f64.ln(), 1e-10);
        // Gamma(1/2) = sqrt(pi).
        assert_close(ln_gamma(0.5), 0.5 * std::f64::consts::PI.ln(), 1e-10);
    }

    #[test]
    fn test_incomplete_beta_identities() {
        // I_x(1, 1) = x.
        assert_close(regularized_incomplete_beta(1.0, 1.0, 0.3), 0.3, 1e-12);
        // Midpoint symmetry for equal shapes.
        assert_close(regularized_incomplete_beta(0.5, 0.5, 0.5), 0.5, 1e-12);
        // Complement identity.
        let direct = regularized_incomplete_beta(2.0, 3.0, 0.4);
        let complement = regularized_incomplete_beta(3.0, 2.0, 0.6);
        assert_close(direct + complement, 1.0, 1e-12);
        // Saturation at the limits.
        assert_eq!(regularized_incomplete_beta(2.0, 3.0, 0.0), 0.0);
        assert_eq!(regularized_incomplete_beta(2.0, 3.0, 1.0), 1.0);
    }

    #[test]
    fn test_student_t_sf_cauchy_case() {
        assert_close(student_t_sf(1.0, 1.0), 0.25, 1e-12);
        assert_close(student_t_sf(-1.0, 1.0), 0.75, 1e-12);
    }

    #[test]
    fn test_student_t_sf_two_degrees() {
        // P(T > sqrt(2)) with df = 2 is (1 - 1/sqrt(2)) / 2.
        let expected = (1.0 - 1.0 / 2.0_f64.sqrt()) / 2.0;
        assert_close(student_t_sf(2.0_f64.sqrt(), 2.0), expected, 1e-12);
    }

    #[test]
    fn test_student_t_sf_approaches_normal() {
        // For huge df the tail matches the standard normal.
        assert_close(student_t_sf(1.96, 1_000_000.0), 0.025, 2e-4);
    }

    #[test]
    fn test_welch_known_vector() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 4.0, 6.0, 8.0, 10.0];
        let test = welch_ttest(&a, &b).unwrap();
        assert_close(test.t, -1.897_366_596_101_027_5, 1e-12);
        assert_close(test.df, 5.882_352_941_176_471, 1e-12);
        assert_close(test.p_value, 0.107_531_194_928_844_9, 1e-6);
    }

    #[test]
    fn test_identical_groups_yield_p_one() {
        let a = [1.0, 2.0, 3.0];
        let test = welch_ttest(&a, &a).unwrap();
        assert_eq!(test.t, 0.0);
        assert_eq!(test.p_value, 1.0);
    }

    #[test]
    fn test_p_value_stays_in_unit_interval() {
        let a = [1.0, 1.1, 0.9, 1.05];
        let b = [100.0, 101.0, 99.0, 100.5];
        let test = welch_ttest(&a, &b).unwrap();
        assert!(test.p_value.is_finite());
        assert!((0.0..=1.0).contains(&test.p_value));
        assert!(test.p_value < 1e-6);
    }

    #[test]
    fn test_undersized_group_is_undefined() {
        assert!(welch_ttest(&[1.0], &[1.0, 2.0]).is_none());
        assert!(welch_ttest(&[], &[1.0, 2.0]).is_none());
    }

    #[test]
    fn test_zero_pooled_variance_is_undefined() {
        assert!(welch_ttest(&[2.0, 2.0], &[3.0, 3.0]).is_none());
    }

    #[test]
    fn test_one_constant_group_is_defined() {
        let test = welch_ttest(&[5.0, 5.0], &[1.0, 2.0, 3.0]).unwrap();
        assert!(test.t > 0.0);
        assert!(test.p_value.is_finite());
    }
}
