//! Statistical routines for the Oxitanic report suite.
//!
//! This crate provides the numerics behind the generated charts and text
//! summaries:
//!
//! - **Descriptive statistics**: count, mean, sample standard deviation,
//!   minimum, quartiles, and maximum in one pass
//! - **Quantiles**: linear-interpolation (type 7) quantiles and quartiles
//! - **Outlier fences**: interquartile-range bounds and strict-outside counts
//! - **Box-plot geometry**: quartile boxes, clamped whiskers, flier points
//! - **Histograms**: equal-width binning over a closed value range
//! - **Correlation**: pairwise-complete Pearson coefficients and matrices
//! - **Welch's t-test**: unequal-variance mean comparison with exact
//!   Student-t tail probabilities
//! - **Kernel density estimation**: Gaussian KDE with Scott's bandwidth
//!
//! Statistics that are mathematically undefined on their input (empty data,
//! zero variance, too few complete pairs) return `None` rather than an
//! error or a silent sentinel.
//!
//! # Modules
//!
//! - [`descriptive`]: Describe-style summaries of a dataset
//! - [`quantile`]: Quantile and quartile computation
//! - [`outlier`]: IQR outlier fences and counts
//! - [`boxstats`]: Box-and-whisker geometry
//! - [`histogram`]: Equal-width histogram binning
//! - [`correlation`]: Pearson correlation with absent values
//! - [`ttest`]: Welch's two-sample t-test
//! - [`kde`]: Gaussian kernel density estimation
//!
//! # Examples
//!
//! ## Summarizing a column
//!
//! ```
//! use oxitanic_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.q3, 4.0);
//! ```
//!
//! ## Flagging outliers
//!
//! ```
//! use oxitanic_stats::outlier::{count_outliers, iqr_bounds};
//!
//! let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let bounds = iqr_bounds(&values).unwrap();
//! assert_eq!(count_outliers([12.0, 3.0], &bounds), 1);
//! ```
//!
//! ## Comparing group means
//!
//! ```
//! use oxitanic_stats::ttest::welch_ttest;
//!
//! let survivors = [28.0, 19.0, 35.0, 24.0];
//! let casualties = [40.0, 31.0, 45.0, 36.0];
//! let test = welch_ttest(&survivors, &casualties).unwrap();
//! assert!(test.t < 0.0);
//! assert!(test.p_value > 0.0 && test.p_value <= 1.0);
//! ```

pub mod boxstats;
pub mod correlation;
pub mod descriptive;
pub mod histogram;
pub mod kde;
pub mod outlier;
pub mod quantile;
pub mod ttest;
