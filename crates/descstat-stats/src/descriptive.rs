use serde::Serialize;

use crate::{frequency::FrequencyTable, sort::merge_sort, sqrt::sqrt_newton};

/// Computes the arithmetic mean.
///
/// Returns `None` for an empty slice.
///
/// # Examples
///
/// ```
/// # use descstat_stats::descriptive::mean;
/// assert_eq!(mean(&[]), None);
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut total = 0.0;
    for &value in values {
        total += value;
    }
    Some(total / values.len() as f64)
}

/// Computes the median of values sorted in ascending order.
///
/// The middle element for an odd count, the average of the two middle
/// elements for an even count, and `None` for an empty slice.
///
/// # Panics
///
/// Panics in debug mode if `sorted_values` is not sorted in ascending order.
///
/// # Examples
///
/// ```
/// # use descstat_stats::descriptive::median;
/// assert_eq!(median(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
/// ```
#[must_use]
pub fn median(sorted_values: &[f64]) -> Option<f64> {
    debug_assert!(
        sorted_values.is_sorted_by(|a, b| a <= b || a.is_nan() || b.is_nan()),
        "values must be sorted in ascending order"
    );

    let n = sorted_values.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    if n % 2 == 1 {
        Some(sorted_values[mid])
    } else {
        Some((sorted_values[mid - 1] + sorted_values[mid]) / 2.0)
    }
}

/// Sum of squared deviations from `mean`.
fn sum_of_squares(values: &[f64], mean: f64) -> f64 {
    let mut total = 0.0;
    for &value in values {
        let diff = value - mean;
        total += diff * diff;
    }
    total
}

/// Population variance: squared deviations from `mean` averaged over all `n` values.
///
/// Returns `None` for an empty slice.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn population_variance(values: &[f64], mean: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(sum_of_squares(values, mean) / values.len() as f64)
}

/// Sample variance: squared deviations from `mean` divided by `n - 1`.
///
/// Returns `None` when fewer than two values are present.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn sample_variance(values: &[f64], mean: f64) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    Some(sum_of_squares(values, mean) / (values.len() - 1) as f64)
}

/// Descriptive statistics of one sample.
///
/// Every field that needs a minimum sample size is `None` when the sample is
/// too small: central tendency and population dispersion need one value,
/// sample dispersion needs two.
///
/// # Examples
///
/// ```
/// use descstat_stats::descriptive::StatisticsResult;
///
/// let stats = StatisticsResult::compute(&[10.0, 20.0, 20.0, 30.0]);
/// assert_eq!(stats.count, 4);
/// assert_eq!(stats.mean, Some(20.0));
/// assert_eq!(stats.median, Some(20.0));
/// assert_eq!(stats.modes, vec![20.0]);
/// assert_eq!(stats.population_variance, Some(50.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatisticsResult {
    /// Number of values in the sample.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: Option<f64>,
    /// Median of the sorted sample.
    pub median: Option<f64>,
    /// Most frequent values, ascending; empty when no value repeats.
    pub modes: Vec<f64>,
    /// Variance treating the sample as the whole population.
    pub population_variance: Option<f64>,
    /// Square root of [`Self::population_variance`].
    pub population_std_dev: Option<f64>,
    /// Variance with Bessel's correction.
    pub sample_variance: Option<f64>,
    /// Square root of [`Self::sample_variance`].
    pub sample_std_dev: Option<f64>,
}

impl StatisticsResult {
    /// Computes all statistics for `values`, given in input order.
    ///
    /// An empty sample short-circuits to a result with `count == 0` and
    /// everything else undefined.
    #[must_use]
    pub fn compute(values: &[f64]) -> Self {
        let Some(mean) = mean(values) else {
            return Self::default();
        };

        let sorted = merge_sort(values);
        let median = median(&sorted);
        let modes = FrequencyTable::new(values).modes();

        let population_variance = population_variance(values, mean);
        let population_std_dev = population_variance.and_then(sqrt_newton);
        let sample_variance = sample_variance(values, mean);
        let sample_std_dev = sample_variance.and_then(sqrt_newton);

        Self {
            count: values.len(),
            mean: Some(mean),
            median,
            modes,
            population_variance,
            population_std_dev,
            sample_variance,
            sample_std_dev,
        }
    }
}
