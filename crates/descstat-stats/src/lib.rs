//! Descriptive statistics computed from first principles.
//!
//! This crate provides the numeric core of `descstat`:
//!
//! - **Sorting**: a stable top-down merge sort that never mutates its input
//! - **Square roots**: Newton-Raphson iteration with a bounded step count
//! - **Frequencies**: exact-equality occurrence counts and mode extraction
//! - **Descriptive statistics**: count, mean, median, modes, and population
//!   and sample variance / standard deviation
//!
//! No I/O happens here. Statistics that need a minimum sample size are
//! reported as `None` rather than as errors or `NaN`.
//!
//! # Modules
//!
//! - [`sort`]: Merge sort
//! - [`sqrt`]: Newton's-method square root
//! - [`frequency`]: Frequency table and modes
//! - [`descriptive`]: Central tendency, dispersion, and [`descriptive::StatisticsResult`]
//!
//! # Examples
//!
//! ## Computing every statistic at once
//!
//! ```
//! use descstat_stats::descriptive::StatisticsResult;
//!
//! let stats = StatisticsResult::compute(&[1.0, 1.0, 2.0, 2.0, 3.0]);
//! assert_eq!(stats.count, 5);
//! assert_eq!(stats.median, Some(2.0));
//! assert_eq!(stats.modes, vec![1.0, 2.0]);
//! ```
//!
//! ## Undefined statistics
//!
//! ```
//! use descstat_stats::descriptive::StatisticsResult;
//!
//! let stats = StatisticsResult::compute(&[7.0]);
//! assert_eq!(stats.mean, Some(7.0));
//! assert_eq!(stats.sample_variance, None);
//! assert_eq!(stats.sample_std_dev, None);
//! ```

pub mod descriptive;
pub mod frequency;
pub mod sort;
pub mod sqrt;
