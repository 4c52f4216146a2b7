//! Turning numeric text files into descriptive-statistics reports
//!
//! This crate sits between the pure numeric core in `descstat_stats` and the
//! command-line front end. It owns everything that touches text:
//!
//! 1. **Parsing** ([`parse`]): Split input into tokens, substitute zero for
//!    invalid tokens, and hand a diagnostic for each one to the caller
//! 2. **Per-file analysis** ([`input`]): Read one file and compute its
//!    [`StatisticsResult`](descstat_stats::descriptive::StatisticsResult),
//!    failing for that file only when it cannot be read
//! 3. **Formatting** ([`format`]): Render numbers with trimmed precision and
//!    the not-applicable markers
//! 4. **Reporting** ([`report`]): Lay out aligned per-file tables and the
//!    batch summary
//!
//! # Examples
//!
//! ```
//! use std::{path::PathBuf, time::Duration};
//!
//! use descstat_analysis::{parse::parse_sample, report::FileReport};
//! use descstat_stats::descriptive::StatisticsResult;
//!
//! let sample = parse_sample("10 20 20 30", |_| {});
//! let report = FileReport {
//!     path: PathBuf::from("data.txt"),
//!     stats: StatisticsResult::compute(sample.values()),
//!     invalid_tokens: sample.invalid_tokens(),
//!     elapsed: Duration::from_millis(5),
//! };
//!
//! let text = report.render();
//! assert!(text.starts_with("=== Descriptive Statistics (data.txt) ===\n"));
//! assert!(text.contains("Sample Variance         |   66.66667\n"));
//! ```

pub mod format;
pub mod input;
pub mod parse;
pub mod report;
