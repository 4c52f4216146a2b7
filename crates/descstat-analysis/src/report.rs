//! Aligned text report
//!
//! Each successfully read file becomes one section:
//!
//! ```text
//! === Descriptive Statistics (basic.txt) ===
//!
//! Metric                  |      Value
//! ------------------------+-----------
//! Count                   |          4
//! Mean                    |         20
//! ...
//! Sample Std Dev          |   8.164966
//! Sample Variance         |   66.66667
//! Elapsed Time (seconds)  |        0.5
//! ```
//!
//! Labels are left-justified and values right-justified; both columns are as
//! wide as their widest cell, header included. A batch of sections is closed
//! by a short summary footer.

use std::{path::PathBuf, time::Duration};

use descstat_stats::descriptive::StatisticsResult;

use crate::format::{format_modes, format_number, format_optional};

const HEADER_LABEL: &str = "Metric";
const HEADER_VALUE: &str = "Value";
const SEPARATOR: &str = "  |  ";
const RULE_SEPARATOR: &str = "--+--";

/// Statistics of one input file together with how long they took.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    /// Path as given by the caller.
    pub path: PathBuf,
    pub stats: StatisticsResult,
    /// Number of tokens replaced by zero.
    pub invalid_tokens: usize,
    /// Time spent reading, parsing, and computing.
    pub elapsed: Duration,
}

impl FileReport {
    /// Returns the labeled rows shown for this file, in display order.
    #[must_use]
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        statistics_rows(&self.stats, self.elapsed)
    }

    /// Renders this file's section of the report.
    #[must_use]
    pub fn render(&self) -> String {
        render_section(&self.path.display().to_string(), &self.rows())
    }
}

/// Builds the labeled value rows for `stats`.
#[must_use]
pub fn statistics_rows(stats: &StatisticsResult, elapsed: Duration) -> Vec<(&'static str, String)> {
    vec![
        ("Count", stats.count.to_string()),
        ("Mean", format_optional(stats.mean, 7)),
        ("Median", format_optional(stats.median, 7)),
        ("Mode", format_modes(&stats.modes, 6)),
        ("Population Std Dev", format_optional(stats.population_std_dev, 7)),
        ("Population Variance", format_optional(stats.population_variance, 6)),
        ("Sample Std Dev", format_optional(stats.sample_std_dev, 6)),
        ("Sample Variance", format_optional(stats.sample_variance, 5)),
        ("Elapsed Time (seconds)", format_number(elapsed.as_secs_f64(), 7)),
    ]
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{s:<width$}")
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{s:>width$}")
}

/// Renders a titled, two-column table of `(label, value)` rows.
///
/// Every line of the returned text, the last one included, ends with `\n`.
#[must_use]
pub fn render_section<L, V>(title: &str, rows: &[(L, V)]) -> String
where
    L: AsRef<str>,
    V: AsRef<str>,
{
    let mut label_width = HEADER_LABEL.chars().count();
    let mut value_width = HEADER_VALUE.chars().count();
    for (label, value) in rows {
        label_width = label_width.max(label.as_ref().chars().count());
        value_width = value_width.max(value.as_ref().chars().count());
    }

    let table_line = |label: &str, value: &str| {
        format!(
            "{}{SEPARATOR}{}",
            pad_right(label, label_width),
            pad_left(value, value_width)
        )
    };

    let mut lines = vec![
        format!("=== Descriptive Statistics ({title}) ==="),
        String::new(),
        table_line(HEADER_LABEL, HEADER_VALUE),
        format!(
            "{}{RULE_SEPARATOR}{}",
            "-".repeat(label_width),
            "-".repeat(value_width)
        ),
    ];
    lines.extend(
        rows.iter()
            .map(|(label, value)| table_line(label.as_ref(), value.as_ref())),
    );
    lines.push(String::new());
    lines.join("\n")
}

/// All sections of one run plus the batch footer.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    files: Vec<FileReport>,
}

impl BatchReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a file's result; sections keep insertion order.
    pub fn push(&mut self, report: FileReport) {
        self.files.push(report);
    }

    #[must_use]
    pub fn files(&self) -> &[FileReport] {
        &self.files
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Renders every section followed by the summary footer.
    ///
    /// `total_elapsed` is the wall time of the whole batch.
    #[must_use]
    pub fn render(&self, total_elapsed: Duration) -> String {
        let sections = self
            .files
            .iter()
            .map(FileReport::render)
            .collect::<Vec<_>>();

        let footer = format!(
            "=== Batch Summary ===\nFiles processed: {}\nTotal elapsed time (seconds): {:.6}\n",
            self.files.len(),
            total_elapsed.as_secs_f64()
        );
        sections.join("\n") + "\n" + &footer
    }
}
