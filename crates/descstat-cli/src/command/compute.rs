use std::{
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use descstat_analysis::{
    input::analyze_file,
    report::{BatchReport, FileReport},
};
use descstat_stats::descriptive::StatisticsResult;

use crate::util::Output;

const DEFAULT_OUTPUT: &str = "results/StatisticsResults.txt";

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ComputeArg {
    /// Input files, processed in the order given
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Path of the combined text report
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Also write a JSON summary of every processed file
    #[arg(long)]
    json: Option<PathBuf>,
    /// Do not echo the report to stdout
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, serde::Serialize)]
struct FileSummary<'a> {
    path: &'a Path,
    #[serde(flatten)]
    stats: &'a StatisticsResult,
    invalid_tokens: usize,
    elapsed_seconds: f64,
}

impl<'a> From<&'a FileReport> for FileSummary<'a> {
    fn from(report: &'a FileReport) -> Self {
        Self {
            path: &report.path,
            stats: &report.stats,
            invalid_tokens: report.invalid_tokens,
            elapsed_seconds: report.elapsed.as_secs_f64(),
        }
    }
}

pub(crate) fn run(arg: &ComputeArg) -> anyhow::Result<ExitCode> {
    let ComputeArg {
        files,
        output,
        json,
        quiet,
    } = arg;

    let batch_start = Instant::now();
    let mut batch = BatchReport::new();
    let mut num_failed = 0;

    for path in files {
        match analyze_file(path, |diag| eprintln!("[ERROR] {diag}")) {
            Ok(report) => batch.push(report),
            Err(err) => {
                eprintln!("[FATAL] {err}");
                num_failed += 1;
            }
        }
    }

    if batch.is_empty() {
        eprintln!("[ERROR] No valid inputs were processed.");
        return Ok(ExitCode::FAILURE);
    }

    let text = batch.render(batch_start.elapsed());

    if !quiet {
        Output::stdout().write_text(&format!("{text}\n"))?;
    }

    if let Err(err) = write_report(output, &text) {
        eprintln!("[ERROR] Could not write results file: {err:#}");
        return Ok(ExitCode::FAILURE);
    }
    eprintln!("Results written to {}", output.display());

    if let Some(json_path) = json {
        let summaries = batch
            .files()
            .iter()
            .map(FileSummary::from)
            .collect::<Vec<_>>();
        Output::create(json_path.clone())?.write_json(&summaries)?;
        eprintln!("JSON summary written to {}", json_path.display());
    }

    if num_failed > 0 {
        eprintln!(
            "{num_failed} of {} input files could not be read",
            files.len()
        );
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn write_report(path: &Path, text: &str) -> anyhow::Result<()> {
    Output::create(path.to_path_buf())?.write_text(text)
}
