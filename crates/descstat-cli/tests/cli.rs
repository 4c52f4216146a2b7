//! End-to-end tests running the `descstat` binary

use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

use tempfile::TempDir;

const RESULTS_FILE: &str = "results/StatisticsResults.txt";

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_descstat"))
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
}

fn workspace(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

/// Returns the value cell of the first row labeled `label`.
fn row_value<'a>(report: &'a str, label: &str) -> Option<&'a str> {
    report.lines().find_map(|line| {
        let (left, right) = line.split_once("  |  ")?;
        (left.trim_end() == label).then(|| right.trim_start())
    })
}

#[test]
fn test_single_file_report() {
    let dir = workspace(&[("data.txt", "10 20\n20 30\n")]);
    let output = run_in(dir.path(), &["data.txt"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("=== Descriptive Statistics (data.txt) ===\n"));
    assert_eq!(row_value(&out, "Mean"), Some("20"));
    assert_eq!(row_value(&out, "Mode"), Some("20"));
    assert_eq!(row_value(&out, "Population Std Dev"), Some("7.0710678"));
    assert_eq!(row_value(&out, "Sample Std Dev"), Some("8.164966"));
    assert_eq!(row_value(&out, "Sample Variance"), Some("66.66667"));
    assert!(out.contains("Files processed: 1\n"));

    let written = fs::read_to_string(dir.path().join(RESULTS_FILE)).unwrap();
    assert_eq!(format!("{written}\n"), out);
}

#[test]
fn test_invalid_tokens_reported_on_stderr() {
    let dir = workspace(&[("data.txt", "1\n2\nabc 3\n")]);
    let output = run_in(dir.path(), &["data.txt"]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("[ERROR] Invalid token at line 3: 'abc'\n"));
    let out = stdout(&output);
    assert_eq!(row_value(&out, "Count"), Some("4"));
    assert_eq!(row_value(&out, "Mean"), Some("1.5"));
}

#[test]
fn test_missing_file_does_not_stop_batch() {
    let dir = workspace(&[("a.txt", "1 2 3"), ("b.txt", "4 4")]);
    let output = run_in(dir.path(), &["a.txt", "missing.txt", "b.txt"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("[FATAL] File not found: missing.txt\n"));

    let out = stdout(&output);
    let a = out.find("(a.txt)").unwrap();
    let b = out.find("(b.txt)").unwrap();
    assert!(a < b);
    assert!(!out.contains("missing.txt"));
    assert!(out.contains("Files processed: 2\n"));
    assert!(dir.path().join(RESULTS_FILE).exists());
}

#[test]
fn test_no_readable_input() {
    let dir = workspace(&[]);
    let output = run_in(dir.path(), &["nope.txt"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("[ERROR] No valid inputs were processed.\n"));
    assert!(stdout(&output).is_empty());
    assert!(!dir.path().join(RESULTS_FILE).exists());
}

#[test]
fn test_no_arguments_is_usage_error() {
    let dir = workspace(&[]);
    let output = run_in(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_diagnostics_follow_argument_order() {
    let dir = workspace(&[("x.txt", "bad1"), ("y.txt", "bad2")]);
    let output = run_in(dir.path(), &["y.txt", "x.txt"]);

    let err = stderr(&output);
    assert!(err.find("'bad2'").unwrap() < err.find("'bad1'").unwrap());
}

#[test]
fn test_custom_output_and_quiet() {
    let dir = workspace(&[("data.txt", "5")]);
    let output = run_in(
        dir.path(),
        &["data.txt", "--output", "out/report.txt", "--quiet"],
    );

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    let written = fs::read_to_string(dir.path().join("out/report.txt")).unwrap();
    assert_eq!(row_value(&written, "Sample Variance"), Some("N/A"));
    assert_eq!(row_value(&written, "Mode"), Some("#N/A"));
    assert!(!dir.path().join(RESULTS_FILE).exists());
}

#[test]
fn test_results_file_write_failure() {
    let dir = workspace(&[("data.txt", "1 2 3")]);
    let output = run_in(dir.path(), &["data.txt", "--output", "data.txt/report.txt"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("[ERROR] Could not write results file:"));
    let out = stdout(&output);
    assert!(out.starts_with("=== Descriptive Statistics (data.txt) ===\n"));
    assert!(out.contains("Files processed: 1\n"));
    assert_eq!(fs::read_to_string(dir.path().join("data.txt")).unwrap(), "1 2 3");
}

#[test]
fn test_json_summary() {
    let dir = workspace(&[("data.txt", "10 20 20 30"), ("empty.txt", "")]);
    let output = run_in(
        dir.path(),
        &["data.txt", "empty.txt", "--json", "summary.json", "--quiet"],
    );
    assert!(output.status.success());

    let text = fs::read_to_string(dir.path().join("summary.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    let files = json.as_array().unwrap();
    assert_eq!(files.len(), 2);

    assert_eq!(files[0]["path"], "data.txt");
    assert_eq!(files[0]["count"], 4);
    assert_eq!(files[0]["mean"], 20.0);
    assert_eq!(files[0]["modes"], serde_json::json!([20.0]));
    assert_eq!(files[0]["population_variance"], 50.0);
    assert_eq!(files[0]["invalid_tokens"], 0);

    assert_eq!(files[1]["count"], 0);
    assert!(files[1]["mean"].is_null());
    assert!(files[1]["sample_std_dev"].is_null());
    assert_eq!(files[1]["modes"], serde_json::json!([]));
}
