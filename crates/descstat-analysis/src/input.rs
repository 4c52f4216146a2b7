//! Per-file entry point
//!
//! [`analyze_file`] reads one input file, parses it, and computes its
//! statistics. A failure is confined to that file, so a batch driver can
//! report it and carry on with the next path.

use std::{
    fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
    time::Instant,
};

use descstat_stats::descriptive::StatisticsResult;

use crate::{
    parse::{InvalidToken, parse_sample},
    report::FileReport,
};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ReadSampleError {
    #[display("File not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[display("Cannot read file '{}': {source}", path.display())]
    Unreadable { path: PathBuf, source: io::Error },
}

impl ReadSampleError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        if source.kind() == ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Unreadable { path, source }
        }
    }

    /// Path of the file that failed.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::Unreadable { path, .. } => path,
        }
    }
}

/// Reads the whole file at `path` as UTF-8 text.
///
/// # Errors
///
/// Returns [`ReadSampleError::NotFound`] if the file does not exist and
/// [`ReadSampleError::Unreadable`] for any other I/O or decoding failure.
pub fn read_text<P>(path: P) -> Result<String, ReadSampleError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| ReadSampleError::from_io(path, source))
}

/// Reads, parses, and summarizes the file at `path`.
///
/// Invalid tokens are passed to `on_invalid` and replaced by zero. The
/// elapsed time covers reading, parsing, and computing.
///
/// # Errors
///
/// Returns an error only if the file cannot be read.
pub fn analyze_file<P, F>(path: P, on_invalid: F) -> Result<FileReport, ReadSampleError>
where
    P: AsRef<Path>,
    F: FnMut(InvalidToken),
{
    let path = path.as_ref();
    let start = Instant::now();

    let text = read_text(path)?;
    let sample = parse_sample(&text, on_invalid);
    let stats = StatisticsResult::compute(sample.values());

    Ok(FileReport {
        path: path.to_path_buf(),
        stats,
        invalid_tokens: sample.invalid_tokens(),
        elapsed: start.elapsed(),
    })
}
