use std::{
    fs::{self, File},
    io::{self, BufWriter, StdoutLock, Write as _},
    path::PathBuf,
};

use anyhow::Context;

/// Destination for the report or the JSON summary.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn stdout() -> Self {
        Output::Stdout(io::stdout().lock())
    }

    /// Creates (or truncates) the file at `path`, creating missing parent directories.
    pub fn create(path: PathBuf) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    /// Human-readable name of the destination, for error messages.
    pub fn label(&self) -> String {
        match self {
            Output::Stdout(_) => "stdout".to_owned(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    fn writer(&mut self) -> &mut dyn io::Write {
        match self {
            Output::Stdout(writer) => writer,
            Output::File { writer, .. } => writer,
        }
    }

    /// Writes `text` as-is and flushes.
    pub fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        let writer = self.writer();
        let result = writer
            .write_all(text.as_bytes())
            .and_then(|()| writer.flush());
        result.with_context(|| format!("Failed to write to {}", self.label()))
    }

    /// Writes `value` as pretty-printed JSON followed by a newline, then flushes.
    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(self.writer(), value)
            .with_context(|| format!("Failed to serialize JSON to {}", self.label()))?;
        self.write_text("\n")
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_file_output_creates_parents_and_appends_json_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/summary.json");

        let mut output = Output::create(path.clone()).unwrap();
        assert_eq!(output.label(), path.display().to_string());
        output.write_text("head\n").unwrap();
        output.write_json(&[1.5, 2.0]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "head\n[\n  1.5,\n  2.0\n]\n");
    }

    #[test]
    fn test_create_under_regular_file_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("data.txt");
        fs::write(&blocker, "1 2 3").unwrap();

        let err = Output::create(blocker.join("report.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to create output directory"));
    }
}
