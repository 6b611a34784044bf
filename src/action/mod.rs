//! Reporting results back to the CI runner.
//!
//! Outputs are appended to the runner's output file (`GITHUB_OUTPUT`) when
//! one is configured, and fall back to the legacy `::set-output` workflow
//! command otherwise. Failures are reported as `::error::` commands on
//! stdout; the exit code is left to `main`.

pub mod command;

use crate::error::{RenderError, Result};
use command::{format_command, format_file_command_entry};
use std::fs::OpenOptions;
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};
use ulid::Ulid;

/// Name of the step output carrying the rendered file path.
pub const TASK_DEFINITION_OUTPUT: &str = "task-definition";

/// Where step outputs and failures are reported.
pub trait OutputSink {
    /// Record a named step output.
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;

    /// Report the step as failed with a human-readable message.
    fn set_failed(&mut self, message: &str);
}

/// Output sink speaking the GitHub Actions runner protocol.
#[derive(Debug)]
pub struct GithubOutput<W: Write = Stdout> {
    output_file: Option<PathBuf>,
    stdout: W,
}

impl GithubOutput<Stdout> {
    /// Report to the given output file, or to process stdout without one.
    pub fn new(output_file: Option<PathBuf>) -> Self {
        Self::with_writer(output_file, io::stdout())
    }
}

impl<W: Write> GithubOutput<W> {
    /// Report workflow commands to `stdout` instead of the process stdout.
    pub fn with_writer(output_file: Option<PathBuf>, stdout: W) -> Self {
        Self {
            output_file,
            stdout,
        }
    }

    /// Consume the sink, returning the command writer.
    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.stdout
    }

    fn append_to_output_file(&self, path: &Path, name: &str, value: &str) -> Result<()> {
        let delimiter = format!("ghadelimiter_{}", Ulid::new());
        let entry = format_file_command_entry(name, value, &delimiter).ok_or_else(|| {
            RenderError::OutputError(format!(
                "unexpected input: output '{}' contains the delimiter {}",
                name, delimiter
            ))
        })?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                RenderError::OutputError(format!(
                    "failed to open output file '{}': {}",
                    path.display(),
                    e
                ))
            })?;

        file.write_all(entry.as_bytes()).map_err(|e| {
            RenderError::OutputError(format!(
                "failed to write output file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    fn write_command(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.stdout, "{}", line)?;
        self.stdout.flush()
    }
}

impl<W: Write> OutputSink for GithubOutput<W> {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        if let Some(path) = &self.output_file {
            return self.append_to_output_file(path, name, value);
        }

        let line = format_command("set-output", &[("name", name)], value);
        self.write_command(&line)
            .map_err(|e| RenderError::OutputError(format!("failed to write to stdout: {}", e)))
    }

    fn set_failed(&mut self, message: &str) {
        let line = format_command("error", &[], message);
        if let Err(e) = self.write_command(&line) {
            // stdout is unusable, fall back to stderr
            eprintln!("Error: {} (failed to report to runner: {})", message, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn captured(sink: GithubOutput<Vec<u8>>) -> String {
        String::from_utf8(sink.into_writer()).unwrap()
    }

    #[test]
    fn set_output_appends_heredoc_to_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_file = temp_dir.path().join("set_output");
        fs::write(&output_file, "previous<<EOF\nvalue\nEOF\n").unwrap();

        let mut sink = GithubOutput::with_writer(Some(output_file.clone()), Vec::new());
        sink.set_output(TASK_DEFINITION_OUTPUT, "/runner/_temp/task-definition-abc.json")
            .unwrap();

        let content = fs::read_to_string(&output_file).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "previous<<EOF");
        assert!(lines[3].starts_with("task-definition<<ghadelimiter_"));
        assert_eq!(lines[4], "/runner/_temp/task-definition-abc.json");
        assert_eq!(lines[5], &lines[3]["task-definition<<".len()..]);

        // Nothing goes to stdout when an output file is configured
        assert_eq!(captured(sink), "");
    }

    #[test]
    fn set_output_creates_missing_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_file = temp_dir.path().join("set_output");

        let mut sink = GithubOutput::with_writer(Some(output_file.clone()), Vec::new());
        sink.set_output("task-definition", "/tmp/x.json").unwrap();

        assert!(fs::read_to_string(&output_file)
            .unwrap()
            .contains("\n/tmp/x.json\n"));
    }

    #[test]
    fn set_output_without_file_uses_legacy_command() {
        let mut sink = GithubOutput::with_writer(None, Vec::new());
        sink.set_output("task-definition", "/tmp/x.json").unwrap();

        assert_eq!(
            captured(sink),
            "::set-output name=task-definition::/tmp/x.json\n"
        );
    }

    #[test]
    fn set_output_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let output_file = temp_dir.path().join("missing").join("set_output");

        let mut sink = GithubOutput::with_writer(Some(output_file), Vec::new());
        let err = sink.set_output("task-definition", "/tmp/x.json").unwrap_err();
        assert!(matches!(err, RenderError::OutputError(_)));
    }

    #[test]
    fn set_failed_writes_escaped_error_command() {
        let mut sink = GithubOutput::with_writer(None, Vec::new());
        sink.set_failed("Cannot parse\n100% broken");

        assert_eq!(captured(sink), "::error::Cannot parse%0A100%25 broken\n");
    }
}
