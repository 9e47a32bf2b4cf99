//! Report destinations.
//!
//! A rendered report is handed to exactly one sink, exactly once.

use crate::{Error, Result};
use std::io::Write;
use std::path::PathBuf;

/// Destination for a rendered report
pub trait ReportSink {
    fn deliver(&mut self, report: &str) -> Result<()>;

    /// Short human-readable name of where the report went
    fn destination(&self) -> &str;
}

/// Copies the report to the system clipboard
#[derive(Debug, Default)]
pub struct ClipboardSink;

impl ReportSink for ClipboardSink {
    fn deliver(&mut self, report: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| Error::Delivery(format!("Clipboard unavailable: {}", e)))?;
        clipboard
            .set_text(report)
            .map_err(|e| Error::Delivery(format!("Failed to copy to clipboard: {}", e)))?;

        tracing::info!("Copied {} bytes to clipboard", report.len());
        Ok(())
    }

    fn destination(&self) -> &str {
        "clipboard"
    }
}

/// Prints the report on standard output
#[derive(Debug, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn deliver(&mut self, report: &str) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "{}", report)?;
        out.flush()?;
        Ok(())
    }

    fn destination(&self) -> &str {
        "stdout"
    }
}

/// Writes the report to a file, replacing any previous contents
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    label: String,
}

impl FileSink {
    /// Create a new file sink for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.display().to_string();
        Self { path, label }
    }

    /// Ensure the parent directory exists
    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl ReportSink for FileSink {
    fn deliver(&mut self, report: &str) -> Result<()> {
        self.ensure_parent_dir()?;
        std::fs::write(&self.path, format!("{}\n", report))?;

        tracing::info!("Wrote report to {:?}", self.path);
        Ok(())
    }

    fn destination(&self) -> &str {
        &self.label
    }
}
