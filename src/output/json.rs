//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of check results
//! - Structured file-by-file entry/finding information

use crate::domain::{CheckSummary, FileReport, Finding, RequirementsEntry};
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
    /// Whether parsed records were requested explicitly
    list: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity, list: bool) -> Self {
        Self { verbosity, list }
    }

    /// Whether parsed entries should be included per file
    fn include_entries(&self) -> bool {
        self.list || self.verbosity == Verbosity::Verbose
    }

    /// Convert a file report to its JSON representation
    fn file_to_json<'a>(&self, report: &'a FileReport) -> JsonFile<'a> {
        JsonFile {
            path: report.path.display().to_string(),
            records: report.entries.len(),
            errors: report.error_count(),
            warnings: report.warning_count(),
            entries: if self.include_entries() {
                report.entries.iter().collect()
            } else {
                Vec::new()
            },
            findings: report.findings.iter().collect(),
        }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Summary statistics
    summary: JsonSummary,
    /// Per-file results
    files: Vec<JsonFile<'a>>,
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    /// Number of files checked
    files: usize,
    /// Total number of parsed records
    records: usize,
    /// Total number of error findings
    errors: usize,
    /// Total number of warning findings
    warnings: usize,
    /// Whether every file passed with no findings
    clean: bool,
}

/// JSON representation of a single file result
#[derive(Serialize)]
struct JsonFile<'a> {
    /// Path to the manifest file
    path: String,
    /// Number of parsed records
    records: usize,
    /// Number of error findings
    errors: usize,
    /// Number of warning findings
    warnings: usize,
    /// Parsed records (list or verbose mode only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    entries: Vec<&'a RequirementsEntry>,
    /// Findings against the file
    #[serde(skip_serializing_if = "Vec::is_empty")]
    findings: Vec<&'a Finding>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, summary: &CheckSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            summary: JsonSummary {
                files: summary.files_processed(),
                records: summary.total_entries(),
                errors: summary.total_errors(),
                warnings: summary.total_warnings(),
                clean: summary.is_clean(),
            },
            files: summary.files.iter().map(|f| self.file_to_json(f)).collect(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}
