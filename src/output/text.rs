//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Per-file finding display with line numbers and severity colors
//! - Record listing mode (`--list`) grouped by section heading
//! - Summary with error/warning breakdown

use crate::domain::{CheckSummary, FileReport, Finding, RequirementsEntry, Severity};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to list parsed records instead of findings
    list: bool,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity, list: bool) -> Self {
        Self {
            verbosity,
            list,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, list: bool, color: bool) -> Self {
        Self {
            verbosity,
            list,
            color,
        }
    }

    /// Format a severity label
    fn severity_label(&self, severity: Severity) -> String {
        match (severity, self.color) {
            (Severity::Error, true) => "error".red().bold().to_string(),
            (Severity::Error, false) => "error".to_string(),
            (Severity::Warning, true) => "warning".yellow().to_string(),
            (Severity::Warning, false) => "warning".to_string(),
        }
    }

    /// Format a single finding line
    fn format_finding(&self, finding: &Finding, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.color {
            writeln!(
                writer,
                "  {} {}: {}",
                format!("line {:>3}", finding.line).dimmed(),
                self.severity_label(finding.severity),
                finding.message
            )
        } else {
            writeln!(
                writer,
                "  line {:>3} {}: {}",
                finding.line,
                finding.severity,
                finding.message
            )
        }
    }

    /// Format a single parsed record line for list mode
    fn format_entry(
        &self,
        entry: &RequirementsEntry,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        match entry {
            RequirementsEntry::Pinned(req) => {
                let name = if req.extras.is_empty() {
                    req.name.clone()
                } else {
                    format!("{}[{}]", req.name, req.extras.join(","))
                };
                if self.color {
                    writeln!(
                        writer,
                        "  {:width$} {}",
                        name,
                        req.version.to_string().bright_white(),
                        width = max_name_len
                    )
                } else {
                    writeln!(
                        writer,
                        "  {:width$} {}",
                        name,
                        req.version,
                        width = max_name_len
                    )
                }
            }
            RequirementsEntry::Editable(editable) => {
                if self.color {
                    writeln!(writer, "  {} {}", editable, "(editable)".dimmed())
                } else {
                    writeln!(writer, "  {} (editable)", editable)
                }
            }
        }
    }

    /// Width of the longest displayed name, for column alignment
    fn max_name_length(&self, entries: &[RequirementsEntry]) -> usize {
        entries
            .iter()
            .filter_map(|e| e.as_pinned())
            .map(|req| {
                if req.extras.is_empty() {
                    req.name.len()
                } else {
                    req.name.len() + req.extras.join(",").len() + 2
                }
            })
            .max()
            .unwrap_or(0)
    }

    /// List parsed records for one file, grouped by section heading
    fn format_file_listing(
        &self,
        report: &FileReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let path_display = report.path.display().to_string();
        if self.color {
            writeln!(
                writer,
                "{} — {} record(s)",
                path_display.bold(),
                report.entries.len()
            )?;
        } else {
            writeln!(writer, "{} — {} record(s)", path_display, report.entries.len())?;
        }

        let max_name_len = self.max_name_length(&report.entries).max(16);
        let mut current_section: Option<&str> = None;
        let mut first_group = true;

        for entry in &report.entries {
            if entry.section() != current_section {
                current_section = entry.section();
                if let Some(section) = current_section {
                    if !first_group {
                        writeln!(writer)?;
                    }
                    if self.color {
                        writeln!(writer, "  {}", section.cyan())?;
                    } else {
                        writeln!(writer, "  {}", section)?;
                    }
                }
                first_group = false;
            }
            self.format_entry(entry, max_name_len, writer)?;
        }

        writeln!(writer)?;
        Ok(())
    }

    /// Write the findings report for one file
    fn format_file_report(
        &self,
        report: &FileReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        // Clean files only get a line in verbose mode
        if report.is_clean() {
            if self.verbosity == Verbosity::Verbose {
                let path_display = report.path.display().to_string();
                if self.color {
                    writeln!(
                        writer,
                        "{} — {} ({} record(s))",
                        path_display.bold(),
                        "ok".green(),
                        report.entries.len()
                    )?;
                } else {
                    writeln!(
                        writer,
                        "{} — ok ({} record(s))",
                        path_display,
                        report.entries.len()
                    )?;
                }
            }
            return Ok(());
        }

        let path_display = report.path.display().to_string();
        let errors = report.error_count();
        let warnings = report.warning_count();
        if self.color {
            writeln!(
                writer,
                "{} — {} error(s), {} warning(s)",
                path_display.bold(),
                errors.to_string().red(),
                warnings.to_string().yellow()
            )?;
        } else {
            writeln!(
                writer,
                "{} — {} error(s), {} warning(s)",
                path_display, errors, warnings
            )?;
        }

        for finding in &report.findings {
            self.format_finding(finding, writer)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &CheckSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.list {
            for report in &summary.files {
                self.format_file_listing(report, writer)?;
            }
            return Ok(());
        }

        let errors = summary.total_errors();
        let warnings = summary.total_warnings();

        if self.verbosity == Verbosity::Quiet {
            if summary.is_clean() {
                writeln!(writer, "ok")?;
            } else {
                writeln!(writer, "{} error(s), {} warning(s)", errors, warnings)?;
            }
            return Ok(());
        }

        for report in &summary.files {
            self.format_file_report(report, writer)?;
        }

        if self.color {
            writeln!(writer, "{}:", "Summary".bold())?;
        } else {
            writeln!(writer, "Summary:")?;
        }
        writeln!(
            writer,
            "  {} file(s) checked, {} record(s) parsed",
            summary.files_processed(),
            summary.total_entries()
        )?;
        if summary.is_clean() {
            if self.color {
                writeln!(writer, "  {}", "No problems found".green())?;
            } else {
                writeln!(writer, "  No problems found")?;
            }
        } else if self.color {
            writeln!(
                writer,
                "  {} error(s), {} warning(s)",
                errors.to_string().red(),
                warnings.to_string().yellow()
            )?;
        } else {
            writeln!(writer, "  {} error(s), {} warning(s)", errors, warnings)?;
        }

        Ok(())
    }
}
