//! Check report types
//!
//! Provides structures for tracking findings at file and overall levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use super::RequirementsEntry;

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Structural defect that should be considered harmless
    Warning,
    /// Structural defect that breaks the manifest contract
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// The kind of structural defect a finding reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// Line matches neither the pin pattern nor the editable pattern
    MalformedLine,
    /// Package pinned twice with different versions
    ConflictingDuplicate,
    /// Package pinned twice with the same version
    RedundantDuplicate,
    /// Version string does not have a well-formed release shape
    MalformedVersion,
}

impl FindingKind {
    /// Default severity for this kind of finding
    pub fn severity(&self) -> Severity {
        match self {
            FindingKind::MalformedLine => Severity::Error,
            FindingKind::ConflictingDuplicate => Severity::Error,
            FindingKind::RedundantDuplicate => Severity::Warning,
            FindingKind::MalformedVersion => Severity::Warning,
        }
    }

    /// Short label used in report output
    pub fn label(&self) -> &'static str {
        match self {
            FindingKind::MalformedLine => "malformed line",
            FindingKind::ConflictingDuplicate => "conflicting duplicate",
            FindingKind::RedundantDuplicate => "redundant duplicate",
            FindingKind::MalformedVersion => "malformed version",
        }
    }
}

/// A single structural defect found in a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// What kind of defect this is
    pub kind: FindingKind,
    /// Severity of the defect
    pub severity: Severity,
    /// 1-based line number where the defect was found
    pub line: usize,
    /// Human-readable description naming the offending content
    pub message: String,
}

impl Finding {
    /// Creates a finding with the kind's default severity
    pub fn new(kind: FindingKind, line: usize, message: impl Into<String>) -> Self {
        let severity = kind.severity();
        Self {
            kind,
            severity,
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {} ({}): {}",
            self.line,
            self.kind.label(),
            self.severity,
            self.message
        )
    }
}

/// Check result for a single manifest file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    /// Path to the manifest file
    pub path: PathBuf,
    /// Entries successfully parsed from the manifest
    pub entries: Vec<RequirementsEntry>,
    /// Findings against the manifest
    pub findings: Vec<Finding>,
}

impl FileReport {
    /// Creates a new empty report for a manifest file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
            findings: Vec::new(),
        }
    }

    /// Adds a parsed entry
    pub fn add_entry(&mut self, entry: RequirementsEntry) {
        self.entries.push(entry);
    }

    /// Adds a finding
    pub fn add_finding(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Returns the number of error findings
    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }

    /// Returns the number of warning findings
    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }

    /// Returns all error findings
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    /// Returns all warning findings
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    /// Returns true if the manifest passed with no findings at all
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Overall summary across all checked manifests
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CheckSummary {
    /// Reports for each manifest file processed
    pub files: Vec<FileReport>,
}

impl CheckSummary {
    /// Creates a new empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file report
    pub fn add_file(&mut self, report: FileReport) {
        self.files.push(report);
    }

    /// Returns the total number of files processed
    pub fn files_processed(&self) -> usize {
        self.files.len()
    }

    /// Returns the total number of parsed entries
    pub fn total_entries(&self) -> usize {
        self.files.iter().map(|f| f.entries.len()).sum()
    }

    /// Returns the total number of error findings
    pub fn total_errors(&self) -> usize {
        self.files.iter().map(|f| f.error_count()).sum()
    }

    /// Returns the total number of warning findings
    pub fn total_warnings(&self) -> usize {
        self.files.iter().map(|f| f.warning_count()).sum()
    }

    /// Returns true if every file passed with no findings
    pub fn is_clean(&self) -> bool {
        self.files.iter().all(|f| f.is_clean())
    }

    /// Returns true if the check should fail
    ///
    /// Errors always fail; warnings fail only in strict mode.
    pub fn has_failures(&self, strict: bool) -> bool {
        self.total_errors() > 0 || (strict && self.total_warnings() > 0)
    }
}
