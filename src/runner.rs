//! Check runner coordinating the lint workflow
//!
//! Workflow: discover -> parse -> check -> aggregate. The target path
//! may be a single requirements file or a project directory.

use crate::check::run_checks;
use crate::domain::{CheckSummary, FileReport};
use crate::error::ManifestError;
use crate::manifest::{detect_requirements, read_requirements};
use std::path::{Path, PathBuf};

/// Runner for the lint workflow
pub struct Runner {
    /// File or directory to check
    path: PathBuf,
}

impl Runner {
    /// Create a new runner for the given target path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Run the lint workflow over the target
    pub fn run(&self) -> Result<CheckSummary, ManifestError> {
        let files = self.resolve_targets()?;

        let mut summary = CheckSummary::new();
        for path in files {
            summary.add_file(check_file(&path)?);
        }
        Ok(summary)
    }

    /// Resolve the target path to a list of requirements files
    fn resolve_targets(&self) -> Result<Vec<PathBuf>, ManifestError> {
        if self.path.is_file() {
            return Ok(vec![self.path.clone()]);
        }
        if self.path.is_dir() {
            let found = detect_requirements(&self.path);
            if found.is_empty() {
                return Err(ManifestError::none_detected(&self.path));
            }
            return Ok(found);
        }
        Err(ManifestError::not_found(&self.path))
    }
}

/// Parse and check a single requirements file
pub fn check_file(path: &Path) -> Result<FileReport, ManifestError> {
    let parsed = read_requirements(path)?;

    let mut report = FileReport::new(path);
    for finding in parsed.findings {
        report.add_finding(finding);
    }
    for entry in parsed.entries {
        report.add_entry(entry);
    }
    for finding in run_checks(&report.entries) {
        report.add_finding(finding);
    }
    report.findings.sort_by_key(|f| f.line);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
-e .[full]

# Testing
coverage==7.6.1
pytest==8.4.1

# Packaging
build==1.2.2
twine==5.1.1
";

    #[test]
    fn test_run_single_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("requirements.txt");
        fs::write(&path, SAMPLE).unwrap();

        let summary = Runner::new(&path).run().unwrap();
        assert_eq!(summary.files_processed(), 1);
        assert_eq!(summary.total_entries(), 5);
        assert!(summary.is_clean());
    }

    #[test]
    fn test_run_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("requirements.txt"), SAMPLE).unwrap();
        fs::write(
            dir.path().join("requirements-dev.txt"),
            "mypy==1.11.2\nruff==0.6.9\n",
        )
        .unwrap();

        let summary = Runner::new(dir.path()).run().unwrap();
        assert_eq!(summary.files_processed(), 2);
        assert_eq!(summary.total_entries(), 7);
    }

    #[test]
    fn test_run_directory_without_manifests() {
        let dir = TempDir::new().unwrap();
        let err = Runner::new(dir.path()).run().unwrap_err();
        assert!(matches!(err, ManifestError::NoneDetected { .. }));
    }

    #[test]
    fn test_run_missing_path() {
        let err = Runner::new("/no/such/path/requirements.txt").run().unwrap_err();
        assert!(matches!(err, ManifestError::NotFound { .. }));
    }

    #[test]
    fn test_check_file_merges_parse_and_check_findings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("requirements.txt");
        fs::write(&path, "pytest==8.4.1\nrequests>=2.0\npytest==8.3.0\n").unwrap();

        let report = check_file(&path).unwrap();
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.error_count(), 2);
        // Findings come out ordered by line
        assert_eq!(report.findings[0].line, 2);
        assert_eq!(report.findings[1].line, 3);
    }
}
