//! Structural integrity checks over parsed manifest entries
//!
//! Line-shape violations are reported by the parser; the checks here
//! look across records: duplicate package identifiers and version
//! strings with an odd shape.

use crate::domain::{Finding, FindingKind, Requirement, RequirementsEntry};
use std::collections::HashMap;

/// Runs all cross-record checks and returns findings sorted by line
pub fn run_checks(entries: &[RequirementsEntry]) -> Vec<Finding> {
    let pins: Vec<&Requirement> = entries.iter().filter_map(|e| e.as_pinned()).collect();

    let mut findings = Vec::new();
    findings.extend(check_version_shapes(&pins));
    findings.extend(check_duplicates(&pins));
    findings.sort_by_key(|f| f.line);
    findings
}

/// Warns about pinned versions without a well-formed release shape
fn check_version_shapes(pins: &[&Requirement]) -> Vec<Finding> {
    pins.iter()
        .filter(|req| !req.version.is_well_formed())
        .map(|req| {
            Finding::new(
                FindingKind::MalformedVersion,
                req.line,
                format!(
                    "version '{}' of '{}' is not a plain release version",
                    req.version, req.name
                ),
            )
        })
        .collect()
}

/// Detects packages pinned more than once
///
/// Identifiers are compared under PEP 503 normalization. A repeat with
/// a different version is an error; a repeat with the same version is
/// a warning.
fn check_duplicates(pins: &[&Requirement]) -> Vec<Finding> {
    let mut first_seen: HashMap<String, &Requirement> = HashMap::new();
    let mut findings = Vec::new();

    for &req in pins {
        match first_seen.get(&req.normalized_name()) {
            None => {
                first_seen.insert(req.normalized_name(), req);
            }
            Some(first) => {
                if first.version == req.version {
                    findings.push(Finding::new(
                        FindingKind::RedundantDuplicate,
                        req.line,
                        format!(
                            "'{}' already pinned to {} on line {}",
                            req.name, first.version, first.line
                        ),
                    ));
                } else {
                    findings.push(Finding::new(
                        FindingKind::ConflictingDuplicate,
                        req.line,
                        format!(
                            "'{}' pinned to {} here but to {} on line {}",
                            req.name, req.version, first.version, first.line
                        ),
                    ));
                }
            }
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Severity;
    use crate::parser::parse_requirements;

    fn entries(content: &str) -> Vec<RequirementsEntry> {
        parse_requirements(content).entries
    }

    #[test]
    fn test_clean_manifest() {
        let entries = entries("-e .[full]\npytest==8.4.1\ncoverage==7.6.1\n");
        assert!(run_checks(&entries).is_empty());
    }

    #[test]
    fn test_conflicting_duplicate() {
        let entries = entries("pytest==8.4.1\ncoverage==7.6.1\npytest==8.3.0\n");
        let findings = run_checks(&entries);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::ConflictingDuplicate);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(findings[0].line, 3);
        assert!(findings[0].message.contains("8.4.1"));
        assert!(findings[0].message.contains("8.3.0"));
        assert!(findings[0].message.contains("line 1"));
    }

    #[test]
    fn test_redundant_duplicate() {
        let entries = entries("pytest==8.4.1\npytest==8.4.1\n");
        let findings = run_checks(&entries);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::RedundantDuplicate);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings[0].line, 2);
    }

    #[test]
    fn test_duplicate_under_normalization() {
        let entries = entries("mkdocs_material==9.5.0\nMkDocs-Material==9.4.0\n");
        let findings = run_checks(&entries);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::ConflictingDuplicate);
    }

    #[test]
    fn test_malformed_version_shape() {
        let entries = entries("pytest==not.a.version\n");
        let findings = run_checks(&entries);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::MalformedVersion);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert!(findings[0].message.contains("not.a.version"));
    }

    #[test]
    fn test_prerelease_version_is_fine() {
        let entries = entries("mkdocs==1.6.0b1\ntrio==0.24.0.dev3\n");
        assert!(run_checks(&entries).is_empty());
    }

    #[test]
    fn test_editable_not_treated_as_duplicate() {
        let entries = entries("-e .[full]\n-e .[full]\n");
        assert!(run_checks(&entries).is_empty());
    }

    #[test]
    fn test_findings_sorted_by_line() {
        let entries = entries("pytest==8.4.1\npytest==8.3.0\nmypy==bogus\n");
        let findings = run_checks(&entries);

        assert_eq!(findings.len(), 2);
        assert!(findings[0].line < findings[1].line);
    }

    #[test]
    fn test_triple_pin_reports_each_repeat() {
        let entries = entries("pytest==1.0\npytest==2.0\npytest==3.0\n");
        let findings = run_checks(&entries);
        // Each repeat is compared against the first occurrence
        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| f.message.contains("line 1")));
    }

    #[test]
    fn test_version_equality_is_textual() {
        // 1.0 and 1.0.0 denote the same release but conflict as pins
        let entries = entries("black==1.0\nblack==1.0.0\n");
        let findings = run_checks(&entries);
        assert_eq!(findings[0].kind, FindingKind::ConflictingDuplicate);
    }
}
