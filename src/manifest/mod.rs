//! Requirements file reading and discovery
//!
//! This module provides functionality to:
//! - Read and parse a single requirements file
//! - Detect conventional requirements files in a directory
//!   (requirements.txt, requirements-dev.txt, requirements/*.txt, ...)

use crate::error::ManifestError;
use crate::parser::{parse_requirements, ParsedManifest};
use std::path::{Path, PathBuf};

/// Conventional top-level requirements filenames, checked in order
const KNOWN_FILENAMES: &[&str] = &[
    "requirements.txt",
    "requirements-dev.txt",
    "dev-requirements.txt",
    "requirements-test.txt",
    "constraints.txt",
];

/// Reads and parses a requirements file
pub fn read_requirements(path: &Path) -> Result<ParsedManifest, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::not_found(path));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ManifestError::read_error(path, e))?;
    Ok(parse_requirements(&content))
}

/// Detects requirements files in the given directory
///
/// Looks for the conventional top-level names and any `*.txt` file in a
/// `requirements/` subdirectory. Returned paths are sorted for stable
/// output.
pub fn detect_requirements(dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for name in KNOWN_FILENAMES {
        let candidate = dir.join(name);
        if candidate.is_file() {
            found.push(candidate);
        }
    }

    let subdir = dir.join("requirements");
    if subdir.is_dir() {
        if let Ok(entries) = std::fs::read_dir(&subdir) {
            let mut nested: Vec<PathBuf> = entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|p| {
                    p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("txt")
                })
                .collect();
            nested.sort();
            found.extend(nested);
        }
    }

    found
}
