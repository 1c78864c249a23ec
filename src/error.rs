//! Application error types using thiserror
//!
//! Malformed manifest lines are findings, not errors; this module only
//! covers operational failures such as missing or unreadable files.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("requirements file not found: {path}")]
    NotFound { path: PathBuf },

    /// No requirements files found in a directory
    #[error("no requirements files found in {path}")]
    NoneDetected { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new NoneDetected error
    pub fn none_detected(path: impl Into<PathBuf>) -> Self {
        ManifestError::NoneDetected { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_error_not_found() {
        let err = ManifestError::not_found("/path/to/requirements.txt");
        let msg = format!("{}", err);
        assert!(msg.contains("requirements file not found"));
        assert!(msg.contains("requirements.txt"));
    }

    #[test]
    fn test_manifest_error_none_detected() {
        let err = ManifestError::none_detected("/project");
        let msg = format!("{}", err);
        assert!(msg.contains("no requirements files found"));
        assert!(msg.contains("/project"));
    }

    #[test]
    fn test_manifest_error_read() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ManifestError::read_error("/path/requirements.txt", source);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to read"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_app_error_from_manifest_error() {
        let manifest_err = ManifestError::not_found("/path");
        let app_err: AppError = manifest_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("requirements file not found"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = ManifestError::not_found("/test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
