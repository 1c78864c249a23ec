//! Core domain models for reqlint
//!
//! This module contains the fundamental types used throughout the application:
//! - Requirement records parsed from manifests
//! - Exact version pin type
//! - Check report and finding structures

mod pin;
mod report;
mod requirement;

pub use pin::PinnedVersion;
pub use report::{CheckSummary, FileReport, Finding, FindingKind, Severity};
pub use requirement::{normalize_name, EditableInstall, Requirement, RequirementsEntry};
