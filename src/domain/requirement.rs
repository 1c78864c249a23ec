//! Requirement record structures

use super::PinnedVersion;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalizes a package identifier per PEP 503
///
/// Lowercases the name and collapses runs of `-`, `_` and `.` into a
/// single `-`, so `Foo_Bar` and `foo.bar` compare equal.
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_sep = false;
    for c in name.chars() {
        if c == '-' || c == '_' || c == '.' {
            if !prev_sep {
                out.push('-');
            }
            prev_sep = true;
        } else {
            out.push(c.to_ascii_lowercase());
            prev_sep = false;
        }
    }
    out
}

/// A pinned dependency record from a requirements manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Package name as written in the manifest
    pub name: String,
    /// Exact pinned version
    pub version: PinnedVersion,
    /// Extras requested on the package (e.g. `uvicorn[standard]`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<String>,
    /// Environment marker after `;`, recorded but not interpreted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// Section heading this record appeared under (cosmetic)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// 1-based line number in the manifest
    pub line: usize,
}

impl Requirement {
    /// Creates a new pinned requirement
    pub fn new(name: impl Into<String>, version: PinnedVersion, line: usize) -> Self {
        Self {
            name: name.into(),
            version,
            extras: Vec::new(),
            marker: None,
            section: None,
            line,
        }
    }

    /// Sets the extras list (builder pattern)
    pub fn with_extras(mut self, extras: Vec<String>) -> Self {
        self.extras = extras;
        self
    }

    /// Sets the environment marker (builder pattern)
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Sets the section heading (builder pattern)
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Returns the PEP 503 normalized package identifier
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.extras.is_empty() {
            write!(f, "[{}]", self.extras.join(","))?;
        }
        write!(f, "=={}", self.version)?;
        if let Some(ref marker) = self.marker {
            write!(f, "; {}", marker)?;
        }
        Ok(())
    }
}

/// A local editable install directive (`-e <path>[extras]`)
///
/// Not a versioned remote package: it references the project directory
/// itself plus optional extras groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditableInstall {
    /// Local path being installed (usually `.`)
    pub path: String,
    /// Extras groups requested (e.g. `full` in `-e .[full]`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<String>,
    /// Section heading this record appeared under (cosmetic)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// 1-based line number in the manifest
    pub line: usize,
}

impl EditableInstall {
    /// Creates a new editable install record
    pub fn new(path: impl Into<String>, extras: Vec<String>, line: usize) -> Self {
        Self {
            path: path.into(),
            extras,
            section: None,
            line,
        }
    }

    /// Sets the section heading (builder pattern)
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }
}

impl fmt::Display for EditableInstall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-e {}", self.path)?;
        if !self.extras.is_empty() {
            write!(f, "[{}]", self.extras.join(","))?;
        }
        Ok(())
    }
}

/// A parsed entry from a requirements manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequirementsEntry {
    /// A `name==version` pin
    Pinned(Requirement),
    /// A `-e <path>[extras]` directive
    Editable(EditableInstall),
}

impl RequirementsEntry {
    /// Returns true if this is a pinned requirement
    pub fn is_pinned(&self) -> bool {
        matches!(self, RequirementsEntry::Pinned(_))
    }

    /// Returns true if this is an editable install
    pub fn is_editable(&self) -> bool {
        matches!(self, RequirementsEntry::Editable(_))
    }

    /// Returns the 1-based line number of this entry
    pub fn line(&self) -> usize {
        match self {
            RequirementsEntry::Pinned(req) => req.line,
            RequirementsEntry::Editable(editable) => editable.line,
        }
    }

    /// Returns the section heading of this entry, if any
    pub fn section(&self) -> Option<&str> {
        match self {
            RequirementsEntry::Pinned(req) => req.section.as_deref(),
            RequirementsEntry::Editable(editable) => editable.section.as_deref(),
        }
    }

    /// Returns the pinned requirement, if this is one
    pub fn as_pinned(&self) -> Option<&Requirement> {
        match self {
            RequirementsEntry::Pinned(req) => Some(req),
            RequirementsEntry::Editable(_) => None,
        }
    }
}

impl fmt::Display for RequirementsEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequirementsEntry::Pinned(req) => req.fmt(f),
            RequirementsEntry::Editable(editable) => editable.fmt(f),
        }
    }
}
