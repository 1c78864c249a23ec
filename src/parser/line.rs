//! Requirements line parser
//!
//! Handles the line forms of the manifest contract:
//! - blank lines
//! - comment lines beginning with `#`
//! - exact pins: `pytest==8.4.1`, `uvicorn[standard]==0.30.1`
//! - editable installs: `-e .`, `-e .[full]`
//!
//! Inline ` # ...` tails are stripped from requirement lines and a
//! `;` environment marker is recorded verbatim.

use crate::domain::{EditableInstall, PinnedVersion, Requirement};
use regex::Regex;
use std::sync::LazyLock;

// PEP 508 name shape: starts and ends alphanumeric, `.`/`-`/`_` inside
const NAME_PATTERN: &str = r"[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?";

static PIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^({NAME_PATTERN})(?:\[([^\]]*)\])?\s*==\s*(\S+)$"
    ))
    .unwrap()
});
static EDITABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-e\s+([^\[\s]+)(?:\[([^\]]*)\])?$").unwrap());
static UNPINNED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^({NAME_PATTERN})(?:\[[^\]]*\])?\s*(~=|===|!=|>=|<=|>|<)"
    ))
    .unwrap()
});
static BARE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^{NAME_PATTERN}$")).unwrap());

/// A classified manifest line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Empty or whitespace-only line
    Blank,
    /// Comment line; carries the text after `#`, trimmed
    Comment(String),
    /// An exact `name==version` pin
    Pinned(Requirement),
    /// A `-e <path>[extras]` directive
    Editable(EditableInstall),
    /// Line matches neither accepted pattern
    Malformed {
        /// Description naming what was seen on the line
        message: String,
    },
}

/// Splits a comma-separated extras capture into trimmed names
fn split_extras(extras: Option<&str>) -> Vec<String> {
    extras
        .map(|s| {
            s.split(',')
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Strips an inline ` # ...` comment tail from a requirement line
///
/// pip only treats `#` as a comment start at the beginning of the line
/// or after whitespace, so `foo==1.0#egg` is left alone.
fn strip_inline_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'#' && (i == 0 || bytes[i - 1].is_ascii_whitespace()) {
            return &line[..i];
        }
    }
    line
}

/// Parses a single manifest line into its classified form
pub fn parse_line(raw: &str, line_no: usize) -> ParsedLine {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return ParsedLine::Blank;
    }

    if let Some(comment) = trimmed.strip_prefix('#') {
        return ParsedLine::Comment(comment.trim().to_string());
    }

    // Drop inline comment tail, then split off an environment marker
    let without_comment = strip_inline_comment(trimmed).trim_end();
    let (spec, marker) = match without_comment.split_once(';') {
        Some((spec, marker)) => (spec.trim_end(), Some(marker.trim())),
        None => (without_comment, None),
    };

    if let Some(caps) = EDITABLE_RE.captures(spec) {
        let path = caps.get(1).map(|m| m.as_str()).unwrap_or(".");
        let extras = split_extras(caps.get(2).map(|m| m.as_str()));
        return ParsedLine::Editable(EditableInstall::new(path, extras, line_no));
    }

    if let Some(caps) = PIN_RE.captures(spec) {
        let name = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let extras = split_extras(caps.get(2).map(|m| m.as_str()));
        let version = caps.get(3).map(|m| m.as_str()).unwrap_or_default();

        let mut req = Requirement::new(name, PinnedVersion::new(version), line_no)
            .with_extras(extras);
        if let Some(marker) = marker {
            if !marker.is_empty() {
                req = req.with_marker(marker);
            }
        }
        return ParsedLine::Pinned(req);
    }

    // Distinguish the common failure shapes so the report is actionable
    let message = if let Some(caps) = UNPINNED_RE.captures(spec) {
        let op = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        format!("unpinned specifier '{}' (expected '==')", op)
    } else if BARE_NAME_RE.is_match(spec) {
        format!("'{}' has no version pin (expected name==version)", spec)
    } else if spec.starts_with("-e") {
        format!("invalid editable install '{}'", spec)
    } else if spec.starts_with('-') {
        format!("unsupported option line '{}'", spec)
    } else {
        format!(
            "'{}' matches neither name==version nor -e <path>[extras]",
            spec
        )
    };

    ParsedLine::Malformed { message }
}
