//! Requirements manifest parsing
//!
//! Parses manifest content line by line. Comment lines double as
//! section headings for the records that follow them; malformed lines
//! become findings instead of aborting the file.

mod line;

pub use line::{parse_line, ParsedLine};

use crate::domain::{Finding, FindingKind, RequirementsEntry};

/// Result of parsing a whole manifest
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedManifest {
    /// Entries in manifest order
    pub entries: Vec<RequirementsEntry>,
    /// Findings for lines that failed to parse
    pub findings: Vec<Finding>,
}

/// Parses requirements manifest content into entries and parse findings
pub fn parse_requirements(content: &str) -> ParsedManifest {
    let mut parsed = ParsedManifest::default();
    let mut section: Option<String> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        match parse_line(raw, line_no) {
            ParsedLine::Blank => {}
            ParsedLine::Comment(text) => {
                if !text.is_empty() {
                    section = Some(text);
                }
            }
            ParsedLine::Pinned(mut req) => {
                req.section = section.clone();
                parsed.entries.push(RequirementsEntry::Pinned(req));
            }
            ParsedLine::Editable(mut editable) => {
                editable.section = section.clone();
                parsed.entries.push(RequirementsEntry::Editable(editable));
            }
            ParsedLine::Malformed { message } => {
                parsed
                    .findings
                    .push(Finding::new(FindingKind::MalformedLine, line_no, message));
            }
        }
    }

    parsed
}
