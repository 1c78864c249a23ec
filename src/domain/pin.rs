//! Exact version pin type
//!
//! Requirements manifests in this contract carry only exact pins
//! (`==8.4.1`), so the version model is a raw string plus a shape
//! check rather than a full PEP 440 implementation.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

// Release segment plus an optional pre/post/dev suffix: 8.4.1, 1.0,
// 4.0.0b1, 2.1rc2, 1.0.post1, 0.24.0.dev3
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(?:\.\d+)*(?:(?:a|b|c|rc)\d+)?(?:\.(?:post|dev)\d+)?$").unwrap()
});

/// An exact version string from a `name==version` pin
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinnedVersion {
    /// The version exactly as written in the manifest
    pub raw: String,
}

impl PinnedVersion {
    /// Creates a new pinned version from its raw string
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Returns true if the version has a well-formed release shape
    pub fn is_well_formed(&self) -> bool {
        VERSION_RE.is_match(&self.raw)
    }

    /// Returns the numeric release components (`8.4.1` -> [8, 4, 1])
    ///
    /// Pre/post/dev suffixes are ignored; a malformed version yields
    /// the components that do parse.
    pub fn release(&self) -> Vec<u64> {
        self.raw
            .split('.')
            .map_while(|part| {
                let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
                digits.parse().ok()
            })
            .collect()
    }
}

impl fmt::Display for PinnedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_release() {
        assert!(PinnedVersion::new("8.4.1").is_well_formed());
        assert!(PinnedVersion::new("1.0").is_well_formed());
        assert!(PinnedVersion::new("7").is_well_formed());
        assert!(PinnedVersion::new("25.1.0").is_well_formed());
    }

    #[test]
    fn test_well_formed_prerelease() {
        assert!(PinnedVersion::new("4.0.0b1").is_well_formed());
        assert!(PinnedVersion::new("2.1rc2").is_well_formed());
        assert!(PinnedVersion::new("1.2.3a1").is_well_formed());
    }

    #[test]
    fn test_well_formed_post_and_dev() {
        assert!(PinnedVersion::new("1.0.post1").is_well_formed());
        assert!(PinnedVersion::new("0.24.0.dev3").is_well_formed());
    }

    #[test]
    fn test_malformed() {
        assert!(!PinnedVersion::new("").is_well_formed());
        assert!(!PinnedVersion::new("latest").is_well_formed());
        assert!(!PinnedVersion::new("1..2").is_well_formed());
        assert!(!PinnedVersion::new("v1.0").is_well_formed());
        assert!(!PinnedVersion::new("1.0.0-beta").is_well_formed());
    }

    #[test]
    fn test_release_components() {
        assert_eq!(PinnedVersion::new("8.4.1").release(), vec![8, 4, 1]);
        assert_eq!(PinnedVersion::new("1.0").release(), vec![1, 0]);
        assert_eq!(PinnedVersion::new("4.0.0b1").release(), vec![4, 0, 0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PinnedVersion::new("8.4.1")), "8.4.1");
    }

    #[test]
    fn test_serde_transparent() {
        let version = PinnedVersion::new("8.4.1");
        let json = serde_json::to_string(&version).unwrap();
        assert_eq!(json, "\"8.4.1\"");
        let parsed: PinnedVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, version);
    }
}
