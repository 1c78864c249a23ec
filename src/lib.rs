//! reqlint - pip requirements manifest linter library
//!
//! This library provides the core functionality for parsing and
//! structurally validating pip requirements manifests:
//! - exact pins (`pytest==8.4.1`)
//! - editable installs (`-e .[full]`)
//! - comment headings as cosmetic sections

pub mod check;
pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod output;
pub mod parser;
pub mod runner;
