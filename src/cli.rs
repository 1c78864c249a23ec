//! CLI argument parsing module for reqlint

use clap::Parser;
use std::path::PathBuf;

/// Requirements manifest linter
#[derive(Parser, Debug, Clone)]
#[command(
    name = "reqlint",
    version,
    about = "Lint pip requirements manifests for structural integrity"
)]
pub struct CliArgs {
    /// Requirements file or project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// List parsed records instead of the check report
    #[arg(short, long)]
    pub list: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    // Check options
    /// Treat warnings as failures
    #[arg(long)]
    pub strict: bool,
}
