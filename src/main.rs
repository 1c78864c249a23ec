//! reqlint - pip requirements manifest linter CLI
//!
//! Reads requirements manifests, parses each line into a typed record,
//! and reports structural integrity findings.

use clap::Parser;
use reqlint::cli::CliArgs;
use reqlint::output::{create_formatter, OutputConfig};
use reqlint::runner::Runner;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("reqlint v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Target: {}", args.path.display());
    }

    let summary = Runner::new(&args.path).run()?;

    let output_config = OutputConfig::from_cli(args.json, args.list, args.verbose, args.quiet);
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&summary, &mut stdout)?;
    stdout.flush()?;

    // Findings at failing severity map to exit code 2
    if summary.has_failures(args.strict) {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
