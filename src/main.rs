//! runs-test: CLI entry point.
//!
//! Evaluates the Wald-Wolfowitz run test on a file of residuals.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use runs_test::report::print_report;
use runs_test::residuals::read_residuals;
use runs_test::stats::run_test;
use runs_test::types::Verbosity;

#[derive(Parser)]
#[command(name = "runs-test")]
#[command(about = "Calculate Wald-Wolfowitz run test p-value")]
#[command(version)]
struct Cli {
    /// Residual file; the first column of each data line is read.
    #[arg(short, long, default_value = "TestData/residuals.dat")]
    file: PathBuf,

    /// Verbosity level (0 quiet, 1 data, 2 run steps, 3 p-value terms).
    #[arg(short, long, default_value_t = 0)]
    info: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let verbosity = Verbosity::from(cli.info);

    println!("{}", "runs-test".bold());
    println!("  file: {}", cli.file.display());
    println!("  info: {}", u8::from(verbosity));
    println!();

    let residuals = read_residuals(&cli.file)?;
    let report = run_test(&residuals)
        .with_context(|| format!("Run test failed for {}", cli.file.display()))?;

    print_report(&residuals, &report, verbosity);

    Ok(())
}
