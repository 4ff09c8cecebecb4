//! Command-line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use probe_infrastructure::OutputFormat;

/// Declarative HTTP API test runner.
#[derive(Debug, Parser)]
#[command(name = "probe", version, about)]
pub struct Cli {
    /// Configuration file (defaults to ./probe.toml or ./probe.yaml if present).
    #[arg(long, global = true, env = "PROBE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run every test in a suite file.
    Run(RunArgs),
}

/// Arguments for `probe run`.
#[derive(Debug, clap::Args)]
pub struct RunArgs {
    /// Path to the YAML suite.
    pub file: PathBuf,

    /// Maximum number of tests in flight (0 means the default of 10).
    #[arg(short = 'c', long)]
    pub concurrency: Option<usize>,

    /// Output format: console or json.
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}
