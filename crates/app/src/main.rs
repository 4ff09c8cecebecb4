//! Probe - Main Entry Point
//!
//! Loads configuration and a YAML suite, runs it against the target API
//! and reports the results.

mod cli;
mod progress;

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use probe_application::{RunOptions, SuiteRunner, count_failures};
use probe_infrastructure::{
    ConsoleFormatter, JsonFormatter, OutputFormat, ProbeConfig, ReqwestHttpClient, load_suite,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command, RunArgs};
use crate::progress::ProgressSink;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match ProbeConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize tracing; RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let outcome = match cli.command {
        Command::Run(args) => run(config, args).await,
    };

    match outcome {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Runs one suite and returns the number of failed tests.
async fn run(config: ProbeConfig, args: RunArgs) -> anyhow::Result<usize> {
    let config = config
        .with_max_concurrent(args.concurrency)
        .with_format(args.format);

    let suite = load_suite(&args.file)
        .await
        .with_context(|| format!("failed to load suite {}", args.file.display()))?;
    tracing::info!(
        file = %args.file.display(),
        tests = suite.len(),
        max_concurrent = config.max_concurrent,
        "suite loaded"
    );

    let client = ReqwestHttpClient::new()?;
    let mut options = RunOptions::new(config.max_concurrent);

    let console = ConsoleFormatter::new();
    if config.format == OutputFormat::Console {
        let sink = ProgressSink::new(io::stdout());
        options = options.with_progress(move |result| {
            sink.emit_or_warn(&console.format_result(result));
        });
    }

    let runner = SuiteRunner::new(Arc::new(client), options);
    let results = runner.run_suite(&suite).await?;
    let failed = count_failures(&results);

    let mut out = io::stdout().lock();
    match config.format {
        OutputFormat::Console => {
            write!(out, "{}", console.format_summary(results.len(), failed))?;
        }
        OutputFormat::Json => {
            let json = JsonFormatter::new().render(&results, chrono::Utc::now())?;
            write!(out, "{json}")?;
        }
    }
    out.flush()?;

    Ok(failed)
}
