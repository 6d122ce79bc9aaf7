//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `websec_analyzer` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use websec_analyzer::initialization::init_logger_with;
use websec_analyzer::{run_analysis, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let config: Config = Opt::parse().into();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_analysis(config).await {
        Ok(report) if report.all_rejected() => {
            eprintln!(
                "websec_analyzer: none of the {} URL{} could be analyzed",
                report.total_urls,
                if report.total_urls == 1 { "" } else { "s" }
            );
            process::exit(1);
        }
        Ok(report) => {
            if report.failed_writes > 0 {
                eprintln!(
                    "websec_analyzer: {} report{} could not be written",
                    report.failed_writes,
                    if report.failed_writes == 1 { "" } else { "s" }
                );
            }
            if !report.written.is_empty() {
                eprintln!(
                    "Wrote {} report{} ({} unreachable, {} rejected) in {:.1}s",
                    report.written.len(),
                    if report.written.len() == 1 { "" } else { "s" },
                    report.unreachable,
                    report.rejected,
                    report.elapsed_seconds
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("websec_analyzer error: {:#}", e);
            process::exit(1);
        }
    }
}
