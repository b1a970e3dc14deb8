//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_integrity` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Mapping the run result to an exit code
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use dns_integrity::initialization::{init_logger_with, log_format_from_env};
use dns_integrity::{run_check, Config};

/// Exit code for setup failures (logger, HTTP client, stdout).
const EXIT_FATAL: i32 = 2;

/// Compare system DNS resolution with DoH resolution for potential spoofing detection.
#[derive(Debug, Parser)]
#[command(name = "dns_integrity", version, about)]
struct Cli {
    /// One or more domain names to check.
    #[arg(value_name = "DOMAIN", required = true, num_args = 1..)]
    domains: Vec<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("dns_integrity error: {:#}", e);
            process::exit(EXIT_FATAL);
        }
    }
}

async fn run(cli: Cli) -> Result<i32> {
    let config = Config {
        domains: cli.domains,
        log_format: log_format_from_env(),
        ..Default::default()
    };

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let mut stdout = std::io::stdout().lock();
    let report = run_check(config, &mut stdout).await?;
    Ok(report.exit_code())
}
