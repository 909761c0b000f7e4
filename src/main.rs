//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_probe` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! Exit codes: 0 when at least one backend answered, 1 when the domain could
//! not be resolved (or setup failed), 2 when every probe failed.
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_probe::initialization::{init_crypto_provider, init_logger_with};
use domain_probe::output::{format_fastest, format_result, format_summary};
use domain_probe::{select_fastest, Config, OutputFormat, Prober, SweepSummary};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), e.g. DOMAIN_PROBE_TIMEOUT_MS
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")?;

    init_crypto_provider();

    let prober = Prober::from_config(&config).context("Failed to initialize prober")?;

    let results = match prober.probe_all(&config.domain, config.timeout()).await {
        Ok(results) => results,
        Err(e) => {
            eprintln!("domain_probe error: {e}");
            process::exit(1);
        }
    };

    for result in &results {
        println!("{}", format_result(result, config.format));
    }

    // JSON mode keeps stdout to one object per address
    let summary = SweepSummary::from_results(&results);
    let mut trailer = Vec::new();
    if config.fastest {
        trailer.push(format_fastest(select_fastest(&results)));
    }
    trailer.push(format_summary(&summary));
    for line in trailer {
        match config.format {
            OutputFormat::Plain => println!("{line}"),
            OutputFormat::Json => eprintln!("{line}"),
        }
    }

    if summary.all_failed() {
        process::exit(2);
    }
    Ok(())
}
