mod config;
mod export;
mod fetcher;
mod models;
mod types;

use std::io::stderr;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::{info, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::{Args, Config};
use crate::export::{flatten, write_filtered, write_primary};
use crate::fetcher::{MirrorClient, Paginator, StopReason};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(parse_log_level(&args.log_level));

    let config = Config::resolve(args)?;
    info!("Resolved configuration: {config:?}");

    let client = MirrorClient::new().context("Unable to build the HTTP client")?;
    let paginator = Paginator::new(client, config.filter_account.clone(), config.max_records);

    let timer = Instant::now();
    let outcome = paginator.run(&config.base_url, &config.account_id, &Local).await;
    let duration = timer.elapsed();

    info!("Fetched transactions in: {duration:?}");

    if outcome.stop == StopReason::ErrorHalted {
        warn!("Fetching stopped early after {} requests, exporting the records collected so far", outcome.requests);
    }

    let rows = flatten(&outcome.records);
    let primary = write_primary(&config.output_dir, &config.account_id, &rows)
        .context("Unable to write the unfiltered CSV file")?;

    println!("Unfiltered CSV file has been saved as {}", primary.display());

    if let Some(match_string) = &config.match_string {
        let filtered = write_filtered(&config.output_dir, &config.account_id, &primary, match_string)
            .context("Unable to write the filtered CSV file")?;

        println!("Filtered CSV file has been saved as {}", filtered.display());
    }

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout only carries the file confirmations, logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
