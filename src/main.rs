//! # job_feeds
//!
//! Pulls remote job postings from several public feeds, normalizes them into
//! one record schema and writes them to a single JSON file.
//!
//! ## Usage
//!
//! ```sh
//! job_feeds -o ./jobs.json
//! ```
//!
//! ## Architecture
//!
//! 1. **Sources**: a fixed table pairs each feed URL with its adapter
//! 2. **Fetching**: every source is fetched in its own task, in parallel
//! 3. **Parsing**: each body goes through its feed's adapter into `Record`s
//! 4. **Merging**: batches are merged after all tasks have finished
//! 5. **Output**: the merged records are written as one JSON array
//!
//! A failing source is logged and skipped; the rest of the run is unaffected.

use clap::Parser;
use std::error::Error;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod aggregate;
mod cli;
mod error;
mod feeds;
mod fetch;
mod models;
mod outputs;
mod sources;
mod utils;

use cli::Cli;
use fetch::HttpFetcher;
use outputs::json::JsonFileSink;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = Instant::now();
    info!("job_feeds starting up");

    let args = Cli::parse();
    debug!(output = %args.output.display(), timeout_secs = args.timeout_secs, "Parsed CLI arguments");

    let specs = sources::default_sources()?;
    let fetcher = Arc::new(HttpFetcher::new(Duration::from_secs(args.timeout_secs))?);

    // ---- Fetch, parse and merge ----
    let records = aggregate::run(fetcher, &specs).await;
    info!(count = records.len(), "Captured records");

    // ---- Output ----
    let sink = JsonFileSink::new(args.output.clone());
    let persisted = sink.persist(&records).await;
    if let Err(ref e) = persisted {
        error!(path = %sink.path().display(), error = %e, "Failed to write JSON output");
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        records = records.len(),
        "Execution complete"
    );

    persisted?;
    Ok(())
}
