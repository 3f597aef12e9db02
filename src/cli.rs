//! Command-line interface definitions for job_feeds.
//!
//! Every argument is optional; running the binary bare reproduces the fixed
//! default behavior.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the job feed aggregator.
///
/// # Examples
///
/// ```sh
/// # Fetch every feed and write ./jobs.json
/// job_feeds
///
/// # Custom output path and a shorter request timeout
/// job_feeds -o /srv/data/jobs.json -t 10
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path of the JSON file to write
    #[arg(short, long, default_value = "jobs.json")]
    pub output: PathBuf,

    /// Per-request HTTP timeout in seconds
    #[arg(short, long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,
}
