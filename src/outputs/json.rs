//! JSON output of the aggregated records.
//!
//! The whole run is written as a single JSON array. `serde_json` leaves
//! `<`, `>` and `&` alone, so HTML in descriptions stays readable in the file.
//!
//! # Output Structure
//!
//! ```text
//! [
//!   {"id": "...", "created_at": "...", "created_datetime": "...", ...},
//!   ...
//! ]
//! ```

use crate::error::SinkError;
use crate::models::Record;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Writes records to one JSON file, replacing any previous run's output.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `records` and write them to the sink's path.
    ///
    /// The parent directory is created if it does not exist yet. An empty
    /// slice produces `[]`.
    ///
    /// # Arguments
    ///
    /// * `records` - Records to write, in the order they should appear
    ///
    /// # Returns
    ///
    /// `Ok(())` once the file holds the JSON array and a trailing newline.
    /// `SinkError::Encode` if serialization fails, `SinkError::Io` if the
    /// directory or file cannot be written.
    #[instrument(level = "info", skip_all, fields(path = %self.path.display(), count = records.len()))]
    pub async fn persist(&self, records: &[Record]) -> Result<(), SinkError> {
        let mut json = serde_json::to_vec(records)?;
        json.push(b'\n');

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if let Err(e) = fs::create_dir_all(dir).await {
                error!(dir = %dir.display(), error = %e, "Failed to create output dir");
                return Err(e.into());
            }
        }

        fs::write(&self.path, json).await?;
        info!("Wrote JSON output");
        Ok(())
    }
}
