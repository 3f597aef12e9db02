//! Output generation for aggregated records.
//!
//! - [`json`]: writes the run's records to a single JSON file
//!
//! # Output Structure
//!
//! ```text
//! jobs.json   # array of every record from every source that succeeded
//! ```

pub mod json;
