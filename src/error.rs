//! Error types for each stage of the pipeline.
//!
//! Failures are scoped to the stage that produced them so the aggregator can
//! decide what a failure costs: a [`SourceError`] drops one feed's records,
//! a [`SinkError`] loses the output file but not the run's summary.

use thiserror::Error;

/// Failure to retrieve a feed body.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// Failure to decode the envelope of a feed payload.
///
/// Problems inside a single field never surface here; they degrade the field.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed XML payload: {0}")]
    Xml(#[from] quick_xml::de::DeError),
}

/// Everything that can make one source contribute zero records.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Failure to write the aggregated records.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}
