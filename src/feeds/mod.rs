//! Feed adapters that turn raw payloads into normalized [`Record`]s.
//!
//! Each submodule understands exactly one upstream format and owns the
//! private wire types it decodes into. [`Feed`] is the tag that selects one
//! of them at runtime.
//!
//! # Supported Feeds
//!
//! | Feed | Module | Format | Date layout |
//! |------|--------|--------|-------------|
//! | GitHub Jobs | [`github`] | JSON array | `Fri Mar 13 18:22:15 UTC 2020` |
//! | Stack Overflow | [`stackoverflow`] | RSS 2.0 | `Thu, 19 Mar 2020 15:29:02 Z` |
//! | RemoteOK | [`remoteok`] | RSS 2.0 | `2020-03-19T10:02:04+00:00` |
//!
//! # Common Patterns
//!
//! Each adapter module exports:
//! - `SOURCE`: the label stamped on its records
//! - `parse(raw)`: decodes a full response body into `Vec<Record>`
//!
//! A payload whose envelope does not decode is a [`ParseError`]. Anything
//! smaller, such as a date that does not match the layout, only empties the
//! affected field.

pub mod github;
pub mod remoteok;
mod rss;
pub mod stackoverflow;

use crate::error::ParseError;
use crate::models::Record;

/// The payload format a source speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    GithubJobs,
    StackOverflow,
    RemoteOk,
}

impl Feed {
    /// Human-readable name stamped on records from this feed.
    pub fn label(self) -> &'static str {
        match self {
            Feed::GithubJobs => github::SOURCE,
            Feed::StackOverflow => stackoverflow::SOURCE,
            Feed::RemoteOk => remoteok::SOURCE,
        }
    }

    /// Decode one unmodified response body.
    pub fn parse(self, raw: &[u8]) -> Result<Vec<Record>, ParseError> {
        match self {
            Feed::GithubJobs => github::parse(raw),
            Feed::StackOverflow => stackoverflow::parse(raw),
            Feed::RemoteOk => remoteok::parse(raw),
        }
    }
}
