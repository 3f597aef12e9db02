//! Data model for normalized job postings.
//!
//! Every feed adapter produces [`Record`]s; nothing downstream of the adapters
//! knows which wire format a posting came from. Field names on the wire use
//! the snake_case names of the published `jobs.json` schema.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A single job posting in the shared, source-agnostic schema.
///
/// Records are built once by an adapter and never mutated afterwards.
/// Fields a feed does not provide are left empty rather than rejected.
///
/// # JSON Schema
///
/// | Rust field       | JSON key           |
/// |------------------|--------------------|
/// | `id`             | `id`               |
/// | `created_at_raw` | `created_at`       |
/// | `created_at`     | `created_datetime` |
/// | `company`        | `company`          |
/// | `company_url`    | `company_url`      |
/// | `location`       | `location`         |
/// | `position`       | `position`         |
/// | `apply_url`      | `how_to_apply`     |
/// | `source`         | `source`           |
/// | `description`    | `description`      |
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier, unique only within its source feed.
    pub id: String,
    /// The date exactly as the feed published it.
    #[serde(rename = "created_at")]
    pub created_at_raw: String,
    /// The parsed publication instant, `None` when the raw date did not parse.
    #[serde(rename = "created_datetime")]
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Hiring company, empty when the feed omits it.
    #[serde(default)]
    pub company: String,
    /// Company homepage, empty when the feed omits it.
    #[serde(default)]
    pub company_url: String,
    /// Job location, empty when the feed omits it.
    #[serde(default)]
    pub location: String,
    /// Job title.
    pub position: String,
    /// Where to apply, or the listing's own URL.
    #[serde(rename = "how_to_apply")]
    pub apply_url: String,
    /// Human-readable name of the feed this record came from.
    pub source: String,
    /// Posting body. Markup is kept as the feed provided it.
    pub description: String,
}
