//! GitHub Jobs JSON feed.
//!
//! The endpoint returns a JSON array of postings whose keys already follow
//! the published record schema. Dates look like `Fri Mar 13 18:22:15 UTC 2020`
//! with a space-padded day of month; the weekday name is required but not
//! checked against the date.

use crate::error::ParseError;
use crate::models::Record;
use crate::utils::{parse_utc_date, skip_weekday};
use serde::Deserialize;
use tracing::debug;

/// Source label stamped on every record from this feed.
pub const SOURCE: &str = "Github Jobs";

/// Layout of the date after its leading weekday name.
const DATE_FORMAT: &str = "%b %e %H:%M:%S UTC %Y";

/// One entry of the JSON array as the feed sends it.
///
/// Every field is optional and `null` is treated like a missing key.
#[derive(Debug, Deserialize)]
struct Posting {
    id: Option<String>,
    created_at: Option<String>,
    company: Option<String>,
    company_url: Option<String>,
    location: Option<String>,
    position: Option<String>,
    title: Option<String>,
    how_to_apply: Option<String>,
    url: Option<String>,
    description: Option<String>,
}

impl Posting {
    fn into_record(self) -> Record {
        let created_at_raw = self.created_at.unwrap_or_default();
        let created_at =
            skip_weekday(&created_at_raw).and_then(|rest| parse_utc_date(rest, DATE_FORMAT));
        let apply_url = self
            .how_to_apply
            .filter(|s| !s.is_empty())
            .or(self.url)
            .unwrap_or_default();

        Record {
            id: self.id.unwrap_or_default(),
            created_at_raw,
            created_at,
            company: self.company.unwrap_or_default(),
            company_url: self.company_url.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            position: self.position.or(self.title).unwrap_or_default(),
            apply_url,
            source: SOURCE.to_string(),
            description: self.description.unwrap_or_default(),
        }
    }
}

/// Parse the feed body into records, preserving the feed's order.
pub fn parse(raw: &[u8]) -> Result<Vec<Record>, ParseError> {
    let postings: Vec<Posting> = serde_json::from_slice(raw)?;
    let records: Vec<Record> = postings.into_iter().map(Posting::into_record).collect();
    debug!(count = records.len(), source = SOURCE, "Parsed JSON feed");
    Ok(records)
}
