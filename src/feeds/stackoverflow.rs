//! Stack Overflow Jobs RSS feed.
//!
//! Items carry no company or location element, so those fields stay empty.
//! `pubDate` uses an RFC 1123 layout with a literal `Z` zone, e.g.
//! `Thu, 19 Mar 2020 15:29:02 Z`. A repeated element inside an item keeps
//! its last value.

use super::rss::{Text, decode_items, last};
use crate::error::ParseError;
use crate::models::Record;
use crate::utils::{parse_utc_date, skip_weekday};
use serde::Deserialize;
use tracing::debug;

/// Source label stamped on every record from this feed.
pub const SOURCE: &str = "Stack Overflow";

/// Layout of the date after its leading weekday name.
const DATE_FORMAT: &str = "%e %b %Y %H:%M:%S Z";

#[derive(Debug, Deserialize)]
struct Item {
    #[serde(default)]
    guid: Vec<Text>,
    #[serde(rename = "pubDate", default)]
    pub_date: Vec<String>,
    #[serde(default)]
    title: Vec<String>,
    #[serde(default)]
    link: Vec<String>,
    #[serde(default)]
    description: Vec<String>,
}

impl Item {
    fn into_record(self) -> Record {
        let created_at_raw = last(self.pub_date);
        let created_at =
            skip_weekday(&created_at_raw).and_then(|rest| parse_utc_date(rest, DATE_FORMAT));

        Record {
            id: last(self.guid).value,
            created_at_raw,
            created_at,
            position: last(self.title),
            apply_url: last(self.link),
            source: SOURCE.to_string(),
            description: last(self.description),
            ..Record::default()
        }
    }
}

/// Parse the feed body into records, preserving item order.
pub fn parse(raw: &[u8]) -> Result<Vec<Record>, ParseError> {
    let items: Vec<Item> = decode_items(raw)?;
    let records: Vec<Record> = items.into_iter().map(Item::into_record).collect();
    debug!(count = records.len(), source = SOURCE, "Parsed RSS feed");
    Ok(records)
}
