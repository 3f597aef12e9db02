//! RemoteOK RSS feed.
//!
//! Same RSS envelope as Stack Overflow but items add a `<company>` element
//! and `pubDate` is ISO 8601 with a numeric offset, e.g.
//! `2020-03-19T10:02:04+00:00`. The feed pads several text fields with
//! whitespace; identifiers, titles, company and link are trimmed, the
//! description is passed through untouched. A repeated element inside an
//! item keeps its last value.

use super::rss::{Text, decode_items, last};
use crate::error::ParseError;
use crate::models::Record;
use crate::utils::parse_offset_date;
use serde::Deserialize;
use tracing::debug;

/// Source label stamped on every record from this feed.
pub const SOURCE: &str = "RemoteOK Jobs";

const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

#[derive(Debug, Default, Deserialize)]
struct Item {
    #[serde(default)]
    guid: Vec<Text>,
    #[serde(rename = "pubDate", default)]
    pub_date: Vec<String>,
    #[serde(default)]
    title: Vec<String>,
    #[serde(default)]
    company: Vec<String>,
    #[serde(default)]
    link: Vec<String>,
    #[serde(default)]
    description: Vec<String>,
}

fn trimmed(values: Vec<String>) -> String {
    last(values).trim().to_string()
}

impl Item {
    fn into_record(self) -> Record {
        let created_at_raw = last(self.pub_date);
        let created_at = parse_offset_date(&created_at_raw, DATE_FORMAT);

        Record {
            id: last(self.guid).value.trim().to_string(),
            created_at_raw,
            created_at,
            company: trimmed(self.company),
            position: trimmed(self.title),
            apply_url: trimmed(self.link),
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
