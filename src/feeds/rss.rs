//! RSS 2.0 envelope shared by the XML feeds.
//!
//! Only the `<rss><channel><item>` skeleton lives here. Each feed declares its
//! own item type, so a field one feed carries (e.g. `<company>`) never leaks
//! into another feed's shape.

use crate::error::ParseError;
use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Deserialize)]
struct Rss<I> {
    channel: Channel<I>,
}

#[derive(Debug, Deserialize)]
struct Channel<I> {
    #[serde(rename = "item", default = "Vec::new")]
    items: Vec<I>,
}

/// Text content of an element whose attributes we do not care about,
/// e.g. `<guid isPermaLink="false">…</guid>`.
#[derive(Debug, Default, Deserialize)]
pub(super) struct Text {
    #[serde(rename = "$text", default)]
    pub value: String,
}

/// Keep the last occurrence of a repeated element, or the default when the
/// element is absent.
///
/// Item fields are decoded as sequences so a stray duplicate (two `<title>`s)
/// overrides the earlier value instead of failing the whole document.
pub(super) fn last<T: Default>(values: Vec<T>) -> T {
    values.into_iter().next_back().unwrap_or_default()
}

/// Decode an RSS document and return its channel items.
///
/// A document without any `<item>` is valid and yields an empty list.
pub(super) fn decode_items<I: DeserializeOwned>(raw: &[u8]) -> Result<Vec<I>, ParseError> {
    let rss: Rss<I> = quick_xml::de::from_reader(raw)?;
    Ok(rss.channel.items)
}
