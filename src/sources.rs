//! The fixed list of feeds a run pulls from.

use crate::feeds::Feed;
use url::Url;

/// A fetch target paired with the adapter that understands its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    pub url: Url,
    pub feed: Feed,
}

impl SourceSpec {
    pub fn new(url: Url, feed: Feed) -> Self {
        Self { url, feed }
    }
}

const DEFAULT_SOURCES: &[(&str, Feed)] = &[
    (
        "https://jobs.github.com/positions.json?&location=remote",
        Feed::GithubJobs,
    ),
    ("https://stackoverflow.com/jobs/feed?r=true", Feed::StackOverflow),
    ("https://remoteok.io/remote-jobs.rss", Feed::RemoteOk),
];

/// Build the statically configured source list.
pub fn default_sources() -> Result<Vec<SourceSpec>, url::ParseError> {
    DEFAULT_SOURCES
        .iter()
        .map(|&(url, feed)| Ok(SourceSpec::new(Url::parse(url)?, feed)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sources_cover_every_feed() {
        let sources = default_sources().unwrap();
        assert_eq!(sources.len(), 3);
        let feeds: Vec<Feed> = sources.iter().map(|s| s.feed).collect();
        assert_eq!(
            feeds,
            vec![Feed::GithubJobs, Feed::StackOverflow, Feed::RemoteOk]
        );
        assert!(sources.iter().all(|s| s.url.scheme() == "https"));
    }

    #[test]
    fn test_default_source_hosts() {
        let hosts: Vec<String> = default_sources()
            .unwrap()
            .iter()
            .filter_map(|s| s.url.host_str().map(str::to_string))
            .collect();
        assert_eq!(
            hosts,
            vec!["jobs.github.com", "stackoverflow.com", "remoteok.io"]
        );
    }
}
