use crate::fetcher::Fetcher;
use crate::traits::FeedParser;
use crate::types::{FeedSource, FetchConfig, ParsedEntry, ParsedFeed, RawTimestamp, Result};
use feed_rs::parser;
use std::fs;
use tracing::debug;

/// `FeedParser` backed by the `feed-rs` crate.
///
/// Reads files from disk, takes raw content as-is and downloads URLs with
/// the configured `Fetcher`. Read and fetch failures are reported the same
/// way as syntax errors.
pub struct FeedRsParser {
    fetcher: Fetcher,
}

impl FeedRsParser {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    pub fn from_config(config: FetchConfig) -> Result<Self> {
        Ok(Self::new(Fetcher::new(config)?))
    }

    pub fn parse_document(content: &[u8]) -> ParsedFeed {
        debug!("Parsing feed content ({} bytes)", content.len());

        let feed = match parser::parse(content) {
            Ok(feed) => feed,
            Err(e) => return ParsedFeed::malformed(e.to_string()),
        };

        let entries: Vec<ParsedEntry> = feed
            .entries
            .into_iter()
            .map(|entry| ParsedEntry {
                title: entry.title.map(|t| t.content),
                published: entry.published.map(RawTimestamp::from),
            })
            .collect();

        debug!("Parsed feed with {} entries", entries.len());

        // feed-rs has no equivalent of a document-level "modified" value.
        ParsedFeed {
            title: feed.title.map(|t| t.content),
            bozo: false,
            bozo_exception: None,
            updated: feed.updated.map(RawTimestamp::from),
            published: feed.published.map(RawTimestamp::from),
            modified: None,
            entries,
        }
    }
}

impl FeedParser for FeedRsParser {
    fn parse(&self, source: &FeedSource) -> ParsedFeed {
        match source {
            FeedSource::Content(content) => Self::parse_document(content.as_bytes()),
            FeedSource::File(path) => match fs::read(path) {
                Ok(content) => Self::parse_document(&content),
                Err(e) => ParsedFeed::malformed(format!("{}: {}", path.display(), e)),
            },
            FeedSource::Url(url) => match self.fetcher.fetch_feed(url) {
                Ok(content) => Self::parse_document(&content),
                Err(e) => ParsedFeed::malformed(e.to_string()),
            },
        }
    }
}
