#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rss_activity::{FeedParser, FeedSource, ParsedEntry, ParsedFeed, RawTimestamp};
use std::collections::HashMap;
use std::sync::{Mutex, Once};

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Serves canned documents keyed by the source's string form and records
/// every source it is asked to parse.
#[derive(Default)]
pub struct StubParser {
    feeds: HashMap<String, ParsedFeed>,
    calls: Mutex<Vec<String>>,
}

impl StubParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed(mut self, source: &str, feed: ParsedFeed) -> Self {
        self.feeds.insert(source.to_string(), feed);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl FeedParser for StubParser {
    fn parse(&self, source: &FeedSource) -> ParsedFeed {
        let key = source.to_string();
        self.calls.lock().unwrap().push(key.clone());
        self.feeds
            .get(&key)
            .cloned()
            .unwrap_or_else(|| ParsedFeed::malformed(format!("no stub for {}", key)))
    }
}

pub fn day(day: u32) -> RawTimestamp {
    RawTimestamp::date(1970, 1, day)
}

pub fn utc_day(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1970, 1, day, 0, 0, 0).unwrap()
}

pub fn entry(published: Option<RawTimestamp>) -> ParsedEntry {
    ParsedEntry {
        title: Some("Item".to_string()),
        published,
    }
}

/// A well-formed feed with the given channel `updated` value and entries.
pub fn feed(title: &str, updated: Option<RawTimestamp>, entries: Vec<ParsedEntry>) -> ParsedFeed {
    ParsedFeed {
        title: Some(title.to_string()),
        updated,
        entries,
        ..Default::default()
    }
}

pub fn undated_feed(title: &str) -> ParsedFeed {
    feed(title, None, vec![entry(None), entry(None)])
}

pub fn rss_document(channel_extra: &str, items: &[Option<&str>]) -> String {
    let items: String = items
        .iter()
        .enumerate()
        .map(|(i, pub_date)| {
            let date = pub_date
                .map(|d| format!("<pubDate>{}</pubDate>", d))
                .unwrap_or_default();
            format!(
                "<item><title>Item {}</title><link>https://example.com/{}</link>{}</item>",
                i + 1,
                i + 1,
                date
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>My Feed</title>
    <link>https://example.com</link>
    <description>Test feed</description>
    {}
    {}
  </channel>
</rss>"#,
        channel_extra, items
    )
}
