use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// Label used for a company when the caller does not supply one.
pub const UNTITLED_COMPANY: &str = "(untitled)";

/// Broken-down calendar time as reported by the feed-parsing collaborator.
///
/// Components are not validated on construction; an out-of-range value is
/// only detected when the timestamp is converted by `dates::get_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTimestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl RawTimestamp {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight UTC on the given day.
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }
}

impl From<DateTime<Utc>> for RawTimestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
        }
    }
}

/// Named timestamp slots a parsed record may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampField {
    Updated,
    Published,
    Modified,
}

impl TimestampField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimestampField::Updated => "updated",
            TimestampField::Published => "published",
            TimestampField::Modified => "modified",
        }
    }
}

impl fmt::Display for TimestampField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of parsing one feed source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFeed {
    pub title: Option<String>,
    /// Set when the document could not be read or was not well-formed.
    pub bozo: bool,
    pub bozo_exception: Option<String>,
    pub updated: Option<RawTimestamp>,
    pub published: Option<RawTimestamp>,
    pub modified: Option<RawTimestamp>,
    pub entries: Vec<ParsedEntry>,
}

impl ParsedFeed {
    /// A feed that failed to parse, carrying the collaborator's error text.
    pub fn malformed(error: impl Into<String>) -> Self {
        Self {
            bozo: true,
            bozo_exception: Some(error.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedEntry {
    pub title: Option<String>,
    pub published: Option<RawTimestamp>,
}

/// Opaque reference to one RSS/Atom/JSON Feed document.
///
/// Text starting with `<` or `{` (after any byte-order mark) is inline content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum FeedSource {
    Url(Url),
    File(PathBuf),
    Content(String),
}

impl From<String> for FeedSource {
    fn from(raw: String) -> Self {
        let body = raw.trim_start_matches('\u{feff}').trim_start();
        if body.starts_with('<') || body.starts_with('{') {
            return FeedSource::Content(raw);
        }

        match Url::parse(&raw) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => FeedSource::Url(url),
            Ok(url) if url.scheme() == "file" => match url.to_file_path() {
                Ok(path) => FeedSource::File(path),
                Err(_) => FeedSource::File(PathBuf::from(raw)),
            },
            _ => FeedSource::File(PathBuf::from(raw)),
        }
    }
}

impl From<&str> for FeedSource {
    fn from(raw: &str) -> Self {
        FeedSource::from(raw.to_string())
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedSource::Url(url) => f.write_str(url.as_str()),
            FeedSource::File(path) => write!(f, "{}", path.display()),
            FeedSource::Content(content) => f.write_str(content),
        }
    }
}

/// Company label mapped to the feeds that company publishes.
pub type CompanyFeeds = BTreeMap<String, Vec<FeedSource>>;

/// Most recent activity per company; `None` when no date was found.
pub type ActivitySnapshot = BTreeMap<String, Option<DateTime<Utc>>>;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_feed_size_mb: usize,
    pub follow_redirects: bool,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "RSS-Activity/0.1".to_string(),
            timeout_seconds: 30,
            max_feed_size_mb: 10,
            follow_redirects: true,
            max_redirects: 5,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ActivityError {
    #[error("Invalid {field} timestamp: {reason}")]
    InvalidTimestamp {
        field: TimestampField,
        reason: String,
    },

    #[error("Inactivity threshold must be a finite number of days, got {0}")]
    InvalidThreshold(f64),

    #[error("Inactivity threshold of {days} days is out of range")]
    ThresholdOutOfRange { days: f64 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} fetching {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Feed size exceeds limit: {size_mb}MB")]
    FeedTooLarge { size_mb: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ActivityError>;
