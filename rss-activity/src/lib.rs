pub mod types;
pub mod traits;
pub mod dates;
pub mod diagnostics;
pub mod activity;
pub mod aggregator;
pub mod fetcher;
pub mod parser;
pub mod config;

pub use types::*;
pub use traits::{FeedParser, TimestampFields};
pub use dates::{get_date, get_entry_last_modified, max_date};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticScope, DiagnosticSink, TracingSink};
pub use activity::{classify_inactive, inactivity_threshold, is_inactive};
pub use aggregator::ActivityAggregator;
pub use fetcher::Fetcher;
pub use parser::FeedRsParser;
pub use config::ActivityConfig;
