use crate::activity::{classify_inactive, inactivity_threshold};
use crate::dates::{get_date, get_entry_last_modified, max_date};
use crate::diagnostics::{Diagnostic, DiagnosticScope, DiagnosticSink, TracingSink};
use crate::traits::FeedParser;
use crate::types::{
    ActivitySnapshot, CompanyFeeds, FeedSource, Result, TimestampField, UNTITLED_COMPANY,
};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

const FEED_DATE_FIELDS: [TimestampField; 3] = [
    TimestampField::Updated,
    TimestampField::Published,
    TimestampField::Modified,
];

/// Computes most-recent activity at feed and company level and flags
/// companies that have gone quiet.
pub struct ActivityAggregator<P, S = TracingSink> {
    parser: P,
    sink: S,
}

impl<P: FeedParser> ActivityAggregator<P, TracingSink> {
    pub fn new(parser: P) -> Self {
        Self::with_sink(parser, TracingSink)
    }
}

impl<P: FeedParser, S: DiagnosticSink> ActivityAggregator<P, S> {
    pub fn with_sink(parser: P, sink: S) -> Self {
        Self { parser, sink }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Most recent date found anywhere in one feed.
    ///
    /// Feed-level `updated`, `published` and `modified` values are combined
    /// with every entry's published date. A malformed feed is reported and
    /// yields `None` without looking at any dates.
    pub fn get_feed_last_modified(&self, source: &FeedSource) -> Result<Option<DateTime<Utc>>> {
        let feed = self.parser.parse(source);
        let title = feed.title.clone().unwrap_or_else(|| source.to_string());

        if feed.bozo {
            let error = feed
                .bozo_exception
                .unwrap_or_else(|| "unknown parse error".to_string());
            self.sink.emit(Diagnostic::Malformed { title, error });
            return Ok(None);
        }

        let mut last_modified = None;
        for field in FEED_DATE_FIELDS {
            last_modified = max_date(last_modified, get_date(&feed, field)?);
        }

        for entry in &feed.entries {
            last_modified = max_date(last_modified, get_entry_last_modified(entry)?);
        }

        match last_modified {
            Some(date) => debug!("Feed \"{}\" last modified at {}", title, date),
            None => self.sink.emit(Diagnostic::NoDate {
                title,
                scope: DiagnosticScope::Feed,
            }),
        }

        Ok(last_modified)
    }

    /// Most recent date across all of a company's feeds.
    ///
    /// Each dateless feed reports on its own; the company reports once more
    /// if none of its feeds produced a date.
    pub fn get_company_last_modified(
        &self,
        feed_sources: &[FeedSource],
        company_label: Option<&str>,
    ) -> Result<Option<DateTime<Utc>>> {
        let company = company_label.unwrap_or(UNTITLED_COMPANY);

        let mut last_modified = None;
        for source in feed_sources {
            last_modified = max_date(last_modified, self.get_feed_last_modified(source)?);
        }

        if last_modified.is_none() {
            self.sink.emit(Diagnostic::NoDate {
                title: company.to_string(),
                scope: DiagnosticScope::Company,
            });
        }

        Ok(last_modified)
    }

    /// Last activity of every company, visiting each one exactly once.
    pub fn get_companies_last_modified(&self, companies: &CompanyFeeds) -> Result<ActivitySnapshot> {
        let mut snapshot = ActivitySnapshot::new();

        for (company, feed_sources) in companies {
            let last_modified = self.get_company_last_modified(feed_sources, Some(company.as_str()))?;
            snapshot.insert(company.clone(), last_modified);
        }

        let dated = snapshot.values().filter(|d| d.is_some()).count();
        info!(
            "Resolved activity for {} companies ({} with a known date)",
            snapshot.len(),
            dated
        );

        Ok(snapshot)
    }

    /// Companies with no activity in the last `min_days_inactive` days.
    pub fn get_inactive_companies(
        &self,
        companies: &CompanyFeeds,
        min_days_inactive: f64,
    ) -> Result<Vec<String>> {
        self.get_inactive_companies_at(companies, min_days_inactive, Utc::now())
    }

    /// Same as `get_inactive_companies`, measured from `now`.
    pub fn get_inactive_companies_at(
        &self,
        companies: &CompanyFeeds,
        min_days_inactive: f64,
        now: DateTime<Utc>,
    ) -> Result<Vec<String>> {
        let threshold = inactivity_threshold(now, min_days_inactive)?;
        let snapshot = self.get_companies_last_modified(companies)?;
        let inactive = classify_inactive(&snapshot, threshold);

        info!(
            "{}/{} companies inactive since {}",
            inactive.len(),
            snapshot.len(),
            threshold
        );

        Ok(inactive)
    }
}
