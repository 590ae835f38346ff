use crate::types::{FeedSource, ParsedEntry, ParsedFeed, RawTimestamp, TimestampField};

/// Turns an opaque feed source into a structured document.
///
/// Implementations never fail: unreadable or ill-formed input is reported
/// through `ParsedFeed::bozo` and `ParsedFeed::bozo_exception`.
pub trait FeedParser {
    fn parse(&self, source: &FeedSource) -> ParsedFeed;
}

impl<P: FeedParser + ?Sized> FeedParser for &P {
    fn parse(&self, source: &FeedSource) -> ParsedFeed {
        (**self).parse(source)
    }
}

/// Records that expose named, optional timestamp slots.
pub trait TimestampFields {
    /// The raw value stored in `field`, or `None` when the slot is absent
    /// or the record has no such slot.
    fn raw_timestamp(&self, field: TimestampField) -> Option<&RawTimestamp>;
}

impl TimestampFields for ParsedFeed {
    fn raw_timestamp(&self, field: TimestampField) -> Option<&RawTimestamp> {
        match field {
            TimestampField::Updated => self.updated.as_ref(),
            TimestampField::Published => self.published.as_ref(),
            TimestampField::Modified => self.modified.as_ref(),
        }
    }
}

impl TimestampFields for ParsedEntry {
    fn raw_timestamp(&self, field: TimestampField) -> Option<&RawTimestamp> {
        match field {
            TimestampField::Published => self.published.as_ref(),
            TimestampField::Updated | TimestampField::Modified => None,
        }
    }
}
