//! Date extraction and reconciliation helpers

use crate::traits::TimestampFields;
use crate::types::{ActivityError, ParsedEntry, RawTimestamp, Result, TimestampField};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

/// Returns the timestamp stored in `field`, or `None` if the record has no
/// value there.
///
/// A value that is present but does not describe a real calendar time is an
/// error: it means the parser handed over data it should not have.
pub fn get_date<R>(record: &R, field: TimestampField) -> Result<Option<DateTime<Utc>>>
where
    R: TimestampFields + ?Sized,
{
    match record.raw_timestamp(field) {
        None => Ok(None),
        Some(raw) => to_datetime(raw)
            .map(Some)
            .map_err(|reason| ActivityError::InvalidTimestamp { field, reason }),
    }
}

/// The later of two optional timestamps; an absent side never wins.
pub fn max_date(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    match (a, b) {
        (None, None) => None,
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (Some(a), Some(b)) => Some(a.max(b)),
    }
}

/// Last activity of a single entry.
///
/// Only the published date counts here; entry-level "updated" values are
/// too sparsely populated to be trusted and are left to the feed level.
pub fn get_entry_last_modified(entry: &ParsedEntry) -> Result<Option<DateTime<Utc>>> {
    get_date(entry, TimestampField::Published)
}

fn to_datetime(raw: &RawTimestamp) -> std::result::Result<DateTime<Utc>, String> {
    let date = NaiveDate::from_ymd_opt(raw.year, raw.month, raw.day).ok_or_else(|| {
        format!("{:04}-{:02}-{:02} is not a calendar date", raw.year, raw.month, raw.day)
    })?;

    // A leap second rolls over into the next minute.
    let (second, carry) = match raw.second {
        60 => (59, Duration::seconds(1)),
        s => (s, Duration::zero()),
    };

    let time = date.and_hms_opt(raw.hour, raw.minute, second).ok_or_else(|| {
        format!(
            "{:02}:{:02}:{:02} is not a time of day",
            raw.hour, raw.minute, raw.second
        )
    })?;

    let naive: NaiveDateTime = time
        .checked_add_signed(carry)
        .ok_or_else(|| {
            format!(
                "{:04}-{:02}-{:02} leap second overflows the calendar",
                raw.year, raw.month, raw.day
            )
        })?;
    Ok(naive.and_utc())
}
