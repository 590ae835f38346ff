//! Inactivity threshold math and classification

use crate::types::{ActivityError, ActivitySnapshot, Result};
use chrono::{DateTime, Duration, Utc};

const MICROS_PER_DAY: f64 = 86_400_000_000.0;

/// The instant `min_days_inactive` days before `now`.
///
/// Fractional days are honoured down to the microsecond, so `1.0 / 24.0`
/// is exactly one hour.
pub fn inactivity_threshold(now: DateTime<Utc>, min_days_inactive: f64) -> Result<DateTime<Utc>> {
    if !min_days_inactive.is_finite() {
        return Err(ActivityError::InvalidThreshold(min_days_inactive));
    }

    let micros = (min_days_inactive * MICROS_PER_DAY).round();
    if micros.abs() >= i64::MAX as f64 {
        return Err(ActivityError::ThresholdOutOfRange {
            days: min_days_inactive,
        });
    }

    now.checked_sub_signed(Duration::microseconds(micros as i64))
        .ok_or(ActivityError::ThresholdOutOfRange {
            days: min_days_inactive,
        })
}

/// A company with no known activity, or whose last activity is at or before
/// the threshold, is inactive.
pub fn is_inactive(last_modified: Option<DateTime<Utc>>, threshold: DateTime<Utc>) -> bool {
    match last_modified {
        None => true,
        Some(last) => last <= threshold,
    }
}

/// Labels of every inactive company in `snapshot`, in label order.
pub fn classify_inactive(snapshot: &ActivitySnapshot, threshold: DateTime<Utc>) -> Vec<String> {
    snapshot
        .iter()
        .filter(|(_, last_modified)| is_inactive(**last_modified, threshold))
        .map(|(company, _)| company.clone())
        .collect()
}
