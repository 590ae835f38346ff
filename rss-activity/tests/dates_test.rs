mod common;

use chrono::{TimeZone, Utc};
use common::{day, entry, utc_day};
use rss_activity::{
    get_date, get_entry_last_modified, max_date, ActivityError, ParsedFeed, RawTimestamp,
    TimestampField,
};

#[test]
fn test_get_date_converts_present_field() {
    let feed = ParsedFeed {
        published: Some(RawTimestamp::date(1970, 1, 1)),
        ..Default::default()
    };

    let actual = get_date(&feed, TimestampField::Published).unwrap();
    assert_eq!(actual, Some(Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap()));
}

#[test]
fn test_get_date_keeps_time_of_day() {
    let feed = ParsedFeed {
        modified: Some(RawTimestamp::new(2021, 6, 30, 23, 59, 58)),
        ..Default::default()
    };

    let actual = get_date(&feed, TimestampField::Modified).unwrap();
    assert_eq!(actual, Some(Utc.with_ymd_and_hms(2021, 6, 30, 23, 59, 58).unwrap()));
}

#[test]
fn test_get_date_missing_field() {
    let feed = ParsedFeed::default();

    for field in [
        TimestampField::Updated,
        TimestampField::Published,
        TimestampField::Modified,
    ] {
        assert_eq!(get_date(&feed, field).unwrap(), None);
    }
}

#[test]
fn test_get_date_entry_has_no_updated_slot() {
    let item = entry(Some(day(2)));

    assert_eq!(get_date(&item, TimestampField::Updated).unwrap(), None);
    assert_eq!(get_date(&item, TimestampField::Modified).unwrap(), None);
    assert_eq!(get_date(&item, TimestampField::Published).unwrap(), Some(utc_day(2)));
}

#[test]
fn test_get_date_rejects_impossible_date() {
    let feed = ParsedFeed {
        updated: Some(RawTimestamp::date(1970, 2, 30)),
        ..Default::default()
    };

    match get_date(&feed, TimestampField::Updated) {
        Err(ActivityError::InvalidTimestamp { field, .. }) => {
            assert_eq!(field, TimestampField::Updated)
        }
        other => panic!("expected InvalidTimestamp, got {:?}", other),
    }
}

#[test]
fn test_get_date_rejects_impossible_time() {
    let feed = ParsedFeed {
        published: Some(RawTimestamp::new(1970, 1, 1, 25, 0, 0)),
        ..Default::default()
    };

    assert!(get_date(&feed, TimestampField::Published).is_err());
}

#[test]
fn test_get_date_leap_second_rolls_over() {
    let feed = ParsedFeed {
        published: Some(RawTimestamp::new(2016, 12, 31, 23, 59, 60)),
        ..Default::default()
    };

    let actual = get_date(&feed, TimestampField::Published).unwrap();
    assert_eq!(actual, Some(Utc.with_ymd_and_hms(2017, 1, 1, 0, 0, 0).unwrap()));
}

#[test]
fn test_get_date_leap_second_past_calendar_end() {
    let feed = ParsedFeed {
        published: Some(RawTimestamp::new(262142, 12, 31, 23, 59, 60)),
        ..Default::default()
    };

    assert!(matches!(
        get_date(&feed, TimestampField::Published),
        Err(ActivityError::InvalidTimestamp { .. })
    ));
}

#[test]
fn test_max_date() {
    let earlier = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
    let later = Utc.with_ymd_and_hms(1971, 1, 1, 0, 0, 0).unwrap();

    assert_eq!(max_date(Some(earlier), Some(later)), Some(later));
    assert_eq!(max_date(Some(later), Some(earlier)), Some(later));
    assert_eq!(max_date(Some(later), Some(later)), Some(later));
}

#[test]
fn test_max_date_one_missing() {
    let present = utc_day(1);

    assert_eq!(max_date(None, Some(present)), Some(present));
    assert_eq!(max_date(Some(present), None), Some(present));
}

#[test]
fn test_max_date_both_missing() {
    assert_eq!(max_date(None, None), None);
}

#[test]
fn test_max_date_fold_ignores_order() {
    let dates = [None, Some(utc_day(2)), None, Some(utc_day(5)), Some(utc_day(1))];

    let forward = dates.iter().fold(None, |acc, d| max_date(acc, *d));
    let backward = dates.iter().rev().fold(None, |acc, d| max_date(acc, *d));

    assert_eq!(forward, Some(utc_day(5)));
    assert_eq!(forward, backward);
}

#[test]
fn test_get_entry_last_modified() {
    assert_eq!(get_entry_last_modified(&entry(Some(day(1)))).unwrap(), Some(utc_day(1)));
}

#[test]
fn test_get_entry_last_modified_missing_date() {
    assert_eq!(get_entry_last_modified(&entry(None)).unwrap(), None);
}

#[test]
fn test_get_entry_last_modified_multiple_entries() {
    let entries = vec![entry(None), entry(Some(day(2))), entry(None), entry(Some(day(1)))];

    let actual: Vec<_> = entries
        .iter()
        .map(|e| get_entry_last_modified(e).unwrap())
        .collect();

    assert_eq!(actual, vec![None, Some(utc_day(2)), None, Some(utc_day(1))]);
}
