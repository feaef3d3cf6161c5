//! Build the cumulative skills-over-time series.
//!
//! Records are bucketed by their UTC calendar date, buckets are walked
//! in ascending date order, and a running total is emitted per date.
//!
//! Example: two skills on 2024-01-01 and one on 2024-01-03 give
//! `[(2024-01-01, 2), (2024-01-03, 3)]`.

use crate::parser::schema::{CumulativePoint, CumulativeSeries, SkillRecord};
use crate::utils::config::{DATE_FORMAT, NAIVE_DATETIME_FORMATS, OFFSET_DATETIME_FORMATS};
use crate::utils::error::AggregateError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use log::debug;
use serde_json::Value;
use std::collections::BTreeMap;

/// Normalize a raw `dateGained` value to its UTC calendar date
///
/// **Public** - the single date rule used for bucketing
///
/// Timestamps with an offset are converted to UTC first; timestamps
/// without one are read as UTC. Returns `None` for anything unparsable.
pub fn normalize_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }

    if let Some(timestamp) = OFFSET_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(value, fmt).ok())
    {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }

    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Some(naive.and_utc().date_naive());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Resolve the calendar date of one record
///
/// Only JSON strings can carry a date; numbers, booleans and objects
/// are reported with their JSON text.
///
/// **Crate** - shared with `aggregate`
pub(crate) fn record_date(record: &SkillRecord, index: usize) -> Result<NaiveDate, AggregateError> {
    let malformed = |value: String| AggregateError::MalformedDate {
        record: record.describe(index),
        value,
    };

    match &record.date_gained {
        Value::String(raw) => normalize_date(raw).ok_or_else(|| malformed(raw.clone())),
        Value::Null => Err(malformed("<missing>".to_string())),
        other => Err(malformed(other.to_string())),
    }
}

/// Build the cumulative series from skill records
///
/// **Public** - main entry point for the timeline view
///
/// # Arguments
/// * `records` - Snapshot of skill records, in any order
///
/// # Returns
/// One point per distinct date, ascending, with the running total
///
/// # Errors
/// * `AggregateError::MalformedDate` - first record whose date cannot be
///   normalized; no partial series is returned
pub fn build_cumulative_series(records: &[SkillRecord]) -> Result<CumulativeSeries, AggregateError> {
    let dates = records
        .iter()
        .enumerate()
        .map(|(index, record)| record_date(record, index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(cumulative_from_dates(&dates))
}

/// Bucket dates and accumulate
///
/// **Crate** - shared with `aggregate`
pub(crate) fn cumulative_from_dates(dates: &[NaiveDate]) -> CumulativeSeries {
    let mut buckets: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for date in dates {
        *buckets.entry(*date).or_insert(0) += 1;
    }

    debug!("Bucketed {} record(s) into {} date(s)", dates.len(), buckets.len());

    let mut running = 0u64;
    let points = buckets
        .into_iter()
        .map(|(date, count)| {
            running += count;
            CumulativePoint { date, total: running }
        })
        .collect();

    CumulativeSeries { points }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_normalize_plain_date() {
        assert_eq!(normalize_date("2024-01-01"), Some(date("2024-01-01")));
        assert_eq!(normalize_date(" 2024-01-01 "), Some(date("2024-01-01")));
    }

    #[test]
    fn test_normalize_utc_timestamp() {
        assert_eq!(
            normalize_date("2024-01-01T23:59:59.999Z"),
            Some(date("2024-01-01"))
        );
    }

    #[test]
    fn test_normalize_offset_timestamp_converts_to_utc() {
        assert_eq!(
            normalize_date("2024-01-01T23:30:00-05:00"),
            Some(date("2024-01-02"))
        );
        assert_eq!(
            normalize_date("2024-01-02T01:00:00+03:00"),
            Some(date("2024-01-01"))
        );
    }

    #[test]
    fn test_normalize_timestamp_without_seconds() {
        assert_eq!(normalize_date("2024-01-01T10:00Z"), Some(date("2024-01-01")));
        assert_eq!(
            normalize_date("2024-01-01T23:30-05:00"),
            Some(date("2024-01-02"))
        );
    }

    #[test]
    fn test_normalize_naive_timestamp_is_utc() {
        assert_eq!(normalize_date("2024-01-01T23:30:00"), Some(date("2024-01-01")));
        assert_eq!(normalize_date("2024-01-01 08:15:00.250"), Some(date("2024-01-01")));
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        assert_eq!(normalize_date(""), None);
        assert_eq!(normalize_date("yesterday"), None);
        assert_eq!(normalize_date("2024-13-01"), None);
        assert_eq!(normalize_date("2024-02-30"), None);
    }

    #[test]
    fn test_cumulative_from_dates_sorts_and_accumulates() {
        let dates = vec![
            date("2024-01-03"),
            date("2024-01-01"),
            date("2024-01-01"),
        ];

        let series = cumulative_from_dates(&dates);

        assert_eq!(series.labels(), vec!["2024-01-01", "2024-01-03"]);
        assert_eq!(series.values(), vec![2, 3]);
    }

    #[test]
    fn test_missing_date_is_reported() {
        let mut record = SkillRecord::new("Rust", 0, "2024-01-01");
        record.date_gained = Value::Null;

        let err = build_cumulative_series(&[record]).unwrap_err();
        assert_eq!(
            err,
            AggregateError::MalformedDate {
                record: "#0 ('Rust')".to_string(),
                value: "<missing>".to_string(),
            }
        );
    }

    #[test]
    fn test_non_string_date_is_malformed() {
        let records = vec![
            SkillRecord::new("Rust", 0, "2024-01-01"),
            SkillRecord::new("Go", 1, 1704067200000i64).with_id("r2"),
        ];

        let err = build_cumulative_series(&records).unwrap_err();
        assert_eq!(
            err,
            AggregateError::MalformedDate {
                record: "r2 ('Go')".to_string(),
                value: "1704067200000".to_string(),
            }
        );

        let err = build_cumulative_series(&[SkillRecord::new("SQL", 0, true)]).unwrap_err();
        assert!(matches!(err, AggregateError::MalformedDate { ref value, .. } if value == "true"));
    }
}
