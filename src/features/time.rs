use chrono::{DateTime, NaiveDateTime, Timelike};

use crate::dataset::{Column, Dataset};
use crate::error::DatasetError;

/// Offset-bearing formats accepted after RFC 3339 parsing fails.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%z"];

/// Naive datetime formats, tried last. `%.f` matches optional fractional
/// seconds.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Extract the hour of day (0-23) from an ISO-8601 timestamp string.
///
/// Accepts RFC 3339 timestamps (`Z` or numeric offset, with or without
/// fractional seconds), space-separated datetimes with an offset, and
/// naive `T`- or space-separated datetimes. The hour is taken in the
/// timestamp's own timezone. Returns `None` when the value parses under
/// no accepted format.
pub fn robust_hour_of_iso_date(value: &str) -> Option<u32> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.hour());
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt.hour());
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.hour());
        }
    }
    None
}

/// Add an `event_hour` column: the hour of day parsed from
/// `event_timestamp`.
///
/// Parsing is per-value: a malformed timestamp yields `None` in that row
/// and never aborts the transform. Row count and order are preserved.
pub fn hour_of_day(df: &Dataset) -> Result<Dataset, DatasetError> {
    let timestamps = df.str_column("event_timestamp")?;

    let hours: Vec<Option<i64>> = timestamps
        .iter()
        .map(|value| {
            let hour = robust_hour_of_iso_date(value);
            if hour.is_none() {
                log::debug!("Unparseable event_timestamp: '{}'", value);
            }
            hour.map(i64::from)
        })
        .collect();

    let mut out = df.clone();
    out.insert_column("event_hour", Column::Int(hours))?;
    Ok(out)
}
