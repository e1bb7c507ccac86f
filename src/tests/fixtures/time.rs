use crate::modules::time_tracking::core::duration::Interval;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// `"2026-10-14 08:00"` as a local wall-clock time.
pub fn at(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M").unwrap()
}

pub fn utc(value: &str) -> DateTime<Utc> {
    at(value).and_utc()
}

pub fn day(value: &str) -> NaiveDate {
    value.parse().unwrap()
}

pub fn interval(start: &str, end: &str) -> Interval {
    Interval::new(at(start), at(end)).unwrap()
}
