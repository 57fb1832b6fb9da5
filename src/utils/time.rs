//! Time utilities: parsing timestamps, duration computations, formatting durations.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

/// Storage format for timestamps (millisecond precision).
pub const DB_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

const CLI_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parse a user supplied timestamp (`YYYY-MM-DD HH:MM`, seconds and `T` separator optional).
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();
    CLI_TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
}

pub fn parse_optional_timestamp(input: Option<&String>) -> AppResult<Option<NaiveDateTime>> {
    input.map(|s| parse_timestamp(s)).transpose()
}

pub fn parse_db_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DB_TIMESTAMP_FORMAT).ok()
}

pub fn format_db_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(DB_TIMESTAMP_FORMAT).to_string()
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Signed milliseconds from `start` to `end`.
pub fn millis_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_milliseconds()
}
