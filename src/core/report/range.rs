use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Inclusive calendar-day range of a report.
///
/// The start day begins at 00:00:00.000 and the end day is closed at
/// 23:59:59.999, so every instant of both days is inside the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ReportRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> AppResult<Self> {
        if start_date > end_date {
            return Err(AppError::InvalidRange(format!(
                "start date {start_date} is after end date {end_date}"
            )));
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Build a range from two optional `YYYY-MM-DD` strings, as typed by the user.
    pub fn from_dates(start: Option<&str>, end: Option<&str>) -> AppResult<Self> {
        let start = start.ok_or_else(|| AppError::InvalidRange("missing start date".into()))?;
        let end = end.ok_or_else(|| AppError::InvalidRange("missing end date".into()))?;
        Self::new(parse_day(start, "start")?, parse_day(end, "end")?)
    }

    /// Parse a period expression.
    ///
    /// Supports:
    /// - YYYY
    /// - YYYY-MM
    /// - YYYY-MM-DD
    /// - any two of the above joined by ':' (e.g. `2025-01:2025-03`)
    pub fn from_period(p: &str) -> AppResult<Self> {
        if let Some((start_raw, end_raw)) = p.split_once(':') {
            let (start, _) = period_bounds(start_raw.trim())?;
            let (_, end) = period_bounds(end_raw.trim())?;
            Self::new(start, end)
        } else {
            let (start, end) = period_bounds(p.trim())?;
            Self::new(start, end)
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start_date.and_time(NaiveTime::MIN)
    }

    pub fn end(&self) -> NaiveDateTime {
        // 23:59:59.999 is always a valid wall-clock time
        self.end_date
            .and_hms_milli_opt(23, 59, 59, 999)
            .unwrap_or_else(|| self.end_date.and_time(NaiveTime::MIN))
    }

    pub fn contains(&self, ts: &NaiveDateTime) -> bool {
        *ts >= self.start() && *ts <= self.end()
    }

    pub fn label(&self) -> String {
        if self.start_date == self.end_date {
            self.start_date.format("%Y-%m-%d").to_string()
        } else {
            format!(
                "{} → {}",
                self.start_date.format("%Y-%m-%d"),
                self.end_date.format("%Y-%m-%d")
            )
        }
    }
}

fn parse_day(s: &str, which: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidRange(format!("invalid {which} date: '{s}'")))
}

/// First and last day covered by a single period token.
fn period_bounds(token: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidRange(format!("unsupported period: '{token}'"));

    match token.len() {
        // YYYY
        4 => {
            let y: i32 = token.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let y: i32 = token
                .get(0..4)
                .and_then(|s| s.parse().ok())
                .ok_or_else(invalid)?;
            let m: u32 = token
                .get(5..7)
                .and_then(|s| s.parse().ok())
                .ok_or_else(invalid)?;
            let last = month_last_day(y, m).ok_or_else(invalid)?;
            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(token, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
