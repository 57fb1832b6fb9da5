use super::entry_status::EntryStatus;
use crate::utils::time::format_timestamp;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TimeEntry {
    pub id: i64,
    pub employee_id: i64,
    pub clock_in_time: NaiveDateTime,          // ⇔ time_entries.clock_in_time
    pub clock_out_time: Option<NaiveDateTime>, // only meaningful once completed
    pub status: EntryStatus,
}

impl TimeEntry {
    pub fn new(
        id: i64,
        employee_id: i64,
        clock_in_time: NaiveDateTime,
        clock_out_time: Option<NaiveDateTime>,
        status: EntryStatus,
    ) -> Self {
        Self {
            id,
            employee_id,
            clock_in_time,
            clock_out_time,
            status,
        }
    }

    /// Completed entry spanning `clock_in_time..clock_out_time`.
    pub fn completed(
        id: i64,
        employee_id: i64,
        clock_in_time: NaiveDateTime,
        clock_out_time: NaiveDateTime,
    ) -> Self {
        Self::new(
            id,
            employee_id,
            clock_in_time,
            Some(clock_out_time),
            EntryStatus::Completed,
        )
    }

    pub fn clock_in_str(&self) -> String {
        format_timestamp(&self.clock_in_time)
    }

    pub fn clock_out_str(&self) -> String {
        self.clock_out_time
            .as_ref()
            .map(format_timestamp)
            .unwrap_or_else(|| "--".to_string())
    }
}
