use chrono::NaiveDateTime;
use serde::Serialize;

/// A stint at one location inside a time entry.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityLog {
    pub id: i64,
    pub entry_id: i64,
    pub location_id: i64,
    pub check_in_time: NaiveDateTime,
    pub check_out_time: Option<NaiveDateTime>, // None → activity still open
}

impl ActivityLog {
    pub fn new(
        id: i64,
        entry_id: i64,
        location_id: i64,
        check_in_time: NaiveDateTime,
        check_out_time: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id,
            entry_id,
            location_id,
            check_in_time,
            check_out_time,
        }
    }
}
