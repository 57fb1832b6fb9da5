use crate::db::log::{LogOp, record};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::entry_status::EntryStatus;
use crate::models::time_entry::TimeEntry;
use crate::utils::time::format_timestamp;
use chrono::NaiveDateTime;
use tracing::warn;

/// Write-side operations behind the `employee`, `location`, `entry` and
/// `activity` commands.
pub struct RecordsLogic;

impl RecordsLogic {
    pub fn add_employee(pool: &mut DbPool, first_name: &str) -> AppResult<i64> {
        let name = non_empty(first_name, "employee name")?;
        let id = queries::insert_employee(&pool.conn, name)?;
        log_write(
            pool,
            LogOp::AddEmployee,
            id,
            &format!("Added employee '{name}'"),
        );
        Ok(id)
    }

    pub fn add_location(pool: &mut DbPool, name: &str) -> AppResult<i64> {
        let name = non_empty(name, "location name")?;
        let id = queries::insert_location(&pool.conn, name)?;
        log_write(
            pool,
            LogOp::AddLocation,
            id,
            &format!("Added location '{name}'"),
        );
        Ok(id)
    }

    /// Add a time entry.
    ///
    /// Without an explicit status the entry is `completed` when a clock-out is
    /// given and `in_progress` otherwise. A clock-out is only allowed on a
    /// completed entry, and a completed entry needs one.
    pub fn add_entry(
        pool: &mut DbPool,
        employee_id: i64,
        clock_in: NaiveDateTime,
        clock_out: Option<NaiveDateTime>,
        status: Option<EntryStatus>,
    ) -> AppResult<i64> {
        let status = resolve_status(clock_out.is_some(), status)?;

        if let Some(out) = clock_out {
            check_order(&clock_in, &out, "clock-out", "clock-in")?;
        }

        let id = queries::insert_time_entry(
            &pool.conn,
            employee_id,
            &clock_in,
            clock_out.as_ref(),
            status,
        )?;

        log_write(
            pool,
            LogOp::AddEntry,
            id,
            &format!(
                "Employee {} clocked in at {} ({})",
                employee_id,
                format_timestamp(&clock_in),
                status.to_db_str()
            ),
        );
        Ok(id)
    }

    pub fn close_entry(
        pool: &mut DbPool,
        entry_id: i64,
        clock_out: NaiveDateTime,
    ) -> AppResult<TimeEntry> {
        let entry = queries::close_time_entry(&pool.conn, entry_id, &clock_out)?;
        log_write(
            pool,
            LogOp::CloseEntry,
            entry_id,
            &format!("Entry closed at {}", entry.clock_out_str()),
        );
        Ok(entry)
    }

    pub fn add_activity(
        pool: &mut DbPool,
        entry_id: i64,
        location_id: i64,
        check_in: NaiveDateTime,
        check_out: Option<NaiveDateTime>,
    ) -> AppResult<i64> {
        if let Some(out) = check_out {
            check_order(&check_in, &out, "check-out", "check-in")?;
        }

        let id = queries::insert_activity_log(
            &pool.conn,
            entry_id,
            location_id,
            &check_in,
            check_out.as_ref(),
        )?;

        log_write(
            pool,
            LogOp::AddActivity,
            id,
            &format!("Entry {entry_id} checked in at location {location_id}"),
        );
        Ok(id)
    }
}

fn non_empty<'a>(value: &'a str, what: &str) -> AppResult<&'a str> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::InvalidInput(format!("{what} cannot be empty")));
    }
    Ok(v)
}

fn resolve_status(has_out: bool, requested: Option<EntryStatus>) -> AppResult<EntryStatus> {
    match (requested, has_out) {
        (None, true) => Ok(EntryStatus::Completed),
        (None, false) => Ok(EntryStatus::InProgress),
        (Some(EntryStatus::Completed), false) => Err(AppError::InvalidStatus(
            "a completed entry needs --out".into(),
        )),
        (Some(s), true) if !s.is_completed() => Err(AppError::InvalidStatus(format!(
            "--out can only be set on a completed entry, not '{}'",
            s.to_db_str()
        ))),
        (Some(s), _) => Ok(s),
    }
}

fn check_order(
    start: &NaiveDateTime,
    end: &NaiveDateTime,
    end_name: &str,
    start_name: &str,
) -> AppResult<()> {
    if end < start {
        return Err(AppError::InvalidTimestamp(format!(
            "{end_name} {} precedes {start_name} {}",
            format_timestamp(end),
            format_timestamp(start)
        )));
    }
    Ok(())
}

/// Internal log is best effort: a failure is reported but never blocks the write.
fn log_write(pool: &DbPool, op: LogOp, id: i64, message: &str) {
    if let Err(e) = record(&pool.conn, op, &id.to_string(), message) {
        warn!(operation = op.as_str(), error = %e, "internal_log_write_failed");
    }
}
