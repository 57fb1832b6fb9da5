//! Read-only data source consumed by the report aggregator.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{
    activity_log::ActivityLog, employee::Employee, location::Location, time_entry::TimeEntry,
};

/// Repository capability the report is computed from.
///
/// Every call may fail with a transient I/O error; implementations report it
/// as [`AppError::Fetch`] so the caller can tell it apart from bad data.
pub trait TimeDataSource {
    fn list_employees(&mut self) -> AppResult<Vec<Employee>>;
    fn list_locations(&mut self) -> AppResult<Vec<Location>>;
    fn list_time_entries(&mut self, employee_id: i64) -> AppResult<Vec<TimeEntry>>;
    fn list_activity_logs(&mut self, entry_id: i64) -> AppResult<Vec<ActivityLog>>;
}

impl TimeDataSource for DbPool {
    fn list_employees(&mut self) -> AppResult<Vec<Employee>> {
        queries::load_employees(&self.conn).map_err(|e| fetch_error("employees", e))
    }

    fn list_locations(&mut self) -> AppResult<Vec<Location>> {
        queries::load_locations(&self.conn).map_err(|e| fetch_error("locations", e))
    }

    fn list_time_entries(&mut self, employee_id: i64) -> AppResult<Vec<TimeEntry>> {
        queries::load_time_entries(&self.conn, employee_id)
            .map_err(|e| fetch_error(&format!("time entries of employee {employee_id}"), e))
    }

    fn list_activity_logs(&mut self, entry_id: i64) -> AppResult<Vec<ActivityLog>> {
        queries::load_activity_logs(&self.conn, entry_id)
            .map_err(|e| fetch_error(&format!("activity logs of entry {entry_id}"), e))
    }
}

/// Row decoding failures are bad data, everything else is a failed read.
fn fetch_error(what: &str, e: rusqlite::Error) -> AppError {
    match e {
        rusqlite::Error::FromSqlConversionFailure(_, _, inner) => {
            AppError::DataIntegrity(format!("{what}: {inner}"))
        }
        rusqlite::Error::InvalidColumnType(_, column, _) => {
            AppError::DataIntegrity(format!("{what}: unexpected value in column '{column}'"))
        }
        other => AppError::Fetch(format!("{what}: {other}")),
    }
}
