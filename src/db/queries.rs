use crate::errors::{AppError, AppResult};
use crate::models::activity_log::ActivityLog;
use crate::models::employee::Employee;
use crate::models::entry_status::EntryStatus;
use crate::models::location::Location;
use crate::models::time_entry::TimeEntry;
use crate::utils::time::{format_db_timestamp, parse_db_timestamp};
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------
// Row mapping
// ---------------------------

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn get_timestamp(row: &Row, column: &str) -> Result<NaiveDateTime> {
    let raw: String = row.get(column)?;
    let idx = row.as_ref().column_index(column)?;
    parse_db_timestamp(&raw).ok_or_else(|| conversion_error(idx, AppError::InvalidTimestamp(raw)))
}

fn get_optional_timestamp(row: &Row, column: &str) -> Result<Option<NaiveDateTime>> {
    let raw: Option<String> = row.get(column)?;
    let idx = row.as_ref().column_index(column)?;
    raw.map(|s| {
        parse_db_timestamp(&s).ok_or_else(|| conversion_error(idx, AppError::InvalidTimestamp(s)))
    })
    .transpose()
}

pub fn map_employee(row: &Row) -> Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
    })
}

pub fn map_location(row: &Row) -> Result<Location> {
    Ok(Location {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}

pub fn map_time_entry(row: &Row) -> Result<TimeEntry> {
    let status_str: String = row.get("status")?;
    let status = EntryStatus::from_db_str(&status_str).ok_or_else(|| {
        let idx = row.as_ref().column_index("status").unwrap_or(0);
        conversion_error(idx, AppError::InvalidStatus(status_str.clone()))
    })?;

    Ok(TimeEntry {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        clock_in_time: get_timestamp(row, "clock_in_time")?,
        clock_out_time: get_optional_timestamp(row, "clock_out_time")?,
        status,
    })
}

pub fn map_activity_log(row: &Row) -> Result<ActivityLog> {
    Ok(ActivityLog {
        id: row.get("id")?,
        entry_id: row.get("entry_id")?,
        location_id: row.get("location_id")?,
        check_in_time: get_timestamp(row, "check_in_time")?,
        check_out_time: get_optional_timestamp(row, "check_out_time")?,
    })
}

// ---------------------------
// Reads
// ---------------------------

pub fn load_employees(conn: &Connection) -> Result<Vec<Employee>> {
    let mut stmt = conn.prepare("SELECT id, first_name FROM employees ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_employee)?;
    rows.collect()
}

pub fn load_locations(conn: &Connection) -> Result<Vec<Location>> {
    let mut stmt = conn.prepare("SELECT id, name FROM locations ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_location)?;
    rows.collect()
}

pub fn load_time_entries(conn: &Connection, employee_id: i64) -> Result<Vec<TimeEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, employee_id, clock_in_time, clock_out_time, status
         FROM time_entries
         WHERE employee_id = ?1
         ORDER BY clock_in_time ASC, id ASC",
    )?;
    let rows = stmt.query_map([employee_id], map_time_entry)?;
    rows.collect()
}

pub fn load_activity_logs(conn: &Connection, entry_id: i64) -> Result<Vec<ActivityLog>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, entry_id, location_id, check_in_time, check_out_time
         FROM activity_logs
         WHERE entry_id = ?1
         ORDER BY check_in_time ASC, id ASC",
    )?;
    let rows = stmt.query_map([entry_id], map_activity_log)?;
    rows.collect()
}

fn exists(conn: &Connection, table: &str, id: i64) -> Result<bool> {
    let sql = format!("SELECT 1 FROM {table} WHERE id = ?1 LIMIT 1");
    Ok(conn
        .query_row(&sql, [id], |_| Ok(()))
        .optional()?
        .is_some())
}

pub fn find_time_entry(conn: &Connection, entry_id: i64) -> Result<Option<TimeEntry>> {
    conn.query_row(
        "SELECT id, employee_id, clock_in_time, clock_out_time, status
         FROM time_entries WHERE id = ?1",
        [entry_id],
        map_time_entry,
    )
    .optional()
}

// ---------------------------
// Writes
// ---------------------------

pub fn insert_employee(conn: &Connection, first_name: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO employees (first_name) VALUES (?1)",
        [first_name],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_location(conn: &Connection, name: &str) -> AppResult<i64> {
    conn.execute("INSERT INTO locations (name) VALUES (?1)", [name])?;
    Ok(conn.last_insert_rowid())
}

/// Insert a time entry; the referenced employee must exist.
pub fn insert_time_entry(
    conn: &Connection,
    employee_id: i64,
    clock_in_time: &NaiveDateTime,
    clock_out_time: Option<&NaiveDateTime>,
    status: EntryStatus,
) -> AppResult<i64> {
    if !exists(conn, "employees", employee_id)? {
        return Err(AppError::NotFound(format!("employee {employee_id}")));
    }

    conn.execute(
        "INSERT INTO time_entries (employee_id, clock_in_time, clock_out_time, status)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            employee_id,
            format_db_timestamp(clock_in_time),
            clock_out_time.map(format_db_timestamp),
            status.to_db_str(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Insert an activity log; both the entry and the location must exist.
pub fn insert_activity_log(
    conn: &Connection,
    entry_id: i64,
    location_id: i64,
    check_in_time: &NaiveDateTime,
    check_out_time: Option<&NaiveDateTime>,
) -> AppResult<i64> {
    if !exists(conn, "time_entries", entry_id)? {
        return Err(AppError::NotFound(format!("time entry {entry_id}")));
    }
    if !exists(conn, "locations", location_id)? {
        return Err(AppError::NotFound(format!("location {location_id}")));
    }

    conn.execute(
        "INSERT INTO activity_logs (entry_id, location_id, check_in_time, check_out_time)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            entry_id,
            location_id,
            format_db_timestamp(check_in_time),
            check_out_time.map(format_db_timestamp),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Complete an open entry; `clock_out_time` must not precede its clock-in.
pub fn close_time_entry(
    conn: &Connection,
    entry_id: i64,
    clock_out_time: &NaiveDateTime,
) -> AppResult<TimeEntry> {
    let entry = find_time_entry(conn, entry_id)?
        .ok_or_else(|| AppError::NotFound(format!("time entry {entry_id}")))?;

    if *clock_out_time < entry.clock_in_time {
        return Err(AppError::InvalidTimestamp(format!(
            "clock-out {} precedes clock-in {}",
            format_db_timestamp(clock_out_time),
            entry.clock_in_str()
        )));
    }

    conn.execute(
        "UPDATE time_entries SET clock_out_time = ?1, status = ?2 WHERE id = ?3",
        params![
            format_db_timestamp(clock_out_time),
            EntryStatus::Completed.to_db_str(),
            entry_id,
        ],
    )?;

    Ok(TimeEntry {
        clock_out_time: Some(*clock_out_time),
        status: EntryStatus::Completed,
        ..entry
    })
}
