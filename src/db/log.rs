use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};

/// Operations recorded in the internal `log` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOp {
    Init,
    AddEmployee,
    AddLocation,
    AddEntry,
    CloseEntry,
    AddActivity,
    Report,
}

impl LogOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOp::Init => "init",
            LogOp::AddEmployee => "add_employee",
            LogOp::AddLocation => "add_location",
            LogOp::AddEntry => "add_entry",
            LogOp::CloseEntry => "close_entry",
            LogOp::AddActivity => "add_activity",
            LogOp::Report => "report",
        }
    }
}

/// One row of the `log` table.
#[derive(Debug, Clone)]
pub struct LogRow {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write an internal log line.
pub fn record(conn: &Connection, op: LogOp, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    stmt.execute(params![now, op.as_str(), target, message])?;

    Ok(())
}

/// Most recent rows first.
pub fn load_log(conn: &Connection, limit: usize) -> AppResult<Vec<LogRow>> {
    let mut stmt = conn.prepare(
        "SELECT date, operation, IFNULL(target, ''), message
         FROM log ORDER BY id DESC LIMIT ?1",
    )?;

    let rows = stmt.query_map([limit as i64], |row| {
        Ok(LogRow {
            date: row.get(0)?,
            operation: row.get(1)?,
            target: row.get(2)?,
            message: row.get(3)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
