#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use timereport::db::source::TimeDataSource;
use timereport::errors::{AppError, AppResult};
use timereport::models::{
    activity_log::ActivityLog, employee::Employee, location::Location, time_entry::TimeEntry,
};

// ---------------------------
// CLI helpers
// ---------------------------

/// Binary under test, isolated from the user's real config directory.
pub fn trp(name: &str) -> Command {
    let home = test_home(name);

    let mut cmd = cargo_bin_cmd!("timereport");
    cmd.env("HOME", &home)
        .env("APPDATA", &home)
        .env_remove("RUST_LOG");
    cmd
}

/// Per-test home directory used by [`trp`].
pub fn test_home(name: &str) -> PathBuf {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_timereport_home", name));
    fs::create_dir_all(&home).ok();
    home
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timereport.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

// ---------------------------
// Library helpers
// ---------------------------

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid test timestamp")
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// In-memory data source that records which fetches were made.
#[derive(Default)]
pub struct FakeSource {
    pub employees: Vec<Employee>,
    pub locations: Vec<Location>,
    pub entries: HashMap<i64, Vec<TimeEntry>>,
    pub logs: HashMap<i64, Vec<ActivityLog>>,
    pub fail_entries_for: Option<i64>,
    pub fail_logs_for: Option<i64>,
    pub entry_fetches: Vec<i64>,
    pub log_fetches: Vec<i64>,
}

impl FakeSource {
    pub fn with_employee(mut self, id: i64, name: &str) -> Self {
        self.employees.push(Employee::new(id, name));
        self
    }

    pub fn with_location(mut self, id: i64, name: &str) -> Self {
        self.locations.push(Location::new(id, name));
        self
    }

    pub fn with_entry(mut self, entry: TimeEntry) -> Self {
        self.entries
            .entry(entry.employee_id)
            .or_default()
            .push(entry);
        self
    }

    pub fn with_log(mut self, log: ActivityLog) -> Self {
        self.logs.entry(log.entry_id).or_default().push(log);
        self
    }
}

impl TimeDataSource for FakeSource {
    fn list_employees(&mut self) -> AppResult<Vec<Employee>> {
        Ok(self.employees.clone())
    }

    fn list_locations(&mut self) -> AppResult<Vec<Location>> {
        Ok(self.locations.clone())
    }

    fn list_time_entries(&mut self, employee_id: i64) -> AppResult<Vec<TimeEntry>> {
        self.entry_fetches.push(employee_id);
        if self.fail_entries_for == Some(employee_id) {
            return Err(AppError::Fetch(format!("connection reset ({employee_id})")));
        }
        Ok(self.entries.get(&employee_id).cloned().unwrap_or_default())
    }

    fn list_activity_logs(&mut self, entry_id: i64) -> AppResult<Vec<ActivityLog>> {
        self.log_fetches.push(entry_id);
        if self.fail_logs_for == Some(entry_id) {
            return Err(AppError::Fetch(format!("timeout ({entry_id})")));
        }
        Ok(self.logs.get(&entry_id).cloned().unwrap_or_default())
    }
}
