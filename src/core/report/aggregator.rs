use super::range::ReportRange;
use crate::db::source::TimeDataSource;
use crate::errors::{AppError, AppResult};
use crate::models::activity_log::ActivityLog;
use crate::models::employee::Employee;
use crate::models::location::Location;
use crate::models::report::{HoursByLabel, Kpis, MS_PER_HOUR, ReportResult};
use crate::models::time_entry::TimeEntry;
use crate::utils::time::millis_between;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, warn};

/// Placeholder label for ids missing from the lookup set.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Running totals in milliseconds, keyed by employee or location id.
#[derive(Debug, Default)]
struct GroupedTotals(BTreeMap<i64, i64>);

impl GroupedTotals {
    fn add(&mut self, key: i64, ms: i64) {
        *self.0.entry(key).or_insert(0) += ms;
    }

    /// Resolve labels, convert to hours and sort descending.
    fn into_hours<F>(self, dimension: &str, lookup: F) -> Vec<HoursByLabel>
    where
        F: Fn(i64) -> Option<String>,
    {
        let mut out: Vec<HoursByLabel> = self
            .0
            .into_iter()
            .map(|(id, ms)| {
                let label = lookup(id).unwrap_or_else(|| {
                    warn!(dimension, id, "label_lookup_missed");
                    UNKNOWN_LABEL.to_string()
                });
                HoursByLabel::new(label, ms as f64 / MS_PER_HOUR)
            })
            .collect();

        // stable: equal hours keep ascending-id order
        out.sort_by(|a, b| b.hours.total_cmp(&a.hours));
        out
    }
}

/// A time entry counts only once closed and clocked in inside the range.
pub fn is_qualifying(entry: &TimeEntry, range: &ReportRange) -> bool {
    entry.status.is_completed()
        && entry.clock_out_time.is_some()
        && range.contains(&entry.clock_in_time)
}

/// Walk employees → time entries → activity logs and build the report.
///
/// Fetches are strictly sequential: one employee's entries at a time, then
/// the logs of each qualifying entry. Any fetch or data error aborts the
/// whole computation.
pub fn generate_report<S>(
    source: &mut S,
    employees: &[Employee],
    locations: &[Location],
    range: &ReportRange,
) -> AppResult<ReportResult>
where
    S: TimeDataSource + ?Sized,
{
    let mut total_duration_ms: i64 = 0;
    let mut active_employees: HashSet<i64> = HashSet::new();
    let mut by_employee = GroupedTotals::default();
    let mut by_location = GroupedTotals::default();

    for employee in employees {
        let entries = source.list_time_entries(employee.id)?;
        debug!(
            employee_id = employee.id,
            entries = entries.len(),
            "time_entries_fetched"
        );

        for entry in entries.iter().filter(|e| is_qualifying(e, range)) {
            if entry.employee_id != employee.id {
                return Err(AppError::DataIntegrity(format!(
                    "time entry {} belongs to employee {}, fetched for employee {}",
                    entry.id, entry.employee_id, employee.id
                )));
            }

            let duration = entry_duration_ms(entry)?;
            active_employees.insert(employee.id);
            total_duration_ms += duration;
            by_employee.add(employee.id, duration);

            let logs = source.list_activity_logs(entry.id)?;
            for log in &logs {
                if log.entry_id != entry.id {
                    return Err(AppError::DataIntegrity(format!(
                        "activity log {} belongs to entry {}, fetched for entry {}",
                        log.id, log.entry_id, entry.id
                    )));
                }
                if let Some(ms) = activity_duration_ms(log)? {
                    by_location.add(log.location_id, ms);
                }
            }
        }
    }

    let count = active_employees.len();
    let average_workday_duration_ms = if count > 0 {
        total_duration_ms as f64 / count as f64
    } else {
        0.0
    };

    let employee_names: HashMap<i64, &str> = employees
        .iter()
        .map(|e| (e.id, e.first_name.as_str()))
        .collect();
    let location_names: HashMap<i64, &str> = locations
        .iter()
        .map(|l| (l.id, l.name.as_str()))
        .collect();

    Ok(ReportResult {
        range: *range,
        kpis: Kpis {
            total_duration_ms,
            distinct_active_employee_count: count,
            average_workday_duration_ms,
        },
        hours_by_employee: by_employee.into_hours("employee", |id| {
            employee_names.get(&id).map(|s| s.to_string())
        }),
        hours_by_location: by_location.into_hours("location", |id| {
            location_names.get(&id).map(|s| s.to_string())
        }),
    })
}

fn entry_duration_ms(entry: &TimeEntry) -> AppResult<i64> {
    let Some(out) = entry.clock_out_time else {
        return Ok(0);
    };
    let ms = millis_between(entry.clock_in_time, out);
    if ms < 0 {
        return Err(AppError::DataIntegrity(format!(
            "time entry {} clocks out ({}) before it clocks in ({})",
            entry.id,
            entry.clock_out_str(),
            entry.clock_in_str()
        )));
    }
    Ok(ms)
}

/// `None` for a still-open activity.
fn activity_duration_ms(log: &ActivityLog) -> AppResult<Option<i64>> {
    let Some(out) = log.check_out_time else {
        return Ok(None);
    };
    let ms = millis_between(log.check_in_time, out);
    if ms < 0 {
        return Err(AppError::DataIntegrity(format!(
            "activity log {} checks out before it checks in",
            log.id
        )));
    }
    Ok(Some(ms))
}
