mod common;
use chrono::{Duration, NaiveDateTime};
use common::{FakeSource, day, ts};
use timereport::core::report::aggregator::UNKNOWN_LABEL;
use timereport::core::report::{ReportLogic, ReportRange, generate_report};
use timereport::errors::{AppError, AppResult};
use timereport::models::activity_log::ActivityLog;
use timereport::models::employee::Employee;
use timereport::models::entry_status::EntryStatus;
use timereport::models::location::Location;
use timereport::models::report::{MS_PER_HOUR, ReportResult};
use timereport::models::time_entry::TimeEntry;

const HOUR_MS: i64 = 3_600_000;

fn january() -> ReportRange {
    ReportRange::new(day("2023-01-01"), day("2023-01-31")).unwrap()
}

fn done(id: i64, employee_id: i64, clock_in: &str, clock_out: &str) -> TimeEntry {
    TimeEntry::completed(id, employee_id, ts(clock_in), ts(clock_out))
}

fn log(id: i64, entry: i64, location: i64, from: &str, to: &str) -> ActivityLog {
    ActivityLog::new(id, entry, location, ts(from), Some(ts(to)))
}

/// Timestamp with millisecond precision.
fn precise(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.3f").unwrap()
}

fn run(source: &mut FakeSource) -> AppResult<ReportResult> {
    ReportLogic::generate(source, &january())
}

#[test]
fn test_single_completed_entry() {
    let mut src = FakeSource::default()
        .with_employee(1, "Ada")
        .with_entry(done(10, 1, "2023-01-01 09:00", "2023-01-01 17:00"));

    let report = run(&mut src).unwrap();

    assert_eq!(report.kpis.total_duration_ms, 8 * HOUR_MS);
    assert_eq!(report.kpis.distinct_active_employee_count, 1);
    assert_eq!(report.kpis.average_workday_duration_ms, 8.0 * MS_PER_HOUR);
    assert_eq!(report.hours_by_employee.len(), 1);
    assert_eq!(report.hours_by_employee[0].label, "Ada");
    assert_eq!(report.hours_by_employee[0].hours, 8.0);
}

#[test]
fn test_in_progress_entry_is_excluded() {
    let mut src = FakeSource::default()
        .with_employee(1, "Ada")
        .with_entry(TimeEntry::new(
            10,
            1,
            ts("2023-01-01 09:00"),
            Some(ts("2023-01-01 17:00")),
            EntryStatus::InProgress,
        ));

    let report = run(&mut src).unwrap();

    assert_eq!(report.kpis.total_duration_ms, 0);
    assert_eq!(report.kpis.distinct_active_employee_count, 0);
    assert_eq!(report.kpis.average_workday_duration_ms, 0.0);
    assert!(report.hours_by_employee.is_empty());
    assert!(report.hours_by_location.is_empty());
    // logs are never fetched for a non-qualifying entry
    assert!(src.log_fetches.is_empty());
}

#[test]
fn test_completed_entry_without_clock_out_is_excluded() {
    let mut src = FakeSource::default()
        .with_employee(1, "Ada")
        .with_entry(TimeEntry::new(10, 1, ts("2023-01-02 09:00"), None, EntryStatus::Completed));

    let report = run(&mut src).unwrap();

    assert_eq!(report.kpis.total_duration_ms, 0);
    assert_eq!(report.kpis.distinct_active_employee_count, 0);
}

#[test]
fn test_open_activity_log_is_skipped_but_entry_counts() {
    let mut src = FakeSource::default()
        .with_employee(1, "Ada")
        .with_location(5, "Warehouse")
        .with_entry(done(10, 1, "2023-01-03 08:00", "2023-01-03 12:00"))
        .with_log(ActivityLog::new(100, 10, 5, ts("2023-01-03 08:00"), None));

    let report = run(&mut src).unwrap();

    assert_eq!(report.kpis.total_duration_ms, 4 * HOUR_MS);
    assert!(report.hours_by_location.is_empty());
    assert_eq!(src.log_fetches, vec![10]);
}

#[test]
fn test_two_employees_sorted_descending() {
    let mut src = FakeSource::default()
        .with_employee(1, "Short")
        .with_employee(2, "Long")
        .with_entry(done(10, 1, "2023-01-05 09:00", "2023-01-05 13:00"))
        .with_entry(done(20, 2, "2023-01-05 09:00", "2023-01-05 17:00"));

    let report = run(&mut src).unwrap();

    let labels: Vec<&str> = report
        .hours_by_employee
        .iter()
        .map(|h| h.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Long", "Short"]);
    assert_eq!(report.hours_by_employee[0].hours, 8.0);
    assert_eq!(report.hours_by_employee[1].hours, 4.0);
    assert_eq!(report.kpis.average_workday_duration_ms, 6.0 * MS_PER_HOUR);
}

#[test]
fn test_employee_with_many_entries_counted_once() {
    let mut src = FakeSource::default()
        .with_employee(1, "Ada")
        .with_entry(done(10, 1, "2023-01-02 09:00", "2023-01-02 12:00"))
        .with_entry(done(11, 1, "2023-01-03 09:00", "2023-01-03 12:00"))
        .with_entry(done(12, 1, "2023-01-04 09:00", "2023-01-04 12:00"));

    let report = run(&mut src).unwrap();

    assert_eq!(report.kpis.distinct_active_employee_count, 1);
    assert_eq!(report.kpis.total_duration_ms, 9 * HOUR_MS);
    assert_eq!(report.kpis.average_workday_duration_ms, 9.0 * MS_PER_HOUR);
    assert_eq!(report.hours_by_employee.len(), 1);
}

#[test]
fn test_range_bounds_are_inclusive_to_end_of_day() {
    let mut src = FakeSource::default()
        .with_employee(1, "Ada")
        // before the range
        .with_entry(done(1, 1, "2022-12-31 23:00", "2023-01-01 01:00"))
        // first instant of the range
        .with_entry(done(2, 1, "2023-01-01 00:00", "2023-01-01 01:00"))
        // last minute of the end day
        .with_entry(done(3, 1, "2023-01-31 23:59", "2023-02-01 00:59"))
        // after the range
        .with_entry(done(4, 1, "2023-02-01 00:00", "2023-02-01 01:00"));

    let report = run(&mut src).unwrap();

    assert_eq!(report.kpis.total_duration_ms, 2 * HOUR_MS);
    assert_eq!(src.log_fetches, vec![2, 3]);
}

#[test]
fn test_end_day_includes_its_last_millisecond() {
    let last = precise("2023-01-31 23:59:59.999");
    let next = precise("2023-02-01 00:00:00.000");
    let mut src = FakeSource::default()
        .with_employee(1, "Ada")
        .with_entry(TimeEntry::completed(1, 1, last, last + Duration::hours(1)))
        .with_entry(TimeEntry::completed(2, 1, next, next + Duration::hours(1)));

    let report = run(&mut src).unwrap();

    assert_eq!(report.kpis.total_duration_ms, HOUR_MS);
    assert_eq!(src.log_fetches, vec![1]);
}

#[test]
fn test_activity_logs_are_not_refiltered_by_date() {
    // the log lies outside the range but its entry qualifies
    let mut src = FakeSource::default()
        .with_employee(1, "Ada")
        .with_location(7, "Dock")
        .with_entry(done(10, 1, "2023-01-31 22:00", "2023-02-01 02:00"))
        .with_log(log(100, 10, 7, "2023-02-01 00:30", "2023-02-01 01:30"));

    let report = run(&mut src).unwrap();

    assert_eq!(report.hours_by_location.len(), 1);
    assert_eq!(report.hours_by_location[0].label, "Dock");
    assert_eq!(report.hours_by_location[0].hours, 1.0);
}

#[test]
fn test_location_totals_accumulate_across_entries() {
    let mut src = FakeSource::default()
        .with_employee(1, "Ada")
        .with_employee(2, "Bob")
        .with_location(5, "Office")
        .with_location(6, "Site")
        .with_entry(done(10, 1, "2023-01-10 08:00", "2023-01-10 16:00"))
        .with_entry(done(20, 2, "2023-01-11 08:00", "2023-01-11 16:00"))
        .with_log(log(1, 10, 5, "2023-01-10 08:00", "2023-01-10 10:00"))
        .with_log(log(2, 10, 6, "2023-01-10 10:00", "2023-01-10 16:00"))
        .with_log(log(3, 20, 5, "2023-01-11 08:00", "2023-01-11 11:30"));

    let report = run(&mut src).unwrap();

    assert_eq!(report.hours_by_location[0].label, "Site");
    assert_eq!(report.hours_by_location[0].hours, 6.0);
    assert_eq!(report.hours_by_location[1].label, "Office");
    assert_eq!(report.hours_by_location[1].hours, 5.5);
}

#[test]
fn test_hours_sum_matches_total_duration() {
    let mut src = FakeSource::default()
        .with_employee(1, "Ada")
        .with_employee(2, "Bob")
        .with_employee(3, "Cy")
        .with_entry(done(1, 1, "2023-01-02 09:13", "2023-01-02 17:41"))
        .with_entry(done(2, 2, "2023-01-02 07:01", "2023-01-02 15:59"))
        .with_entry(done(3, 3, "2023-01-09 10:07", "2023-01-09 11:08"))
        .with_entry(done(4, 3, "2023-01-10 10:07", "2023-01-10 19:22"));

    let report = run(&mut src).unwrap();

    let sum_ms: f64 = report
        .hours_by_employee
        .iter()
        .map(|h| h.hours * MS_PER_HOUR)
        .sum();
    assert!((sum_ms - report.kpis.total_duration_ms as f64).abs() < 1e-3);
    assert!(
        report
            .hours_by_employee
            .windows(2)
            .all(|w| w[0].hours >= w[1].hours)
    );
}

#[test]
fn test_missing_labels_fall_back_to_unknown() {
    let mut src = FakeSource::default()
        .with_employee(1, "Ada")
        .with_entry(done(10, 1, "2023-01-02 09:00", "2023-01-02 10:00"))
        .with_log(log(1, 10, 99, "2023-01-02 09:00", "2023-01-02 10:00"));

    // location 99 is absent from the lookup set
    let report = run(&mut src).unwrap();

    assert_eq!(report.hours_by_location.len(), 1);
    assert_eq!(report.hours_by_location[0].label, UNKNOWN_LABEL);
    assert_eq!(report.hours_by_location[0].hours, 1.0);
    assert_eq!(report.hours_by_employee[0].label, "Ada");
}

#[test]
fn test_generate_report_with_explicit_lookups() {
    let mut src = FakeSource::default()
        .with_entry(done(10, 4, "2023-01-02 09:00", "2023-01-02 11:00"))
        .with_log(log(1, 10, 8, "2023-01-02 09:00", "2023-01-02 11:00"));

    let employees = vec![Employee::new(4, "Dee")];
    let locations = vec![Location::new(8, "Yard")];
    let report = generate_report(&mut src, &employees, &locations, &january()).unwrap();

    assert_eq!(report.range, january());
    assert_eq!(report.hours_by_employee[0].label, "Dee");
    assert_eq!(report.hours_by_location[0].label, "Yard");
    assert_eq!(report.kpis.total_duration_ms, 2 * HOUR_MS);
}

#[test]
fn test_negative_entry_duration_is_a_data_error() {
    let mut src = FakeSource::default()
        .with_employee(1, "Ada")
        .with_entry(done(10, 1, "2023-01-02 17:00", "2023-01-02 09:00"));

    let err = run(&mut src).unwrap_err();
    assert!(matches!(err, AppError::DataIntegrity(_)), "got {err:?}");
}

#[test]
fn test_negative_activity_duration_is_a_data_error() {
    let mut src = FakeSource::default()
        .with_employee(1, "Ada")
        .with_location(5, "Office")
        .with_entry(done(10, 1, "2023-01-02 09:00", "2023-01-02 17:00"))
        .with_log(log(1, 10, 5, "2023-01-02 12:00", "2023-01-02 11:00"));

    let err = run(&mut src).unwrap_err();
    assert!(matches!(err, AppError::DataIntegrity(_)), "got {err:?}");
}

#[test]
fn test_entry_of_another_employee_is_a_data_error() {
    let mut src = FakeSource::default().with_employee(1, "Ada");
    src.entries
        .insert(1, vec![done(10, 2, "2023-01-02 09:00", "2023-01-02 17:00")]);

    let err = run(&mut src).unwrap_err();
    assert_eq!(err.category(), "data_integrity");
}

#[test]
fn test_fetch_failure_aborts_without_partial_result() {
    let mut src = FakeSource::default()
        .with_employee(1, "Ada")
        .with_employee(2, "Bob")
        .with_employee(3, "Cy")
        .with_entry(done(10, 1, "2023-01-02 09:00", "2023-01-02 17:00"));
    src.fail_entries_for = Some(2);

    let err = run(&mut src).unwrap_err();

    assert!(matches!(err, AppError::Fetch(_)), "got {err:?}");
    // fail fast: employee 3 is never fetched
    assert_eq!(src.entry_fetches, vec![1, 2]);
}

#[test]
fn test_activity_fetch_failure_aborts() {
    let mut src = FakeSource::default()
        .with_employee(1, "Ada")
        .with_entry(done(10, 1, "2023-01-02 09:00", "2023-01-02 17:00"));
    src.fail_logs_for = Some(10);

    let err = run(&mut src).unwrap_err();
    assert_eq!(err.category(), "fetch");
}

#[test]
fn test_employees_fetched_in_input_order() {
    let mut src = FakeSource::default()
        .with_employee(3, "Cy")
        .with_employee(1, "Ada")
        .with_employee(2, "Bob");

    run(&mut src).unwrap();

    assert_eq!(src.entry_fetches, vec![3, 1, 2]);
}

#[test]
fn test_equal_hours_keep_stable_order() {
    let mut src = FakeSource::default()
        .with_employee(2, "Bob")
        .with_employee(1, "Ada")
        .with_entry(done(10, 1, "2023-01-02 09:00", "2023-01-02 12:00"))
        .with_entry(done(20, 2, "2023-01-02 09:00", "2023-01-02 12:00"));

    let first = run(&mut src).unwrap();
    let second = run(&mut src).unwrap();

    assert_eq!(first.hours_by_employee, second.hours_by_employee);
    // ties are ordered by ascending id
    assert_eq!(first.hours_by_employee[0].label, "Ada");
}
