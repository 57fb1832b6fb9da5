use crate::core::report::range::ReportRange;
use serde::Serialize;

pub const MS_PER_HOUR: f64 = 3_600_000.0;

/// Headline figures of a report.
///
/// `total_duration_ms` stays in milliseconds while the grouped breakdowns are
/// in hours; `sum(hours) * MS_PER_HOUR == total_duration_ms`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Kpis {
    pub total_duration_ms: i64,
    pub distinct_active_employee_count: usize,
    pub average_workday_duration_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoursByLabel {
    pub label: String,
    pub hours: f64,
}

impl HoursByLabel {
    pub fn new(label: impl Into<String>, hours: f64) -> Self {
        Self {
            label: label.into(),
            hours,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportResult {
    pub range: ReportRange,
    pub kpis: Kpis,
    pub hours_by_employee: Vec<HoursByLabel>, // descending by hours
    pub hours_by_location: Vec<HoursByLabel>, // descending by hours
}
