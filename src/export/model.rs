// src/export/model.rs

use crate::models::report::{HoursByLabel, ReportResult};
use serde::Serialize;

/// Flat row used for CSV output of both breakdowns.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BreakdownRow {
    pub group: &'static str,
    pub label: String,
    pub hours: f64,
}

fn rows_for<'a>(
    group: &'static str,
    items: &'a [HoursByLabel],
) -> impl Iterator<Item = BreakdownRow> + 'a {
    items.iter().map(move |h| BreakdownRow {
        group,
        label: h.label.clone(),
        hours: h.hours,
    })
}

/// Employee rows first, then location rows, each in report order.
pub(crate) fn breakdown_rows(report: &ReportResult) -> Vec<BreakdownRow> {
    rows_for("employee", &report.hours_by_employee)
        .chain(rows_for("location", &report.hours_by_location))
        .collect()
}
