// src/export/json_csv.rs

use crate::core::report::ReportView;
use crate::errors::{AppError, AppResult};
use crate::export::model::breakdown_rows;

/// Full report (range, KPIs, breakdowns and chart geometry), pretty-printed.
pub(crate) fn render_json(view: &ReportView) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(view)?)
}

/// Breakdowns as `group,label,hours` (header included thanks to serde).
pub(crate) fn render_csv(view: &ReportView) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for row in breakdown_rows(&view.report) {
        wtr.serialize(row)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::from(std::io::Error::other(format!("CSV flush error: {e}"))))?;
    String::from_utf8(bytes)
        .map_err(|e| AppError::from(std::io::Error::other(format!("CSV encoding error: {e}"))))
}
