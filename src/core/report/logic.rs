use super::aggregator::generate_report;
use super::range::ReportRange;
use crate::core::chart::layout_bars;
use crate::db::source::TimeDataSource;
use crate::errors::AppResult;
use crate::models::chart::{BarChart, ChartDimensions};
use crate::models::report::ReportResult;
use serde::Serialize;
use tracing::info;

/// Report plus the two charts drawn from its breakdowns.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    #[serde(flatten)]
    pub report: ReportResult,
    pub charts: ReportCharts,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportCharts {
    pub by_employee: BarChart,
    pub by_location: BarChart,
}

pub struct ReportLogic;

impl ReportLogic {
    /// Load the lookup sets from `source` and aggregate over `range`.
    pub fn generate<S>(source: &mut S, range: &ReportRange) -> AppResult<ReportResult>
    where
        S: TimeDataSource + ?Sized,
    {
        let employees = source.list_employees()?;
        let locations = source.list_locations()?;

        let report = generate_report(source, &employees, &locations, range)?;

        info!(
            start = %range.start_date,
            end = %range.end_date,
            total_ms = report.kpis.total_duration_ms,
            active_employees = report.kpis.distinct_active_employee_count,
            "report_generated"
        );
        Ok(report)
    }

    /// Generate the report and lay out one chart per breakdown.
    pub fn build_view<S>(
        source: &mut S,
        range: &ReportRange,
        dims: &ChartDimensions,
    ) -> AppResult<ReportView>
    where
        S: TimeDataSource + ?Sized,
    {
        let report = Self::generate(source, range)?;
        let charts = ReportCharts {
            by_employee: layout_bars(&report.hours_by_employee, dims),
            by_location: layout_bars(&report.hours_by_location, dims),
        };
        Ok(ReportView { report, charts })
    }
}
