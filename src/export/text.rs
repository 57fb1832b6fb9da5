// src/export/text.rs

use crate::core::report::ReportView;
use crate::models::chart::BarChart;
use crate::models::report::HoursByLabel;
use crate::ui::chart::render_bar_chart;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET, colorize_duration};
use crate::utils::formatting::{hours2readable, ms2readable};
use crate::utils::table::{Column, Table};

fn breakdown_table(first_header: &str, items: &[HoursByLabel]) -> String {
    let mut table = Table::new(vec![
        Column::left(first_header, 24),
        Column::right("Hours", 8),
        Column::right("Duration", 10),
    ]);
    for h in items {
        table.add_row(vec![
            h.label.clone(),
            format!("{:.2}", h.hours),
            hours2readable(h.hours),
        ]);
    }
    table.render()
}

fn chart_section(out: &mut String, title: &str, chart: &BarChart) {
    out.push_str(&header(title));
    out.push('\n');
    if chart.is_empty() {
        out.push_str("No data to chart.\n");
    } else {
        out.push_str(&render_bar_chart(chart));
    }
    out.push('\n');
}

/// Human readable report: KPI block, breakdown tables, optional charts.
pub(crate) fn render_text(view: &ReportView, with_chart: bool) -> String {
    let report = &view.report;
    let kpis = &report.kpis;
    let mut out = String::new();

    out.push_str(&header(format!("Report {}", report.range.label())));
    out.push('\n');
    out.push_str(&format!(
        "{CYAN}• Total hours:{RESET}      {}\n",
        colorize_duration(&ms2readable(kpis.total_duration_ms))
    ));
    out.push_str(&format!(
        "{CYAN}• Active employees:{RESET} {}\n",
        kpis.distinct_active_employee_count
    ));
    out.push_str(&format!(
        "{CYAN}• Average workday:{RESET}  {}\n\n",
        colorize_duration(&ms2readable(kpis.average_workday_duration_ms.round() as i64))
    ));

    if report.hours_by_employee.is_empty() {
        out.push_str("No completed time entries in this range.\n");
        return out;
    }

    out.push_str(&breakdown_table("Employee", &report.hours_by_employee));
    out.push('\n');
    if report.hours_by_location.is_empty() {
        out.push_str("No closed activity logs in this range.\n\n");
    } else {
        out.push_str(&breakdown_table("Location", &report.hours_by_location));
        out.push('\n');
    }

    if with_chart {
        chart_section(&mut out, "Hours by employee", &view.charts.by_employee);
        chart_section(&mut out, "Hours by location", &view.charts.by_location);
    }

    out
}
