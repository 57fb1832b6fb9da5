// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod model;
mod text;

use crate::cli::parser::ReportFormat;
use crate::core::report::ReportView;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::fs;
use std::path::Path;

/// Render `view` in the requested format.
pub fn render(view: &ReportView, format: ReportFormat, with_chart: bool) -> AppResult<String> {
    match format {
        ReportFormat::Text => Ok(text::render_text(view, with_chart)),
        ReportFormat::Json => json_csv::render_json(view),
        ReportFormat::Csv => json_csv::render_csv(view),
    }
}

/// Print the rendered report, or write it to `file` when given.
pub fn write_report(
    view: &ReportView,
    format: ReportFormat,
    with_chart: bool,
    file: Option<&str>,
    force: bool,
) -> AppResult<()> {
    let content = render(view, format, with_chart)?;

    match file {
        None => {
            print!("{content}");
            if !content.ends_with('\n') {
                println!();
            }
        }
        Some(f) => {
            let path = Path::new(f);
            fs_utils::ensure_writable(path, force)?;
            fs::write(path, content)?;
            success(format!("Report written to {}", path.display()));
        }
    }
    Ok(())
}
