use crate::cli::parser::{Commands, ReportFormat};
use crate::config::Config;
use crate::core::report::{ReportLogic, ReportRange};
use crate::db::log::{LogOp, record};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::write_report;
use tracing::warn;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        from,
        to,
        period,
        format,
        file,
        force,
        no_chart,
    } = cmd
    {
        // Range is validated before the database is even opened
        let range = match period {
            Some(p) => ReportRange::from_period(p)?,
            None => ReportRange::from_dates(from.as_deref(), to.as_deref())?,
        };

        let format = match format {
            Some(f) => *f,
            None => ReportFormat::from_config(&cfg.default_format).ok_or_else(|| {
                AppError::Config(format!("unknown default_format '{}'", cfg.default_format))
            })?,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let view = ReportLogic::build_view(&mut pool, &range, &cfg.chart)?;

        let kpis = &view.report.kpis;
        let message = format!(
            "{} ms over {} active employees",
            kpis.total_duration_ms, kpis.distinct_active_employee_count
        );
        if let Err(e) = record(&pool.conn, LogOp::Report, &range.label(), &message) {
            warn!(error = %e, "internal_log_write_failed");
        }

        write_report(&view, format, !*no_chart, file.as_deref(), *force)?;
    }
    Ok(())
}
