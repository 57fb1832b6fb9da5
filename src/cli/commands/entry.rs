use crate::cli::parser::{Commands, EntryAction};
use crate::config::Config;
use crate::core::records::RecordsLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_time_entries;
use crate::errors::{AppError, AppResult};
use crate::models::entry_status::EntryStatus;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};
use crate::utils::time::{parse_optional_timestamp, parse_timestamp};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Entry { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            EntryAction::Add {
                employee,
                clock_in,
                clock_out,
                status,
            } => {
                //
                // 1. Parse timestamps and status
                //
                let clock_in = parse_timestamp(clock_in)?;
                let clock_out = parse_optional_timestamp(clock_out.as_ref())?;
                let status = status.as_deref().map(parse_status).transpose()?;

                //
                // 2. Insert
                //
                let id =
                    RecordsLogic::add_entry(&mut pool, *employee, clock_in, clock_out, status)?;
                success(format!("Time entry {id} added for employee {employee}"));
            }
            EntryAction::Close { entry, clock_out } => {
                let out = parse_timestamp(clock_out)?;
                let closed = RecordsLogic::close_entry(&mut pool, *entry, out)?;
                success(format!(
                    "Time entry {} completed ({} → {})",
                    closed.id,
                    closed.clock_in_str(),
                    closed.clock_out_str()
                ));
            }
            EntryAction::List { employee } => {
                let entries = load_time_entries(&pool.conn, *employee)?;
                if entries.is_empty() {
                    info(format!("No time entries for employee {employee}."));
                    return Ok(());
                }
                let mut table = Table::new(vec![
                    Column::right("ID", 6),
                    Column::left("Clock in", 17),
                    Column::left("Clock out", 17),
                    Column::left("Status", 12),
                ]);
                for e in entries {
                    table.add_row(vec![
                        e.id.to_string(),
                        e.clock_in_str(),
                        e.clock_out_str(),
                        e.status.to_db_str().to_string(),
                    ]);
                }
                print!("{}", table.render());
            }
        }
    }
    Ok(())
}

fn parse_status(s: &str) -> AppResult<EntryStatus> {
    EntryStatus::from_cli(s).ok_or_else(|| AppError::InvalidStatus(s.into()))
}
