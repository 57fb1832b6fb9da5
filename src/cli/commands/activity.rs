use crate::cli::parser::{ActivityAction, Commands};
use crate::config::Config;
use crate::core::records::RecordsLogic;
use crate::core::report::aggregator::UNKNOWN_LABEL;
use crate::db::pool::DbPool;
use crate::db::queries::{load_activity_logs, load_locations};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_timestamp, parse_optional_timestamp, parse_timestamp};
use std::collections::HashMap;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Activity { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            ActivityAction::Add {
                entry,
                location,
                check_in,
                check_out,
            } => {
                let check_in = parse_timestamp(check_in)?;
                let check_out = parse_optional_timestamp(check_out.as_ref())?;
                let id =
                    RecordsLogic::add_activity(&mut pool, *entry, *location, check_in, check_out)?;
                success(format!("Activity log {id} added to entry {entry}"));
            }
            ActivityAction::List { entry } => {
                let logs = load_activity_logs(&pool.conn, *entry)?;
                if logs.is_empty() {
                    info(format!("No activity logs for entry {entry}."));
                    return Ok(());
                }
                let names: HashMap<i64, String> = load_locations(&pool.conn)?
                    .into_iter()
                    .map(|l| (l.id, l.name))
                    .collect();

                let mut table = Table::new(vec![
                    Column::right("ID", 6),
                    Column::left("Location", 20),
                    Column::left("Check in", 17),
                    Column::left("Check out", 17),
                ]);
                for l in logs {
                    table.add_row(vec![
                        l.id.to_string(),
                        names
                            .get(&l.location_id)
                            .cloned()
                            .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
                        format_timestamp(&l.check_in_time),
                        l.check_out_time
                            .as_ref()
                            .map(format_timestamp)
                            .unwrap_or_else(|| "--".into()),
                    ]);
                }
                print!("{}", table.render());
            }
        }
    }
    Ok(())
}
