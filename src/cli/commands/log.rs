use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print: true, limit } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let rows = load_log(&pool.conn, *limit)?;

        let mut table = Table::new(vec![
            Column::left("Date", 25),
            Column::left("Operation", 18),
            Column::left("Target", 28),
            Column::left("Message", 60),
        ]);
        for r in rows {
            table.add_row(vec![r.date, r.operation, r.target, r.message]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
