use crate::cli::parser::{Commands, LocationAction};
use crate::config::Config;
use crate::core::records::RecordsLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_locations;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Location { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            LocationAction::Add { name } => {
                let id = RecordsLogic::add_location(&mut pool, name)?;
                success(format!("Location '{}' added with id {}", name.trim(), id));
            }
            LocationAction::List => {
                let locations = load_locations(&pool.conn)?;
                if locations.is_empty() {
                    info("No locations found.");
                    return Ok(());
                }
                let mut table = Table::new(vec![Column::right("ID", 6), Column::left("Name", 30)]);
                for l in locations {
                    table.add_row(vec![l.id.to_string(), l.name]);
                }
                print!("{}", table.render());
            }
        }
    }
    Ok(())
}
