use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::core::records::RecordsLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_employees;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            EmployeeAction::Add { first_name } => {
                let id = RecordsLogic::add_employee(&mut pool, first_name)?;
                success(format!("Employee '{}' added with id {id}", first_name.trim()));
            }
            EmployeeAction::List => {
                let employees = load_employees(&pool.conn)?;
                if employees.is_empty() {
                    info("No employees found.");
                    return Ok(());
                }
                let mut table = Table::new(vec![Column::right("ID", 6), Column::left("Name", 30)]);
                for e in employees {
                    table.add_row(vec![e.id.to_string(), e.first_name]);
                }
                print!("{}", table.render());
            }
        }
    }
    Ok(())
}
