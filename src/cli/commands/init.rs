use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::{LogOp, record};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

use crate::cli::parser::Cli;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing timereport…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", db_path.display());

    let conn = Connection::open(&db_path)?;
    let applied = init_db(&conn)?;

    for version in &applied {
        success(format!("Migration applied: {version}"));
    }

    if let Err(e) = record(
        &conn,
        LogOp::Init,
        "database",
        &format!("Database initialized at {}", db_path.display()),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success(format!("Database initialized at {}", db_path.display()));
    Ok(())
}
