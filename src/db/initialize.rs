use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
/// Returns the migration versions applied by this call.
pub fn init_db(conn: &Connection) -> AppResult<Vec<&'static str>> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    Ok(run_pending_migrations(conn)?)
}
