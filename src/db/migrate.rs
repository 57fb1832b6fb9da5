use rusqlite::{Connection, OptionalExtension, Result};
use tracing::info;

/// Ensure that the `log` table exists; it also records applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_core_tables",
        description: "Created employees, locations, time_entries and activity_logs tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS employees (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS locations (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS time_entries (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id     INTEGER NOT NULL REFERENCES employees(id),
            clock_in_time   TEXT NOT NULL,          -- YYYY-MM-DD HH:MM:SS.fff
            clock_out_time  TEXT,
            status          TEXT NOT NULL DEFAULT 'in_progress'
                            CHECK(status IN ('in_progress','on_break','completed'))
        );

        CREATE TABLE IF NOT EXISTS activity_logs (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            entry_id        INTEGER NOT NULL REFERENCES time_entries(id),
            location_id     INTEGER NOT NULL REFERENCES locations(id),
            check_in_time   TEXT NOT NULL,
            check_out_time  TEXT
        );
        "#,
    },
    Migration {
        version: "20250315_0002_lookup_indexes",
        description: "Added indexes for per-employee and per-entry lookups",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_time_entries_employee
            ON time_entries(employee_id, clock_in_time);
        CREATE INDEX IF NOT EXISTS idx_activity_logs_entry ON activity_logs(entry_id);
        "#,
    },
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;
    tx.commit()?;

    info!(version = m.version, "migration_applied");
    Ok(())
}

/// Public entry point: run all pending migrations, oldest first.
/// Returns the versions applied by this call.
///
/// Called by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            apply(conn, m)?;
            applied.push(m.version);
        }
    }

    Ok(applied)
}

/// Versions recorded as applied, in application order.
pub fn applied_migrations(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}
