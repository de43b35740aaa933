//! Database Connection and Setup
//!
//! Opens the SQLite file backing local storage and creates its table.

use rusqlite::Connection;
use std::path::Path;

use crate::domain::DomainResult;

/// Open (or create) the database at `db_path`; ":memory:" is accepted
pub fn init_db(db_path: &Path) -> DomainResult<Connection> {
    let conn = Connection::open(db_path)?;
    run_migrations(&conn)?;
    log::info!("Local storage ready at {}", db_path.display());
    Ok(conn)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS local_storage (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at INTEGER NOT NULL DEFAULT 0
        )",
        [],
    )?;
    Ok(())
}
