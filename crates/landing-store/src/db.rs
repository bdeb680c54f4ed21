//! Database connection management
//!
//! Provides utilities for opening and managing SQLite connections

use crate::errors::{from_rusqlite, io_error, Result};
use crate::migrations::apply_migrations;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// How long a writer waits on a locked database before failing
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Enable foreign keys and set the busy timeout
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(from_rusqlite)?;
    conn.busy_timeout(BUSY_TIMEOUT).map_err(from_rusqlite)?;
    Ok(())
}

/// Switch a file database to write-ahead logging
pub fn enable_wal(conn: &Connection) -> Result<()> {
    let mode: String = conn
        .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
        .map_err(from_rusqlite)?;
    tracing::debug!(journal_mode = %mode, "journal mode set");
    Ok(())
}

/// Open, configure and migrate the database file at `path`
///
/// Missing parent directories are created.
pub fn connect<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
    }

    let mut conn = open(path)?;
    configure(&conn)?;
    enable_wal(&conn)?;
    apply_migrations(&mut conn)?;

    tracing::debug!(path = %path.display(), "database ready");
    Ok(conn)
}

/// Configured and migrated in-memory database
pub fn connect_in_memory() -> Result<Connection> {
    let mut conn = open_in_memory()?;
    configure(&conn)?;
    apply_migrations(&mut conn)?;
    Ok(conn)
}
