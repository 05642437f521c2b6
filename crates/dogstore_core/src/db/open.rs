//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Apply the connection settings the dog store relies on.
//!
//! # Invariants
//! - Returned connections are in autocommit mode, so every write statement
//!   commits on its own.
//! - Returned connections wait up to `BUSY_TIMEOUT` on a locked database.

use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (or creates) a SQLite database file.
///
/// The parent directory must already exist.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_with("file", || Connection::open(path))
}

/// Opens a private in-memory SQLite database.
///
/// Every call yields an independent database, which keeps tests isolated.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_with("memory", Connection::open_in_memory)
}

fn open_with<F>(mode: &str, open: F) -> DbResult<Connection>
where
    F: FnOnce() -> rusqlite::Result<Connection>,
{
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode={mode}");

    let result = open().and_then(|conn| {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    });

    match result {
        Ok(conn) => {
            info!(
                "event=db_open module=db status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}
