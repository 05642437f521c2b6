//! SQLite connection bootstrap and storage error type.
//!
//! # Responsibility
//! - Open file-backed or in-memory SQLite connections for the dog store.
//! - Surface every engine failure as one storage error type.
//!
//! # Invariants
//! - Connections are owned by the caller; nothing here is process-global.
//! - Opening a connection never creates or alters the `dogs` table.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure reported by the underlying storage engine.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "storage error: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
