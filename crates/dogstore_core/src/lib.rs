//! Core persistence layer for the dog store.
//! Maps `Dog` entities to rows of a single SQLite `dogs` table.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::dog::{Dog, DogId, DogRow};
pub use repo::dog_repo::{DogRepository, RepoError, RepoResult, SqliteDogRepository};
pub use service::dog_service::DogService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
