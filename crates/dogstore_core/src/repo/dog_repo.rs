//! Dog repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Own the lifecycle of the `dogs` table (create/drop).
//! - Persist new or modified dogs and query them back.
//!
//! # Invariants
//! - `save` on an unsaved dog inserts and writes the assigned key back.
//! - `update` never inserts; an unsaved dog is rejected before any SQL runs.
//! - Every write is one statement in autocommit mode.
//! - Reads carry no ORDER BY. Rows come back in SQLite's natural rowid
//!   order, which is insertion order for this schema but not a contract.
//! - Reads name `id, name, breed` instead of `SELECT *`. The result is the
//!   same for this table, and the row decoder does not depend on the
//!   table's declared column order.
//! - NULL `name`/`breed` decode to `None`; they never fail a read.

use crate::db::DbError;
use crate::model::dog::{Dog, DogId};
use log::{debug, info, warn};
use rusqlite::{params, Connection, Params, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS dogs (
    id INTEGER PRIMARY KEY,
    name TEXT,
    breed TEXT
);";

const DROP_TABLE_SQL: &str = "DROP TABLE IF EXISTS dogs;";

const DOG_SELECT_SQL: &str = "SELECT id, name, breed FROM dogs";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for dog persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Storage engine failure, propagated unchanged.
    Db(DbError),
    /// `update` was called on a dog that was never saved.
    Unsaved,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unsaved => write!(f, "cannot update a dog that has not been saved"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unsaved => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for dog persistence.
pub trait DogRepository {
    /// Creates the `dogs` table if it does not exist.
    fn create_table(&self) -> RepoResult<()>;
    /// Drops the `dogs` table if it exists.
    fn drop_table(&self) -> RepoResult<()>;
    /// Inserts an unsaved dog (assigning `dog.id`) or updates a saved one.
    fn save(&self, dog: &mut Dog) -> RepoResult<()>;
    /// Overwrites `name`/`breed` of the row keyed by `dog.id`.
    ///
    /// A missing row is a silent no-op.
    fn update(&self, dog: &Dog) -> RepoResult<()>;
    /// Returns every stored dog in natural storage order.
    fn get_all(&self) -> RepoResult<Vec<Dog>>;
    /// Returns the first dog whose name matches exactly.
    fn find_by_name(&self, name: &str) -> RepoResult<Option<Dog>>;
    /// Returns the dog with the given primary key.
    fn find_by_id(&self, id: DogId) -> RepoResult<Option<Dog>>;

    /// Builds a new dog and saves it immediately.
    fn create(&self, name: &str, breed: &str) -> RepoResult<Dog> {
        let mut dog = Dog::new(name, breed);
        self.save(&mut dog)?;
        Ok(dog)
    }

    /// Returns the dog named `name`, creating it with `breed` when absent.
    ///
    /// When a dog is found it is returned unchanged: `breed` is not
    /// compared or written back.
    fn find_or_create_by(&self, name: &str, breed: &str) -> RepoResult<Dog> {
        if let Some(dog) = self.find_by_name(name)? {
            return Ok(dog);
        }
        self.create(name, breed)
    }
}

/// SQLite-backed dog repository.
///
/// Borrows a caller-owned connection; build one per store instead of
/// sharing a global handle.
pub struct SqliteDogRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDogRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_one<P: Params>(&self, sql: &str, params: P) -> RepoResult<Option<Dog>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_dog_row(row)?));
        }

        Ok(None)
    }
}

impl DogRepository for SqliteDogRepository<'_> {
    fn create_table(&self) -> RepoResult<()> {
        self.conn.execute_batch(CREATE_TABLE_SQL)?;
        info!("event=schema_create module=repo status=ok table=dogs");
        Ok(())
    }

    fn drop_table(&self) -> RepoResult<()> {
        self.conn.execute_batch(DROP_TABLE_SQL)?;
        info!("event=schema_drop module=repo status=ok table=dogs");
        Ok(())
    }

    fn save(&self, dog: &mut Dog) -> RepoResult<()> {
        if dog.is_saved() {
            return self.update(dog);
        }

        self.conn.execute(
            "INSERT INTO dogs (name, breed) VALUES (?1, ?2);",
            params![dog.name.as_deref(), dog.breed.as_deref()],
        )?;
        let id = self.conn.last_insert_rowid();
        dog.id = Some(id);

        debug!("event=dog_insert module=repo status=ok id={id}");
        Ok(())
    }

    fn update(&self, dog: &Dog) -> RepoResult<()> {
        let id = dog.id.ok_or(RepoError::Unsaved)?;

        let changed = self.conn.execute(
            "UPDATE dogs SET name = ?1, breed = ?2 WHERE id = ?3;",
            params![dog.name.as_deref(), dog.breed.as_deref(), id],
        )?;

        if changed == 0 {
            warn!("event=dog_update module=repo status=noop id={id} rows=0");
        } else {
            debug!("event=dog_update module=repo status=ok id={id} rows={changed}");
        }

        Ok(())
    }

    fn get_all(&self) -> RepoResult<Vec<Dog>> {
        let mut stmt = self.conn.prepare(&format!("{DOG_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut dogs = Vec::new();

        while let Some(row) = rows.next()? {
            dogs.push(parse_dog_row(row)?);
        }

        Ok(dogs)
    }

    fn find_by_name(&self, name: &str) -> RepoResult<Option<Dog>> {
        self.query_one(&format!("{DOG_SELECT_SQL} WHERE name = ?1 LIMIT 1;"), [name])
    }

    fn find_by_id(&self, id: DogId) -> RepoResult<Option<Dog>> {
        self.query_one(&format!("{DOG_SELECT_SQL} WHERE id = ?1 LIMIT 1;"), [id])
    }
}

fn parse_dog_row(row: &Row<'_>) -> RepoResult<Dog> {
    Ok(Dog::from_row((row.get(0)?, row.get(1)?, row.get(2)?)))
}
