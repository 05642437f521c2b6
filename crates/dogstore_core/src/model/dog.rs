//! Dog domain model.
//!
//! # Responsibility
//! - Define the in-memory shape of one `dogs` row.
//! - Map stored `(id, name, breed)` triples back into entities.
//!
//! # Invariants
//! - `id` is `None` exactly until the first successful save.
//! - Once assigned, `id` never changes and identifies one row.
//! - Instances sharing an `id` are independent copies; nothing keeps them
//!   in sync.
//! - `name`/`breed` are `None` only for rows holding SQL NULL; the columns
//!   carry no NOT NULL constraint and NULL survives a load/save cycle.

use serde::{Deserialize, Serialize};

/// Storage-assigned primary key of a dog row.
pub type DogId = i64;

/// One stored row in column order: `(id, name, breed)`.
pub type DogRow = (DogId, Option<String>, Option<String>);

/// In-memory representation of one row of the `dogs` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    /// Primary key, written back by the repository on first insert.
    pub id: Option<DogId>,
    pub name: Option<String>,
    pub breed: Option<String>,
}

impl Dog {
    /// Creates an unsaved dog.
    ///
    /// Name and breed are taken as-is; no validation is applied.
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            breed: Some(breed.into()),
        }
    }

    /// Builds a saved dog from a stored row.
    ///
    /// Pure mapping: no I/O and no side effects.
    pub fn from_row(row: DogRow) -> Self {
        let (id, name, breed) = row;
        Self {
            id: Some(id),
            name,
            breed,
        }
    }

    /// Returns whether this dog has been assigned a primary key.
    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }
}
