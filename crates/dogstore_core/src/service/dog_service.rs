//! Dog use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for callers over an injected repository.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::dog::{Dog, DogId};
use crate::repo::dog_repo::{DogRepository, RepoResult};

/// Use-case service wrapper for dog persistence.
pub struct DogService<R: DogRepository> {
    repo: R,
}

impl<R: DogRepository> DogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Ensures the backing table exists.
    pub fn create_table(&self) -> RepoResult<()> {
        self.repo.create_table()
    }

    /// Ensures the backing table does not exist.
    pub fn drop_table(&self) -> RepoResult<()> {
        self.repo.drop_table()
    }

    /// Inserts or updates `dog` depending on whether it has an id.
    pub fn save(&self, dog: &mut Dog) -> RepoResult<()> {
        self.repo.save(dog)
    }

    /// Updates a saved dog in place.
    ///
    /// Returns `RepoError::Unsaved` unchanged for dogs without an id.
    pub fn update(&self, dog: &Dog) -> RepoResult<()> {
        self.repo.update(dog)
    }

    /// Creates and saves a new dog.
    pub fn create(&self, name: &str, breed: &str) -> RepoResult<Dog> {
        self.repo.create(name, breed)
    }

    pub fn get_all(&self) -> RepoResult<Vec<Dog>> {
        self.repo.get_all()
    }

    pub fn find_by_name(&self, name: &str) -> RepoResult<Option<Dog>> {
        self.repo.find_by_name(name)
    }

    pub fn find_by_id(&self, id: DogId) -> RepoResult<Option<Dog>> {
        self.repo.find_by_id(id)
    }

    /// Finds a dog by name or creates it with `breed`.
    pub fn find_or_create_by(&self, name: &str, breed: &str) -> RepoResult<Dog> {
        self.repo.find_or_create_by(name, breed)
    }
}
