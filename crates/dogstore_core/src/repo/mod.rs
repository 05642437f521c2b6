//! Repository layer contracts and persistence implementations.
//!
//! # Responsibility
//! - Define the dog data-access contract.
//! - Keep SQLite statement details behind that contract.
//!
//! # Invariants
//! - Absence is a normal `None` result, never an error.
//! - Storage failures propagate unchanged; nothing is retried.

pub mod dog_repo;
