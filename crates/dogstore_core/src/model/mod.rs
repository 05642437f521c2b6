//! Domain model for the dog store.
//!
//! # Responsibility
//! - Define the single entity shape persisted by the store.
//!
//! # Invariants
//! - Identity is the storage-assigned integer key; there is no delete state.

pub mod dog;
