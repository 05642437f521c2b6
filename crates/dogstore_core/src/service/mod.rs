//! Core use-case services.
//!
//! # Responsibility
//! - Give callers an explicitly constructed entry point over an injected
//!   repository.

pub mod dog_service;
