//! Core domain types, ports and services for the acronyms API.
//!
//! This crate is infrastructure-free: it knows nothing about `sqlx` or
//! `axum`. Adapters implement the traits in [`ports`] and drive the
//! [`services::AcronymService`].
//!
//! # Structure
//!
//! - `domain` - `Acronym`, `NewAcronym`, `AcronymId`, `AcronymSort`
//! - `ports` - repository trait and error types
//! - `services` - orchestration over the ports
//! - `paths` - data directory and database file resolution

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Acronym, AcronymId, AcronymSort, NewAcronym, SortDirection, SortField};
pub use paths::{PathError, data_root, database_path};
pub use ports::{AcronymRepository, CoreError, Repos, RepositoryError};
pub use services::AcronymService;

// Dev-dependencies exercised only by some test modules
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
