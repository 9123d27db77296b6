//! `SQLite` adapter for the acronyms API.
//!
//! Owns the connection pool, the schema migrations and the repository
//! implementations of the ports defined in `acronyms-core`.

#![deny(unsafe_code)]

pub mod factory;
pub mod migrations;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export migration runner
pub use migrations::{CreateAcronym, Migration, MigrationError, Migrator};

// Re-export repository implementations
pub use repositories::SqliteAcronymRepository;

// Re-export setup functions for convenient access
pub use setup::{open_database, setup_database, setup_test_database};

// Linked for the bundled SQLite build only
use libsqlite3_sys as _;
