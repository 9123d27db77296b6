//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused for repositories

pub mod acronym_repository;

use std::sync::Arc;
use thiserror::Error;

pub use acronym_repository::AcronymRepository;

/// Container for all repository trait objects.
///
/// Lives in core so services can be assembled without depending on the
/// database crate.
#[derive(Clone)]
pub struct Repos {
    /// Acronym repository for CRUD and query operations.
    pub acronyms: Arc<dyn AcronymRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(acronyms: Arc<dyn AcronymRepository>) -> Self {
        Self { acronyms }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A constraint was violated (e.g., NOT NULL, unique key).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A query that must yield one acronym yielded none.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl CoreError {
    /// Whether this error means "the requested acronym does not exist".
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Repository(RepositoryError::NotFound(_))
        )
    }
}
