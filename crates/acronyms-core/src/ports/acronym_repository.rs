//! Acronym repository trait definition.
//!
//! This port defines the interface for acronym persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Acronym, AcronymId, AcronymSort, NewAcronym};

/// Repository for acronym persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - One storage statement per call; no call spans a read and a write
/// - Unsorted listings come back in storage-native order
#[async_trait]
pub trait AcronymRepository: Send + Sync {
    /// List all acronyms, optionally ordered.
    async fn list(&self, sort: Option<AcronymSort>) -> Result<Vec<Acronym>, RepositoryError>;

    /// The first acronym under the given ordering, or `None` if storage is empty.
    async fn first(&self, sort: Option<AcronymSort>) -> Result<Option<Acronym>, RepositoryError>;

    /// Get an acronym by its identity.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the acronym doesn't exist.
    async fn get_by_id(&self, id: AcronymId) -> Result<Acronym, RepositoryError>;

    /// All acronyms whose `short` or `long` equals `term` exactly.
    async fn search(&self, term: &str) -> Result<Vec<Acronym>, RepositoryError>;

    /// Insert a new acronym.
    ///
    /// Returns the persisted acronym with its freshly assigned identity.
    async fn insert(&self, acronym: &NewAcronym) -> Result<Acronym, RepositoryError>;

    /// Overwrite `short` and `long` of an existing acronym.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the acronym doesn't exist.
    /// Never creates a row.
    async fn update(&self, acronym: &Acronym) -> Result<(), RepositoryError>;

    /// Delete an acronym by its identity.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the acronym doesn't exist.
    async fn delete(&self, id: AcronymId) -> Result<(), RepositoryError>;
}
