//! Composition utilities for building services with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use acronyms_core::{AcronymService, Repos};

use crate::repositories::SqliteAcronymRepository;

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(Arc::new(SqliteAcronymRepository::new(pool)))
    }

    /// Build a ready-to-use `AcronymService` from a pool.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos(pool);
    /// let service = AcronymService::from_repos(&repos);
    /// ```
    pub fn build_acronym_service(pool: SqlitePool) -> AcronymService {
        AcronymService::from_repos(&Self::build_repos(pool))
    }
}
