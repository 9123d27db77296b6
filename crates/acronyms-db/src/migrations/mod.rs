//! Schema migration registry and executor.
//!
//! Migrations are registered in order and applied in batches. Each
//! `Migrator::run` call applies every pending migration under one new batch
//! number; `Migrator::revert_last_batch` undoes the most recent batch in
//! reverse order.
//!
//! # Invariants
//!
//! - Migration names are unique and never renamed once released.
//! - A migration's DDL and its `_migrations` bookkeeping row commit together.

mod create_acronym;

use async_trait::async_trait;
use sqlx::{SqliteConnection, SqlitePool};
use thiserror::Error;

pub use create_acronym::CreateAcronym;

/// Errors raised while applying or reverting migrations.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// The database rejected a statement.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A recorded migration has no registered implementation.
    #[error("Migration '{0}' is recorded as applied but is not registered")]
    Unknown(String),
}

/// A reversible schema change.
#[async_trait]
pub trait Migration: Send + Sync {
    /// Stable identifier recorded in the `_migrations` table.
    fn name(&self) -> &'static str;

    /// Apply the schema change.
    async fn prepare(&self, conn: &mut SqliteConnection) -> Result<(), sqlx::Error>;

    /// Undo the schema change. May destroy data.
    async fn revert(&self, conn: &mut SqliteConnection) -> Result<(), sqlx::Error>;
}

/// All migrations known to this binary, in application order.
pub fn all() -> Vec<Box<dyn Migration>> {
    vec![Box::new(CreateAcronym)]
}

/// Applies and reverts registered migrations against a pool.
pub struct Migrator {
    pool: SqlitePool,
    migrations: Vec<Box<dyn Migration>>,
}

impl Migrator {
    /// Create a migrator with an explicit migration list.
    pub fn new(pool: SqlitePool, migrations: Vec<Box<dyn Migration>>) -> Self {
        Self { pool, migrations }
    }

    /// Create a migrator with every built-in migration registered.
    pub fn with_defaults(pool: SqlitePool) -> Self {
        Self::new(pool, all())
    }

    /// Apply all pending migrations as one batch.
    ///
    /// Returns the names applied, empty when the schema is already current.
    pub async fn run(&self) -> Result<Vec<&'static str>, MigrationError> {
        self.ensure_ledger().await?;

        let applied = self.applied_names().await?;
        let pending: Vec<&dyn Migration> = self
            .migrations
            .iter()
            .map(|m| &**m)
            .filter(|m| !applied.iter().any(|name| name == m.name()))
            .collect();

        if pending.is_empty() {
            return Ok(Vec::new());
        }

        let batch = self.current_batch().await? + 1;
        let mut names = Vec::with_capacity(pending.len());

        for migration in pending {
            let mut tx = self.pool.begin().await?;
            migration.prepare(&mut *tx).await?;
            sqlx::query("INSERT INTO _migrations (name, batch) VALUES (?, ?)")
                .bind(migration.name())
                .bind(batch)
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;

            tracing::info!(migration = migration.name(), batch, "Applied migration");
            names.push(migration.name());
        }

        Ok(names)
    }

    /// Revert every migration of the most recent batch, newest first.
    ///
    /// Returns the names reverted, empty when nothing is applied.
    pub async fn revert_last_batch(&self) -> Result<Vec<&'static str>, MigrationError> {
        self.ensure_ledger().await?;

        let batch = self.current_batch().await?;
        if batch == 0 {
            return Ok(Vec::new());
        }

        let recorded: Vec<String> =
            sqlx::query_scalar("SELECT name FROM _migrations WHERE batch = ? ORDER BY rowid DESC")
                .bind(batch)
                .fetch_all(&self.pool)
                .await?;

        let mut names = Vec::with_capacity(recorded.len());
        for name in recorded {
            let migration = self
                .migrations
                .iter()
                .find(|m| m.name() == name)
                .ok_or(MigrationError::Unknown(name))?;

            let mut tx = self.pool.begin().await?;
            migration.revert(&mut *tx).await?;
            sqlx::query("DELETE FROM _migrations WHERE name = ?")
                .bind(migration.name())
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;

            tracing::info!(migration = migration.name(), batch, "Reverted migration");
            names.push(migration.name());
        }

        Ok(names)
    }

    /// Revert every applied batch.
    pub async fn revert_all(&self) -> Result<Vec<&'static str>, MigrationError> {
        let mut names = Vec::new();
        loop {
            let reverted = self.revert_last_batch().await?;
            if reverted.is_empty() {
                return Ok(names);
            }
            names.extend(reverted);
        }
    }

    /// Names of all applied migrations, in application order.
    pub async fn applied_names(&self) -> Result<Vec<String>, MigrationError> {
        self.ensure_ledger().await?;
        let names = sqlx::query_scalar("SELECT name FROM _migrations ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;
        Ok(names)
    }

    async fn current_batch(&self) -> Result<i64, MigrationError> {
        let batch = sqlx::query_scalar("SELECT COALESCE(MAX(batch), 0) FROM _migrations")
            .fetch_one(&self.pool)
            .await?;
        Ok(batch)
    }

    async fn ensure_ledger(&self) -> Result<(), MigrationError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS _migrations (
                name TEXT PRIMARY KEY NOT NULL,
                batch INTEGER NOT NULL,
                applied_at TEXT NOT NULL DEFAULT (datetime('now'))
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
