//! Database setup and initialization.
//!
//! Entry points call `setup_database()` with the resolved database path; it
//! opens the pool and brings the schema up to date.

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;

use crate::migrations::Migrator;

/// Sets up the `SQLite` database connection and applies pending migrations.
///
/// This function:
/// 1. Creates the parent directory and database file if missing
/// 2. Opens a connection pool
/// 3. Runs every pending migration
///
/// # Example
///
/// ```rust,no_run
/// use acronyms_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database(Path::new("/path/to/acronyms.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    let pool = open_database(db_path).await?;

    let applied = Migrator::with_defaults(pool.clone()).run().await?;
    if !applied.is_empty() {
        tracing::info!(
            target: "acronyms.db",
            database_path = %db_path.display(),
            migrations = ?applied,
            "Database schema updated"
        );
    }

    Ok(pool)
}

/// Opens (creating if needed) the database without touching the schema.
///
/// Used by the `migrate` command, which drives the [`Migrator`] itself.
pub async fn open_database(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await?;

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database with the full schema.
///
/// The pool holds a single connection that is never recycled, since every
/// in-memory connection is a separate database.
pub async fn setup_test_database() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    Migrator::with_defaults(pool.clone()).run().await?;
    Ok(pool)
}
