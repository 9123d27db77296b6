//! `SQLite` implementation of the `AcronymRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use acronyms_core::{Acronym, AcronymId, AcronymRepository, AcronymSort, NewAcronym, RepositoryError};

use super::row_mappers::{ACRONYM_SELECT_COLUMNS, map_sqlx_error, order_clause, row_to_acronym};

/// `SQLite` implementation of the `AcronymRepository` trait.
///
/// Every method issues exactly one statement against the pool.
pub struct SqliteAcronymRepository {
    pool: SqlitePool,
}

impl SqliteAcronymRepository {
    /// Create a new `SQLite` acronym repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AcronymRepository for SqliteAcronymRepository {
    async fn list(&self, sort: Option<AcronymSort>) -> Result<Vec<Acronym>, RepositoryError> {
        let query = format!(
            "SELECT {} FROM acronyms {}",
            ACRONYM_SELECT_COLUMNS,
            order_clause(sort)
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_acronym).collect()
    }

    async fn first(&self, sort: Option<AcronymSort>) -> Result<Option<Acronym>, RepositoryError> {
        let query = format!(
            "SELECT {} FROM acronyms {} LIMIT 1",
            ACRONYM_SELECT_COLUMNS,
            order_clause(sort)
        );

        let row = sqlx::query(&query)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_acronym).transpose()
    }

    async fn get_by_id(&self, id: AcronymId) -> Result<Acronym, RepositoryError> {
        let query = format!("SELECT {} FROM acronyms WHERE id = ?", ACRONYM_SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Acronym with ID {id}")))?;

        row_to_acronym(&row)
    }

    async fn search(&self, term: &str) -> Result<Vec<Acronym>, RepositoryError> {
        let query = format!(
            "SELECT {} FROM acronyms WHERE short = ? OR long = ? ORDER BY rowid",
            ACRONYM_SELECT_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(term)
            .bind(term)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_acronym).collect()
    }

    async fn insert(&self, acronym: &NewAcronym) -> Result<Acronym, RepositoryError> {
        let id = AcronymId::new();

        sqlx::query("INSERT INTO acronyms (id, short, long) VALUES (?, ?, ?)")
            .bind(id.to_string())
            .bind(&acronym.short)
            .bind(&acronym.long)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(acronym.clone().with_id(id))
    }

    async fn update(&self, acronym: &Acronym) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE acronyms SET short = ?, long = ? WHERE id = ?")
            .bind(&acronym.short)
            .bind(&acronym.long)
            .bind(acronym.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Acronym with ID {}",
                acronym.id
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: AcronymId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM acronyms WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Acronym with ID {id}")));
        }

        Ok(())
    }
}
