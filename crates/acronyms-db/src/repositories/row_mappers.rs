//! Row mapping helpers for `SQLite` queries.

use acronyms_core::{Acronym, AcronymId, AcronymSort, RepositoryError, SortDirection, SortField};
use sqlx::Row;
use sqlx::error::ErrorKind;

/// Shared SELECT column list for acronym queries.
pub const ACRONYM_SELECT_COLUMNS: &str = "id, short, long";

/// Parse a database row into an Acronym.
pub fn row_to_acronym(row: &sqlx::sqlite::SqliteRow) -> Result<Acronym, RepositoryError> {
    let raw_id: String = row
        .try_get("id")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    let id = AcronymId::parse(&raw_id)
        .ok_or_else(|| RepositoryError::Storage(format!("Invalid acronym id in storage: {raw_id}")))?;

    Ok(Acronym {
        id,
        short: row
            .try_get("short")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        long: row
            .try_get("long")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
    })
}

/// ORDER BY clause for a listing.
///
/// Unsorted listings follow rowid, which is insertion order. Sorted listings
/// break ties on rowid so equal keys keep a stable order.
pub fn order_clause(sort: Option<AcronymSort>) -> &'static str {
    let Some(sort) = sort else {
        return "ORDER BY rowid";
    };
    match (sort.field(), sort.direction()) {
        (SortField::Short, SortDirection::Ascending) => "ORDER BY short ASC, rowid",
        (SortField::Short, SortDirection::Descending) => "ORDER BY short DESC, rowid",
        (SortField::Long, SortDirection::Ascending) => "ORDER BY long ASC, rowid",
        (SortField::Long, SortDirection::Descending) => "ORDER BY long DESC, rowid",
    }
}

/// Classify a sqlx error into the repository taxonomy.
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err)
            if matches!(
                db_err.kind(),
                ErrorKind::UniqueViolation | ErrorKind::NotNullViolation | ErrorKind::CheckViolation
            ) =>
        {
            RepositoryError::Constraint(db_err.message().to_string())
        }
        _ => RepositoryError::Storage(err.to_string()),
    }
}
