//! Creates the `acronyms` table.

use async_trait::async_trait;
use sqlx::SqliteConnection;

use super::Migration;

/// Table holding one row per acronym.
///
/// `id` is a hyphenated UUID string assigned by the application.
pub struct CreateAcronym;

#[async_trait]
impl Migration for CreateAcronym {
    fn name(&self) -> &'static str {
        "create_acronym"
    }

    async fn prepare(&self, conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE acronyms (
                id TEXT PRIMARY KEY NOT NULL,
                short TEXT NOT NULL,
                long TEXT NOT NULL
            )
            "#,
        )
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    async fn revert(&self, conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
        sqlx::query("DROP TABLE acronyms")
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
