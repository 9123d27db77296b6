//! Migrate command handler.

use std::path::Path;

use acronyms_db::{Migrator, open_database};
use anyhow::Result;

/// Which way to move the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Run,
    RevertLastBatch,
    RevertAll,
}

impl MigrateAction {
    pub const fn from_flags(revert: bool, all: bool) -> Self {
        match (revert, all) {
            (true, true) => Self::RevertAll,
            (true, false) => Self::RevertLastBatch,
            (false, _) => Self::Run,
        }
    }
}

/// Apply or revert migrations against `db_path`.
///
/// Returns the names of the migrations touched, in execution order.
pub async fn execute(db_path: &Path, action: MigrateAction) -> Result<Vec<&'static str>> {
    let pool = open_database(db_path).await?;
    let migrator = Migrator::with_defaults(pool.clone());

    let names = match action {
        MigrateAction::Run => migrator.run().await?,
        MigrateAction::RevertLastBatch => migrator.revert_last_batch().await?,
        MigrateAction::RevertAll => migrator.revert_all().await?,
    };
    pool.close().await;

    let verb = if action == MigrateAction::Run {
        "Applied"
    } else {
        "Reverted"
    };
    if names.is_empty() {
        println!("Nothing to do.");
    } else {
        for name in &names {
            println!("{verb} {name}");
        }
    }

    Ok(names)
}
