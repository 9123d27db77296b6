//! Command handlers.
//!
//! Each submodule executes one subcommand. Handlers receive the resolved
//! database path rather than re-reading global arguments.

pub mod migrate;
pub mod paths;
pub mod serve;

use std::path::PathBuf;

use anyhow::Result;

/// The database file to operate on: the `--database` override, else the
/// platform default.
pub fn resolve_database(override_path: Option<PathBuf>) -> Result<PathBuf> {
    match override_path {
        Some(path) => Ok(path),
        None => Ok(acronyms_core::database_path()?),
    }
}
