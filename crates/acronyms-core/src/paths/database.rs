//! Database path resolution.
//!
//! Provides the canonical path to the acronyms `SQLite` database file.

use std::fs;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::data_root;

/// File name of the database inside `<data_root>/data`.
pub const DATABASE_FILE_NAME: &str = "acronyms.db";

/// Get the path to the acronyms database file.
///
/// The `data/` subdirectory is created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    let data_dir = data_root()?.join("data");

    fs::create_dir_all(&data_dir).map_err(|e| PathError::CreateFailed {
        path: data_dir.clone(),
        reason: e.to_string(),
    })?;

    Ok(data_dir.join(DATABASE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::with_data_dir;
    use tempfile::tempdir;

    #[test]
    fn test_database_path_lives_under_data_dir() {
        let temp = tempdir().unwrap();

        let path = with_data_dir(temp.path(), || database_path().unwrap());
        assert_eq!(path, temp.path().join("data").join(DATABASE_FILE_NAME));
        assert!(temp.path().join("data").is_dir());
    }
}
