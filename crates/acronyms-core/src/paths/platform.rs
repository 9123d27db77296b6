//! Platform-specific data directory resolution.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "ACRONYMS_DATA_DIR";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `ACRONYMS_DATA_DIR` environment variable (highest priority)
/// 2. System local data directory (e.g., `~/.local/share/acronyms`)
///
/// The directory is created if it doesn't exist.
pub fn data_root() -> Result<PathBuf, PathError> {
    let root = match env::var(DATA_DIR_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => dirs::data_local_dir()
            .ok_or(PathError::NoDataDir)?
            .join("acronyms"),
    };

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::with_data_dir;
    use tempfile::tempdir;

    #[test]
    fn test_data_root_honors_env_override() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("nested");

        let resolved = with_data_dir(&root, || data_root().unwrap());
        assert_eq!(resolved, root);
        assert!(resolved.is_dir());
    }
}
