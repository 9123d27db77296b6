//! Path utilities for the acronyms data directory and database file.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters print paths themselves
//! - OS-specific logic is kept private in `platform`

mod database;
mod error;
mod platform;

#[cfg(test)]
mod test_utils;

// Error type
pub use error::PathError;

// Platform roots
pub use platform::{DATA_DIR_ENV, data_root};

// Database
pub use database::{DATABASE_FILE_NAME, database_path};
