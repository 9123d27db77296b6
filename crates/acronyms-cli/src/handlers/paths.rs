//! Paths command handler.
//!
//! Prints where acronyms keeps its data so users can find or back up the
//! database file.

use std::path::Path;

use anyhow::Result;

/// Print the data root and the database file in effect.
pub fn execute(database: &Path) -> Result<()> {
    let root = acronyms_core::data_root()?;

    println!("Data root: {}", root.display());
    println!("Database:  {}", database.display());
    if !database.exists() {
        println!("           (not created yet; run `acronyms migrate` or `acronyms serve`)");
    }
    Ok(())
}
