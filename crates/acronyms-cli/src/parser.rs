//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the acronyms API server.
#[derive(Parser)]
#[command(name = "acronyms")]
#[command(about = "Serve and manage the acronyms REST API")]
#[command(version)]
pub struct Cli {
    /// Override the SQLite database file for this invocation
    #[arg(long = "database", env = "ACRONYMS_DATABASE", global = true)]
    pub database: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["acronyms", "--verbose", "--database", "/tmp/a.db", "paths"]);
        assert!(cli.verbose);
        assert_eq!(cli.database, Some(PathBuf::from("/tmp/a.db")));
        assert!(matches!(cli.command, Some(Commands::Paths)));
    }
}
