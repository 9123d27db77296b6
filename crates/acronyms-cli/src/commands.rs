//! Available subcommands.

use acronyms_axum::ServerConfig;
use clap::Subcommand;

/// Available commands for the acronyms tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server (applies pending migrations first)
    Serve {
        /// Interface to bind
        #[arg(long, env = "ACRONYMS_HOST", default_value = ServerConfig::DEFAULT_HOST)]
        host: String,
        /// Port to listen on
        #[arg(short, long, env = "ACRONYMS_PORT", default_value_t = ServerConfig::DEFAULT_PORT)]
        port: u16,
        /// Restrict CORS to this origin (repeatable); all origins allowed when absent
        #[arg(long = "allowed-origin")]
        allowed_origins: Vec<String>,
    },

    /// Apply pending schema migrations
    Migrate {
        /// Revert the most recent migration batch instead
        #[arg(long)]
        revert: bool,
        /// Together with --revert, revert every applied batch
        #[arg(long, requires = "revert")]
        all: bool,
    },

    /// Show the resolved data directory and database file
    Paths,
}
