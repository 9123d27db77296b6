//! `acronyms` binary entry point.

use acronyms_cli::handlers::{self, migrate::MigrateAction};
use acronyms_cli::{Cli, Commands};
use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before parsing so env-backed flags see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let database = handlers::resolve_database(cli.database)?;

    match command {
        Commands::Serve {
            host,
            port,
            allowed_origins,
        } => {
            let config = handlers::serve::server_config(host, port, database, allowed_origins);
            handlers::serve::execute(config).await?;
        }
        Commands::Migrate { revert, all } => {
            handlers::migrate::execute(&database, MigrateAction::from_flags(revert, all)).await?;
        }
        Commands::Paths => handlers::paths::execute(&database)?,
    }

    Ok(())
}

/// `RUST_LOG` takes precedence; otherwise `info`, or `debug` with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
