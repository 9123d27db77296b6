//! Serve command handler.

use std::path::PathBuf;

use acronyms_axum::{ServerConfig, start_server};
use anyhow::Result;

/// Build the server configuration from CLI arguments.
///
/// An empty origin list keeps the permissive CORS default.
pub fn server_config(
    host: String,
    port: u16,
    database_path: PathBuf,
    allowed_origins: Vec<String>,
) -> ServerConfig {
    let config = ServerConfig::new(host, port, database_path);
    if allowed_origins.is_empty() {
        config
    } else {
        config.with_allowed_origins(allowed_origins)
    }
}

/// Run the HTTP server until interrupted.
pub async fn execute(config: ServerConfig) -> Result<()> {
    tracing::info!(
        address = %config.bind_address(),
        database = %config.database_path.display(),
        "Starting acronyms server"
    );
    start_server(config).await
}
