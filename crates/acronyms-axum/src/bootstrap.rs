//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::path::PathBuf;

use acronyms_core::AcronymService;
use acronyms_db::{CoreFactory, setup_database};
use anyhow::Result;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// `SQLite` database file.
    pub database_path: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8080;

    /// Create a config that allows every origin.
    pub fn new(host: impl Into<String>, port: u16, database_path: PathBuf) -> Self {
        Self {
            host: host.into(),
            port,
            database_path,
            cors: CorsConfig::default(),
        }
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// `host:port` string for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the Axum adapter.
///
/// Holds every service the handlers need.
pub struct AxumContext {
    /// Acronym CRUD and query service.
    pub acronyms: AcronymService,
}

impl AxumContext {
    pub fn new(acronyms: AcronymService) -> Self {
        Self { acronyms }
    }
}

/// Bootstrap the Axum server: open the database, migrate, build services.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "acronyms.paths",
        database_path = %config.database_path.display(),
        "Axum bootstrap resolved paths"
    );

    let pool = setup_database(&config.database_path).await?;
    Ok(AxumContext::new(CoreFactory::build_acronym_service(pool)))
}

/// Start the web server and run until Ctrl+C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("acronyms web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("acronyms web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
