//! Route definitions and router construction.
//!
//! Handlers delegate to the shared `AcronymService`.

use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build all API routes without `/api` prefix (for nesting under /api).
///
/// Static segments (`search`, `first`, `sorted`) take priority over the
/// `{id}` capture, so they never reach the get-by-id handler.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/acronyms",
            get(handlers::acronyms::list).post(handlers::acronyms::create),
        )
        .route("/acronyms/search", get(handlers::acronyms::search))
        .route("/acronyms/first", get(handlers::acronyms::first))
        .route("/acronyms/sorted", get(handlers::acronyms::sorted))
        .route(
            "/acronyms/sorted/first",
            get(handlers::acronyms::sorted_first),
        )
        .route(
            "/acronyms/sorted/longDescending",
            get(handlers::acronyms::sorted_long_descending),
        )
        .route(
            "/acronyms/sorted/longAscending",
            get(handlers::acronyms::sorted_long_ascending),
        )
        .route(
            "/acronyms/{id}",
            get(handlers::acronyms::get)
                .put(handlers::acronyms::update)
                .delete(handlers::acronyms::remove),
        )
}

/// Create the main Axum router with all routes.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/", get(handlers::root::index))
        .route("/hello", get(handlers::root::hello))
        .route("/health", get(handlers::root::health_check))
        .nest("/api", api_routes().with_state(state).layer(cors))
        .layer(TraceLayer::new_for_http())
}
