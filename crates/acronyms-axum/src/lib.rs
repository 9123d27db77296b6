//! Axum web server adapter for the acronyms API.
//!
//! [`bootstrap`](bootstrap::bootstrap) wires the `SQLite` adapter into an
//! [`AxumContext`]; [`create_router`] turns that context into a `Router`
//! serving `/`, `/hello`, `/health` and the `/api/acronyms` resource.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dev-dependencies used only by integration tests
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
