//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that delegate to `AcronymService`.

pub mod acronyms;
pub mod root;
