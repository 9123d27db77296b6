//! Plain-text greeting endpoints.

/// `GET /`
pub async fn index() -> &'static str {
    "It works!"
}

/// `GET /hello`
pub async fn hello() -> &'static str {
    "Hello, world!"
}

/// Health check endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}
