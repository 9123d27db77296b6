//! Shared helpers for acronyms-axum integration tests.

#![allow(dead_code)]

use acronyms_axum::{AxumContext, CorsConfig, create_router};
use acronyms_db::{CoreFactory, setup_test_database};
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Router backed by a fresh in-memory database.
pub async fn test_app() -> Router {
    test_app_with_cors(&CorsConfig::AllowAll).await
}

pub async fn test_app_with_cors(cors: &CorsConfig) -> Router {
    let pool = setup_test_database().await.unwrap();
    let ctx = AxumContext::new(CoreFactory::build_acronym_service(pool));
    create_router(ctx, cors)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn send_json(app: &Router, method: Method, uri: &str, body: &Value) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// POST an acronym and return the created JSON.
pub async fn create(app: &Router, short: &str, long: &str) -> Value {
    let response = send_json(
        app,
        Method::POST,
        "/api/acronyms",
        &serde_json::json!({ "short": short, "long": long }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

/// `short` values of a JSON array response, in order.
pub fn shorts(value: &Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["short"].as_str().unwrap().to_string())
        .collect()
}
