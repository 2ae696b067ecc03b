//! Observability HTTP Routes
//!
//! Health check and per-request logging.

use std::time::Instant;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::observability::{Logger, Severity};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check route
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Middleware emitting one `HTTP_REQUEST` event per request
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = started.elapsed().as_millis().to_string();
    let severity = if status.is_server_error() {
        Severity::Error
    } else if status.is_client_error() {
        Severity::Warn
    } else {
        Severity::Info
    };
    Logger::log(
        severity,
        "HTTP_REQUEST",
        &[
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("status", status.as_str()),
            ("duration_ms", duration_ms.as_str()),
        ],
    );

    response
}
