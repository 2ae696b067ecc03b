//! # HTTP Server
//!
//! Combines the book and health routers behind CORS and request logging.

use std::io;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::book_routes::{book_routes, BooksState};
use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, log_requests};
use crate::observability::Logger;

/// HTTP server for the book API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, state: Arc<BooksState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    pub fn build_router(config: &HttpServerConfig, state: Arc<BooksState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .nest("/books", book_routes(state))
            .layer(middleware::from_fn(log_requests))
            .layer(cors)
    }

    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address. The host may be a name such as
    /// `localhost`; it is resolved by the listener.
    pub async fn bind(&self) -> io::Result<TcpListener> {
        TcpListener::bind(self.config.socket_addr()).await
    }

    /// Serve on an already bound listener until the process is terminated
    pub async fn serve(self, listener: TcpListener) -> io::Result<()> {
        let addr = listener.local_addr()?.to_string();
        Logger::info("SERVER_STARTING", &[("addr", addr.as_str())]);

        axum::serve(listener, self.router).await
    }

    /// Bind and serve until the process is terminated
    pub async fn start(self) -> io::Result<()> {
        let listener = self.bind().await?;
        self.serve(listener).await
    }
}
