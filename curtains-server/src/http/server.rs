//! Axum server setup
//!
//! Server skeleton with:
//! - Permissive CORS by default, localhost-only when asked
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::config::{EnvPresence, ServiceSettings};
use crate::error::Result;
use crate::store::Store;

/// Frontend dev servers allowed when CORS is restricted
const LOCALHOST_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
    /// Connection settings, reported by diagnostics (presence only)
    pub env: EnvPresence,
}

impl AppState {
    pub fn new(store: Store, env: EnvPresence) -> Self {
        Self { store, env }
    }
}

/// Build the application router with all routes
pub fn build_router(state: AppState, cors_permissive: bool) -> Router {
    let cors = if cors_permissive {
        CorsLayer::permissive()
    } else {
        tracing::info!("CORS: restricted to localhost origins");
        CorsLayer::new()
            .allow_origin(LOCALHOST_ORIGINS.map(HeaderValue::from_static))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(routes::health::router())
        .merge(routes::site::router())
        .merge(routes::products::router())
        .merge(routes::gallery::router())
        .merge(routes::contact::router())
        .merge(routes::diagnostics::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server until a shutdown signal arrives.
///
/// Anything that must finish before the first request (seeding) has to be
/// awaited before calling this.
pub async fn run_server(state: AppState, settings: &ServiceSettings) -> Result<()> {
    let app = build_router(state, settings.cors_permissive);

    // Bind listener
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("Server listening on {}", settings.bind_addr);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_support::{get, memory_app};
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn unknown_route_is_404() {
        let (app, _) = memory_app().await;
        let (status, _) = get(app, "/api/unknown").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn permissive_cors_allows_any_origin() {
        let (app, _) = memory_app().await;
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/config")
                    .header(header::ORIGIN, "https://curtains.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn restricted_cors_rejects_foreign_origin() {
        let app = build_router(AppState::new(Store::unavailable(), EnvPresence::default()), false);
        let preflight = |origin: &'static str| {
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/contact")
                .header(header::ORIGIN, origin)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap()
        };

        let response = app.clone().oneshot(preflight("http://localhost:5173")).await.unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );

        let response = app.oneshot(preflight("https://elsewhere.example")).await.unwrap();
        assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
