//! Root liveness endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Service name reported at the root
pub const SERVICE_NAME: &str = "Curtains API";

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// GET /
async fn root() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
    })
}

/// Health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root))
}
