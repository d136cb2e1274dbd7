//! Site configuration endpoint

use axum::{routing::get, Json, Router};

use crate::site::SiteConfig;

/// GET /api/config
async fn get_config() -> Json<SiteConfig> {
    Json(SiteConfig::current())
}

/// Site config routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/api/config", get(get_config))
}
