//! Gallery endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::Value;

use crate::http::documents::to_response_list;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::GALLERY_COLLECTION;

/// GET /api/gallery - every gallery item, unfiltered (the client filters by category)
async fn list_gallery(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Value>>, ApiError> {
    let items = state.store.get_documents(GALLERY_COLLECTION).await?;
    Ok(Json(to_response_list(items)))
}

/// Gallery routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/gallery", get(list_gallery))
}
