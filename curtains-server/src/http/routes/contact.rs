//! Contact form intake

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{ContactMessage, CONTACT_COLLECTION};

/// Acknowledgement for an accepted submission
#[derive(Serialize)]
pub struct ContactAck {
    pub ok: bool,
}

/// POST /api/contact - persist a contact-form submission
async fn submit_contact(
    State(state): State<Arc<AppState>>,
    ValidJson(message): ValidJson<ContactMessage>,
) -> Result<Json<ContactAck>, ApiError> {
    state.store.insert(CONTACT_COLLECTION, &message).await?;

    tracing::info!(
        source = message.source.as_deref().unwrap_or("unknown"),
        "Contact message stored"
    );
    Ok(Json(ContactAck { ok: true }))
}

/// Contact routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/contact", post(submit_contact))
}
