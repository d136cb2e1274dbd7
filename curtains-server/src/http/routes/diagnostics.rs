//! Operational diagnostics - GET /test
//!
//! Always answers 200. Store problems are reported in the body so the
//! endpoint stays usable while the database is down.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Collection names included in the report
const MAX_LISTED_COLLECTIONS: usize = 10;

/// Error text is cut to this many characters
const MAX_ERROR_CHARS: usize = 50;

const BACKEND_RUNNING: &str = "✅ Running";
const DB_WORKING: &str = "✅ Connected & Working";
const DB_NOT_INITIALIZED: &str = "⚠️ Available but not initialized";
const SETTING_SET: &str = "✅ Set";
const SETTING_NOT_SET: &str = "❌ Not Set";

/// Diagnostics report
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: &'static str,
    pub database: String,
    /// Presence of `DATABASE_URL`, never its value
    pub database_url: &'static str,
    /// Presence of `DATABASE_NAME`, never its value
    pub database_name: &'static str,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

fn presence(set: bool) -> &'static str {
    if set {
        SETTING_SET
    } else {
        SETTING_NOT_SET
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// GET /test
async fn diagnostics(State(state): State<Arc<AppState>>) -> Json<DiagnosticsResponse> {
    let (database, connection_status, collections) = if !state.store.is_available() {
        (DB_NOT_INITIALIZED.to_owned(), "Not Connected", Vec::new())
    } else {
        match state.store.list_collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_LISTED_COLLECTIONS);
                (DB_WORKING.to_owned(), "Connected", names)
            }
            Err(e) => {
                tracing::debug!(error = %e, "Diagnostics: listing collections failed");
                let reason = truncate_chars(&e.to_string(), MAX_ERROR_CHARS);
                (
                    format!("⚠️ Connected but Error: {}", reason),
                    "Connected",
                    Vec::new(),
                )
            }
        }
    };

    Json(DiagnosticsResponse {
        backend: BACKEND_RUNNING,
        database,
        database_url: presence(state.env.database_url),
        database_name: presence(state.env.database_name),
        connection_status,
        collections,
    })
}

/// Diagnostics routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/test", get(diagnostics))
}
