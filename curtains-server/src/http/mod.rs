//! HTTP layer
//!
//! Axum server with:
//! - Permissive CORS for the storefront (localhost-only on request)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod server;
pub mod error;
pub mod extractors;
pub mod documents;
pub mod routes;

#[cfg(test)]
pub(crate) mod test_support;

pub use server::{build_router, run_server, AppState};
pub use error::ApiError;
