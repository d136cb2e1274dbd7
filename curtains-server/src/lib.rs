//! curtains-server: backend for the curtains storefront
//!
//! Serves the product catalog, project gallery and site configuration,
//! and stores contact-form submissions in a document store.

pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod seed;
pub mod site;
pub mod store;

pub use config::{DatabaseSettings, EnvPresence, ServiceSettings};
pub use error::{Result, ServerError};
pub use http::{build_router, AppState};
pub use store::{DocumentStore, MemoryStore, MongoStore, Store, StoreError};

/// Start the service: connect the store, seed demo content, then serve.
///
/// Seeding is awaited before the listener is bound, so the first request
/// never observes a partially seeded catalog.
pub async fn serve(settings: ServiceSettings) -> Result<()> {
    let store = if settings.memory_store {
        tracing::info!("Using in-memory document store");
        Store::new(MemoryStore::new())
    } else {
        Store::connect(&settings.database).await
    };

    let report = seed::run(&store).await;
    tracing::debug!(?report, "Startup seeding finished");

    let state = AppState::new(store, settings.env);
    http::run_server(state, &settings).await
}
