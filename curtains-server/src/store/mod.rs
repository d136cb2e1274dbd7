//! Document store layer - adapter trait, shared handle and backends
//!
//! # Design Principles
//!
//! - Handlers never see a driver type, only the [`Store`] handle
//! - A missing configuration yields an unavailable handle, never a startup failure
//! - One store call per operation, no retries

pub mod memory;
pub mod mongo;

#[cfg(test)]
pub(crate) mod testing;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson;
use serde::Serialize;

use crate::config::DatabaseSettings;

pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use mongodb::bson::Document;

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No connection was configured at startup
    #[error("document store is not configured")]
    Unavailable,

    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    /// Backend rejected the operation
    #[error("{0}")]
    Backend(String),

    #[error("could not encode record: {0}")]
    Encode(#[from] bson::ser::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Operations the service needs from a document database.
///
/// Records are BSON documents grouped into named collections. Reads return
/// documents in store-native order.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one record into `collection`.
    async fn create_document(&self, collection: &str, record: Document) -> StoreResult<()>;

    /// All documents in `collection`.
    async fn get_documents(&self, collection: &str) -> StoreResult<Vec<Document>>;

    /// First document whose top-level fields equal every field in `filter`.
    async fn find_one(&self, collection: &str, filter: Document) -> StoreResult<Option<Document>>;

    async fn count_documents(&self, collection: &str) -> StoreResult<u64>;

    async fn list_collection_names(&self) -> StoreResult<Vec<String>>;
}

/// Shared handle to the configured document store.
///
/// Cheap to clone. An unavailable handle answers every operation with
/// [`StoreError::Unavailable`].
#[derive(Clone, Default)]
pub struct Store {
    backend: Option<Arc<dyn DocumentStore>>,
}

impl Store {
    pub fn new<S>(backend: S) -> Self
    where
        S: DocumentStore + 'static,
    {
        Self {
            backend: Some(Arc::new(backend)),
        }
    }

    /// Handle with no backend behind it
    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    /// Build the handle from connection settings.
    ///
    /// Both `DATABASE_URL` and `DATABASE_NAME` must be present. A missing
    /// setting or an unparseable URL is logged and yields an unavailable
    /// handle so the service still starts.
    pub async fn connect(settings: &DatabaseSettings) -> Self {
        let (Some(url), Some(name)) = (settings.url.as_deref(), settings.name.as_deref()) else {
            tracing::warn!(
                database_url_set = settings.url.is_some(),
                database_name_set = settings.name.is_some(),
                "Document store not configured, running without persistence"
            );
            return Self::unavailable();
        };

        match MongoStore::connect(url, name).await {
            Ok(store) => {
                tracing::info!(database = %name, "Document store client initialized");
                Self::new(store)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Document store client could not be created");
                Self::unavailable()
            }
        }
    }

    /// Whether a backend is configured. Says nothing about reachability.
    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    fn backend(&self) -> StoreResult<&dyn DocumentStore> {
        self.backend.as_deref().ok_or(StoreError::Unavailable)
    }

    pub async fn create_document(&self, collection: &str, record: Document) -> StoreResult<()> {
        self.backend()?.create_document(collection, record).await
    }

    /// Encode a typed record and insert it.
    pub async fn insert<T>(&self, collection: &str, record: &T) -> StoreResult<()>
    where
        T: Serialize + Sync,
    {
        let document = bson::to_document(record)?;
        self.create_document(collection, document).await
    }

    pub async fn get_documents(&self, collection: &str) -> StoreResult<Vec<Document>> {
        self.backend()?.get_documents(collection).await
    }

    pub async fn find_one(&self, collection: &str, filter: Document) -> StoreResult<Option<Document>> {
        self.backend()?.find_one(collection, filter).await
    }

    pub async fn count_documents(&self, collection: &str) -> StoreResult<u64> {
        self.backend()?.count_documents(collection).await
    }

    pub async fn list_collection_names(&self) -> StoreResult<Vec<String>> {
        self.backend()?.list_collection_names().await
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("available", &self.is_available())
            .finish()
    }
}
