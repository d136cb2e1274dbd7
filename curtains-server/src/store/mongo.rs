//! MongoDB backend
//!
//! Client creation is lazy in the driver: building a `MongoStore` parses the
//! connection string but does not talk to the server. Unreachable servers
//! surface on the first operation, bounded by the server selection timeout.

use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

use super::{DocumentStore, StoreResult};

/// Application name reported to the server
const APP_NAME: &str = "curtains-api";

/// How long an operation waits for a usable server before failing.
/// Kept short so diagnostics answer quickly when the database is down.
const DEFAULT_SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Document store backed by one MongoDB database
#[derive(Debug, Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Create a client for `url` and select `database`.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string cannot be parsed.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = MongoStore::connect("mongodb://localhost:27017", "curtains").await?;
    /// ```
    pub async fn connect(url: &str, database: &str) -> StoreResult<Self> {
        Self::connect_with_timeout(url, database, DEFAULT_SERVER_SELECTION_TIMEOUT).await
    }

    /// Like [`MongoStore::connect`] with a custom server selection timeout.
    pub async fn connect_with_timeout(
        url: &str,
        database: &str,
        server_selection_timeout: Duration,
    ) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(url).await?;
        options.app_name = Some(APP_NAME.to_owned());
        options.server_selection_timeout = Some(server_selection_timeout);

        let client = Client::with_options(options)?;
        Ok(Self::from_database(client.database(database)))
    }

    pub fn from_database(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn create_document(&self, collection: &str, record: Document) -> StoreResult<()> {
        let result = self.collection(collection).insert_one(record).await?;
        tracing::debug!(collection, id = %result.inserted_id, "Inserted document");
        Ok(())
    }

    async fn get_documents(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let cursor = self.collection(collection).find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> StoreResult<Option<Document>> {
        Ok(self.collection(collection).find_one(filter).await?)
    }

    async fn count_documents(&self, collection: &str) -> StoreResult<u64> {
        Ok(self.collection(collection).count_documents(doc! {}).await?)
    }

    async fn list_collection_names(&self) -> StoreResult<Vec<String>> {
        Ok(self.db.list_collection_names().await?)
    }
}
