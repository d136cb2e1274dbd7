//! In-process backend
//!
//! Keeps collections in memory with the same observable behavior as the
//! MongoDB backend: generated ObjectIds, insertion order, collections that
//! exist once something has been written to them.

use std::collections::BTreeMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use tokio::sync::RwLock;

use super::{DocumentStore, StoreResult};

/// Document store held entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<BTreeMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create_document(&self, collection: &str, record: Document) -> StoreResult<()> {
        // Generated id goes first, like the server does
        let mut document = if record.contains_key("_id") {
            Document::new()
        } else {
            doc! { "_id": ObjectId::new() }
        };
        for (key, value) in record {
            document.insert(key, value);
        }

        self.collections
            .write()
            .await
            .entry(collection.to_owned())
            .or_default()
            .push(document);
        Ok(())
    }

    async fn get_documents(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn find_one(&self, collection: &str, filter: Document) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().await;
        let found = collections.get(collection).and_then(|docs| {
            docs.iter()
                .find(|d| filter.iter().all(|(key, value)| d.get(key) == Some(value)))
                .cloned()
        });
        Ok(found)
    }

    async fn count_documents(&self, collection: &str) -> StoreResult<u64> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).map_or(0, |docs| docs.len() as u64))
    }

    async fn list_collection_names(&self) -> StoreResult<Vec<String>> {
        Ok(self.collections.read().await.keys().cloned().collect())
    }
}
