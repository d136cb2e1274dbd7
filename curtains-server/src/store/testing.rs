//! Test doubles for the store layer

use async_trait::async_trait;

use super::{Document, DocumentStore, StoreError, StoreResult};

/// Backend that rejects every operation with the given message
pub(crate) struct FailingStore {
    message: &'static str,
}

impl FailingStore {
    pub(crate) fn new(message: &'static str) -> Self {
        Self { message }
    }

    fn fail<T>(&self) -> StoreResult<T> {
        Err(StoreError::Backend(self.message.to_owned()))
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn create_document(&self, _collection: &str, _record: Document) -> StoreResult<()> {
        self.fail()
    }

    async fn get_documents(&self, _collection: &str) -> StoreResult<Vec<Document>> {
        self.fail()
    }

    async fn find_one(&self, _collection: &str, _filter: Document) -> StoreResult<Option<Document>> {
        self.fail()
    }

    async fn count_documents(&self, _collection: &str) -> StoreResult<u64> {
        self.fail()
    }

    async fn list_collection_names(&self) -> StoreResult<Vec<String>> {
        self.fail()
    }
}
