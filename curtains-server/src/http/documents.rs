//! Stored document to response JSON
//!
//! Clients only ever see the store identifier as an opaque string.

use mongodb::bson::{Bson, Document};
use serde_json::Value;

/// Identifier field the store assigns
pub const ID_FIELD: &str = "_id";

/// Replace `_id` with its string form and render as relaxed extended JSON.
pub fn to_response_json(mut document: Document) -> Value {
    if let Some(id) = document.get(ID_FIELD) {
        let id = match id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s.clone(),
            other => other.to_string(),
        };
        document.insert(ID_FIELD, id);
    }

    Bson::Document(document).into_relaxed_extjson()
}

/// Convert a whole collection listing, keeping store order.
pub fn to_response_list(documents: Vec<Document>) -> Vec<Value> {
    documents.into_iter().map(to_response_json).collect()
}
