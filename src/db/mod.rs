// src/db/mod.rs

use async_trait::async_trait;
use mongodb::bson::{self, Bson, Document};
use serde::Serialize;
use serde_json::Value;

use crate::errors::StorageError;

#[cfg(test)]
pub mod memory;
mod mongo;

pub use mongo::init_db;

/// A document store addressed by collection name.
///
/// Implementations must be safe to share between request handlers; any
/// pooling is their own concern.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the underlying database.
    fn name(&self) -> &str;

    /// Inserts one document and returns its generated identifier.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<String, StorageError>;

    /// Returns up to `limit` documents matching `filter`, in natural order.
    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StorageError>;

    async fn count(&self, collection: &str, filter: Document) -> Result<u64, StorageError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, StorageError>;
}

/// Encodes `record` and inserts it into `collection`, returning the new id.
pub async fn create_document<T: Serialize>(
    store: &dyn DocumentStore,
    collection: &str,
    record: &T,
) -> Result<String, StorageError> {
    let document = bson::to_document(record)?;
    store.insert_one(collection, document).await
}

/// Fetches up to `limit` documents from `collection` as JSON, each carrying
/// its identifier as a string `id` field.
pub async fn get_documents(
    store: &dyn DocumentStore,
    collection: &str,
    filter: Document,
    limit: i64,
) -> Result<Vec<Value>, StorageError> {
    let documents = store.find(collection, filter, limit).await?;
    Ok(documents.into_iter().map(to_serializable).collect())
}

/// Replaces the store's `_id` key with a string `id`.
pub fn to_serializable(mut document: Document) -> Value {
    if let Some(raw_id) = document.remove("_id") {
        if raw_id != Bson::Null {
            document.insert("id", id_to_string(raw_id));
        }
    }
    Bson::Document(document).into_relaxed_extjson()
}

fn id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryStore;
    use mongodb::bson::{doc, oid::ObjectId};
    use serde_json::json;

    #[test]
    fn to_serializable_exposes_string_id() {
        let oid = ObjectId::new();
        let value = to_serializable(doc! { "_id": oid, "name": "Ava Ocean", "rating": 4.9 });

        assert_eq!(value["id"], json!(oid.to_hex()));
        assert!(value.get("_id").is_none());
        assert_eq!(value["name"], "Ava Ocean");
        assert_eq!(value["rating"], 4.9);
    }

    #[test]
    fn to_serializable_keeps_string_ids_as_is() {
        let value = to_serializable(doc! { "_id": "custom-key", "topic": "clarity" });
        assert_eq!(value["id"], "custom-key");
    }

    #[derive(Serialize)]
    struct Note {
        title: String,
        body: Option<String>,
    }

    #[actix_web::test]
    async fn create_then_get_round_trips_through_the_store() {
        let store = MemoryStore::new();
        let note = Note {
            title: "hello".into(),
            body: None,
        };

        let id = create_document(&store, "note", &note).await.unwrap();
        assert!(!id.is_empty());

        let docs = get_documents(&store, "note", doc! {}, 10).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["id"], json!(id));
        assert_eq!(docs[0]["title"], "hello");
        // Unset optionals are persisted as null rather than dropped.
        assert!(docs[0].as_object().unwrap().contains_key("body"));
        assert!(docs[0]["body"].is_null());
    }

    #[actix_web::test]
    async fn get_documents_honours_limit_and_filter() {
        let store = MemoryStore::new();
        for topic in ["a", "b", "a"] {
            create_document(&store, "note", &json!({ "topic": topic }))
                .await
                .unwrap();
        }

        let limited = get_documents(&store, "note", doc! {}, 2).await.unwrap();
        assert_eq!(limited.len(), 2);

        let filtered = get_documents(&store, "note", doc! { "topic": "a" }, 10)
            .await
            .unwrap();
        assert_eq!(filtered.len(), 2);

        let none = get_documents(&store, "note", doc! { "topic": "z" }, 10)
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[actix_web::test]
    async fn storage_failures_propagate() {
        let store = MemoryStore::unavailable();
        let err = get_documents(&store, "note", doc! {}, 10).await.unwrap_err();
        assert!(matches!(err, StorageError::Backend(_)));
    }
}
