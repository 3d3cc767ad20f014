// src/db/mongo.rs

use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document};
use mongodb::options::{ClientOptions, FindOptions};
use mongodb::{Client, Database};

use super::DocumentStore;
use crate::config::Config;
use crate::errors::StorageError;

/// MongoDB-backed store. Cloning shares the driver's connection pool.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

/// Builds the store handle from configuration. Returns `None` when the
/// database is not configured or the connection string cannot be parsed;
/// the API keeps running without a store in that case.
pub async fn init_db(config: &Config) -> Option<MongoStore> {
    let (uri, name) = match (&config.database_url, &config.database_name) {
        (Some(uri), Some(name)) => (uri, name),
        _ => {
            log::warn!("DATABASE_URL or DATABASE_NAME not set; running without a database");
            return None;
        }
    };

    match connect(uri).await {
        Ok(client) => {
            log::info!("database handle ready for '{}'", name);
            Some(MongoStore::new(client.database(name)))
        }
        Err(e) => {
            log::warn!("invalid database configuration: {}", e);
            None
        }
    }
}

async fn connect(uri: &str) -> Result<Client, mongodb::error::Error> {
    let mut client_options = ClientOptions::parse(uri).await?;
    client_options.app_name = Some("advice-booking".to_string());
    // Fail fast so an unreachable server surfaces as a 500 rather than a hang.
    client_options.server_selection_timeout = Some(Duration::from_secs(5));
    Client::with_options(client_options)
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn name(&self) -> &str {
        self.db.name()
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<String, StorageError> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(document, None)
            .await?;
        Ok(match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        })
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StorageError> {
        let options = FindOptions::builder().limit(limit).build();
        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter, options)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn count(&self, collection: &str, filter: Document) -> Result<u64, StorageError> {
        Ok(self
            .db
            .collection::<Document>(collection)
            .count_documents(filter, None)
            .await?)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.db.list_collection_names(None).await?)
    }
}
