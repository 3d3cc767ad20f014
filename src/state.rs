// src/state.rs

use std::sync::Arc;

use crate::config::Config;
use crate::db::DocumentStore;
use crate::errors::StorageError;

/// Shared application state, built once at startup and read by handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Option<Arc<dyn DocumentStore>>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Option<Arc<dyn DocumentStore>>, config: Config) -> Self {
        Self { store, config }
    }

    /// The store handle, or `NotConfigured` when the process started without one.
    pub fn store(&self) -> Result<&dyn DocumentStore, StorageError> {
        self.store.as_deref().ok_or(StorageError::NotConfigured)
    }
}
