// Rust guideline compliant 2026-02-09

//! Durable storage seam used by the content store.

use async_trait::async_trait;
use dohas_core::{FileStore, Result};
use std::sync::Arc;

/// Asynchronous key-value storage for serialized datasets.
#[async_trait]
pub trait ContentStorage: Send + Sync {
    /// Reads the value stored under `key`, `None` if absent.
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`.
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

#[async_trait]
impl ContentStorage for FileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.get(key)
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.set(key, value)
    }
}

#[async_trait]
impl<T: ContentStorage + ?Sized> ContentStorage for Arc<T> {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value).await
    }
}
