use std::sync::Arc;

use bytes::Bytes;

use crate::domain::WordCountResult;
use crate::storage::{ObjectStorage, StorageError};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Persists count results as JSON documents at `<prefix><name>.json`.
#[derive(Clone)]
pub struct ResultStorage {
    storage: Arc<dyn ObjectStorage>,
    key_prefix: String,
}

impl ResultStorage {
    pub fn new(storage: Arc<dyn ObjectStorage>, key_prefix: impl Into<String>) -> Self {
        Self {
            storage,
            key_prefix: key_prefix.into(),
        }
    }

    pub fn key_for(&self, base_name: &str) -> String {
        format!("{}{}.json", self.key_prefix, base_name)
    }

    /// Writes `result` and returns the key it was stored under.
    pub async fn try_store(
        &self,
        result: &WordCountResult,
        base_name: &str,
    ) -> Result<String, StorageError> {
        let key = self.key_for(base_name);
        let body = serde_json::to_vec(result)?;
        self.storage
            .put_object(&key, Bytes::from(body), JSON_CONTENT_TYPE)
            .await?;
        Ok(key)
    }

    /// Best-effort write: failures are logged and dropped so the caller
    /// still gets to return the computed result.
    pub async fn store(&self, result: &WordCountResult, base_name: &str) {
        match self.try_store(result, base_name).await {
            Ok(key) => {
                tracing::info!("result uploaded to {}/{}", self.storage.location(), key);
            }
            Err(err) => {
                tracing::error!(
                    "failed to write {} to {}: {}",
                    self.key_for(base_name),
                    self.storage.location(),
                    err
                );
            }
        }
    }

    pub async fn retrieve(&self, key: &str) -> Result<WordCountResult, StorageError> {
        let fetched = self.read_result(key).await;
        if let Err(err) = &fetched {
            tracing::error!(
                "failed to read {} from {}: {}",
                key,
                self.storage.location(),
                err
            );
        }
        fetched
    }

    async fn read_result(&self, key: &str) -> Result<WordCountResult, StorageError> {
        let body = self.storage.get_object(key).await?;
        let text = String::from_utf8_lossy(&body);
        // A stored `null` document counts as no result at all.
        serde_json::from_str::<Option<WordCountResult>>(&text)?
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }
}
