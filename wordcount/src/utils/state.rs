use crate::config::Config;
use crate::storage::driver::{filesystem::FilesystemStorage, s3::S3Storage};
use crate::storage::result_storage::ResultStorage;
use crate::storage::{ObjectStorage, StorageKind};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub results: ResultStorage,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> Self {
        let storage_backend: Arc<dyn ObjectStorage> = match config.storage_kind {
            StorageKind::S3 => Arc::new(S3Storage::connect(&config.s3).await),
            StorageKind::Filesystem => Arc::new(FilesystemStorage::new(&config.root_dir)),
        };
        Self::with_storage(config, storage_backend)
    }

    pub fn with_storage(config: Config, storage: Arc<dyn ObjectStorage>) -> Self {
        AppState {
            results: ResultStorage::new(storage, config.key_prefix.clone()),
            config: Arc::new(config),
        }
    }
}
