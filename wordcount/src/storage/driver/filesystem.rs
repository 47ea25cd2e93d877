use std::path::{Component, Path, PathBuf};

use crate::storage::{ObjectStorage, StorageError};

use bytes::Bytes;
use tokio::{
    fs::{File, create_dir_all, read},
    io::{self, AsyncWriteExt, BufWriter},
};

/// Keeps objects as plain files below a root directory, one file per key.
pub struct FilesystemStorage {
    root: PathBuf,
}

impl FilesystemStorage {
    pub fn new(root: impl AsRef<Path>) -> Self {
        FilesystemStorage {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn object_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(key);
        let is_plain = !key.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !is_plain {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(relative))
    }

    async fn create_path(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ObjectStorage for FilesystemStorage {
    async fn put_object(
        &self,
        key: &str,
        body: Bytes,
        _content_type: &str,
    ) -> Result<(), StorageError> {
        let file_path = self.object_path(key)?;
        self.create_path(&file_path).await?;

        let mut file_writer = BufWriter::new(File::create(&file_path).await?);
        file_writer.write_all(&body).await?;
        file_writer.flush().await?;
        Ok(())
    }

    async fn get_object(&self, key: &str) -> Result<Bytes, StorageError> {
        let file_path = self.object_path(key)?;
        match read(&file_path).await {
            Ok(buf) => Ok(Bytes::from(buf)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(key.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FilesystemStorage::new(dir.path());

        storage
            .put_object("results/report.json", Bytes::from_static(b"{}"), "application/json")
            .await
            .unwrap();

        let body = storage.get_object("results/report.json").await.unwrap();
        assert_eq!(body, Bytes::from_static(b"{}"));
        assert!(dir.path().join("results").join("report.json").is_file());
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FilesystemStorage::new(dir.path());

        storage.put_object("a.json", Bytes::from_static(b"old"), "application/json").await.unwrap();
        storage.put_object("a.json", Bytes::from_static(b"new"), "application/json").await.unwrap();

        assert_eq!(storage.get_object("a.json").await.unwrap(), Bytes::from_static(b"new"));
    }

    #[tokio::test]
    async fn test_missing_object_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FilesystemStorage::new(dir.path());

        let err = storage.get_object("missing.json").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(key) if key == "missing.json"));
    }

    #[tokio::test]
    async fn test_rejects_keys_outside_root() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FilesystemStorage::new(dir.path());

        for key in ["", "../escape.json", "/etc/passwd", "a/../../b.json"] {
            let err = storage.get_object(key).await.unwrap_err();
            assert!(matches!(err, StorageError::InvalidKey(_)), "key {key:?}");
        }
    }
}
