use bytes::Bytes;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tokio::io;

pub mod driver;
pub mod result_storage;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("object not found: {0}")]
    NotFound(String),

    #[error("invalid object key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage error: {0}")]
    Other(String),
}

#[async_trait::async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Writes `body` under `key`, replacing whatever was stored there.
    async fn put_object(&self, key: &str, body: Bytes, content_type: &str)
    -> Result<(), StorageError>;

    /// Reads the full body stored under `key`.
    /// A missing object is reported as [`StorageError::NotFound`].
    async fn get_object(&self, key: &str) -> Result<Bytes, StorageError>;

    /// Human readable location of the backend, used in log lines.
    fn location(&self) -> String;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageKind {
    S3,
    Filesystem,
}

impl FromStr for StorageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "S3" => Ok(StorageKind::S3),
            "FILESYSTEM" => Ok(StorageKind::Filesystem),
            other => Err(format!("unknown storage backend `{other}`, expected S3 or FILESYSTEM")),
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKind::S3 => write!(f, "S3"),
            StorageKind::Filesystem => write!(f, "FILESYSTEM"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_storage_kind() {
        assert_eq!("S3".parse::<StorageKind>(), Ok(StorageKind::S3));
        assert_eq!("filesystem".parse::<StorageKind>(), Ok(StorageKind::Filesystem));
        assert!("memory".parse::<StorageKind>().is_err());
    }
}
