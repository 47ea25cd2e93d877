#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use bytes::Bytes;
use http_body_util::BodyExt;
use wordcount::api::create_router;
use wordcount::config::Config;
use wordcount::storage::driver::filesystem::FilesystemStorage;
use wordcount::storage::driver::s3::S3Options;
use wordcount::storage::{ObjectStorage, StorageError, StorageKind};
use wordcount::utils::state::AppState;

pub const BOUNDARY: &str = "wordcount-test-boundary";
pub const PREFIX: &str = "results/";

pub fn test_config(root: &Path) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        storage_kind: StorageKind::Filesystem,
        root_dir: root.display().to_string(),
        s3: S3Options::default(),
        key_prefix: PREFIX.to_string(),
        max_upload_bytes: 1024 * 1024,
    }
}

pub fn router_with(root: &Path, storage: Arc<dyn ObjectStorage>) -> Router {
    create_router(Arc::new(AppState::with_storage(test_config(root), storage)))
}

pub fn filesystem_router(root: &Path) -> Router {
    router_with(root, Arc::new(FilesystemStorage::new(root)))
}

/// Builds a multipart/form-data body holding a single part.
pub fn multipart_body(field: &str, file_name: Option<&str>, content: &[u8]) -> Vec<u8> {
    let disposition = match file_name {
        Some(name) => format!("form-data; name=\"{field}\"; filename=\"{name}\""),
        None => format!("form-data; name=\"{field}\""),
    };
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: {disposition}\r\nContent-Type: text/plain\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn upload_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/wordcount/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub fn retrieve_request(query: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(format!("/api/wordcount/retrieve{query}"))
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await.to_vec()).unwrap()
}

/// Storage double whose every call fails, counting how often it was hit.
#[derive(Default)]
pub struct FailingStorage {
    pub puts: AtomicUsize,
    pub gets: AtomicUsize,
}

#[async_trait::async_trait]
impl ObjectStorage for FailingStorage {
    async fn put_object(
        &self,
        _key: &str,
        _body: Bytes,
        _content_type: &str,
    ) -> Result<(), StorageError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Other("bucket unavailable".to_string()))
    }

    async fn get_object(&self, _key: &str) -> Result<Bytes, StorageError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Other("bucket unavailable".to_string()))
    }

    fn location(&self) -> String {
        "failing://".to_string()
    }
}
