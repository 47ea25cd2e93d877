use crate::storage::{ObjectStorage, StorageError};

use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;

/// Connection settings for an S3 compatible bucket.
#[derive(Debug, Clone, Default)]
pub struct S3Options {
    pub region: String,
    pub bucket: String,
    /// Custom endpoint, e.g. a local MinIO instance.
    pub endpoint_url: Option<String>,
    pub force_path_style: bool,
}

#[derive(Debug, Clone)]
pub struct S3Storage {
    client: Client,
    bucket: String,
}

impl S3Storage {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Builds a client from the default AWS credential chain
    /// (environment, profile, instance metadata).
    pub async fn connect(options: &S3Options) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(options.region.clone()));
        if let Some(endpoint) = &options.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(options.force_path_style)
            .build();

        Self::new(Client::from_conf(s3_config), options.bucket.clone())
    }
}

#[async_trait::async_trait]
impl ObjectStorage for S3Storage {
    async fn put_object(
        &self,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| {
                StorageError::Other(format!(
                    "put object failed for {key}: {}",
                    DisplayErrorContext(&e)
                ))
            })?;
        Ok(())
    }

    async fn get_object(&self, key: &str) -> Result<Bytes, StorageError> {
        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| map_get_error(key, &e))?;

        let collected = response
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Other(format!("failed to read body of {key}: {e}")))?;
        Ok(collected.into_bytes())
    }

    fn location(&self) -> String {
        format!("s3://{}", self.bucket)
    }
}

fn map_get_error(key: &str, error: &SdkError<GetObjectError>) -> StorageError {
    let code = error
        .as_service_error()
        .and_then(ProvideErrorMetadata::code);
    if is_not_found_code(code) {
        return StorageError::NotFound(key.to_string());
    }

    StorageError::Other(format!(
        "get object failed for {key}: {}",
        DisplayErrorContext(error)
    ))
}

fn is_not_found_code(code: Option<&str>) -> bool {
    matches!(code, Some("NotFound" | "NoSuchKey"))
}
