use std::path::Path;

use crate::storage::StorageKind;
use crate::storage::driver::s3::S3Options;
use crate::utils::cli::Args;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub storage_kind: StorageKind,
    pub root_dir: String,
    pub s3: S3Options,
    pub key_prefix: String,
    pub max_upload_bytes: usize,
}

/// Checks the parsed arguments and reports every problem at once.
pub async fn validate_config(args: &Args) -> anyhow::Result<Config> {
    let mut validation_errors = Vec::new();

    match args.storage {
        StorageKind::S3 => {
            if args.bucket.trim().is_empty() {
                validation_errors
                    .push("WORDCOUNT_BUCKET must be set when using the S3 backend".to_string());
            }
            if args.region.trim().is_empty() {
                validation_errors.push("AWS_REGION must not be empty".to_string());
            }
        }
        StorageKind::Filesystem => match tokio::fs::metadata(Path::new(&args.root)).await {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => validation_errors.push(format!(
                "WORDCOUNT_ROOTDIR `{}` exists but is not a directory",
                args.root,
            )),
            Err(_) => validation_errors.push(format!(
                "WORDCOUNT_ROOTDIR `{}` does not exist",
                args.root,
            )),
        },
    }

    if args.max_upload_bytes == 0 {
        validation_errors.push("WORDCOUNT_MAX_UPLOAD_BYTES must be greater than zero".to_string());
    }

    if !validation_errors.is_empty() {
        anyhow::bail!(validation_errors.join("\n"));
    }

    if args.key_prefix.is_empty() {
        tracing::warn!("WORDCOUNT_KEY_PREFIX is not set, results are stored at the bucket root");
    }

    Ok(Config {
        host: args.host.clone(),
        port: args.port,
        storage_kind: args.storage,
        root_dir: args.root.clone(),
        s3: S3Options {
            region: args.region.clone(),
            bucket: args.bucket.clone(),
            endpoint_url: args.endpoint_url.clone(),
            force_path_style: args.force_path_style,
        },
        key_prefix: args.key_prefix.clone(),
        max_upload_bytes: args.max_upload_bytes,
    })
}
