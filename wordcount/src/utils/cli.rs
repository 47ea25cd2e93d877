use clap::Parser;

use crate::storage::StorageKind;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Listening host
    #[arg(long, env = "WORDCOUNT_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Listening port
    #[arg(short, long, env = "WORDCOUNT_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Storage backend type (S3 or FILESYSTEM)
    #[arg(short, long, env = "WORDCOUNT_STORAGE", default_value = "S3")]
    pub storage: StorageKind,

    /// Root directory of the FILESYSTEM backend
    #[arg(long, env = "WORDCOUNT_ROOTDIR", default_value = "/var/lib/wordcount")]
    pub root: String,

    /// Region of the S3 bucket
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// Bucket that receives the results
    #[arg(long, env = "WORDCOUNT_BUCKET", default_value = "")]
    pub bucket: String,

    /// Prefix prepended to every result key
    #[arg(long, env = "WORDCOUNT_KEY_PREFIX", default_value = "")]
    pub key_prefix: String,

    /// Custom S3 endpoint, e.g. http://127.0.0.1:9000 for MinIO
    #[arg(long, env = "WORDCOUNT_S3_ENDPOINT")]
    pub endpoint_url: Option<String>,

    /// Address buckets by path instead of virtual host
    #[arg(long, env = "WORDCOUNT_S3_FORCE_PATH_STYLE", default_value_t = false)]
    pub force_path_style: bool,

    /// Largest accepted request body in bytes
    #[arg(long, env = "WORDCOUNT_MAX_UPLOAD_BYTES", default_value_t = 10 * 1024 * 1024)]
    pub max_upload_bytes: usize,
}
