use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum AppError {
    // Client errors
    #[error("No file uploaded.")]
    NoFileUploaded,

    #[error("{0} query parameter is required.")]
    MissingParameter(&'static str),

    #[error("The file with key {0} was not found.")]
    NotFound(String),

    // Internal errors
    #[error("{0}")]
    Storage(StorageError),

    #[error("{0}")]
    Multipart(#[from] MultipartError),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(key) => AppError::NotFound(key),
            other => AppError::Storage(other),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NoFileUploaded | Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) | Self::Multipart(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Generating response for AppError: {:?}", self);

        let status_code = self.status_code();
        let message = if status_code.is_server_error() {
            format!("Internal server error: {self}")
        } else {
            self.to_string()
        };
        (status_code, message).into_response()
    }
}
