use crate::domain::WordCountResult;
use crate::error::AppError;
use crate::utils::state::AppState;
use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

const FILE_FIELD: &str = "file";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Deserialize)]
pub struct RetrieveParams {
    #[serde(rename = "fileKey")]
    pub file_key: Option<String>,
}

/// POST /api/wordcount/upload
pub async fn upload_handler(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::debug!("upload without a multipart body: {rejection}");
        AppError::NoFileUploaded
    })?;

    // Only parts carrying a filename are files; plain form values are skipped.
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        let is_file = field
            .name()
            .is_some_and(|name| name.eq_ignore_ascii_case(FILE_FIELD));
        match field.file_name().map(str::to_owned) {
            Some(file_name) if is_file => {
                let data = field.bytes().await?;
                upload = Some((file_name, data));
                break;
            }
            _ => {}
        }
    }

    let (file_name, data) = match upload {
        Some((file_name, data)) if !data.is_empty() => (file_name, data),
        _ => return Err(AppError::NoFileUploaded),
    };

    let base_name = base_name(&file_name);
    let text = decode_text(&data);
    let result = WordCountResult::count(&text);
    tracing::info!(
        "counted {} words ({} distinct) in {}",
        result.total_words,
        result.distinct_words(),
        file_name
    );

    state.results.store(&result, &base_name).await;
    Ok(Json(result))
}

/// GET /api/wordcount/retrieve?fileKey=<key>
pub async fn retrieve_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RetrieveParams>,
) -> Result<impl IntoResponse, AppError> {
    let file_key = params
        .file_key
        .filter(|key| !key.is_empty())
        .ok_or(AppError::MissingParameter("fileKey"))?;

    let result = state.results.retrieve(&file_key).await?;
    Ok(Json(result))
}

/// Drops any directory part and everything from the last `.` of an uploaded
/// file name, so `.txt` yields an empty base name.
fn base_name(file_name: &str) -> String {
    let name = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    match name.rfind('.') {
        Some(dot) => name[..dot].to_string(),
        None => name.to_string(),
    }
}

fn decode_text(data: &[u8]) -> Cow<'_, str> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    String::from_utf8_lossy(data)
}
