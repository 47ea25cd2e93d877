use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::service::word_count::{retrieve_handler, upload_handler};
use crate::utils::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_upload_bytes;
    Router::new()
        .route("/health", get(|| async { StatusCode::OK.into_response() }))
        .nest("/api/wordcount", word_count_router())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn word_count_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/upload", post(upload_handler))
        .route("/retrieve", get(retrieve_handler))
}
