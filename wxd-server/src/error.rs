//! Errors returned by API handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use wxd_db::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Store missing or query failed
    #[error("{0}")]
    Store(#[from] StoreError),

    /// The blocking query task panicked or was cancelled
    #[error("query task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Every failure is a 500 with `{"error": message}`.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::error!("request failed: {}", self);
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
