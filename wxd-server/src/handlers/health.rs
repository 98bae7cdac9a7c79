//! Health handler.

use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// `"ok"` or `"unavailable: <reason>"`
    pub store: String,
}

/// GET /health - always 200; the store state is reported, not enforced.
pub async fn health_handler(Extension(state): Extension<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        store: state.store_status(),
    })
}
