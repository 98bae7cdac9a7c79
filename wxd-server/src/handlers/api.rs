//! JSON query endpoints.
//!
//! Query strings are read as raw pairs and folded into a [`ReadingFilter`];
//! normalisation happens in the store, so blank, repeated or malformed
//! parameters never produce a 400.

use axum::{
    extract::{Extension, Query},
    Json,
};
use std::sync::Arc;
use wxd_core::{DaySummary, Reading, ReadingFilter};
use wxd_db::Database;

use crate::error::ApiError;
use crate::state::AppState;

/// Run a store query on the blocking pool.
async fn run_query<T, F>(state: &AppState, query: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&Database) -> wxd_db::Result<T> + Send + 'static,
{
    let db = state.store()?;
    let rows = tokio::task::spawn_blocking(move || query(&db)).await??;
    Ok(rows)
}

/// GET /api/cities
pub async fn cities_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let cities = run_query(&state, |db| db.list_cities()).await?;
    Ok(Json(cities))
}

type QueryPairs = Query<Vec<(String, String)>>;

/// GET /api/weather?city=&from=&to=
pub async fn weather_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(pairs): QueryPairs,
) -> Result<Json<Vec<Reading>>, ApiError> {
    let filter = ReadingFilter::from_pairs(pairs);
    let readings = run_query(&state, move |db| db.list_readings(&filter)).await?;
    Ok(Json(readings))
}

/// GET /api/summary?city=&from=&to=
pub async fn summary_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(pairs): QueryPairs,
) -> Result<Json<Vec<DaySummary>>, ApiError> {
    let filter = ReadingFilter::from_pairs(pairs);
    let days = run_query(&state, move |db| db.summarize(&filter)).await?;
    Ok(Json(days))
}
