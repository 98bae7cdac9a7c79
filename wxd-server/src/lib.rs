//! HTTP layer for the weather dashboard.
//!
//! Read-only JSON endpoints over the reading store, a health probe, and a
//! static file fallback for the browser app. No authentication; CORS is
//! permissive.
//!
//! | Route | Response |
//! |---|---|
//! | `GET /api/cities` | `string[]` |
//! | `GET /api/weather?city=&from=&to=` | `Reading[]` |
//! | `GET /api/summary?city=&from=&to=` | `DaySummary[]` |
//! | `GET /health` | `{status, store}` |
//! | anything else | files from the static directory |

pub mod error;
pub mod handlers;
pub mod state;

use axum::{routing::get, Extension, Router};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub use error::ApiError;
pub use state::AppState;

/// Build the full application router.
pub fn build_router(state: Arc<AppState>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/api/cities", get(handlers::api::cities_handler))
        .route("/api/weather", get(handlers::api::weather_handler))
        .route("/api/summary", get(handlers::api::summary_handler))
        .route("/health", get(handlers::health::health_handler))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(Extension(state))
        .layer(CorsLayer::permissive())
}

/// Where and what to serve.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub static_dir: PathBuf,
}

/// Open the store and serve until the process is stopped.
///
/// A store that cannot be opened does not stop the server: static files and
/// `/health` keep working and the API routes answer 500.
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    let db_path = config.db_path.clone();
    let state = tokio::task::spawn_blocking(move || AppState::open(&db_path))
        .await
        .map_err(std::io::Error::other)?;
    let app = build_router(Arc::new(state), &config.static_dir);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!(
        "serving {} on http://{} (static files from {})",
        config.db_path.display(),
        listener.local_addr()?,
        config.static_dir.display()
    );
    axum::serve(listener, app).await
}
