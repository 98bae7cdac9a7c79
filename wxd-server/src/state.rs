//! Application state shared by every handler.

use std::path::Path;
use wxd_db::{Database, StoreError};

/// The reading store, or the reason it could not be opened.
pub struct AppState {
    store: Result<Database, String>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { store: Ok(db) }
    }

    /// State whose API routes all fail with `reason`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            store: Err(reason.into()),
        }
    }

    /// Open the store at `path`, degrading instead of failing.
    pub fn open(path: &Path) -> Self {
        match Database::open(path) {
            Ok(db) => Self::new(db),
            Err(e) => {
                let reason = match e {
                    StoreError::Unavailable(reason) => reason,
                    other => other.to_string(),
                };
                log::warn!("reading store unavailable, API routes will fail: {}", reason);
                Self::unavailable(reason)
            }
        }
    }

    pub fn store(&self) -> Result<Database, StoreError> {
        self.store.clone().map_err(StoreError::Unavailable)
    }

    /// `"ok"` or `"unavailable: <reason>"`.
    pub fn store_status(&self) -> String {
        match &self.store {
            Ok(_) => "ok".to_string(),
            Err(reason) => format!("unavailable: {}", reason),
        }
    }
}
