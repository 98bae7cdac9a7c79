//! SQLite reading store for the weather dashboard.
//!
//! This crate owns the single `weather_readings` table and exposes the typed
//! read queries served over HTTP and by the CLI.
//!
//! # Architecture
//!
//! - `Arc<Mutex<Connection>>` wrapper so one connection can be shared by the
//!   server's blocking workers
//! - File-backed store created and seeded on first open, or in-memory for tests
//! - Typed query methods returning the serializable types from `wxd-core`
//!
//! # Usage
//!
//! ```rust
//! use wxd_core::ReadingFilter;
//! use wxd_db::Database;
//!
//! let db = Database::open_in_memory().unwrap();
//! db.seed_defaults().unwrap();
//!
//! let cities = db.list_cities().unwrap();
//! assert_eq!(cities, vec!["Austin", "Chicago"]);
//!
//! let days = db.summarize(&ReadingFilter::for_city("Austin")).unwrap();
//! assert_eq!(days.len(), 14);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`]. Per-day summaries are derived on the fly via
//! `GROUP BY city, day` and are never stored.

mod error;
mod loader;
mod queries;
pub mod schema;
pub mod seed;

pub use error::{Result, StoreError};

use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared handle to the reading store.
///
/// Cheaply cloneable; clones share one underlying connection.
///
/// # Example
///
/// ```rust
/// use wxd_db::Database;
///
/// let db = Database::open_in_memory().unwrap();
/// assert_eq!(db.reading_count().unwrap(), 0);
/// ```
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Create an empty in-memory store with the schema applied.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self::wrap(conn))
    }

    /// Open a file-backed store.
    ///
    /// A missing file is created, given the schema and seeded with the built-in
    /// demo readings. An existing file must already contain a readable
    /// `weather_readings` table, otherwise [`StoreError::Unavailable`] is
    /// returned.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("creating reading store at {}", path.display());
            let conn = Connection::open(path)
                .map_err(|e| StoreError::Unavailable(format!("{}: {}", path.display(), e)))?;
            conn.execute_batch(schema::create_schema())?;
            let db = Self::wrap(conn);
            db.seed_defaults()?;
            return Ok(db);
        }

        log::info!("using existing reading store at {}", path.display());
        let conn = Connection::open(path)
            .map_err(|e| StoreError::Unavailable(format!("{}: {}", path.display(), e)))?;
        conn.query_row("SELECT COUNT(*) FROM weather_readings", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(|e| StoreError::Unavailable(format!("{}: {}", path.display(), e)))?;
        Ok(Self::wrap(conn))
    }

    /// Drop and recreate the schema, discarding every reading.
    pub fn reset(&self) -> Result<()> {
        let conn = self.lock()?;
        conn.execute_batch(schema::drop_schema())?;
        conn.execute_batch(schema::create_schema())?;
        log::info!("reading store reset");
        Ok(())
    }

    fn wrap(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Unavailable("connection lock poisoned".to_string()))
    }
}
