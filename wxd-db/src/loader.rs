//! Populating the store: built-in seed, typed inserts and CSV import.
//!
//! # CSV Format
//!
//! Header row required: `city,ts,temp_c,precip_mm,wind_kph`
//!
//! - `ts` may be any instant accepted by [`wxd_core::dates::normalize_bound`]
//!   and is stored in canonical UTC form
//! - blank or non-numeric values are stored as NULL
//! - rows with an empty city or an unparseable timestamp are skipped

use crate::error::Result;
use crate::seed::SEED_SQL;
use crate::Database;
use rusqlite::params;
use std::fs;
use std::path::Path;
use wxd_core::dates::{normalize_bound, Bound};
use wxd_core::lenient::{finite, parse_finite};
use wxd_core::Reading;

const INSERT_SQL: &str = "INSERT INTO weather_readings (city, ts, temp_c, precip_mm, wind_kph)
     VALUES (?1, ?2, ?3, ?4, ?5)";

impl Database {
    /// Insert the built-in Austin/Chicago demo readings.
    pub fn seed_defaults(&self) -> Result<()> {
        let conn = self.lock()?;
        conn.execute_batch(SEED_SQL)?;
        log::info!("loader: seeded {} demo readings", crate::seed::SEED_ROWS);
        Ok(())
    }

    /// Insert readings in one transaction, returning how many were stored.
    ///
    /// Readings with an empty city or an unparseable timestamp are skipped.
    pub fn insert_readings(&self, readings: &[Reading]) -> Result<usize> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let mut count = 0usize;
        let mut skipped = 0usize;
        {
            let mut stmt = tx.prepare(INSERT_SQL)?;
            for r in readings {
                let Some(ts) = canonical_ts(&r.city, &r.ts) else {
                    skipped += 1;
                    continue;
                };
                stmt.execute(params![
                    r.city.trim(),
                    ts,
                    finite(r.temp_c),
                    finite(r.precip_mm),
                    finite(r.wind_kph)
                ])?;
                count += 1;
            }
        }
        tx.commit()?;
        log::info!("loader: inserted {} readings, skipped {} invalid", count, skipped);
        Ok(count)
    }

    /// Import readings from a headered CSV string, returning how many were stored.
    ///
    /// # Example CSV
    /// ```text
    /// city,ts,temp_c,precip_mm,wind_kph
    /// Denver,2025-07-01T12:00:00Z,29.5,,12.0
    /// ```
    pub fn load_readings_csv(&self, csv_data: &str) -> Result<usize> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut readings = Vec::new();
        for result in rdr.records() {
            let r = result?;
            let number = |idx: usize| r.get(idx).and_then(parse_finite);
            readings.push(Reading::new(
                r.get(0).unwrap_or("").trim(),
                r.get(1).unwrap_or("").trim(),
                number(2),
                number(3),
                number(4),
            ));
        }
        self.insert_readings(&readings)
    }

    /// Import a CSV file from disk. See [`Database::load_readings_csv`].
    pub fn load_readings_csv_file(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        log::info!("loader: importing {}", path.display());
        self.load_readings_csv(&data)
    }
}

/// Canonical timestamp for a row, or `None` if the row must be skipped.
fn canonical_ts(city: &str, ts: &str) -> Option<String> {
    if city.trim().is_empty() {
        return None;
    }
    normalize_bound(ts, Bound::Start)
}
