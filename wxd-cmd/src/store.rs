//! `wxd init-db` and `wxd import`

use anyhow::{bail, Context};
use std::fs;
use std::path::Path;
use wxd_db::Database;

/// Create the store at `db_path`, seeded with the demo readings.
///
/// An existing file is left alone unless `force` is set, in which case it is
/// deleted and recreated.
pub fn run_init_db(db_path: &Path, force: bool) -> anyhow::Result<()> {
    if db_path.exists() {
        if !force {
            let db = Database::open(db_path)
                .with_context(|| format!("{} exists but is unusable", db_path.display()))?;
            println!(
                "{} already exists with {} readings (use --force to recreate)",
                db_path.display(),
                db.reading_count()?
            );
            return Ok(());
        }
        log::warn!("removing existing database {}", db_path.display());
        fs::remove_file(db_path)
            .with_context(|| format!("failed to remove {}", db_path.display()))?;
    }

    let db = Database::open(db_path)
        .with_context(|| format!("failed to create {}", db_path.display()))?;
    println!(
        "created {} with {} readings",
        db_path.display(),
        db.reading_count()?
    );
    Ok(())
}

/// Append the readings in `csv_path` to the store at `db_path`.
///
/// A missing store is created (and seeded) first.
pub fn run_import(csv_path: &Path, db_path: &Path) -> anyhow::Result<()> {
    if !csv_path.is_file() {
        bail!("CSV file not found: {}", csv_path.display());
    }
    let db = Database::open(db_path)
        .with_context(|| format!("failed to open {}", db_path.display()))?;
    let inserted = db
        .load_readings_csv_file(csv_path)
        .with_context(|| format!("failed to import {}", csv_path.display()))?;
    println!(
        "imported {} readings from {} ({} total)",
        inserted,
        csv_path.display(),
        db.reading_count()?
    );
    Ok(())
}
