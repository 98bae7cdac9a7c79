//! `wxd cities`, `wxd readings` and `wxd summary`: the API queries, printed
//! as pretty JSON.
//!
//! These commands only read. A missing store file is an error rather than a
//! freshly seeded database; `wxd init-db` creates one.

use anyhow::Context;
use std::path::Path;
use wxd_core::ReadingFilter;
use wxd_db::Database;

fn open(db_path: &Path) -> anyhow::Result<Database> {
    if !db_path.exists() {
        anyhow::bail!(
            "{} does not exist; run `wxd init-db` to create it",
            db_path.display()
        );
    }
    Database::open(db_path).with_context(|| format!("failed to open {}", db_path.display()))
}

pub fn cities_json(db: &Database) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&db.list_cities()?)?)
}

pub fn readings_json(db: &Database, filter: &ReadingFilter) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&db.list_readings(filter)?)?)
}

pub fn summary_json(db: &Database, filter: &ReadingFilter) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&db.summarize(filter)?)?)
}

pub fn run_cities(db_path: &Path) -> anyhow::Result<()> {
    println!("{}", cities_json(&open(db_path)?)?);
    Ok(())
}

pub fn run_readings(db_path: &Path, filter: &ReadingFilter) -> anyhow::Result<()> {
    println!("{}", readings_json(&open(db_path)?, filter)?);
    Ok(())
}

pub fn run_summary(db_path: &Path, filter: &ReadingFilter) -> anyhow::Result<()> {
    println!("{}", summary_json(&open(db_path)?, filter)?);
    Ok(())
}
