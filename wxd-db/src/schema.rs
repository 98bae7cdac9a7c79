//! SQL schema for the reading store.
//!
//! A single append-only table of observations, indexed by `(city, ts)` for
//! per-city range scans. Timestamps are stored as canonical UTC strings
//! (`YYYY-MM-DDTHH:MM:SSZ`) so range filters can compare lexically.

/// Returns the full SQL schema as a single batch string.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS weather_readings (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        city TEXT NOT NULL,
        ts TEXT NOT NULL,
        temp_c REAL,
        precip_mm REAL,
        wind_kph REAL
    );
    CREATE INDEX IF NOT EXISTS idx_city_ts ON weather_readings(city, ts);
    "#
}

/// Drops every table created by [`create_schema`].
pub fn drop_schema() -> &'static str {
    r#"
    DROP INDEX IF EXISTS idx_city_ts;
    DROP TABLE IF EXISTS weather_readings;
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn count_objects(conn: &Connection, kind: &str, name: &str) -> i64 {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = ?1 AND name = ?2",
            [kind, name],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_table_and_index() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        assert_eq!(count_objects(&conn, "table", "weather_readings"), 1);
        assert_eq!(count_objects(&conn, "index", "idx_city_ts"), 1);
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }

    #[test]
    fn drop_schema_removes_everything() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(drop_schema()).unwrap();
        assert_eq!(count_objects(&conn, "table", "weather_readings"), 0);
        assert_eq!(count_objects(&conn, "index", "idx_city_ts"), 0);
    }
}
