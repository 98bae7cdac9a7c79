//! Typed read queries over the reading store.
//!
//! Every query takes a [`ReadingFilter`], normalises it (blank fields dropped,
//! bounds canonicalised, malformed bounds ignored) and builds an inclusive
//! `WHERE` clause from whatever constraints remain.

use crate::error::Result;
use crate::Database;
use rusqlite::types::ValueRef;
use rusqlite::{params_from_iter, Row};
use wxd_core::lenient::{finite, parse_finite};
use wxd_core::{DaySummary, Reading, ReadingFilter};

impl Database {
    /// Distinct city names in ascending lexical order.
    pub fn list_cities(&self) -> Result<Vec<String>> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare("SELECT DISTINCT city FROM weather_readings ORDER BY city")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        log::info!("query: list_cities returned {} cities", rows.len());
        Ok(rows)
    }

    /// Raw readings matching `filter`, ordered by timestamp.
    ///
    /// An unknown city simply yields an empty list.
    pub fn list_readings(&self, filter: &ReadingFilter) -> Result<Vec<Reading>> {
        let (where_sql, params) = where_clause(filter);
        let sql = format!(
            "SELECT city, ts, temp_c, precip_mm, wind_kph
             FROM weather_readings
             {where_sql}
             ORDER BY ts ASC, id ASC"
        );
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(params.iter()), |row| {
                Ok(Reading {
                    city: row.get(0)?,
                    ts: row.get(1)?,
                    temp_c: lenient_value(row, 2)?,
                    precip_mm: lenient_value(row, 3)?,
                    wind_kph: lenient_value(row, 4)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::info!("query: list_readings returned {} records", rows.len());
        Ok(rows)
    }

    /// Per-city, per-day aggregates for readings matching `filter`.
    ///
    /// Averages temperature and wind, sums precipitation, ignores NULL and
    /// non-numeric cells and rounds each aggregate to two decimals. Ordered by
    /// day, then city. Days without readings produce no row.
    pub fn summarize(&self, filter: &ReadingFilter) -> Result<Vec<DaySummary>> {
        let (where_sql, params) = where_clause(filter);
        let sql = format!(
            "SELECT city,
                    substr(ts, 1, 10) AS day,
                    ROUND(AVG({temp}), 2),
                    ROUND(SUM({precip}), 2),
                    ROUND(AVG({wind}), 2)
             FROM weather_readings
             {where_sql}
             GROUP BY city, day
             ORDER BY day ASC, city ASC",
            temp = numeric_only("temp_c"),
            precip = numeric_only("precip_mm"),
            wind = numeric_only("wind_kph"),
        );
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(params.iter()), |row| {
                Ok(DaySummary {
                    city: row.get(0)?,
                    day: row.get(1)?,
                    avg_temp_c: lenient_value(row, 2)?,
                    total_precip_mm: lenient_value(row, 3)?,
                    avg_wind_kph: lenient_value(row, 4)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::info!("query: summarize returned {} day summaries", rows.len());
        Ok(rows)
    }

    /// Total number of stored readings.
    pub fn reading_count(&self) -> Result<usize> {
        let conn = self.lock()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM weather_readings", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}

/// Decode a measurement cell; anything that is not a finite number is `None`.
///
/// Store files written by other tools may hold text in the REAL columns.
fn lenient_value(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<f64>> {
    let value = match row.get_ref(idx)? {
        ValueRef::Real(v) => finite(Some(v)),
        ValueRef::Integer(v) => finite(Some(v as f64)),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes).ok().and_then(parse_finite),
        ValueRef::Null | ValueRef::Blob(_) => None,
    };
    Ok(value)
}

/// SQL expression yielding `column` only when its cell holds a number.
fn numeric_only(column: &str) -> String {
    format!("CASE WHEN typeof({column}) IN ('real', 'integer') THEN {column} END")
}

/// Build `WHERE ...` plus positional parameters from a filter.
fn where_clause(filter: &ReadingFilter) -> (String, Vec<String>) {
    let filter = filter.normalize();
    let mut clauses = Vec::new();
    let mut params = Vec::new();

    if let Some(city) = filter.city {
        clauses.push("city = ?");
        params.push(city);
    }
    if let Some(from) = filter.from {
        clauses.push("ts >= ?");
        params.push(from);
    }
    if let Some(to) = filter.to {
        clauses.push("ts <= ?");
        params.push(to);
    }

    if clauses.is_empty() {
        (String::new(), params)
    } else {
        (format!("WHERE {}", clauses.join(" AND ")), params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.seed_defaults().unwrap();
        db
    }

    fn gappy_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        let csv = "\
city,ts,temp_c,precip_mm,wind_kph
Denver,2025-07-01T06:00:00Z,20.0,0.25,10.0
Denver,2025-07-01T18:00:00Z,25.0,0.5,
Denver,2025-07-03T12:00:00Z,,,
Boise,2025-07-01T12:00:00Z,30.0,0.0,8.0
";
        db.load_readings_csv(csv).unwrap();
        db
    }

    #[test]
    fn where_clause_empty_filter() {
        let (sql, params) = where_clause(&ReadingFilter::all());
        assert!(sql.is_empty());
        assert!(params.is_empty());
    }

    #[test]
    fn where_clause_all_constraints() {
        let filter = ReadingFilter::for_city("Austin")
            .since("2025-07-01")
            .until("2025-07-02");
        let (sql, params) = where_clause(&filter);
        assert_eq!(sql, "WHERE city = ? AND ts >= ? AND ts <= ?");
        assert_eq!(
            params,
            vec!["Austin", "2025-07-01T00:00:00Z", "2025-07-02T23:59:59Z"]
        );
    }

    #[test]
    fn list_cities_sorted_and_distinct() {
        let db = sample_db();
        assert_eq!(db.list_cities().unwrap(), vec!["Austin", "Chicago"]);
    }

    #[test]
    fn list_readings_inclusive_range_for_city() {
        let db = sample_db();
        let filter = ReadingFilter::for_city("Austin")
            .since("2025-07-01T00:00:00Z")
            .until("2025-07-03T23:59:59Z");
        let rows = db.list_readings(&filter).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].ts, "2025-07-01T12:00:00Z");
        assert_eq!(rows[0].temp_c, Some(35.2));
        assert_eq!(rows[2].ts, "2025-07-03T12:00:00Z");
    }

    #[test]
    fn list_readings_bounds_are_inclusive_at_exact_instant() {
        let db = sample_db();
        let filter = ReadingFilter::for_city("Chicago")
            .since("2025-07-02T12:00:00Z")
            .until("2025-07-02T12:00:00Z");
        let rows = db.list_readings(&filter).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].temp_c, Some(26.5));
    }

    #[test]
    fn list_readings_without_filter_returns_everything_in_time_order() {
        let db = sample_db();
        let rows = db.list_readings(&ReadingFilter::all()).unwrap();
        assert_eq!(rows.len(), crate::seed::SEED_ROWS);
        assert!(rows.windows(2).all(|w| w[0].ts <= w[1].ts));
    }

    #[test]
    fn list_readings_unknown_city_is_empty() {
        let db = sample_db();
        let rows = db.list_readings(&ReadingFilter::for_city("Nowhere")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn list_readings_malformed_bound_is_unconstrained() {
        let db = sample_db();
        let filter = ReadingFilter::for_city("Austin").since("garbage");
        assert_eq!(db.list_readings(&filter).unwrap().len(), 14);
    }

    fn db_with_text_cells() -> Database {
        let db = sample_db();
        db.lock()
            .unwrap()
            .execute_batch(
                "UPDATE weather_readings SET temp_c = 'n/a'
                     WHERE city = 'Austin' AND ts = '2025-07-02T12:00:00Z';
                 UPDATE weather_readings SET wind_kph = X'00'
                     WHERE city = 'Austin' AND ts = '2025-07-03T12:00:00Z';",
            )
            .unwrap();
        db
    }

    #[test]
    fn list_readings_treats_non_numeric_cells_as_missing() {
        let db = db_with_text_cells();
        let rows = db.list_readings(&ReadingFilter::for_city("Austin")).unwrap();
        assert_eq!(rows.len(), 14);
        assert_eq!(rows[1].temp_c, None);
        assert_eq!(rows[1].wind_kph, Some(16.5));
        assert_eq!(rows[2].wind_kph, None);
        assert_eq!(rows[2].temp_c, Some(34.8));
    }

    #[test]
    fn summarize_ignores_non_numeric_cells() {
        let db = db_with_text_cells();
        let filter = ReadingFilter::for_city("Austin")
            .since("2025-07-02")
            .until("2025-07-03");
        let days = db.summarize(&filter).unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].avg_temp_c, None);
        assert_eq!(days[0].avg_wind_kph, Some(16.5));
        assert_eq!(days[1].avg_wind_kph, None);
        assert_eq!(days[1].avg_temp_c, Some(34.8));
    }

    #[test]
    fn summarize_orders_by_day_then_city() {
        let db = sample_db();
        let filter = ReadingFilter::all().since("2025-07-01").until("2025-07-02");
        let days = db.summarize(&filter).unwrap();
        let keys: Vec<(&str, &str)> = days
            .iter()
            .map(|d| (d.day.as_str(), d.city.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("2025-07-01", "Austin"),
                ("2025-07-01", "Chicago"),
                ("2025-07-02", "Austin"),
                ("2025-07-02", "Chicago"),
            ]
        );
    }

    #[test]
    fn summarize_aggregates_and_rounds() {
        let db = gappy_db();
        let days = db.summarize(&ReadingFilter::for_city("Denver")).unwrap();
        assert_eq!(days.len(), 2);

        let first = &days[0];
        assert_eq!(first.day, "2025-07-01");
        assert_eq!(first.avg_temp_c, Some(22.5));
        assert_eq!(first.total_precip_mm, Some(0.75));
        // NULL wind on the evening reading is ignored, not counted as zero
        assert_eq!(first.avg_wind_kph, Some(10.0));
    }

    #[test]
    fn summarize_all_null_group_yields_null_aggregates() {
        let db = gappy_db();
        let days = db.summarize(&ReadingFilter::for_city("Denver")).unwrap();
        let third = &days[1];
        assert_eq!(third.day, "2025-07-03");
        assert_eq!(third.avg_temp_c, None);
        assert_eq!(third.total_precip_mm, None);
        assert_eq!(third.avg_wind_kph, None);
    }

    #[test]
    fn summarize_skips_days_without_readings() {
        let db = gappy_db();
        let days = db.summarize(&ReadingFilter::for_city("Denver")).unwrap();
        assert!(days.iter().all(|d| d.day != "2025-07-02"));
    }

    #[test]
    fn summarize_rounds_to_two_decimals() {
        let db = Database::open_in_memory().unwrap();
        let csv = "\
city,ts,temp_c,precip_mm,wind_kph
Reno,2025-07-01T00:00:00Z,10.0,0.111,1.0
Reno,2025-07-01T08:00:00Z,10.0,0.111,2.0
Reno,2025-07-01T16:00:00Z,11.0,0.111,2.0
";
        db.load_readings_csv(csv).unwrap();
        let days = db.summarize(&ReadingFilter::for_city("Reno")).unwrap();
        assert_eq!(days[0].avg_temp_c, Some(10.33));
        assert_eq!(days[0].total_precip_mm, Some(0.33));
        assert_eq!(days[0].avg_wind_kph, Some(1.67));
    }

    #[test]
    fn summarize_unknown_city_is_empty() {
        let db = sample_db();
        assert!(db
            .summarize(&ReadingFilter::for_city("Nowhere"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn summarize_is_idempotent() {
        let db = sample_db();
        let filter = ReadingFilter::for_city("Chicago").since("2025-07-05");
        assert_eq!(db.summarize(&filter).unwrap(), db.summarize(&filter).unwrap());
    }

    #[test]
    fn summary_precip_matches_raw_precip() {
        let db = sample_db();
        for city in ["Austin", "Chicago"] {
            let filter = ReadingFilter::for_city(city)
                .since("2025-07-03")
                .until("2025-07-11");
            let summed: f64 = db
                .summarize(&filter)
                .unwrap()
                .iter()
                .filter_map(|d| d.total_precip_mm)
                .sum();
            let raw: f64 = db
                .list_readings(&filter)
                .unwrap()
                .iter()
                .filter_map(|r| r.precip_mm)
                .sum();
            assert!(
                (summed - raw).abs() < 0.01,
                "{city}: summary {summed} vs raw {raw}"
            );
        }
    }
}
