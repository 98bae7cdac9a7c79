//! Wire types for weather readings and per-day summaries.
//!
//! Both structs serialize to the JSON shapes served by `/api/weather` and
//! `/api/summary`. Numeric fields decode leniently (see [`crate::lenient`]).

use crate::lenient;
use serde::{Deserialize, Serialize};

/// One timestamped weather observation for one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub city: String,
    /// ISO-8601 instant, e.g. `2025-07-01T12:00:00Z`.
    pub ts: String,
    #[serde(default, deserialize_with = "lenient::finite_f64")]
    pub temp_c: Option<f64>,
    #[serde(default, deserialize_with = "lenient::finite_f64")]
    pub precip_mm: Option<f64>,
    #[serde(default, deserialize_with = "lenient::finite_f64")]
    pub wind_kph: Option<f64>,
}

impl Reading {
    pub fn new(
        city: impl Into<String>,
        ts: impl Into<String>,
        temp_c: Option<f64>,
        precip_mm: Option<f64>,
        wind_kph: Option<f64>,
    ) -> Self {
        Self {
            city: city.into(),
            ts: ts.into(),
            temp_c,
            precip_mm,
            wind_kph,
        }
    }

    /// Calendar day (`YYYY-MM-DD`) of this reading.
    pub fn day(&self) -> &str {
        day_of(&self.ts)
    }
}

/// Aggregated statistics for one city on one calendar day.
///
/// Aggregates are `None` when every reading in the group lacked that value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    #[serde(default)]
    pub city: String,
    pub day: String,
    #[serde(default, deserialize_with = "lenient::finite_f64")]
    pub avg_temp_c: Option<f64>,
    #[serde(default, deserialize_with = "lenient::finite_f64")]
    pub total_precip_mm: Option<f64>,
    #[serde(default, deserialize_with = "lenient::finite_f64")]
    pub avg_wind_kph: Option<f64>,
}

/// Truncate an instant string to its leading `YYYY-MM-DD` part.
///
/// Strings shorter than ten bytes are returned unchanged.
pub fn day_of(ts: &str) -> &str {
    ts.get(..10).unwrap_or(ts)
}
