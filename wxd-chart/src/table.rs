//! Display rows for the per-day summary table.

use wxd_core::DaySummary;

pub const SUMMARY_HEADERS: [&str; 5] = [
    "Day",
    "City",
    "Avg Temp (°C)",
    "Total Precip (mm)",
    "Avg Wind (kph)",
];

/// Placeholder for a missing aggregate.
pub const MISSING: &str = "–";

/// One formatted table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub day: String,
    pub city: String,
    pub avg_temp: String,
    pub total_precip: String,
    pub avg_wind: String,
}

impl SummaryRow {
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.day,
            &self.city,
            &self.avg_temp,
            &self.total_precip,
            &self.avg_wind,
        ]
    }
}

/// Format summaries in the order given. Callers sort beforehand
/// (see `wxd_data::merge_summaries`).
pub fn summary_rows(summaries: &[DaySummary]) -> Vec<SummaryRow> {
    summaries
        .iter()
        .map(|s| SummaryRow {
            day: s.day.clone(),
            city: s.city.clone(),
            avg_temp: format_value(s.avg_temp_c),
            total_precip: format_value(s.total_precip_mm),
            avg_wind: format_value(s.avg_wind_kph),
        })
        .collect()
}

pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v}"),
        _ => MISSING.to_string(),
    }
}
