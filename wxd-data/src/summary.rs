//! Summary table rows.

use wxd_core::DaySummary;

/// Flatten per-city summary lists into one table ordered by day, then city.
///
/// Each group is `(city, rows)`; rows that arrive without a city name take the
/// group's city.
pub fn merge_summaries(groups: Vec<(String, Vec<DaySummary>)>) -> Vec<DaySummary> {
    let mut rows: Vec<DaySummary> = groups
        .into_iter()
        .flat_map(|(city, rows)| {
            rows.into_iter().map(move |mut row| {
                if row.city.is_empty() {
                    row.city = city.clone();
                }
                row
            })
        })
        .collect();
    rows.sort_by(|a, b| a.day.cmp(&b.day).then_with(|| a.city.cmp(&b.city)));
    rows
}
