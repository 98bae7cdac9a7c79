//! Projecting one or two city series onto a shared date axis.
//!
//! Cities rarely report on exactly the same days. Charts need one x-axis, so
//! the axis is the sorted union of every reported day and each city's values
//! are laid out against it with `None` marking days it did not report.
//!
//! ISO `YYYY-MM-DD` strings sort chronologically, so lexical order is date
//! order.

use crate::point::{DayPoint, Field};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Sorted, deduplicated union of two day lists.
pub fn union_labels<'a, A, B>(a: A, b: B) -> Vec<String>
where
    A: IntoIterator<Item = &'a str>,
    B: IntoIterator<Item = &'a str>,
{
    a.into_iter()
        .chain(b)
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Values of `field` laid out against `labels`.
///
/// The result always has `labels.len()` entries. A label with no matching
/// point, or whose point has no finite value, maps to `None`. When a day
/// appears more than once the last point wins.
pub fn align(series: &[DayPoint], labels: &[String], field: Field) -> Vec<Option<f64>> {
    let by_day: HashMap<&str, Option<f64>> = series
        .iter()
        .map(|p| (p.day.as_str(), p.get(field)))
        .collect();
    labels
        .iter()
        .map(|label| by_day.get(label.as_str()).copied().flatten())
        .collect()
}

fn days(points: &[DayPoint]) -> impl Iterator<Item = &str> {
    points.iter().map(|p| p.day.as_str())
}

/// One city's values aligned to an [`AlignedSeries`] axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignedCity {
    pub city: String,
    pub temp: Vec<Option<f64>>,
    pub precip: Vec<Option<f64>>,
    pub wind: Vec<Option<f64>>,
}

impl AlignedCity {
    fn new(city: &str, points: &[DayPoint], labels: &[String]) -> Self {
        Self {
            city: city.to_string(),
            temp: align(points, labels, Field::Temp),
            precip: align(points, labels, Field::Precip),
            wind: align(points, labels, Field::Wind),
        }
    }

    pub fn values(&self, field: Field) -> &[Option<f64>] {
        match field {
            Field::Temp => &self.temp,
            Field::Precip => &self.precip,
            Field::Wind => &self.wind,
        }
    }
}

/// Shared date axis plus per-city aligned values, primary city first.
///
/// Rebuilt from scratch on every refresh.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlignedSeries {
    pub labels: Vec<String>,
    pub cities: Vec<AlignedCity>,
}

impl AlignedSeries {
    /// Align a single city. Duplicate days collapse to one label.
    pub fn single(city: &str, points: &[DayPoint]) -> Self {
        let labels = union_labels(days(points), std::iter::empty());
        let cities = vec![AlignedCity::new(city, points, &labels)];
        Self { labels, cities }
    }

    /// Align two cities onto the union of their days.
    pub fn compare(primary: (&str, &[DayPoint]), secondary: (&str, &[DayPoint])) -> Self {
        let labels = union_labels(days(primary.1), days(secondary.1));
        let cities = vec![
            AlignedCity::new(primary.0, primary.1, &labels),
            AlignedCity::new(secondary.0, secondary.1, &labels),
        ];
        log::info!(
            "align: {} vs {} over {} days",
            primary.0,
            secondary.0,
            labels.len()
        );
        Self { labels, cities }
    }

    /// Single or comparison alignment depending on whether a secondary series
    /// is present.
    pub fn build(primary: (&str, &[DayPoint]), secondary: Option<(&str, &[DayPoint])>) -> Self {
        match secondary {
            Some(secondary) => Self::compare(primary, secondary),
            None => Self::single(primary.0, primary.1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn is_comparison(&self) -> bool {
        self.cities.len() > 1
    }

    pub fn city(&self, name: &str) -> Option<&AlignedCity> {
        self.cities.iter().find(|c| c.city == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(day: &str, temp: Option<f64>, precip: Option<f64>) -> DayPoint {
        DayPoint {
            day: day.to_string(),
            temp,
            precip,
            wind: None,
        }
    }

    fn labels(days: &[&str]) -> Vec<String> {
        days.iter().map(|d| d.to_string()).collect()
    }

    fn daily(from: u32, to: u32, base: f64) -> Vec<DayPoint> {
        (from..=to)
            .map(|d| point(&format!("2025-07-{d:02}"), Some(base + d as f64), Some(0.0)))
            .collect()
    }

    #[test]
    fn union_labels_sorts_and_dedupes() {
        let a = ["2025-07-03", "2025-07-01"];
        let b = ["2025-07-02", "2025-07-01"];
        assert_eq!(
            union_labels(a, b),
            labels(&["2025-07-01", "2025-07-02", "2025-07-03"])
        );
    }

    #[test]
    fn union_labels_disjoint_sizes_add_up() {
        let a = ["2025-07-01", "2025-07-03", "2025-07-05"];
        let b = ["2025-07-02", "2025-07-04"];
        let result = union_labels(a, b);
        assert_eq!(result.len(), a.len() + b.len());
        assert!(result.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn union_labels_handles_empty_inputs() {
        assert!(union_labels([], []).is_empty());
        assert_eq!(union_labels(["2025-07-01"], []), labels(&["2025-07-01"]));
    }

    #[test]
    fn union_labels_orders_across_months_and_years() {
        let result = union_labels(["2025-01-01", "2024-12-31"], ["2024-02-29"]);
        assert_eq!(result, labels(&["2024-02-29", "2024-12-31", "2025-01-01"]));
    }

    #[test]
    fn align_maps_missing_labels_to_none() {
        let series = vec![point("2025-07-01", Some(1.0), None), point("2025-07-03", Some(3.0), None)];
        let axis = labels(&["2025-07-01", "2025-07-02", "2025-07-03"]);
        assert_eq!(
            align(&series, &axis, Field::Temp),
            vec![Some(1.0), None, Some(3.0)]
        );
    }

    #[test]
    fn align_length_always_matches_labels() {
        let series = daily(1, 5, 20.0);
        let axis: Vec<String> = (1..=10).map(|d| format!("2025-07-{d:02}")).collect();
        for field in [Field::Temp, Field::Precip, Field::Wind] {
            assert_eq!(align(&series, &axis, field).len(), axis.len());
        }
    }

    #[test]
    fn align_never_emits_non_finite_values() {
        let series = vec![
            point("2025-07-01", Some(f64::NAN), Some(f64::INFINITY)),
            point("2025-07-02", Some(f64::NEG_INFINITY), Some(1.0)),
        ];
        let axis = labels(&["2025-07-01", "2025-07-02"]);
        let temps = align(&series, &axis, Field::Temp);
        let precip = align(&series, &axis, Field::Precip);
        assert_eq!(temps, vec![None, None]);
        assert_eq!(precip, vec![None, Some(1.0)]);
        assert!(temps.iter().chain(&precip).flatten().all(|v| v.is_finite()));
    }

    #[test]
    fn align_zero_is_kept_not_dropped() {
        let series = vec![point("2025-07-01", Some(0.0), Some(0.0))];
        let axis = labels(&["2025-07-01"]);
        assert_eq!(align(&series, &axis, Field::Precip), vec![Some(0.0)]);
    }

    #[test]
    fn align_last_duplicate_day_wins() {
        let series = vec![point("2025-07-01", Some(1.0), None), point("2025-07-01", Some(2.0), None)];
        let axis = labels(&["2025-07-01"]);
        assert_eq!(align(&series, &axis, Field::Temp), vec![Some(2.0)]);
    }

    #[test]
    fn single_collapses_duplicate_days() {
        let series = vec![
            point("2025-07-01", Some(1.0), None),
            point("2025-07-01", Some(2.0), None),
            point("2025-07-02", Some(3.0), None),
        ];
        let aligned = AlignedSeries::single("Austin", &series);
        assert_eq!(aligned.labels, labels(&["2025-07-01", "2025-07-02"]));
        assert_eq!(aligned.cities.len(), 1);
        assert!(!aligned.is_comparison());
    }

    #[test]
    fn single_empty_series_gives_empty_axis() {
        let aligned = AlignedSeries::single("Austin", &[]);
        assert!(aligned.is_empty());
        assert_eq!(aligned.cities.len(), 1);
        assert!(aligned.cities[0].temp.is_empty());
    }

    #[test]
    fn compare_full_overlap_has_no_gaps() {
        let austin = daily(1, 14, 30.0);
        let chicago = daily(1, 14, 20.0);
        let aligned = AlignedSeries::compare(("Austin", &austin), ("Chicago", &chicago));
        assert_eq!(aligned.labels.len(), 14);
        for city in &aligned.cities {
            assert!(city.temp.iter().all(Option::is_some));
            assert!(city.precip.iter().all(Option::is_some));
        }
    }

    #[test]
    fn compare_partial_overlap_marks_gaps() {
        let austin = daily(1, 3, 30.0);
        let chicago = daily(3, 5, 20.0);
        let aligned = AlignedSeries::compare(("Austin", &austin), ("Chicago", &chicago));
        assert_eq!(aligned.labels.len(), 5);

        let a = aligned.city("Austin").unwrap();
        let c = aligned.city("Chicago").unwrap();
        assert_eq!(a.temp, vec![Some(31.0), Some(32.0), Some(33.0), None, None]);
        assert_eq!(c.temp, vec![None, None, Some(23.0), Some(24.0), Some(25.0)]);
        for city in &aligned.cities {
            for field in [Field::Temp, Field::Precip, Field::Wind] {
                assert_eq!(city.values(field).len(), aligned.labels.len());
            }
        }
    }

    #[test]
    fn compare_keeps_primary_first() {
        let a = daily(1, 2, 0.0);
        let b = daily(1, 2, 0.0);
        let aligned = AlignedSeries::compare(("Zurich", &a), ("Austin", &b));
        assert_eq!(aligned.cities[0].city, "Zurich");
        assert_eq!(aligned.cities[1].city, "Austin");
    }

    #[test]
    fn compare_with_empty_primary_uses_secondary_days() {
        let b = daily(1, 2, 0.0);
        let aligned = AlignedSeries::compare(("Austin", &[]), ("Chicago", &b));
        assert_eq!(aligned.labels.len(), 2);
        assert_eq!(aligned.cities[0].temp, vec![None, None]);
    }

    #[test]
    fn build_without_secondary_is_single() {
        let a = daily(1, 3, 0.0);
        let aligned = AlignedSeries::build(("Austin", &a), None);
        assert!(!aligned.is_comparison());
        assert_eq!(aligned.labels.len(), 3);
    }
}
