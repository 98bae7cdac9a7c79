//! Per-day points extracted from raw readings.

use serde::Serialize;
use wxd_core::lenient::finite;
use wxd_core::Reading;

/// Numeric field of a [`DayPoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Temp,
    Precip,
    Wind,
}

/// One reading reduced to its calendar day and finite values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPoint {
    pub day: String,
    pub temp: Option<f64>,
    pub precip: Option<f64>,
    pub wind: Option<f64>,
}

impl DayPoint {
    pub fn get(&self, field: Field) -> Option<f64> {
        let value = match field {
            Field::Temp => self.temp,
            Field::Precip => self.precip,
            Field::Wind => self.wind,
        };
        finite(value)
    }

    /// Convert readings into points, keeping their order.
    pub fn from_readings(readings: &[Reading]) -> Vec<DayPoint> {
        readings.iter().map(DayPoint::from).collect()
    }
}

impl From<&Reading> for DayPoint {
    fn from(r: &Reading) -> Self {
        Self {
            day: r.day().to_string(),
            temp: finite(r.temp_c),
            precip: finite(r.precip_mm),
            wind: finite(r.wind_kph),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_reading_truncates_day_and_drops_non_finite() {
        let r = Reading::new(
            "Austin",
            "2025-07-08T12:00:00Z",
            Some(38.4),
            Some(f64::NAN),
            Some(f64::NEG_INFINITY),
        );
        let p = DayPoint::from(&r);
        assert_eq!(p.day, "2025-07-08");
        assert_eq!(p.temp, Some(38.4));
        assert_eq!(p.precip, None);
        assert_eq!(p.wind, None);
    }

    #[test]
    fn get_filters_values_set_directly() {
        let p = DayPoint {
            day: "2025-07-01".into(),
            temp: Some(f64::INFINITY),
            precip: Some(0.0),
            wind: None,
        };
        assert_eq!(p.get(Field::Temp), None);
        assert_eq!(p.get(Field::Precip), Some(0.0));
        assert_eq!(p.get(Field::Wind), None);
    }
}
