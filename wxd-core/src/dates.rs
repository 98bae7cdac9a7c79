//! Instant and calendar-day helpers.
//!
//! Stored timestamps use the canonical `YYYY-MM-DDTHH:MM:SSZ` form, so range
//! filters compare lexically against values normalised to the same shape.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Canonical UTC instant format used in storage and range bounds.
pub const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Calendar day format (`YYYY-MM-DD`), also used by HTML date inputs.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Which end of a range a bound describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Inclusive lower bound; a bare day expands to its first second.
    Start,
    /// Inclusive upper bound; a bare day expands to its last second.
    End,
}

/// Expand a calendar day into an inclusive instant bound.
pub fn day_bound(date: NaiveDate, bound: Bound) -> String {
    let time = match bound {
        Bound::Start => "00:00:00",
        Bound::End => "23:59:59",
    };
    format!("{}T{}Z", date.format(DAY_FORMAT), time)
}

/// Parse a `YYYY-MM-DD` string.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DAY_FORMAT).ok()
}

/// Normalise a user-supplied range bound.
///
/// Accepts RFC 3339 instants (converted to UTC), zone-less
/// `YYYY-MM-DDTHH:MM:SS` (taken as UTC) and bare `YYYY-MM-DD` days. Returns
/// `None` for empty or unparseable input.
pub fn normalize_bound(raw: &str, bound: Bound) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc).format(INSTANT_FORMAT).to_string());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc().format(INSTANT_FORMAT).to_string());
    }
    parse_day(raw).map(|date| day_bound(date, bound))
}
