//! The `city` / `from` / `to` filter accepted by every read endpoint.
//!
//! Filters are permissive: empty values count as absent and malformed date
//! bounds are dropped (leaving that side of the range open) rather than
//! rejected.

use crate::dates::{normalize_bound, Bound};
use serde::{Deserialize, Serialize};

/// Optional constraints on which readings a query sees.
///
/// Deserializes directly from a query string; absent fields are unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl ReadingFilter {
    /// Unconstrained filter.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            ..Self::default()
        }
    }

    pub fn since(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn until(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Fold raw `key=value` query pairs into a filter.
    ///
    /// Unknown keys are ignored and a repeated key keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut filter = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "city" => filter.city = Some(value.into()),
                "from" => filter.from = Some(value.into()),
                "to" => filter.to = Some(value.into()),
                _ => {}
            }
        }
        filter
    }

    /// Canonical form used by the store.
    ///
    /// Blank fields become `None`; bounds are normalised to UTC instants and
    /// unparseable bounds are dropped with a warning.
    pub fn normalize(&self) -> ReadingFilter {
        let city = self
            .city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        ReadingFilter {
            city,
            from: normalize_side(self.from.as_deref(), Bound::Start, "from"),
            to: normalize_side(self.to.as_deref(), Bound::End, "to"),
        }
    }
}

fn normalize_side(raw: Option<&str>, bound: Bound, name: &str) -> Option<String> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }
    let normalized = normalize_bound(raw, bound);
    if normalized.is_none() {
        log::warn!("ignoring malformed '{}' bound: {:?}", name, raw);
    }
    normalized
}
