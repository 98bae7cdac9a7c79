//! Which cities a refresh should fetch and draw.

/// The dashboard's city picker state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub primary: String,
    pub secondary: String,
    pub compare: bool,
}

impl Selection {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>, compare: bool) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            compare,
        }
    }

    /// The city to compare against, if comparison is actually in effect.
    ///
    /// Comparing a city with itself, or with nothing, falls back to
    /// single-series mode.
    pub fn comparison(&self) -> Option<&str> {
        let secondary = self.secondary.trim();
        if self.compare && !secondary.is_empty() && secondary != self.primary.trim() {
            Some(secondary)
        } else {
            None
        }
    }

    /// Cities to draw, primary first.
    pub fn active_cities(&self) -> Vec<&str> {
        let primary = self.primary.trim();
        if primary.is_empty() {
            return Vec::new();
        }
        let mut cities = vec![primary];
        cities.extend(self.comparison());
        cities
    }
}
