//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! Non-reactive owners (chart instances, the theme store, the refresh gate)
//! live in `CopyValue`s so writing to them never re-renders anything.

use crate::js_bridge::JsChart;
use crate::storage::LocalStoragePersistence;
use dioxus::prelude::*;
use wxd_chart::table::SummaryRow;
use wxd_chart::{ChartManager, RefreshGate, Theme, ThemeMode, ThemeStore};
use wxd_core::ReadingFilter;
use wxd_data::Selection;

/// Initial date range, matching the built-in seed data.
pub const DEFAULT_START: &str = "2025-07-01";
pub const DEFAULT_END: &str = "2025-07-14";

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Cities offered in both selectors
    pub cities: Signal<Vec<String>>,
    /// Primary city
    pub city: Signal<String>,
    /// City to compare against
    pub city2: Signal<String>,
    pub compare: Signal<bool>,
    /// Start date (`YYYY-MM-DD`) for range filtering
    pub start_date: Signal<String>,
    /// End date (`YYYY-MM-DD`) for range filtering
    pub end_date: Signal<String>,
    /// Whether the city list is still loading
    pub loading: Signal<bool>,
    /// Inline error shown in the summary area
    pub error_msg: Signal<Option<String>>,
    pub summary_rows: Signal<Vec<SummaryRow>>,
    /// Bumped to request a refresh cycle
    pub refresh_tick: Signal<u64>,
    pub theme_mode: Signal<ThemeMode>,
    pub theme_store: CopyValue<ThemeStore<LocalStoragePersistence>>,
    pub charts: CopyValue<ChartManager<JsChart>>,
    pub gate: CopyValue<RefreshGate>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    ///
    /// The theme is restored from storage; the mode signal follows the store.
    pub fn new() -> Self {
        let store = ThemeStore::new(LocalStoragePersistence);
        let theme_mode = Signal::new(store.mode());
        let mut theme_store = CopyValue::new(store);
        theme_store.write().subscribe(move |theme: &Theme| {
            let mut mode = theme_mode;
            mode.set(theme.mode);
        });

        Self {
            cities: Signal::new(Vec::new()),
            city: Signal::new(String::new()),
            city2: Signal::new(String::new()),
            compare: Signal::new(false),
            start_date: Signal::new(DEFAULT_START.to_string()),
            end_date: Signal::new(DEFAULT_END.to_string()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            summary_rows: Signal::new(Vec::new()),
            refresh_tick: Signal::new(0),
            theme_mode,
            theme_store,
            charts: CopyValue::new(ChartManager::new()),
            gate: CopyValue::new(RefreshGate::new()),
        }
    }

    /// Ask for a new refresh cycle.
    pub fn request_refresh(&mut self) {
        let next = self.refresh_tick.peek().wrapping_add(1);
        self.refresh_tick.set(next);
    }

    /// Snapshot of the city pickers. Does not subscribe the caller.
    pub fn selection(&self) -> Selection {
        Selection::new(
            self.city.peek().clone(),
            self.city2.peek().clone(),
            *self.compare.peek(),
        )
    }

    /// Filter for `city` over the selected date range. Does not subscribe the
    /// caller, so date edits wait for Apply.
    pub fn filter_for(&self, city: &str) -> ReadingFilter {
        ReadingFilter::for_city(city)
            .since(self.start_date.peek().as_str())
            .until(self.end_date.peek().as_str())
    }

    pub fn theme(&self) -> Theme {
        Theme::for_mode((self.theme_mode)())
    }

    /// Flip the theme (persisted by the store) and redraw.
    pub fn toggle_theme(&mut self) {
        self.theme_store.write().toggle();
        self.request_refresh();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
