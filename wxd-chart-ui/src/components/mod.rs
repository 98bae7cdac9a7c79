//! Reusable Dioxus RSX components for the weather dashboard.

mod chart_canvas;
mod chart_header;
mod city_selector;
mod compare_toggle;
mod date_range_picker;
mod error_display;
mod loading_spinner;
mod summary_table;
mod theme_toggle;

pub use chart_canvas::ChartCanvas;
pub use chart_header::ChartHeader;
pub use city_selector::CitySelector;
pub use compare_toggle::CompareToggle;
pub use date_range_picker::DateRangePicker;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use summary_table::SummaryTable;
pub use theme_toggle::ThemeToggle;
