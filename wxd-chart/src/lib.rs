//! Rendering core for the weather dashboard charts.
//!
//! This crate provides:
//! - `cycle`: `apply_refresh`, turning one refresh outcome into charts and
//!   summary rows
//! - `config`: typed Chart.js configurations built from aligned series
//! - `manager`: `ChartManager`, owner of at most one live chart per canvas
//! - `renderer`: the `ChartEngine` seam and the two-chart refresh
//! - `theme`: `Theme` palettes and the persisted `ThemeStore`
//! - `refresh`: `RefreshGate`, so only the latest refresh may draw
//! - `table`: display rows for the summary table
//!
//! Nothing here touches the DOM; `wxd-chart-ui` adapts it to Chart.js.

pub mod config;
pub mod cycle;
pub mod manager;
#[cfg(test)]
mod mock;
pub mod refresh;
pub mod renderer;
pub mod table;
pub mod theme;

pub use config::ChartConfig;
pub use cycle::{apply_refresh, CityData, SummaryView};
pub use manager::{CanvasState, ChartHandle, ChartManager};
pub use refresh::{RefreshGate, RefreshTicket};
pub use renderer::{ChartEngine, ChartRenderer, RenderError};
pub use theme::{Theme, ThemeMode, ThemePersistence, ThemeStore};
