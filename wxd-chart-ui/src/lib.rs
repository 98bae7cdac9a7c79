//! Dioxus components and Chart.js bridge for the weather dashboard.
//!
//! This crate provides:
//! - `js_bridge`: `ChartJsEngine`, the Chart.js implementation of `ChartEngine`
//! - `storage`: theme persistence in `localStorage`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, canvases, table, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
pub mod storage;
