//! Core types shared by the weather dashboard server, CLI and browser app.
//!
//! - `reading`: wire types for raw readings and per-day summaries
//! - `filter`: the `city` / `from` / `to` query filter and its normalisation
//! - `dates`: instant and calendar-day bound helpers
//! - `lenient`: numeric decoding that never lets NaN or Infinity through
//! - `client`: typed HTTP client for the JSON API (feature `client`)

pub mod dates;
pub mod filter;
pub mod lenient;
pub mod reading;

#[cfg(feature = "client")]
pub mod client;

pub use filter::ReadingFilter;
pub use reading::{DaySummary, Reading};
