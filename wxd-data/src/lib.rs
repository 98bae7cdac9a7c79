//! Series alignment for the weather dashboard.
//!
//! This crate turns fetched per-city readings into forms suitable for
//! charting and comparison: a shared, sorted date axis with explicit gaps,
//! and an interleaved summary table. Everything here is pure and runs
//! without any rendering surface.

pub mod align;
pub mod point;
pub mod selection;
pub mod summary;

pub use align::{align, union_labels, AlignedCity, AlignedSeries};
pub use point::{DayPoint, Field};
pub use selection::Selection;
pub use summary::merge_summaries;
