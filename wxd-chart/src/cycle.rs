//! Applying the result of one dashboard refresh.
//!
//! The browser app fetches readings and summaries for the active cities, then
//! hands the outcome here together with its [`RefreshTicket`]. What the page
//! ends up showing (charts, table rows, inline error) is decided in one place.

use std::fmt::Display;

use crate::manager::ChartManager;
use crate::refresh::{RefreshGate, RefreshTicket};
use crate::renderer::{ChartEngine, ChartRenderer, RenderError, ENGINE_MISSING_MESSAGE};
use crate::table::{summary_rows, SummaryRow};
use crate::theme::Theme;
use wxd_core::DaySummary;
use wxd_data::{merge_summaries, AlignedSeries, DayPoint};

/// Everything fetched for one city in one refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct CityData {
    pub city: String,
    pub points: Vec<DayPoint>,
    pub summary: Vec<DaySummary>,
}

/// Contents of the summary area after a refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryView {
    pub rows: Vec<SummaryRow>,
    pub error: Option<String>,
}

/// Draw or clear the charts for a finished refresh.
///
/// Returns `None` when a newer refresh has started; the charts are left alone
/// and the caller must not touch the table either. A fetch error clears both
/// charts and empties the table.
pub fn apply_refresh<E, F>(
    gate: &RefreshGate,
    ticket: RefreshTicket,
    fetched: Result<(CityData, Option<CityData>), F>,
    engine: &E,
    manager: &mut ChartManager<E::Handle>,
    theme: &Theme,
) -> Option<SummaryView>
where
    E: ChartEngine,
    F: Display,
{
    if !gate.is_current(ticket) {
        log::info!("refresh superseded, dropping results");
        return None;
    }

    let (primary, secondary) = match fetched {
        Ok(data) => data,
        Err(e) => {
            log::error!("refresh failed: {}", e);
            ChartRenderer::clear(manager);
            return Some(SummaryView {
                rows: Vec::new(),
                error: Some(e.to_string()),
            });
        }
    };

    let aligned = AlignedSeries::build(
        (primary.city.as_str(), primary.points.as_slice()),
        secondary
            .as_ref()
            .map(|s| (s.city.as_str(), s.points.as_slice())),
    );
    let mut groups = vec![(primary.city, primary.summary)];
    groups.extend(secondary.map(|s| (s.city, s.summary)));
    let rows = summary_rows(&merge_summaries(groups));

    let view = match ChartRenderer::render(engine, manager, &aligned, theme) {
        Ok(()) => SummaryView { rows, error: None },
        Err(RenderError::EngineUnavailable) => SummaryView {
            rows: Vec::new(),
            error: Some(ENGINE_MISSING_MESSAGE.to_string()),
        },
        Err(e) => {
            log::error!("render failed: {}", e);
            SummaryView {
                rows,
                error: Some(e.to_string()),
            }
        }
    };
    Some(view)
}
