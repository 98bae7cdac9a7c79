//! Drawing the temperature and precipitation charts.
//!
//! [`ChartEngine`] is the seam to the actual charting library. The browser
//! build plugs in Chart.js; tests use an in-memory engine.

use crate::config::{precipitation_chart, temperature_chart, ChartConfig};
use crate::manager::{ChartHandle, ChartManager};
use crate::theme::Theme;
use thiserror::Error;
use wxd_data::AlignedSeries;

/// Canvas id of the temperature line chart.
pub const TEMP_CANVAS: &str = "tempChart";
/// Canvas id of the precipitation bar chart.
pub const PRECIP_CANVAS: &str = "precipChart";

/// Shown in place of the charts when the engine script never loaded.
pub const ENGINE_MISSING_MESSAGE: &str = "Chart engine failed to load. Check the CDN.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("{}", ENGINE_MISSING_MESSAGE)]
    EngineUnavailable,

    #[error("failed to create chart on {canvas}: {message}")]
    Create { canvas: String, message: String },
}

/// A charting backend able to draw a [`ChartConfig`] onto a canvas.
pub trait ChartEngine {
    type Handle: ChartHandle;

    /// Whether the backend is loaded. Checked on every render.
    fn is_available(&self) -> bool;

    fn create(&self, canvas_id: &str, config: &ChartConfig) -> Result<Self::Handle, RenderError>;
}

/// Stateless driver that redraws both charts from one aligned series.
pub struct ChartRenderer;

impl ChartRenderer {
    /// Replace both charts with fresh ones built from `aligned` and `theme`.
    ///
    /// Nothing is drawn when the engine is unavailable. Each canvas is
    /// released before its new chart is created, so a failed create leaves
    /// that canvas empty rather than showing stale data.
    pub fn render<E: ChartEngine>(
        engine: &E,
        manager: &mut ChartManager<E::Handle>,
        aligned: &AlignedSeries,
        theme: &Theme,
    ) -> Result<(), RenderError> {
        if !engine.is_available() {
            log::warn!("chart: engine unavailable, skipping render");
            return Err(RenderError::EngineUnavailable);
        }

        let charts = [
            (TEMP_CANVAS, temperature_chart(aligned, theme)),
            (PRECIP_CANVAS, precipitation_chart(aligned, theme)),
        ];
        for (canvas, config) in &charts {
            manager.release(canvas);
            let chart = engine.create(canvas, config)?;
            manager.set(canvas, chart);
        }
        log::info!(
            "chart: rendered {} cities over {} days ({} theme)",
            aligned.cities.len(),
            aligned.labels.len(),
            theme.mode.as_str()
        );
        Ok(())
    }

    /// Remove both charts, e.g. after a failed fetch.
    pub fn clear<H: ChartHandle>(manager: &mut ChartManager<H>) {
        manager.release_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartKind;
    use crate::manager::CanvasState;
    use crate::mock::{aligned, MockEngine};

    #[test]
    fn render_draws_line_and_bar() {
        let engine = MockEngine::new();
        let mut manager = ChartManager::new();
        ChartRenderer::render(&engine, &mut manager, &aligned(), &Theme::DARK).unwrap();

        assert_eq!(manager.live_count(), 2);
        assert_eq!(
            *engine.counters.kinds.borrow(),
            vec![
                (TEMP_CANVAS.to_string(), ChartKind::Line),
                (PRECIP_CANVAS.to_string(), ChartKind::Bar)
            ]
        );
    }

    #[test]
    fn rerender_keeps_one_chart_per_canvas() {
        let engine = MockEngine::new();
        let mut manager = ChartManager::new();
        for theme in [Theme::DARK, Theme::LIGHT, Theme::DARK] {
            ChartRenderer::render(&engine, &mut manager, &aligned(), &theme).unwrap();
        }
        assert_eq!(manager.live_count(), 2);
        assert_eq!(engine.counters.created.get(), 6);
        assert_eq!(engine.counters.destroyed.get(), 4);
    }

    #[test]
    fn unavailable_engine_draws_nothing() {
        let mut engine = MockEngine::new();
        engine.available = false;
        let mut manager = ChartManager::new();
        let err = ChartRenderer::render(&engine, &mut manager, &aligned(), &Theme::DARK)
            .unwrap_err();

        assert_eq!(err, RenderError::EngineUnavailable);
        assert_eq!(err.to_string(), ENGINE_MISSING_MESSAGE);
        assert_eq!(engine.counters.created.get(), 0);
        assert_eq!(manager.state(TEMP_CANVAS), CanvasState::Empty);
    }

    #[test]
    fn failed_create_leaves_canvas_empty() {
        let mut engine = MockEngine::new();
        let mut manager = ChartManager::new();
        ChartRenderer::render(&engine, &mut manager, &aligned(), &Theme::DARK).unwrap();

        engine.fail_on = Some(PRECIP_CANVAS);
        let err = ChartRenderer::render(&engine, &mut manager, &aligned(), &Theme::DARK)
            .unwrap_err();

        assert!(matches!(err, RenderError::Create { ref canvas, .. } if canvas == PRECIP_CANVAS));
        assert_eq!(manager.state(TEMP_CANVAS), CanvasState::Rendered);
        assert_eq!(manager.state(PRECIP_CANVAS), CanvasState::Destroyed);
    }

    #[test]
    fn empty_series_still_renders_empty_charts() {
        let engine = MockEngine::new();
        let mut manager = ChartManager::new();
        let empty = AlignedSeries::single("Austin", &[]);
        ChartRenderer::render(&engine, &mut manager, &empty, &Theme::DARK).unwrap();
        assert_eq!(manager.live_count(), 2);
    }

    #[test]
    fn clear_destroys_both_charts() {
        let engine = MockEngine::new();
        let mut manager = ChartManager::new();
        ChartRenderer::render(&engine, &mut manager, &aligned(), &Theme::DARK).unwrap();
        ChartRenderer::clear(&mut manager);

        assert_eq!(manager.live_count(), 0);
        assert_eq!(engine.counters.destroyed.get(), 2);
    }
}
