//! Chart.js bridge.
//!
//! `assets/js/weather-charts.js` is embedded at compile time and evaluated
//! once, exposing `window.createWeatherChart`. Chart.js itself is loaded from
//! a CDN `<script>` tag, so its presence is checked on every render rather
//! than assumed.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wxd_chart::{ChartConfig, ChartEngine, ChartHandle, RenderError};

static WEATHER_CHARTS_JS: &str = include_str!("../assets/js/weather-charts.js");

const CREATE_FN: &str = "createWeatherChart";

/// Evaluate the bridge script. Call once at app startup.
pub fn load_chart_scripts() {
    if let Err(e) = js_sys::eval(WEATHER_CHARTS_JS) {
        log::error!("chart bridge failed to load: {}", js_error_message(&e));
    }
}

/// Whether `window.Chart` is defined.
pub fn chart_engine_available() -> bool {
    global_property("Chart").is_some_and(|value| value.is_function())
}

fn global_property(name: &str) -> Option<JsValue> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// A live Chart.js instance.
pub struct JsChart {
    instance: JsValue,
}

impl ChartHandle for JsChart {
    fn destroy(&mut self) {
        let destroy = Reflect::get(&self.instance, &JsValue::from_str("destroy"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());
        match destroy {
            Some(destroy) => {
                if let Err(e) = destroy.call0(&self.instance) {
                    log::warn!("chart destroy failed: {}", js_error_message(&e));
                }
            }
            None => log::warn!("chart instance has no destroy()"),
        }
    }
}

/// [`ChartEngine`] backed by the global Chart.js.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartJsEngine;

impl ChartEngine for ChartJsEngine {
    type Handle = JsChart;

    fn is_available(&self) -> bool {
        chart_engine_available()
    }

    fn create(&self, canvas_id: &str, config: &ChartConfig) -> Result<JsChart, RenderError> {
        let fail = |message: String| RenderError::Create {
            canvas: canvas_id.to_string(),
            message,
        };

        let create = global_property(CREATE_FN)
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or_else(|| fail(format!("{CREATE_FN} is not loaded")))?;
        let json = config.to_json().map_err(|e| fail(e.to_string()))?;

        let instance = create
            .call2(
                &JsValue::NULL,
                &JsValue::from_str(canvas_id),
                &JsValue::from_str(&json),
            )
            .map_err(|e| fail(js_error_message(&e)))?;
        log::debug!("chart: created {canvas_id}");
        Ok(JsChart { instance })
    }
}
