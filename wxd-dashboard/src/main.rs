//! Weather Dashboard
//!
//! Shows daily temperature (line) and precipitation (bar) charts for one city,
//! optionally compared against a second city, plus a per-day summary table.
//!
//! Data flow:
//! 1. On mount, the city list is fetched from `/api/cities` and the first two
//!    cities become the primary and comparison defaults.
//! 2. Apply, a city change, the compare toggle or the theme toggle bumps
//!    `refresh_tick`.
//! 3. Each refresh takes a `RefreshGate` ticket and fetches readings and
//!    summaries for the active cities in parallel.
//! 4. If no newer refresh has started, the series are aligned onto one date
//!    axis, both charts are redrawn and the summary table is rebuilt.

use dioxus::prelude::*;
use wxd_chart::renderer::{PRECIP_CANVAS, TEMP_CANVAS};
use wxd_chart::{apply_refresh, CityData, RefreshTicket};
use wxd_chart_ui::components::{
    ChartCanvas, ChartHeader, CitySelector, CompareToggle, DateRangePicker, LoadingSpinner,
    SummaryTable, ThemeToggle,
};
use wxd_chart_ui::js_bridge::{self, ChartJsEngine};
use wxd_chart_ui::state::AppState;
use wxd_core::client::{ApiClient, ClientError};
use wxd_core::ReadingFilter;
use wxd_data::DayPoint;

/// API origin used when the page origin cannot be read.
const FALLBACK_API_URL: &str = "http://localhost:3000";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

/// Compile-time override, else the origin the page was served from.
fn api_client() -> ApiClient {
    let base = option_env!("WXD_API_URL")
        .map(str::to_string)
        .or_else(|| web_sys::window().and_then(|w| w.location().origin().ok()))
        .unwrap_or_else(|| FALLBACK_API_URL.to_string());
    log::info!("using API at {}", base);
    ApiClient::new(base)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let client = use_hook(api_client);

    use_hook(js_bridge::load_chart_scripts);

    // Load the city list once
    let cities_client = client.clone();
    use_future(move || load_cities(cities_client.clone(), state));

    // One refresh cycle per tick
    use_effect(move || {
        let tick = (state.refresh_tick)();
        if tick == 0 || *state.loading.peek() {
            return;
        }
        let ticket = state.gate.read().begin();
        log::info!("refresh #{tick} started");
        spawn(refresh(client.clone(), state, ticket));
    });

    let theme = state.theme();

    rsx! {
        div {
            style: "min-height: 100vh; padding: 16px; background: {theme.background}; color: {theme.foreground}; font-family: system-ui, Arial, sans-serif;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h2 { style: "margin: 0;", "Weather Dashboard" }
                ThemeToggle {}
            }

            if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin-bottom: 8px;",
                    CitySelector {}
                    CompareToggle {}
                    DateRangePicker {}
                }
            }

            div {
                style: "background: {theme.surface}; border-radius: 8px; padding: 12px; margin: 12px 0;",
                ChartHeader {
                    title: "Temperature".to_string(),
                    unit_description: "Daily readings in degrees Celsius (°C)".to_string(),
                }
                ChartCanvas { id: TEMP_CANVAS.to_string() }
            }

            div {
                style: "background: {theme.surface}; border-radius: 8px; padding: 12px; margin: 12px 0;",
                ChartHeader {
                    title: "Precipitation".to_string(),
                    unit_description: "Daily readings in millimetres (mm)".to_string(),
                }
                ChartCanvas { id: PRECIP_CANVAS.to_string() }
            }

            div {
                style: "background: {theme.surface}; border-radius: 8px; padding: 12px; margin: 12px 0;",
                ChartHeader { title: "Daily Summary".to_string() }
                SummaryTable {}
            }
        }
    }
}

async fn load_cities(client: ApiClient, mut state: AppState) {
    match client.cities().await {
        Ok(cities) => {
            log::info!("loaded {} cities", cities.len());
            if let Some(first) = cities.first() {
                state.city.set(first.clone());
            }
            if let Some(second) = cities.get(1) {
                state.city2.set(second.clone());
            }
            state.cities.set(cities);
            state.loading.set(false);
            state.request_refresh();
        }
        Err(e) => {
            log::error!("failed to load cities: {}", e);
            state
                .error_msg
                .set(Some(format!("Failed to load cities: {}", e)));
            state.loading.set(false);
        }
    }
}

async fn fetch_city(
    client: &ApiClient,
    city: &str,
    filter: &ReadingFilter,
) -> Result<CityData, ClientError> {
    let (readings, summary) =
        futures::try_join!(client.readings(filter), client.summary(filter))?;
    Ok(CityData {
        city: city.to_string(),
        points: DayPoint::from_readings(&readings),
        summary,
    })
}

async fn refresh(client: ApiClient, mut state: AppState, ticket: RefreshTicket) {
    let selection = state.selection();
    let Some(primary) = selection.active_cities().first().map(|c| c.to_string()) else {
        log::info!("no city selected, nothing to draw");
        return;
    };
    let secondary = selection.comparison().map(str::to_string);
    let primary_filter = state.filter_for(&primary);

    let fetched = match &secondary {
        Some(city) => {
            let secondary_filter = state.filter_for(city);
            futures::try_join!(
                fetch_city(&client, &primary, &primary_filter),
                fetch_city(&client, city, &secondary_filter)
            )
            .map(|(a, b)| (a, Some(b)))
        }
        None => fetch_city(&client, &primary, &primary_filter)
            .await
            .map(|a| (a, None)),
    };

    let theme = state.theme_store.read().theme();
    let gate = state.gate.read().clone();
    let view = apply_refresh(
        &gate,
        ticket,
        fetched,
        &ChartJsEngine,
        &mut *state.charts.write(),
        &theme,
    );
    if let Some(view) = view {
        state.summary_rows.set(view.rows);
        state.error_msg.set(view.error);
    }
}
