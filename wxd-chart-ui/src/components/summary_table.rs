//! Per-day summary table, or the inline error that replaced it.

use super::ErrorDisplay;
use crate::state::AppState;
use dioxus::prelude::*;
use wxd_chart::table::SUMMARY_HEADERS;

#[component]
pub fn SummaryTable() -> Element {
    let state = use_context::<AppState>();
    let theme = state.theme();
    let rows = state.summary_rows.read().clone();
    let cell = format!("padding: 4px 8px; border-bottom: 1px solid {};", theme.grid);

    if let Some(err) = (state.error_msg)() {
        return rsx! {
            div { id: "summary", ErrorDisplay { message: err } }
        };
    }

    rsx! {
        div {
            id: "summary",
            style: "overflow-x: auto;",
            if rows.is_empty() {
                p { style: "color: {theme.muted};", "No readings in this range." }
            } else {
                table {
                    style: "border-collapse: collapse; width: 100%;",
                    thead {
                        tr {
                            for header in SUMMARY_HEADERS {
                                th { style: "{cell} text-align: left;", "{header}" }
                            }
                        }
                    }
                    tbody {
                        for row in rows.iter() {
                            tr {
                                key: "{row.day}-{row.city}",
                                for value in row.cells() {
                                    td { style: "{cell}", "{value}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
