//! Error display component.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays an error message in the theme's error colour.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let state = use_context::<AppState>();
    let color = state.theme().error;

    rsx! {
        div {
            class: "error",
            style: "padding: 12px 16px; margin: 8px 0; color: {color}; border: 1px solid {color}; border-radius: 4px;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
