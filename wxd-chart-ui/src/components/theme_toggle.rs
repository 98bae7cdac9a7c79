//! Light/dark theme button.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn ThemeToggle() -> Element {
    let mut state = use_context::<AppState>();
    let mode = (state.theme_mode)();
    let icon = mode.icon();
    let title = format!("Switch to {} theme", mode.toggled().as_str());

    rsx! {
        button {
            id: "themeToggle",
            title: "{title}",
            style: "font-size: 18px; background: none; border: none; cursor: pointer;",
            onclick: move |_| state.toggle_theme(),
            "{icon}"
        }
    }
}
