//! Compare-mode checkbox with the secondary city selector.

use super::CitySelector;
use crate::state::AppState;
use dioxus::prelude::*;

/// Toggles comparison; the secondary selector is shown while it is on.
#[component]
pub fn CompareToggle() -> Element {
    let mut state = use_context::<AppState>();
    let compare = (state.compare)();

    let on_toggle = move |evt: Event<FormData>| {
        state.compare.set(evt.checked());
        state.request_refresh();
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                input {
                    r#type: "checkbox",
                    checked: compare,
                    onchange: on_toggle,
                }
                " Compare"
            }
            if compare {
                CitySelector { secondary: true }
            }
        }
    }
}
